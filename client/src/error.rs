// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur while talking to the activity API
#[derive(Debug)]
pub enum RequestError {
	Network(gloo_net::Error),
	Status(u16),
	InvalidBody(serde_json::Error),
}

impl From<gloo_net::Error> for RequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl From<serde_json::Error> for RequestError {
	fn from(error: serde_json::Error) -> Self {
		Self::InvalidBody(error)
	}
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "Failed to reach the server: {}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
			Self::InvalidBody(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}

/// Errors that can occur determining where the API is hosted from the page address
#[derive(Debug)]
pub enum LocationError {
	MissingWindow,
	UnreadableAddress(String),
	InvalidAddress(url::ParseError),
}

impl From<url::ParseError> for LocationError {
	fn from(error: url::ParseError) -> Self {
		Self::InvalidAddress(error)
	}
}

impl fmt::Display for LocationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingWindow => write!(f, "No browser window is available"),
			Self::UnreadableAddress(error) => write!(f, "Failed to read the page address: {}", error),
			Self::InvalidAddress(error) => write!(f, "The page address is not a valid URL: {}", error),
		}
	}
}
