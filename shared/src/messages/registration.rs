// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::text_or_none;
use serde::{Deserialize, Serialize};

/// Body returned by both the signup and unregister endpoints.
///
/// Successful requests carry a `message`; rejected ones carry a `detail`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationResponse {
	#[serde(default, deserialize_with = "text_or_none", skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(default, deserialize_with = "text_or_none", skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

impl RegistrationResponse {
	pub fn with_message(message: impl Into<String>) -> Self {
		Self {
			message: Some(message.into()),
			detail: None,
		}
	}

	pub fn with_detail(detail: impl Into<String>) -> Self {
		Self {
			message: None,
			detail: Some(detail.into()),
		}
	}
}
