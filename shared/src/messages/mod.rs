// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

pub mod activities;
pub mod registration;

/// Field shapes the backend may send where the client only understands one of them
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
	Expected(T),
	Other(IgnoredAny),
}

/// Decodes a field that should be a string, treating any other JSON value as absent.
pub(crate) fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
	match Lenient::<String>::deserialize(deserializer)? {
		Lenient::Expected(text) => Ok(Some(text)),
		Lenient::Other(_) => Ok(None),
	}
}

/// Decodes a field that should be a string, treating any other JSON value (including `null`) as empty text.
pub(crate) fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(text_or_none(deserializer)?.unwrap_or_default())
}

/// Decodes a list of strings, treating anything that isn't one as an empty list.
pub(crate) fn list_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
	match Lenient::<Vec<String>>::deserialize(deserializer)? {
		Lenient::Expected(list) => Ok(list),
		Lenient::Other(_) => Ok(Vec::new()),
	}
}
