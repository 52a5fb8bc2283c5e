// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::LocationError;
use crate::host::describe_js_error;
use url::Url;

/// Builds the URLs of the activity API, which lives at the root of the page's origin.
#[derive(Clone, Debug)]
pub struct ApiEndpoints {
	origin: Url,
}

impl ApiEndpoints {
	/// Creates endpoints relative to the origin of the given address. Its path, query, and fragment are discarded.
	pub fn new(mut address: Url) -> Self {
		address.set_path("/");
		address.set_query(None);
		address.set_fragment(None);
		Self { origin: address }
	}

	/// Creates endpoints for the origin the page was loaded from.
	pub fn from_page_location() -> Result<Self, LocationError> {
		let window = web_sys::window().ok_or(LocationError::MissingWindow)?;
		let href = window
			.location()
			.href()
			.map_err(|error| LocationError::UnreadableAddress(describe_js_error(&error)))?;
		Ok(Self::new(Url::parse(&href)?))
	}

	pub fn activities(&self) -> Url {
		let mut url = self.origin.clone();
		url.set_path("/activities");
		url
	}

	pub fn signup(&self, activity: &str, email: &str) -> Url {
		self.participant_action(activity, "signup", email)
	}

	pub fn unregister(&self, activity: &str, email: &str) -> Url {
		self.participant_action(activity, "unregister", email)
	}

	fn participant_action(&self, activity: &str, action: &str, email: &str) -> Url {
		let mut url = self.activities();
		// Only fails for cannot-be-a-base URLs, which an http(s) page address never is
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.push(activity).push(action);
		}
		url.query_pairs_mut().append_pair("email", email);
		url
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn endpoints() -> ApiEndpoints {
		let page = Url::parse("http://localhost:8000/static/index.html?tab=1#top").expect("valid page address");
		ApiEndpoints::new(page)
	}

	#[test]
	fn activities_are_rooted_at_the_origin() {
		assert_eq!(endpoints().activities().as_str(), "http://localhost:8000/activities");
	}

	#[test]
	fn signup_encodes_name_and_email() {
		let url = endpoints().signup("Chess Club", "jane.doe@example.com");
		assert_eq!(
			url.as_str(),
			"http://localhost:8000/activities/Chess%20Club/signup?email=jane.doe%40example.com"
		);
	}

	#[test]
	fn unregister_encodes_reserved_characters() {
		let url = endpoints().unregister("Art/Craft?", "a+b&c@x.com");
		assert_eq!(
			url.as_str(),
			"http://localhost:8000/activities/Art%2FCraft%3F/unregister?email=a%2Bb%26c%40x.com"
		);
	}

	#[test]
	fn encoded_values_decode_back_to_the_originals() {
		let url = endpoints().signup("Débat & Co", "ünïcode user@x.com");
		let segments: Vec<&str> = url.path_segments().expect("http url has segments").collect();
		assert_eq!(segments, vec!["activities", "D%C3%A9bat%20&%20Co", "signup"]);

		let (key, value) = url.query_pairs().next().expect("email query present");
		assert_eq!(key, "email");
		assert_eq!(value, "ünïcode user@x.com");
	}
}
