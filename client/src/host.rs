// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Blocking yes/no and notice dialogs shown to the user
pub trait Prompt {
	/// Asks the user a yes/no question. Anything other than an explicit yes counts as no.
	fn confirm(&self, question: &str) -> bool;

	fn alert(&self, message: &str);
}

/// Delays used for transient UI state
pub trait Timer {
	async fn sleep(&self, duration: Duration);
}

pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
	fn confirm(&self, question: &str) -> bool {
		let Some(window) = window() else {
			return false;
		};
		match window.confirm_with_message(question) {
			Ok(answer) => answer,
			Err(error) => {
				log::warn!("Failed to show confirmation dialog: {}", describe_js_error(&error));
				false
			}
		}
	}

	fn alert(&self, message: &str) {
		if let Some(window) = window() {
			if let Err(error) = window.alert_with_message(message) {
				log::warn!("Failed to show alert \"{}\": {}", message, describe_js_error(&error));
			}
		}
	}
}

pub struct BrowserTimer;

impl Timer for BrowserTimer {
	async fn sleep(&self, duration: Duration) {
		gloo_timers::future::sleep(duration).await;
	}
}

/// Gets a readable description of an error thrown by a browser API.
pub fn describe_js_error(error: &JsValue) -> String {
	error.as_string().unwrap_or_else(|| format!("{:?}", error))
}
