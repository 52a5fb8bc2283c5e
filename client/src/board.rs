// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{ActivityApi, HttpActivityApi};
use crate::host::{BrowserPrompt, BrowserTimer, Prompt, Timer};
use activity_board_shared::messages::activities::ActivityList;
use std::time::Duration;
use sycamore::prelude::*;

/// How long a status message stays on screen after it's shown
pub const STATUS_DISPLAY_DURATION: Duration = Duration::from_millis(5000);

const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";
const UNREGISTER_REJECTED_FALLBACK: &str = "Failed to unregister participant";
const UNREGISTER_FAILED_MESSAGE: &str = "Failed to unregister participant.";

pub type WebBoard = ActivityBoard<HttpActivityApi, BrowserPrompt, BrowserTimer>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActivitiesState {
	Loading,
	Loaded(ActivityList),
	Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
	Success,
	Error,
}

impl StatusKind {
	pub fn css_class(&self, visible: bool) -> &'static str {
		match (self, visible) {
			(Self::Success, true) => "success",
			(Self::Success, false) => "success hidden",
			(Self::Error, true) => "error",
			(Self::Error, false) => "error hidden",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessage {
	pub text: String,
	pub kind: StatusKind,
}

impl StatusMessage {
	pub fn success(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			kind: StatusKind::Success,
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			kind: StatusKind::Error,
		}
	}
}

/// Everything the board's views render from.
#[derive(Clone)]
pub struct BoardSignals {
	pub activities: RcSignal<ActivitiesState>,
	pub status: RcSignal<Option<StatusMessage>>,
	pub status_visible: RcSignal<bool>,
	pub email: RcSignal<String>,
	pub selected_activity: RcSignal<String>,
}

impl BoardSignals {
	pub fn new() -> Self {
		Self {
			activities: create_rc_signal(ActivitiesState::Loading),
			status: create_rc_signal(None),
			status_visible: create_rc_signal(false),
			email: create_rc_signal(String::new()),
			selected_activity: create_rc_signal(String::new()),
		}
	}

	fn reset_form(&self) {
		self.email.set(String::new());
		self.selected_activity.set(String::new());
	}
}

impl Default for BoardSignals {
	fn default() -> Self {
		Self::new()
	}
}

/// Controller for the activity list and the signup form.
///
/// Every mutating action ends by reloading the whole activity list rather than patching what's shown. Actions aren't
/// coordinated with each other; whichever reload finishes last decides what's on screen.
pub struct ActivityBoard<A, P, T> {
	api: A,
	prompt: P,
	timer: T,
	signals: BoardSignals,
}

impl<A: ActivityApi, P: Prompt, T: Timer> ActivityBoard<A, P, T> {
	pub fn new(api: A, prompt: P, timer: T) -> Self {
		Self {
			api,
			prompt,
			timer,
			signals: BoardSignals::new(),
		}
	}

	pub fn signals(&self) -> &BoardSignals {
		&self.signals
	}

	/// Fetches the activity list and replaces whatever is currently shown with it.
	pub async fn load_activities(&self) {
		match self.api.fetch_activities().await {
			Ok(activities) => {
				log::info!("Loaded {} activities", activities.len());
				let selection_offered = activities.get(&self.signals.selected_activity.get()).is_some();
				if !selection_offered {
					self.signals.selected_activity.set(String::new());
				}
				self.signals.activities.set(ActivitiesState::Loaded(activities));
			}
			Err(error) => {
				log::error!("Error fetching activities: {}", error);
				// The selection control falls back to its placeholder, so the selection goes with it
				self.signals.selected_activity.set(String::new());
				self.signals.activities.set(ActivitiesState::Failed);
			}
		}
	}

	/// Signs a student up for an activity and reports the outcome in the status message.
	pub async fn submit_signup(&self, activity: &str, email: &str) {
		if activity.is_empty() {
			log::warn!("Ignoring signup for {} with no activity selected", email);
			return;
		}

		let status = match self.api.sign_up(activity, email).await {
			Ok(reply) if reply.ok => {
				self.signals.reset_form();
				self.load_activities().await;
				StatusMessage::success(reply.body.message.unwrap_or_default())
			}
			Ok(reply) => StatusMessage::error(
				reply
					.body
					.detail
					.unwrap_or_else(|| String::from(SIGNUP_REJECTED_FALLBACK)),
			),
			Err(error) => {
				log::error!("Error signing up {} for {}: {}", email, activity, error);
				StatusMessage::error(SIGNUP_FAILED_MESSAGE)
			}
		};

		self.flash_status(status).await;
	}

	/// Removes a participant from an activity once the user confirms it.
	pub async fn unregister_participant(&self, activity: &str, email: &str) {
		let question = format!("Unregister {} from {}?", email, activity);
		if !self.prompt.confirm(&question) {
			return;
		}

		match self.api.unregister(activity, email).await {
			Ok(reply) if reply.ok => self.load_activities().await,
			Ok(reply) => self
				.prompt
				.alert(reply.body.detail.as_deref().unwrap_or(UNREGISTER_REJECTED_FALLBACK)),
			Err(error) => {
				log::error!("Error unregistering {} from {}: {}", email, activity, error);
				self.prompt.alert(UNREGISTER_FAILED_MESSAGE);
			}
		}
	}

	/// Shows a status message, then hides it again once the display duration passes.
	async fn flash_status(&self, status: StatusMessage) {
		self.signals.status.set(Some(status));
		self.signals.status_visible.set(true);
		self.timer.sleep(STATUS_DISPLAY_DURATION).await;
		self.signals.status_visible.set(false);
	}
}
