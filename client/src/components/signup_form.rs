// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::status_message::StatusMessageView;
use crate::app::BoardActions;
use crate::board::{ActivitiesState, BoardSignals};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn SignupFormView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let signals: &BoardSignals = use_context(ctx);
	let actions: &BoardActions = use_context(ctx);
	let email_signal: &Signal<String> = &signals.email;
	let activity_signal: &Signal<String> = &signals.selected_activity;
	let activities = &signals.activities;

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let email = (*email_signal.get()).clone();
		let activity = (*activity_signal.get()).clone();
		(actions.sign_up)(activity, email);
	};

	// Only the placeholder is offered until a list has loaded, including after a failed load
	let activity_options: &ReadSignal<Vec<String>> = create_memo(ctx, move || match &*activities.get() {
		ActivitiesState::Loaded(list) => list.names().map(String::from).collect(),
		ActivitiesState::Loading | ActivitiesState::Failed => Vec::new(),
	});

	view! {
		ctx,
		form(id="signup-form", on:submit=form_submission_handler) {
			div(class="form-group") {
				label(for="email") { "Student Email:" }
				input(type="email", id="email", name="email", required=true, placeholder="your-email@example.com", bind:value=email_signal)
			}
			div(class="form-group") {
				label(for="activity") { "Select Activity:" }
				select(id="activity", name="activity", required=true, bind:value=activity_signal) {
					option(value="") { "-- Select an activity --" }
					Indexed(
						iterable=activity_options,
						view=|ctx, name| {
							let label = name.clone();
							view! { ctx, option(value=name) { (label) } }
						}
					)
				}
			}
			button(type="submit") { "Sign Up" }
		}
		StatusMessageView {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use activity_board_shared::messages::activities::{ActivityDetails, ActivityList};
	use std::rc::Rc;

	fn render_form(signals: BoardSignals) -> String {
		sycamore::render_to_string(move |ctx| {
			provide_context(ctx, signals);
			provide_context(
				ctx,
				BoardActions {
					sign_up: Rc::new(|_activity, _email| {}),
					unregister: Rc::new(|_activity, _email| {}),
				},
			);
			view! { ctx, SignupFormView {} }
		})
	}

	fn two_activities() -> ActivityList {
		["Chess Club", "Art Studio"]
			.into_iter()
			.map(|name| {
				let details = ActivityDetails {
					description: String::new(),
					schedule: String::new(),
					max_participants: 10,
					participants: Vec::new(),
				};
				(String::from(name), details)
			})
			.collect()
	}

	#[test]
	fn offers_every_loaded_activity_after_the_placeholder() {
		let signals = BoardSignals::new();
		signals.activities.set(ActivitiesState::Loaded(two_activities()));
		let html = render_form(signals);

		assert_eq!(html.matches("<option").count(), 3);
		let placeholder = html.find("-- Select an activity --").expect("placeholder rendered");
		let chess = html.find(">Chess Club<").expect("chess club offered");
		let art = html.find(">Art Studio<").expect("art studio offered");
		assert!(placeholder < chess);
		assert!(chess < art);
	}

	#[test]
	fn offers_only_the_placeholder_after_a_failed_load() {
		let signals = BoardSignals::new();
		signals.activities.set(ActivitiesState::Failed);
		let html = render_form(signals);

		assert_eq!(html.matches("<option").count(), 1);
		assert!(html.contains("-- Select an activity --"));
	}

	#[test]
	fn options_follow_a_reloaded_list() {
		let signals = BoardSignals::new();
		signals.activities.set(ActivitiesState::Loaded(two_activities()));
		let first = render_form(signals.clone());
		assert!(first.contains("Art Studio"));

		let reloaded: ActivityList = two_activities().iter().take(1).map(|(name, details)| (name.clone(), details.clone())).collect();
		signals.activities.set(ActivitiesState::Loaded(reloaded));
		let second = render_form(signals);

		assert_eq!(second.matches("<option").count(), 2);
		assert!(!second.contains("Art Studio"));
	}
}
