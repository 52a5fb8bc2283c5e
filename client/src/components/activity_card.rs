// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::participant_utils::participant_initials;
use activity_board_shared::messages::activities::ActivityDetails;
use std::rc::Rc;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Called with the activity name and the participant to remove
pub type UnregisterHandler = Rc<dyn Fn(String, String)>;

#[derive(Prop)]
pub struct ActivityCardProps {
	pub name: String,
	pub details: ActivityDetails,
	pub on_unregister: UnregisterHandler,
}

#[component]
pub fn ActivityCard<G: Html>(ctx: Scope<'_>, props: ActivityCardProps) -> View<G> {
	let ActivityCardProps {
		name,
		details,
		on_unregister,
	} = props;
	let spots_left = format!("{} spots left", details.spots_left());

	let participant_rows = if details.participants.is_empty() {
		view! { ctx, li(class="no-participants") { "No participants yet" } }
	} else {
		View::new_fragment(
			details
				.participants
				.iter()
				.map(|participant| {
					let initials = participant_initials(participant);
					let email = participant.clone();
					let remove_handler = {
						let activity = name.clone();
						let participant = participant.clone();
						let on_unregister = Rc::clone(&on_unregister);
						move |_event: WebEvent| on_unregister(activity.clone(), participant.clone())
					};
					view! {
						ctx,
						li {
							div(class="participant-identity") {
								span(class="participant-badge") { (initials) }
								span(class="participant-email") { (email) }
							}
							button(class="participant-delete", type="button", title="Unregister", on:click=remove_handler) { "✖" }
						}
					}
				})
				.collect(),
		)
	};

	let ActivityDetails {
		description, schedule, ..
	} = details;

	view! {
		ctx,
		div(class="activity-card") {
			h4 { (name) }
			p { (description) }
			p {
				strong { "Schedule:" }
				" "
				(schedule)
			}
			p {
				strong { "Availability:" }
				" "
				(spots_left)
			}
			div(class="participants-section") {
				strong { "Participants:" }
				ul(class="participants-list") { (participant_rows) }
			}
		}
	}
}
