// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::activity_card::ActivityCard;
use crate::app::BoardActions;
use crate::board::{ActivitiesState, BoardSignals};
use std::rc::Rc;
use sycamore::prelude::*;

#[component]
pub fn ActivityListView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let signals: &BoardSignals = use_context(ctx);
	let actions: &BoardActions = use_context(ctx);
	let activities = &signals.activities;

	view! {
		ctx,
		div(id="activities-list") {
			(match &*activities.get() {
				ActivitiesState::Loading => view! { ctx, p { "Loading activities..." } },
				ActivitiesState::Failed => view! { ctx, p { "Failed to load activities. Please try again later." } },
				ActivitiesState::Loaded(list) => View::new_fragment(
					list.iter()
						.map(|(name, details)| {
							let name = name.clone();
							let details = details.clone();
							let on_unregister = Rc::clone(&actions.unregister);
							view! { ctx, ActivityCard(name=name, details=details, on_unregister=on_unregister) }
						})
						.collect(),
				),
			})
		}
	}
}
