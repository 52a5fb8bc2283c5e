// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ActivityApi;
use crate::board::{ActivityBoard, WebBoard};
use crate::components::activity_card::UnregisterHandler;
use crate::components::activity_list::ActivityListView;
use crate::components::signup_form::SignupFormView;
use crate::host::{Prompt, Timer};
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;

/// Called with the selected activity and the entered email
pub type SignupHandler = Rc<dyn Fn(String, String)>;

/// The board operations the views can trigger. Each call runs in the background on the browser event loop.
#[derive(Clone)]
pub struct BoardActions {
	pub sign_up: SignupHandler,
	pub unregister: UnregisterHandler,
}

impl BoardActions {
	pub fn spawning<A, P, T>(board: Rc<ActivityBoard<A, P, T>>) -> Self
	where
		A: ActivityApi + 'static,
		P: Prompt + 'static,
		T: Timer + 'static,
	{
		let sign_up: SignupHandler = {
			let board = Rc::clone(&board);
			Rc::new(move |activity: String, email: String| {
				let board = Rc::clone(&board);
				spawn_local(async move {
					board.submit_signup(&activity, &email).await;
				});
			})
		};
		let unregister: UnregisterHandler = Rc::new(move |activity: String, email: String| {
			let board = Rc::clone(&board);
			spawn_local(async move {
				board.unregister_participant(&activity, &email).await;
			});
		});
		Self { sign_up, unregister }
	}
}

#[derive(Prop)]
pub struct AppProps {
	pub board: Rc<WebBoard>,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>, props: AppProps) -> View<G> {
	provide_context(ctx, props.board.signals().clone());
	provide_context(ctx, BoardActions::spawning(props.board));

	view! {
		ctx,
		header {
			h1 { "Extracurricular Activities" }
		}
		main {
			section(id="activities-container") {
				h3 { "Available Activities" }
				ActivityListView {}
			}
			section(id="signup-container") {
				h3 { "Sign Up for an Activity" }
				SignupFormView {}
			}
		}
	}
}
