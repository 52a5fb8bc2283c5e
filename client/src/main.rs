// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use api::HttpActivityApi;
use app::App;
use board::ActivityBoard;
use components::error_view::error_message_view;
use endpoints::ApiEndpoints;
use host::{BrowserPrompt, BrowserTimer};
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;

mod api;
mod app;
mod board;
mod components;
mod endpoints;
mod error;
mod host;
mod participant_utils;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

	let endpoints = match ApiEndpoints::from_page_location() {
		Ok(endpoints) => endpoints,
		Err(error) => {
			log::error!("Unable to locate the activity API: {}", error);
			sycamore::render(|ctx| {
				error_message_view(ctx, "Unable to load activities: the page address couldn't be read", error)
			});
			return;
		}
	};

	let board = Rc::new(ActivityBoard::new(
		HttpActivityApi::new(endpoints),
		BrowserPrompt,
		BrowserTimer,
	));

	let initial_load_board = Rc::clone(&board);
	sycamore::render(|ctx| view! { ctx, App(board=board) });

	spawn_local(async move {
		initial_load_board.load_activities().await;
	});
}
