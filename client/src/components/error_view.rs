// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

/// Replaces the whole page when the board can't be started at all.
pub fn error_message_view<G: Html>(ctx: Scope<'_>, message: &'static str, error: impl Display) -> View<G> {
	let error_display = format!("{}", error);
	view! {
		ctx,
		div(id="app_error") {
			(message)
			br {}
			(error_display)
		}
	}
}
