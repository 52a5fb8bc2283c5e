// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::board::BoardSignals;
use sycamore::prelude::*;

#[component]
pub fn StatusMessageView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let signals: &BoardSignals = use_context(ctx);
	let status = &signals.status;
	let status_visible = &signals.status_visible;

	let message_class = create_memo(ctx, || match &*status.get() {
		Some(message) => message.kind.css_class(*status_visible.get()),
		None => "hidden",
	});
	let message_text = create_memo(ctx, || match &*status.get() {
		Some(message) => message.text.clone(),
		None => String::new(),
	});

	view! {
		ctx,
		div(id="message", class=*message_class.get()) {
			(message_text.get().to_string())
		}
	}
}
