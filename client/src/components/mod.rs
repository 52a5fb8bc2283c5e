// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod activity_card;
pub mod activity_list;
pub mod error_view;
pub mod signup_form;
pub mod status_message;
