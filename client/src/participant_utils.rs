// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

const NAME_SEPARATORS: [char; 4] = ['.', '-', '_', ' '];

/// Gets the badge initials for a participant from the local part of their email address.
///
/// Takes the first letter of up to the first two parts of the local part (split on `.`, `-`, `_`, and spaces). If
/// there are no such parts, the first character of the local part is used instead, and `?` when even that is missing.
pub fn participant_initials(participant: &str) -> String {
	let local_part = participant.split('@').next().unwrap_or_default();
	let mut name_parts = local_part.split(NAME_SEPARATORS).filter(|part| !part.is_empty()).peekable();

	if name_parts.peek().is_none() {
		return match local_part.chars().next() {
			Some(first) => first.to_uppercase().collect(),
			None => String::from("?"),
		};
	}

	name_parts
		.take(2)
		.filter_map(|part| part.chars().next())
		.flat_map(char::to_uppercase)
		.collect()
}
