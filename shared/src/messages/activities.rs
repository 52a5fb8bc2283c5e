// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{list_or_empty, text_or_empty};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActivityDetails {
	#[serde(default, deserialize_with = "text_or_empty")]
	pub description: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub schedule: String,
	pub max_participants: i64,
	#[serde(default, deserialize_with = "list_or_empty")]
	pub participants: Vec<String>,
}

impl ActivityDetails {
	/// Remaining capacity. Goes negative if the backend reports more participants than the maximum.
	pub fn spots_left(&self) -> i64 {
		let participant_count = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
		self.max_participants.saturating_sub(participant_count)
	}
}

/// All activities offered by the backend, keyed by name, in the order the backend listed them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityList {
	activities: Vec<(String, ActivityDetails)>,
}

impl ActivityList {
	/// Adds an activity. A name that's already present keeps its position and takes the new details.
	pub fn insert(&mut self, name: String, details: ActivityDetails) {
		match self.activities.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, existing_details)) => *existing_details = details,
			None => self.activities.push((name, details)),
		}
	}

	pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
		self.activities
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, details)| details)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &ActivityDetails)> {
		self.activities.iter().map(|(name, details)| (name, details))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.activities.iter().map(|(name, _)| name.as_str())
	}

	pub fn len(&self) -> usize {
		self.activities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.activities.is_empty()
	}
}

impl FromIterator<(String, ActivityDetails)> for ActivityList {
	fn from_iter<I: IntoIterator<Item = (String, ActivityDetails)>>(iter: I) -> Self {
		let mut list = Self::default();
		for (name, details) in iter {
			list.insert(name, details);
		}
		list
	}
}

impl Serialize for ActivityList {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.activities.len()))?;
		for (name, details) in self.activities.iter() {
			map.serialize_entry(name, details)?;
		}
		map.end()
	}
}

struct ActivityListVisitor;

impl<'de> Visitor<'de> for ActivityListVisitor {
	type Value = ActivityList;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a map of activity names to activity details")
	}

	fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
		let mut list = ActivityList::default();
		while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
			list.insert(name, details);
		}
		Ok(list)
	}
}

impl<'de> Deserialize<'de> for ActivityList {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(ActivityListVisitor)
	}
}
