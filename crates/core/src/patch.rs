//! Field-level patches for update mutations.
//!
//! A patch distinguishes "leave the field alone" from "clear it" from
//! "set it to a value", so nullable fields can be erased without ambiguous
//! `Option<Option<_>>` plumbing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::records::PerformerRecord;

/// Patch operation for one nullable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPatch<T> {
	/// Leave the stored value untouched.
	#[default]
	Keep,
	/// Erase the stored value.
	Clear,
	/// Replace the stored value.
	Set(T),
}

impl<T> FieldPatch<T> {
	/// Applies the patch to a stored slot.
	pub fn apply_to(self, slot: &mut Option<T>) {
		match self {
			Self::Keep => {}
			Self::Clear => *slot = None,
			Self::Set(value) => *slot = Some(value),
		}
	}

	pub fn is_keep(&self) -> bool {
		matches!(self, Self::Keep)
	}
}

impl<T> From<Option<T>> for FieldPatch<T> {
	/// `Some` sets, `None` clears. For "keep" use [`FieldPatch::Keep`].
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::Set(value),
			None => Self::Clear,
		}
	}
}

/// Partial update of a performer record.
///
/// Unset fields keep their stored values. [`PerformerUpdate`] pairs a
/// patch with the id of the record it targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformerPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub disambiguation: FieldPatch<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub aliases: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub favorite: Option<bool>,
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub rating100: FieldPatch<u8>,
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub details: FieldPatch<String>,
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub url: FieldPatch<String>,
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub twitter: FieldPatch<String>,
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub instagram: FieldPatch<String>,
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub birthdate: FieldPatch<NaiveDate>,
	/// Replacement portrait image, raw bytes. `Clear` removes the portrait.
	#[serde(skip_serializing_if = "FieldPatch::is_keep", default)]
	pub image: FieldPatch<Vec<u8>>,
}

impl PerformerPatch {
	/// Patch setting only the favorite flag.
	pub fn favorite(value: bool) -> Self {
		Self {
			favorite: Some(value),
			..Self::default()
		}
	}

	/// Patch setting or clearing the rating.
	pub fn rating(value: Option<u8>) -> Self {
		Self {
			rating100: FieldPatch::from(value),
			..Self::default()
		}
	}

	/// Applies this patch to a record, bumping `updated_at`.
	pub fn apply_to(self, record: &mut PerformerRecord) {
		if let Some(name) = self.name {
			record.name = name;
		}
		self.disambiguation.apply_to(&mut record.disambiguation);
		if let Some(aliases) = self.aliases {
			record.aliases = aliases;
		}
		if let Some(favorite) = self.favorite {
			record.favorite = favorite;
		}
		self.rating100.apply_to(&mut record.rating100);
		self.details.apply_to(&mut record.details);
		self.url.apply_to(&mut record.url);
		self.twitter.apply_to(&mut record.twitter);
		self.instagram.apply_to(&mut record.instagram);
		self.birthdate.apply_to(&mut record.birthdate);
		match self.image {
			FieldPatch::Keep => {}
			FieldPatch::Clear => record.image_available = false,
			FieldPatch::Set(_) => record.image_available = true,
		}
		record.updated_at = chrono::Utc::now();
	}
}

/// An update addressed to a specific performer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformerUpdate {
	pub id: EntityId,
	#[serde(flatten)]
	pub patch: PerformerPatch,
}

impl PerformerUpdate {
	pub fn new(id: impl Into<EntityId>, patch: PerformerPatch) -> Self {
		Self { id: id.into(), patch }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clear_and_set_round_trip() {
		let mut slot = Some(5u8);
		FieldPatch::Clear.apply_to(&mut slot);
		assert_eq!(slot, None);
		FieldPatch::Set(80).apply_to(&mut slot);
		assert_eq!(slot, Some(80));
		FieldPatch::Keep.apply_to(&mut slot);
		assert_eq!(slot, Some(80));
	}

	#[test]
	fn from_option_maps_none_to_clear() {
		assert_eq!(FieldPatch::<u8>::from(None), FieldPatch::Clear);
		assert_eq!(FieldPatch::from(Some(3u8)), FieldPatch::Set(3));
	}
}
