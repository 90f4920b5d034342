//! Criterion descriptors.
//!
//! A criterion describes one queryable field: its value kind, the
//! comparison modifiers that apply, and the modifier selected by default.
//! Descriptors are `'static` and built in `const` tables.

use mediathek_core::EntityKind;

use crate::modifier::{CriterionModifier, sets};

/// The kind of value a criterion compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	Text,
	Integer,
	/// 0..=100 scale.
	Rating,
	/// Seconds.
	Duration,
	/// Calendar date.
	Date,
	Timestamp,
	/// Presence/absence.
	Flag,
	/// Fixed value set.
	Choice(&'static [&'static str]),
	/// References to entities of `kind`; hierarchical kinds support
	/// ancestor-depth matching.
	Entities {
		kind: EntityKind,
		hierarchical: bool,
	},
}

/// Static descriptor for one queryable field.
#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
	pub field: &'static str,
	pub label: &'static str,
	pub kind: ValueKind,
	pub modifiers: &'static [CriterionModifier],
	pub default_modifier: CriterionModifier,
}

impl CriterionDef {
	pub const fn new(
		field: &'static str,
		label: &'static str,
		kind: ValueKind,
		modifiers: &'static [CriterionModifier],
		default_modifier: CriterionModifier,
	) -> Self {
		Self {
			field,
			label,
			kind,
			modifiers,
			default_modifier,
		}
	}

	/// Nullable text field.
	pub const fn text(field: &'static str, label: &'static str) -> Self {
		Self::new(field, label, ValueKind::Text, sets::TEXT, CriterionModifier::Equals)
	}

	/// Text field every record carries, so the null modifiers are omitted.
	pub const fn text_mandatory(field: &'static str, label: &'static str) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Text,
			sets::TEXT_MANDATORY,
			CriterionModifier::Equals,
		)
	}

	pub const fn number(field: &'static str, label: &'static str) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Integer,
			sets::NUMBER,
			CriterionModifier::Equals,
		)
	}

	pub const fn number_mandatory(field: &'static str, label: &'static str) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Integer,
			sets::NUMBER_MANDATORY,
			CriterionModifier::Equals,
		)
	}

	pub const fn rating(field: &'static str, label: &'static str) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Rating,
			sets::NUMBER,
			CriterionModifier::Equals,
		)
	}

	pub const fn duration(field: &'static str, label: &'static str) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Duration,
			sets::NUMBER_MANDATORY,
			CriterionModifier::Equals,
		)
	}

	pub const fn date(field: &'static str, label: &'static str) -> Self {
		Self::new(field, label, ValueKind::Date, sets::NUMBER, CriterionModifier::Equals)
	}

	pub const fn timestamp_mandatory(field: &'static str, label: &'static str) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Timestamp,
			sets::NUMBER_MANDATORY,
			CriterionModifier::Equals,
		)
	}

	pub const fn flag(field: &'static str, label: &'static str) -> Self {
		Self::new(field, label, ValueKind::Flag, sets::FLAG, CriterionModifier::Equals)
	}

	pub const fn choice(
		field: &'static str,
		label: &'static str,
		values: &'static [&'static str],
	) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Choice(values),
			sets::CHOICE,
			CriterionModifier::Equals,
		)
	}

	pub const fn entities(
		field: &'static str,
		label: &'static str,
		kind: EntityKind,
		hierarchical: bool,
	) -> Self {
		Self::new(
			field,
			label,
			ValueKind::Entities { kind, hierarchical },
			sets::ENTITIES,
			CriterionModifier::IncludesAll,
		)
	}
}
