//! Comparison modifiers applicable to criteria.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionModifier {
	Equals,
	NotEquals,
	Includes,
	IncludesAll,
	Excludes,
	GreaterThan,
	LessThan,
	Between,
	NotBetween,
	IsNull,
	NotNull,
	MatchesRegex,
	NotMatchesRegex,
}

impl fmt::Display for CriterionModifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Equals => "equals",
			Self::NotEquals => "not equals",
			Self::Includes => "includes",
			Self::IncludesAll => "includes all",
			Self::Excludes => "excludes",
			Self::GreaterThan => "greater than",
			Self::LessThan => "less than",
			Self::Between => "between",
			Self::NotBetween => "not between",
			Self::IsNull => "is null",
			Self::NotNull => "not null",
			Self::MatchesRegex => "matches regex",
			Self::NotMatchesRegex => "not matches regex",
		};
		write!(f, "{name}")
	}
}

/// Modifier sets shared by the criterion constructors. The mandatory
/// variants drop the null pair for fields every record carries.
pub mod sets {
	use super::CriterionModifier::{self, *};

	pub const TEXT: &[CriterionModifier] = &[
		Equals,
		NotEquals,
		Includes,
		Excludes,
		IsNull,
		NotNull,
		MatchesRegex,
		NotMatchesRegex,
	];
	pub const TEXT_MANDATORY: &[CriterionModifier] =
		&[Equals, NotEquals, Includes, Excludes, MatchesRegex, NotMatchesRegex];
	pub const NUMBER: &[CriterionModifier] = &[
		Equals,
		NotEquals,
		GreaterThan,
		LessThan,
		Between,
		NotBetween,
		IsNull,
		NotNull,
	];
	pub const NUMBER_MANDATORY: &[CriterionModifier] =
		&[Equals, NotEquals, GreaterThan, LessThan, Between, NotBetween];
	pub const FLAG: &[CriterionModifier] = &[Equals];
	pub const CHOICE: &[CriterionModifier] = &[Equals, NotEquals];
	/// Choices with an intrinsic order, so range comparisons apply.
	pub const CHOICE_ORDERED: &[CriterionModifier] = &[Equals, NotEquals, GreaterThan, LessThan];
	pub const ENTITIES: &[CriterionModifier] = &[IncludesAll, Includes, Excludes, IsNull, NotNull];
	/// Flat entity lists without and/or semantics.
	pub const ENTITIES_SIMPLE: &[CriterionModifier] = &[Includes, Excludes];
}
