//! Per-entity filter option registries.

use std::fmt;

use crate::def::CriterionDef;

/// A sortable field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey(pub &'static str);

impl SortKey {
	pub const fn as_str(self) -> &'static str {
		self.0
	}
}

impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
	Grid,
	List,
	Wall,
	Tagger,
}

impl fmt::Display for DisplayMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Grid => "grid",
			Self::List => "list",
			Self::Wall => "wall",
			Self::Tagger => "tagger",
		};
		write!(f, "{name}")
	}
}

/// The complete, read-only filter configuration for one entity type.
///
/// Adding support for a new field means extending the static table; there
/// is no runtime registration.
#[derive(Debug, Clone, Copy)]
pub struct FilterOptions {
	default_sort: SortKey,
	sort_keys: &'static [SortKey],
	display_modes: &'static [DisplayMode],
	criteria: &'static [CriterionDef],
}

impl FilterOptions {
	pub const fn new(
		default_sort: SortKey,
		sort_keys: &'static [SortKey],
		display_modes: &'static [DisplayMode],
		criteria: &'static [CriterionDef],
	) -> Self {
		Self {
			default_sort,
			sort_keys,
			display_modes,
			criteria,
		}
	}

	pub fn default_sort(&self) -> SortKey {
		self.default_sort
	}

	pub fn sort_keys(&self) -> &'static [SortKey] {
		self.sort_keys
	}

	pub fn display_modes(&self) -> &'static [DisplayMode] {
		self.display_modes
	}

	/// The first listed display mode.
	pub fn default_display_mode(&self) -> DisplayMode {
		self.display_modes.first().copied().unwrap_or(DisplayMode::Grid)
	}

	pub fn criteria(&self) -> &'static [CriterionDef] {
		self.criteria
	}

	/// Looks up a criterion by field key.
	pub fn criterion(&self, field: &str) -> Option<&'static CriterionDef> {
		self.criteria.iter().find(|c| c.field == field)
	}
}
