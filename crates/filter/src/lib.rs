//! Declarative filter-option registries.
//!
//! Each list view gets a static [`FilterOptions`] table describing its
//! queryable fields, sort keys and display modes. Tables are append-only
//! configuration, immutable at runtime.

pub mod def;
pub mod modifier;
pub mod options;
pub mod scenes;

pub use def::{CriterionDef, ValueKind};
pub use modifier::{CriterionModifier, sets};
pub use options::{DisplayMode, FilterOptions, SortKey};
pub use scenes::SCENE_FILTER;
