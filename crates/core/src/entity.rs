//! Entity identity and the uniform selection projection.
//!
//! Every record kind projects into [`EntityRef`] before it reaches generic
//! UI such as the select widget. The widget layer never sees raw records,
//! only `{id, label}` pairs.

use serde::{Deserialize, Serialize};

/// Stable server-assigned identifier of a catalog entity.
///
/// Ids are opaque strings; ordering and content carry no meaning beyond
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
	/// Creates an id from any string-like value.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the raw id string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for EntityId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for EntityId {
	fn from(id: &str) -> Self {
		Self(id.to_owned())
	}
}

impl From<String> for EntityId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// Kind of catalog entity a reference or operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	Performer,
	Studio,
	Tag,
	Movie,
	Scene,
	Gallery,
	Image,
}

impl EntityKind {
	/// Lowercase singular name, used in messages ("Created movie: ...").
	pub fn singular(self) -> &'static str {
		match self {
			Self::Performer => "performer",
			Self::Studio => "studio",
			Self::Tag => "tag",
			Self::Movie => "movie",
			Self::Scene => "scene",
			Self::Gallery => "gallery",
			Self::Image => "image",
		}
	}

	/// Lowercase plural name, used in placeholders and routes.
	pub fn plural(self) -> &'static str {
		match self {
			Self::Performer => "performers",
			Self::Studio => "studios",
			Self::Tag => "tags",
			Self::Movie => "movies",
			Self::Scene => "scenes",
			Self::Gallery => "galleries",
			Self::Image => "images",
		}
	}
}

impl std::fmt::Display for EntityKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.singular())
	}
}

/// Minimal `{id, label}` projection of a server-owned record.
///
/// This is the only shape selection UI operates on. Labels are derived by
/// the per-kind projections on the record types; a reference stays valid
/// (as a disconnected display value) even after the record it was projected
/// from leaves the loaded candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
	pub id: EntityId,
	pub label: String,
}

impl EntityRef {
	pub fn new(id: impl Into<EntityId>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_names() {
		assert_eq!(EntityKind::Gallery.plural(), "galleries");
		assert_eq!(EntityKind::Movie.singular(), "movie");
		assert_eq!(EntityKind::Scene.to_string(), "scene");
	}

	#[test]
	fn id_is_transparent() {
		let id = EntityId::from("42");
		assert_eq!(id.as_str(), "42");
		assert_eq!(id.to_string(), "42");
	}
}
