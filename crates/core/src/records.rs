//! Record types for the entity kinds the client displays, plus the
//! per-kind projection into [`EntityRef`].
//!
//! Name-bearing kinds (performer, studio, tag, movie) label themselves by
//! name. File-backed kinds (scene, gallery, image) may lack a title, in
//! which case the label falls back to the file basename and finally to the
//! id, so a reference is never blank.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, EntityRef};

/// Full performer record as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformerRecord {
	pub id: EntityId,
	pub name: String,
	/// Distinguishes performers sharing a name; rendered in parentheses.
	pub disambiguation: Option<String>,
	pub aliases: Vec<String>,
	pub favorite: bool,
	/// Rating on the canonical 0..=100 scale; `None` means unrated.
	pub rating100: Option<u8>,
	pub details: Option<String>,
	pub url: Option<String>,
	pub twitter: Option<String>,
	pub instagram: Option<String>,
	/// Whether the server holds a portrait image for this performer.
	pub image_available: bool,
	pub birthdate: Option<NaiveDate>,
	pub scene_count: u64,
	pub gallery_count: u64,
	pub image_count: u64,
	pub movie_count: u64,
	/// Number of performers appearing together with this one.
	pub performer_count: u64,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl PerformerRecord {
	pub fn entity_ref(&self) -> EntityRef {
		EntityRef::new(self.id.clone(), self.name.clone())
	}
}

/// Named record shared by studios, tags and movies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRecord {
	pub id: EntityId,
	pub name: String,
}

impl NamedRecord {
	pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
		}
	}

	pub fn entity_ref(&self) -> EntityRef {
		EntityRef::new(self.id.clone(), self.name.clone())
	}
}

pub type StudioRecord = NamedRecord;
pub type TagRecord = NamedRecord;
pub type MovieRecord = NamedRecord;

/// Scene record slim enough for selection and list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
	pub id: EntityId,
	pub title: Option<String>,
	/// Studio-assigned scene code.
	pub code: Option<String>,
	pub path: Option<String>,
	pub date: Option<NaiveDate>,
}

impl SceneRecord {
	pub fn entity_ref(&self) -> EntityRef {
		EntityRef::new(self.id.clone(), title_or_basename(&self.title, &self.path, &self.id))
	}
}

/// Gallery record; galleries may be folder-backed rather than file-backed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryRecord {
	pub id: EntityId,
	pub title: Option<String>,
	pub path: Option<String>,
	pub folder: Option<String>,
}

impl GalleryRecord {
	pub fn entity_ref(&self) -> EntityRef {
		let label = self
			.title
			.clone()
			.or_else(|| self.path.as_deref().and_then(basename))
			.or_else(|| self.folder.as_deref().and_then(basename))
			.unwrap_or_else(|| self.id.to_string());
		EntityRef::new(self.id.clone(), label)
	}
}

/// Image record slim enough for selection and list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
	pub id: EntityId,
	pub title: Option<String>,
	pub path: Option<String>,
}

impl ImageRecord {
	pub fn entity_ref(&self) -> EntityRef {
		EntityRef::new(self.id.clone(), title_or_basename(&self.title, &self.path, &self.id))
	}
}

fn title_or_basename(title: &Option<String>, path: &Option<String>, id: &EntityId) -> String {
	title
		.clone()
		.or_else(|| path.as_deref().and_then(basename))
		.unwrap_or_else(|| id.to_string())
}

fn basename(path: &str) -> Option<String> {
	let trimmed = path.trim_end_matches('/');
	let base = trimmed.rsplit('/').next()?;
	if base.is_empty() {
		None
	} else {
		Some(base.to_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scene(title: Option<&str>, path: Option<&str>) -> SceneRecord {
		SceneRecord {
			id: EntityId::from("7"),
			title: title.map(str::to_owned),
			code: None,
			path: path.map(str::to_owned),
			date: None,
		}
	}

	#[test]
	fn scene_label_prefers_title() {
		let r = scene(Some("Opening Night"), Some("/media/opening.mp4"));
		assert_eq!(r.entity_ref().label, "Opening Night");
	}

	#[test]
	fn scene_label_falls_back_to_basename_then_id() {
		assert_eq!(scene(None, Some("/media/opening.mp4")).entity_ref().label, "opening.mp4");
		assert_eq!(scene(None, None).entity_ref().label, "7");
	}

	#[test]
	fn gallery_label_falls_back_to_folder() {
		let g = GalleryRecord {
			id: EntityId::from("3"),
			title: None,
			path: None,
			folder: Some("/media/galleries/summer/".to_owned()),
		};
		assert_eq!(g.entity_ref().label, "summer");
	}
}
