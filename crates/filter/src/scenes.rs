//! Filter options for the scene list view.

use mediathek_core::EntityKind;

use crate::def::{CriterionDef, ValueKind};
use crate::modifier::{CriterionModifier, sets};
use crate::options::{DisplayMode, FilterOptions, SortKey};

pub static SCENE_FILTER: FilterOptions = FilterOptions::new(
	SortKey("date"),
	SCENE_SORT_KEYS,
	&[
		DisplayMode::Grid,
		DisplayMode::List,
		DisplayMode::Wall,
		DisplayMode::Tagger,
	],
	SCENE_CRITERIA,
);

const SCENE_SORT_KEYS: &[SortKey] = &[
	SortKey("organized"),
	SortKey("date"),
	SortKey("file_count"),
	SortKey("filesize"),
	SortKey("duration"),
	SortKey("framerate"),
	SortKey("bitrate"),
	SortKey("last_played_at"),
	SortKey("resume_time"),
	SortKey("play_duration"),
	SortKey("play_count"),
	SortKey("movie_scene_number"),
	SortKey("perceptual_similarity"),
	SortKey("title"),
	SortKey("path"),
	SortKey("rating"),
	SortKey("tag_count"),
	SortKey("performer_count"),
	SortKey("random"),
	SortKey("created_at"),
	SortKey("updated_at"),
];

const RESOLUTIONS: &[&str] = &[
	"144p", "240p", "360p", "480p", "540p", "720p", "1080p", "1440p", "4k", "5k", "6k", "8k",
];

const ORIENTATIONS: &[&str] = &["landscape", "portrait", "square"];

const MISSING_FIELDS: &[&str] = &[
	"title",
	"details",
	"url",
	"date",
	"galleries",
	"studio",
	"movie",
	"performers",
	"tags",
];

const SCENE_CRITERIA: &[CriterionDef] = &[
	CriterionDef::text("title", "Title"),
	CriterionDef::text("code", "Scene code"),
	CriterionDef::text("path", "Path"),
	CriterionDef::text("details", "Details"),
	CriterionDef::text("director", "Director"),
	CriterionDef::text_mandatory("checksum", "Checksum"),
	CriterionDef::new(
		"phash_distance",
		"Hash distance",
		ValueKind::Text,
		sets::CHOICE,
		CriterionModifier::Equals,
	),
	CriterionDef::flag("duplicated", "Duplicated"),
	CriterionDef::flag("organized", "Organized"),
	CriterionDef::rating("rating100", "Rating"),
	CriterionDef::new(
		"resolution",
		"Resolution",
		ValueKind::Choice(RESOLUTIONS),
		sets::CHOICE_ORDERED,
		CriterionModifier::Equals,
	),
	CriterionDef::choice("orientation", "Orientation", ORIENTATIONS),
	CriterionDef::number_mandatory("framerate", "Frame rate"),
	CriterionDef::text("video_codec", "Video codec"),
	CriterionDef::text("audio_codec", "Audio codec"),
	CriterionDef::duration("duration", "Duration"),
	CriterionDef::duration("resume_time", "Resume time"),
	CriterionDef::duration("play_duration", "Play duration"),
	CriterionDef::number_mandatory("play_count", "Play count"),
	CriterionDef::flag("has_markers", "Has markers"),
	CriterionDef::choice("is_missing", "Is missing", MISSING_FIELDS),
	CriterionDef::entities("tags", "Tags", EntityKind::Tag, true),
	CriterionDef::number_mandatory("tag_count", "Tag count"),
	CriterionDef::entities("performer_tags", "Performer tags", EntityKind::Tag, true),
	CriterionDef::entities("performers", "Performers", EntityKind::Performer, false),
	CriterionDef::number_mandatory("performer_count", "Performer count"),
	CriterionDef::number_mandatory("performer_age", "Performer age"),
	CriterionDef::flag("performer_favorite", "Performer favorite"),
	CriterionDef::entities("studios", "Studios", EntityKind::Studio, true),
	CriterionDef::new(
		"movies",
		"Movies",
		ValueKind::Entities {
			kind: EntityKind::Movie,
			hierarchical: false,
		},
		sets::ENTITIES_SIMPLE,
		CriterionModifier::Includes,
	),
	CriterionDef::text("url", "URL"),
	CriterionDef::text("captions", "Captions"),
	CriterionDef::number_mandatory("file_count", "File count"),
	CriterionDef::date("date", "Date"),
	CriterionDef::timestamp_mandatory("created_at", "Created at"),
	CriterionDef::timestamp_mandatory("updated_at", "Updated at"),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_sort_is_date() {
		assert_eq!(SCENE_FILTER.default_sort(), SortKey("date"));
		assert!(SCENE_FILTER.sort_keys().contains(&SortKey("date")));
	}

	#[test]
	fn default_display_mode_is_first_listed() {
		assert_eq!(SCENE_FILTER.default_display_mode(), DisplayMode::Grid);
		assert_eq!(SCENE_FILTER.display_modes().len(), 4);
	}

	#[test]
	fn lookup_by_field_key() {
		let tags = SCENE_FILTER.criterion("tags").unwrap();
		assert!(matches!(
			tags.kind,
			ValueKind::Entities {
				kind: EntityKind::Tag,
				hierarchical: true,
			}
		));
		assert_eq!(tags.default_modifier, CriterionModifier::IncludesAll);
		assert!(SCENE_FILTER.criterion("nonsense").is_none());
	}

	#[test]
	fn mandatory_fields_omit_null_modifiers() {
		let created = SCENE_FILTER.criterion("created_at").unwrap();
		assert!(!created.modifiers.contains(&CriterionModifier::IsNull));
		let title = SCENE_FILTER.criterion("title").unwrap();
		assert!(title.modifiers.contains(&CriterionModifier::IsNull));
	}

	#[test]
	fn field_keys_are_unique() {
		for (i, a) in SCENE_CRITERIA.iter().enumerate() {
			for b in &SCENE_CRITERIA[i + 1..] {
				assert_ne!(a.field, b.field, "duplicate criterion field");
			}
		}
	}
}
