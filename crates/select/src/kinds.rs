//! Per-kind select constructors.
//!
//! Thin specializations of [`SelectModel`]: the local-corpus kinds load
//! their candidates up front, the large remote kinds search as the user
//! types, and a couple of string-valued variants cover marker titles and
//! read-only lists.

use mediathek_core::{CatalogService, EntityId, EntityKind, EntityRef, ServiceResult, UiConfig};

use crate::model::{NoOptions, SelectMode, SelectModel};
use crate::remote::RemoteSelect;

fn create_enabled(cfg: &UiConfig, kind: EntityKind) -> bool {
	let disable = &cfg.disable_dropdown_create;
	!match kind {
		EntityKind::Performer => disable.performer,
		EntityKind::Studio => disable.studio,
		EntityKind::Tag => disable.tag,
		EntityKind::Movie => disable.movie,
		_ => true,
	}
}

fn no_options_for(kind: EntityKind) -> NoOptions {
	// tag pickers stay quiet instead of announcing an empty corpus
	if kind == EntityKind::Tag {
		NoOptions::Silent
	} else {
		NoOptions::Default
	}
}

async fn entity_select(
	svc: &dyn CatalogService,
	cfg: &UiConfig,
	kind: EntityKind,
	mode: SelectMode,
	creatable: bool,
) -> ServiceResult<SelectModel> {
	let mut model = SelectModel::new(mode)
		.kind(kind)
		.creatable(creatable)
		.max_options(cfg.max_options_shown)
		.no_options(no_options_for(kind));
	model.set_candidates(svc.all(kind).await?);
	Ok(model)
}

pub async fn performer_select(
	svc: &dyn CatalogService,
	cfg: &UiConfig,
	mode: SelectMode,
) -> ServiceResult<SelectModel> {
	let creatable = create_enabled(cfg, EntityKind::Performer);
	entity_select(svc, cfg, EntityKind::Performer, mode, creatable).await
}

pub async fn studio_select(
	svc: &dyn CatalogService,
	cfg: &UiConfig,
	mode: SelectMode,
) -> ServiceResult<SelectModel> {
	let creatable = create_enabled(cfg, EntityKind::Studio);
	entity_select(svc, cfg, EntityKind::Studio, mode, creatable).await
}

pub async fn tag_select(
	svc: &dyn CatalogService,
	cfg: &UiConfig,
	mode: SelectMode,
) -> ServiceResult<SelectModel> {
	let creatable = create_enabled(cfg, EntityKind::Tag);
	entity_select(svc, cfg, EntityKind::Tag, mode, creatable).await
}

pub async fn movie_select(
	svc: &dyn CatalogService,
	cfg: &UiConfig,
	mode: SelectMode,
) -> ServiceResult<SelectModel> {
	let creatable = create_enabled(cfg, EntityKind::Movie);
	entity_select(svc, cfg, EntityKind::Movie, mode, creatable).await
}

/// Local-kind select for filter criteria editing. Filters pick among
/// existing entities, so creation is always off.
pub async fn filter_select(
	svc: &dyn CatalogService,
	cfg: &UiConfig,
	kind: EntityKind,
	mode: SelectMode,
) -> ServiceResult<SelectModel> {
	entity_select(svc, cfg, kind, mode, false).await
}

fn remote_select(cfg: &UiConfig, kind: EntityKind, mode: SelectMode) -> RemoteSelect {
	let model = SelectModel::new(mode)
		.kind(kind)
		.max_options(cfg.max_options_shown)
		.placeholder(format!("Search for {}...", kind.singular()))
		.no_options(NoOptions::Remote {
			label: kind.plural(),
		});
	RemoteSelect::new(model)
}

pub fn scene_select(cfg: &UiConfig, mode: SelectMode) -> RemoteSelect {
	remote_select(cfg, EntityKind::Scene, mode)
}

pub fn gallery_select(cfg: &UiConfig, mode: SelectMode) -> RemoteSelect {
	remote_select(cfg, EntityKind::Gallery, mode)
}

pub fn image_select(cfg: &UiConfig, mode: SelectMode) -> RemoteSelect {
	remote_select(cfg, EntityKind::Image, mode)
}

/// Single creatable suggest box over previously used marker titles.
///
/// `titles` is `None` while the suggestion corpus is still loading; an
/// existing `initial` value is then injected as the sole candidate so it
/// renders selected.
pub fn marker_title_suggest(
	cfg: &UiConfig,
	titles: Option<&[String]>,
	initial: Option<&str>,
) -> SelectModel {
	let mut model = SelectModel::new(SelectMode::Single)
		.creatable_inline()
		.group_header("Previously used titles...")
		.no_options(NoOptions::Silent)
		.max_options(cfg.max_options_shown);
	match titles {
		Some(titles) => {
			model.set_candidates(
				titles
					.iter()
					.map(|t| EntityRef::new(t.as_str(), t.as_str()))
					.collect(),
			);
		}
		None => {
			if let Some(initial) = initial {
				model.set_candidates(vec![EntityRef::new(initial, initial)]);
			}
		}
	}
	if let Some(initial) = initial {
		model.set_selected_ids(&[EntityId::from(initial)]);
	}
	model
}

/// Read-only display of a fixed value list.
pub fn string_list(values: impl IntoIterator<Item = String>) -> SelectModel {
	let mut model = SelectModel::new(SelectMode::Multi)
		.searchable(false)
		.clearable(false);
	let refs: Vec<EntityRef> = values
		.into_iter()
		.map(|v| EntityRef::new(v.clone(), v))
		.collect();
	let ids: Vec<EntityId> = refs.iter().map(|r| r.id.clone()).collect();
	model.set_candidates(refs);
	model.set_selected_ids(&ids);
	model.disabled(true)
}

#[cfg(test)]
mod tests {
	use mediathek_core::{DisableDropdownCreate, MemoryCatalog};

	use super::*;

	#[tokio::test]
	async fn tag_select_respects_the_create_switch() {
		let catalog = MemoryCatalog::new();
		catalog.seed_refs(EntityKind::Tag, [EntityRef::new("1", "red")]);

		let cfg = UiConfig::default();
		let model = tag_select(&catalog, &cfg, SelectMode::Multi).await.unwrap();
		assert!(model.is_valid_new("blue"));

		let off = UiConfig {
			disable_dropdown_create: DisableDropdownCreate {
				tag: true,
				..DisableDropdownCreate::default()
			},
			..UiConfig::default()
		};
		let model = tag_select(&catalog, &off, SelectMode::Multi).await.unwrap();
		assert!(!model.is_valid_new("blue"));
	}

	#[tokio::test]
	async fn filter_selects_are_never_creatable() {
		let catalog = MemoryCatalog::new();
		let cfg = UiConfig::default();
		let model = filter_select(&catalog, &cfg, EntityKind::Performer, SelectMode::Multi)
			.await
			.unwrap();
		assert!(!model.is_valid_new("anyone"));
	}

	#[test]
	fn remote_selects_stay_quiet_until_typed() {
		let cfg = UiConfig::default();
		let select = scene_select(&cfg, SelectMode::Multi);
		assert_eq!(select.model.placeholder_text(), Some("Search for scene..."));
		assert_eq!(select.model.menu("").no_options, None);
		assert_eq!(
			select.model.menu("x").no_options.as_deref(),
			Some("No scenes found.")
		);
	}

	#[test]
	fn marker_suggest_injects_the_initial_value_while_loading() {
		let cfg = UiConfig::default();
		let model = marker_title_suggest(&cfg, None, Some("Intro"));
		assert_eq!(model.selection().len(), 1);
		assert_eq!(model.selection()[0].label, "Intro");

		let titles = vec!["Intro".to_owned(), "Outro".to_owned()];
		let model = marker_title_suggest(&cfg, Some(&titles), Some("Outro"));
		assert_eq!(model.candidates().len(), 2);
		assert_eq!(model.selected_ids(), vec![EntityId::from("Outro")]);
	}

	#[test]
	fn string_list_is_read_only() {
		let model = string_list(["one".to_owned(), "two".to_owned()]);
		assert!(model.is_disabled());
		assert!(!model.is_clearable());
		assert_eq!(model.selection().len(), 2);
		assert!(model.menu("").rows.is_empty());
	}
}
