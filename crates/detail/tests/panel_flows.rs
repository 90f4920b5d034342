//! End-to-end performer page flows against the in-memory catalog.

use chrono::Utc;
use mediathek_core::{
	CatalogService, EntityId, Level, MemoryCatalog, NotificationCenter, PerformerPatch,
	PerformerRecord, UiConfig,
};
use mediathek_detail::{
	ActiveImage, LoadOutcome, PanelAction, PerformerPanel, Route, TabKey, bind_shortcuts,
	load_performer,
};
use mediathek_keymap::{Key, ShortcutRouter};
use pretty_assertions::assert_eq;

fn performer(id: &str, name: &str) -> PerformerRecord {
	let now = Utc::now();
	PerformerRecord {
		id: EntityId::from(id),
		name: name.to_owned(),
		disambiguation: None,
		aliases: vec![],
		favorite: false,
		rating100: None,
		details: None,
		url: None,
		twitter: None,
		instagram: None,
		image_available: false,
		birthdate: None,
		scene_count: 0,
		gallery_count: 0,
		image_count: 3,
		movie_count: 1,
		performer_count: 0,
		created_at: now,
		updated_at: now,
	}
}

async fn load(catalog: &MemoryCatalog, id: &str, tab: Option<&str>) -> LoadOutcome {
	load_performer(catalog, &EntityId::from(id), tab, &UiConfig::default())
		.await
		.unwrap()
}

async fn load_panel(catalog: &MemoryCatalog, id: &str) -> PerformerPanel {
	match load(catalog, id, None).await {
		LoadOutcome::Panel(panel) => *panel,
		other => panic!("expected a panel, got {other:?}"),
	}
}

#[tokio::test]
async fn load_resolves_tabs_and_misses() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));

	// no scenes or galleries: the populated default is images
	let panel = load_panel(&catalog, "9").await;
	assert_eq!(panel.tab(), TabKey::Images);

	let LoadOutcome::Panel(panel) = load(&catalog, "9", Some("default")).await else {
		panic!("default sentinel should resolve without a redirect");
	};
	assert_eq!(panel.tab(), TabKey::Images);

	let LoadOutcome::Panel(panel) = load(&catalog, "9", Some("movies")).await else {
		panic!("known segment should resolve");
	};
	assert_eq!(panel.tab(), TabKey::Movies);

	let LoadOutcome::RedirectToCanonical(route) = load(&catalog, "9", Some("markers")).await
	else {
		panic!("unknown segment should redirect");
	};
	assert_eq!(route, Route::performer("9", None));

	assert!(matches!(load(&catalog, "404", None).await, LoadOutcome::NotFound));
}

#[tokio::test]
async fn saving_updates_the_record_and_leaves_edit_mode() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;

	panel.toggle_edit();
	panel.stage_image(vec![0xff, 0xd8]);
	let patch = PerformerPatch {
		name: Some("Joan Doe".to_owned()),
		..PerformerPatch::default()
	};
	panel.save(&catalog, patch, &mut notify).await.unwrap();

	assert!(!panel.is_editing());
	assert_eq!(panel.record().name, "Joan Doe");
	assert!(panel.record().image_available);

	let toasts = notify.take_pending();
	assert_eq!(toasts.len(), 1);
	assert_eq!(toasts[0].level, Level::Success);
	assert_eq!(toasts[0].message, "Updated performer");

	let stored = catalog.find_performer(&EntityId::from("9")).await.unwrap().unwrap();
	assert_eq!(stored.name, "Joan Doe");
	assert!(stored.image_available);
}

#[tokio::test]
async fn failed_save_stays_in_edit_mode() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	catalog.set_fail_updates(true);
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;

	panel.toggle_edit();
	panel.stage_image(vec![1, 2]);
	let patch = PerformerPatch {
		name: Some("Joan Doe".to_owned()),
		..PerformerPatch::default()
	};
	assert!(panel.save(&catalog, patch, &mut notify).await.is_err());

	assert!(panel.is_editing());
	assert_eq!(panel.active_image(), ActiveImage::Staged(&[1, 2][..]));
	assert_eq!(panel.record().name, "Jane Doe");

	let toasts = notify.take_pending();
	assert_eq!(toasts.len(), 1);
	assert_eq!(toasts[0].level, Level::Error);

	let stored = catalog.find_performer(&EntityId::from("9")).await.unwrap().unwrap();
	assert_eq!(stored.name, "Jane Doe");
}

#[tokio::test]
async fn failed_delete_keeps_the_page() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	catalog.set_fail_deletes(true);
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;

	assert_eq!(panel.delete(&catalog, &mut notify).await, None);
	assert!(!panel.is_deleting());
	assert_eq!(notify.take_pending()[0].level, Level::Error);
	assert!(catalog.find_performer(&EntityId::from("9")).await.unwrap().is_some());

	catalog.set_fail_deletes(false);
	assert_eq!(panel.delete(&catalog, &mut notify).await, Some(Route::Performers));
	assert!(notify.is_empty());
	assert!(catalog.find_performer(&EntityId::from("9")).await.unwrap().is_none());
}

#[tokio::test]
async fn favorite_shortcut_is_optimistic() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	catalog.set_fail_updates(true);
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;

	let route = panel
		.dispatch_shortcut(PanelAction::ToggleFavorite, &catalog, &mut notify)
		.await;
	assert_eq!(route, None);

	// the local flag flips even though the write failed
	assert!(panel.record().favorite);
	assert_eq!(notify.take_pending()[0].level, Level::Error);
	let stored = catalog.find_performer(&EntityId::from("9")).await.unwrap().unwrap();
	assert!(!stored.favorite);

	catalog.set_fail_updates(false);
	panel
		.dispatch_shortcut(PanelAction::ToggleFavorite, &catalog, &mut notify)
		.await;
	assert!(!panel.record().favorite);
	assert!(notify.is_empty());
}

#[tokio::test]
async fn rating_shortcuts_scale_digits() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;

	panel
		.dispatch_shortcut(PanelAction::SetRating(4), &catalog, &mut notify)
		.await;
	assert_eq!(panel.record().rating100, Some(80));
	let stored = catalog.find_performer(&EntityId::from("9")).await.unwrap().unwrap();
	assert_eq!(stored.rating100, Some(80));

	// digits past the five-star scale clamp to the maximum
	panel
		.dispatch_shortcut(PanelAction::SetRating(9), &catalog, &mut notify)
		.await;
	assert_eq!(panel.record().rating100, Some(100));

	panel
		.dispatch_shortcut(PanelAction::SetRating(0), &catalog, &mut notify)
		.await;
	assert_eq!(panel.record().rating100, None);
	assert!(notify.is_empty());
}

#[tokio::test]
async fn auto_tag_toasts_the_outcome() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	let mut notify = NotificationCenter::new();
	let panel = load_panel(&catalog, "9").await;

	panel.auto_tag(&catalog, &mut notify).await;
	let toasts = notify.take_pending();
	assert_eq!(toasts[0].level, Level::Success);
	assert_eq!(toasts[0].message, "Started auto tagging");
	assert_eq!(catalog.auto_tag_started(), vec![EntityId::from("9")]);

	// a stale panel whose record was deleted elsewhere
	catalog.delete_performer(&EntityId::from("9")).await.unwrap();
	panel.auto_tag(&catalog, &mut notify).await;
	assert_eq!(notify.take_pending()[0].level, Level::Error);
}

#[tokio::test]
async fn shortcuts_are_inert_while_editing() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;
	let tab = panel.tab();

	panel
		.dispatch_shortcut(PanelAction::ToggleEdit, &catalog, &mut notify)
		.await;
	assert!(panel.is_editing());

	let route = panel
		.dispatch_shortcut(PanelAction::ShowMovies, &catalog, &mut notify)
		.await;
	assert_eq!(route, None);
	assert_eq!(panel.tab(), tab);

	panel
		.dispatch_shortcut(PanelAction::ToggleFavorite, &catalog, &mut notify)
		.await;
	assert!(!panel.record().favorite);
	assert!(notify.is_empty());

	panel
		.dispatch_shortcut(PanelAction::ToggleEdit, &catalog, &mut notify)
		.await;
	assert!(!panel.is_editing());
}

#[tokio::test]
async fn tab_shortcuts_emit_routes() {
	let catalog = MemoryCatalog::new();
	let mut record = performer("9", "Jane Doe");
	record.scene_count = 5;
	catalog.seed_performer(record);
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;
	assert_eq!(panel.tab(), TabKey::Scenes);

	let route = panel
		.dispatch_shortcut(PanelAction::ShowMovies, &catalog, &mut notify)
		.await;
	assert_eq!(route, Some(Route::performer("9", Some(TabKey::Movies))));
	assert_eq!(route.unwrap().path(), "/performers/9/movies");

	// returning to the populated default drops the segment again
	let route = panel
		.dispatch_shortcut(PanelAction::ShowScenes, &catalog, &mut notify)
		.await;
	assert_eq!(route, Some(Route::performer("9", None)));
}

#[tokio::test]
async fn router_binding_follows_the_page_lifetime() {
	let catalog = MemoryCatalog::new();
	catalog.seed_performer(performer("9", "Jane Doe"));
	let mut notify = NotificationCenter::new();
	let mut panel = load_panel(&catalog, "9").await;

	let router = ShortcutRouter::new();
	let guard = bind_shortcuts(&router).unwrap();

	let action = router.dispatch(Key::char('f')).unwrap();
	panel.dispatch_shortcut(action, &catalog, &mut notify).await;
	assert!(panel.record().favorite);

	drop(guard);
	assert_eq!(router.dispatch(Key::char('f')), None);
}
