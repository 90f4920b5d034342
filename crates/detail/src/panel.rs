//! State for one performer page: the loaded record, the active tab, edit
//! mode with a staged portrait, and the mutations the page can issue.
//!
//! Mutations are optimistic where the original UI is fire-and-forget
//! (favorite, rating): the local record updates first and a failure only
//! raises a toast. Structural mutations (save, delete) stay pessimistic.

use mediathek_core::{
	CatalogService, EntityId, FieldPatch, NotificationCenter, PerformerPatch, PerformerRecord,
	PerformerUpdate, ServiceResult, UiConfig,
};
use mediathek_core::text::tab_counter;
use tracing::{debug, info, warn};

use crate::route::{Route, TabKey};
use crate::shortcuts::PanelAction;

/// Whether the page shows the record or the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
	Viewing,
	Editing,
}

/// Portrait changes staged in the edit form, applied on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StagedImage {
	#[default]
	Untouched,
	Cleared,
	Replaced(Vec<u8>),
}

impl StagedImage {
	fn as_patch(&self) -> FieldPatch<Vec<u8>> {
		match self {
			Self::Untouched => FieldPatch::Keep,
			Self::Cleared => FieldPatch::Clear,
			Self::Replaced(bytes) => FieldPatch::Set(bytes.clone()),
		}
	}
}

/// What the portrait slot should render right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveImage<'a> {
	None,
	/// The stored portrait.
	Record,
	/// The stored portrait, greyed out as a placeholder while its removal
	/// is staged.
	RecordDefault,
	/// A staged replacement that has not been saved yet.
	Staged(&'a [u8]),
}

/// The performer page.
#[derive(Debug, Clone)]
pub struct PerformerPanel {
	record: PerformerRecord,
	cfg: UiConfig,
	mode: PanelMode,
	tab: TabKey,
	collapsed: bool,
	staged_image: StagedImage,
	deleting: bool,
}

impl PerformerPanel {
	pub fn new(record: PerformerRecord, cfg: &UiConfig, requested: Option<TabKey>) -> Self {
		let tab = requested.unwrap_or_else(|| populated_default_tab(&record));
		Self {
			collapsed: !cfg.show_all_details,
			cfg: cfg.clone(),
			mode: PanelMode::Viewing,
			tab,
			staged_image: StagedImage::Untouched,
			deleting: false,
			record,
		}
	}

	pub fn record(&self) -> &PerformerRecord {
		&self.record
	}

	pub fn tab(&self) -> TabKey {
		self.tab
	}

	pub fn mode(&self) -> PanelMode {
		self.mode
	}

	pub fn is_editing(&self) -> bool {
		self.mode == PanelMode::Editing
	}

	pub fn is_collapsed(&self) -> bool {
		self.collapsed
	}

	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// The tab shown when the URL names none: scenes, unless the performer
	/// has no scenes, then the first populated of galleries, images and
	/// movies. Everything empty falls back to scenes.
	pub fn populated_default_tab(&self) -> TabKey {
		populated_default_tab(&self.record)
	}

	/// Switches tabs. `None` requests the populated default. Returns the
	/// route the URL should move to, or `None` when the tab did not change.
	/// The default tab is carried without a URL segment.
	pub fn select_tab(&mut self, requested: Option<TabKey>) -> Option<Route> {
		let target = requested.unwrap_or_else(|| self.populated_default_tab());
		if target == self.tab {
			return None;
		}
		debug!(tab = %target, "switching tab");
		self.tab = target;
		let tab = (target != self.populated_default_tab()).then_some(target);
		Some(Route::performer(self.record.id.clone(), tab))
	}

	/// Enters or leaves edit mode. Staged portrait changes are discarded
	/// either way.
	pub fn toggle_edit(&mut self) {
		self.mode = match self.mode {
			PanelMode::Viewing => PanelMode::Editing,
			PanelMode::Editing => PanelMode::Viewing,
		};
		self.staged_image = StagedImage::Untouched;
		debug!(mode = ?self.mode, "toggled edit mode");
	}

	pub fn toggle_collapsed(&mut self) {
		self.collapsed = !self.collapsed;
	}

	/// Stages a replacement portrait. Ignored outside edit mode.
	pub fn stage_image(&mut self, bytes: Vec<u8>) {
		if self.is_editing() {
			self.staged_image = StagedImage::Replaced(bytes);
		}
	}

	/// Stages removal of the portrait. Ignored outside edit mode.
	pub fn clear_image(&mut self) {
		if self.is_editing() {
			self.staged_image = StagedImage::Cleared;
		}
	}

	pub fn active_image(&self) -> ActiveImage<'_> {
		if self.is_editing() {
			match &self.staged_image {
				StagedImage::Cleared if self.record.image_available => {
					return ActiveImage::RecordDefault;
				}
				StagedImage::Replaced(bytes) => return ActiveImage::Staged(bytes),
				_ => {}
			}
		}
		if self.record.image_available {
			ActiveImage::Record
		} else {
			ActiveImage::None
		}
	}

	/// Whether the stored portrait doubles as the page background.
	pub fn show_background_image(&self) -> bool {
		self.cfg.enable_background_image
			&& !self.is_editing()
			&& self.active_image() == ActiveImage::Record
	}

	/// Expanded details span the full card width unless configured compact.
	pub fn full_width(&self) -> bool {
		!self.collapsed && !self.cfg.compact_expanded_details
	}

	/// Badge text for a tab header; empty tabs carry no badge.
	pub fn tab_badge(&self, tab: TabKey) -> Option<String> {
		let count = match tab {
			TabKey::Scenes => self.record.scene_count,
			TabKey::Galleries => self.record.gallery_count,
			TabKey::Images => self.record.image_count,
			TabKey::Movies => self.record.movie_count,
			TabKey::AppearsWith => self.record.performer_count,
		};
		tab_counter(count, self.cfg.abbreviate_counters)
	}

	/// Flips the favorite flag optimistically; a failed write keeps the
	/// local value and raises a toast.
	pub async fn set_favorite(
		&mut self,
		svc: &dyn CatalogService,
		favorite: bool,
		notify: &mut NotificationCenter,
	) {
		self.record.favorite = favorite;
		let update =
			PerformerUpdate::new(self.record.id.clone(), PerformerPatch::favorite(favorite));
		match svc.update_performer(update).await {
			Ok(record) => self.record = record,
			Err(err) => {
				warn!(id = %self.record.id, %err, "favorite update failed");
				notify.error(format!("Failed to update performer: {err}"));
			}
		}
	}

	/// Sets or clears the rating optimistically, like [`Self::set_favorite`].
	pub async fn set_rating(
		&mut self,
		svc: &dyn CatalogService,
		rating: Option<u8>,
		notify: &mut NotificationCenter,
	) {
		self.record.rating100 = rating;
		let update = PerformerUpdate::new(self.record.id.clone(), PerformerPatch::rating(rating));
		match svc.update_performer(update).await {
			Ok(record) => self.record = record,
			Err(err) => {
				warn!(id = %self.record.id, %err, "rating update failed");
				notify.error(format!("Failed to update performer: {err}"));
			}
		}
	}

	/// Submits the edit form. The staged portrait is folded into the patch.
	/// Success leaves edit mode; failure stays in it with the staging
	/// intact so the user can retry.
	pub async fn save(
		&mut self,
		svc: &dyn CatalogService,
		mut patch: PerformerPatch,
		notify: &mut NotificationCenter,
	) -> ServiceResult<()> {
		patch.image = self.staged_image.as_patch();
		let update = PerformerUpdate::new(self.record.id.clone(), patch);
		match svc.update_performer(update).await {
			Ok(record) => {
				self.record = record;
				self.mode = PanelMode::Viewing;
				self.staged_image = StagedImage::Untouched;
				notify.success("Updated performer");
				Ok(())
			}
			Err(err) => {
				warn!(id = %self.record.id, %err, "performer update failed");
				notify.error(format!("Failed to update performer: {err}"));
				Err(err)
			}
		}
	}

	/// Deletes the performer. Only a confirmed deletion navigates away; a
	/// failure keeps the page with the record intact.
	pub async fn delete(
		&mut self,
		svc: &dyn CatalogService,
		notify: &mut NotificationCenter,
	) -> Option<Route> {
		self.deleting = true;
		match svc.delete_performer(&self.record.id).await {
			Ok(()) => {
				info!(id = %self.record.id, "deleted performer");
				Some(Route::Performers)
			}
			Err(err) => {
				warn!(id = %self.record.id, %err, "performer delete failed");
				self.deleting = false;
				notify.error(format!("Failed to delete performer: {err}"));
				None
			}
		}
	}

	/// Kicks off auto tagging for this performer.
	pub async fn auto_tag(&self, svc: &dyn CatalogService, notify: &mut NotificationCenter) {
		match svc.auto_tag(&self.record.id).await {
			Ok(()) => notify.success("Started auto tagging"),
			Err(err) => {
				warn!(id = %self.record.id, %err, "auto tag failed to start");
				notify.error(format!("Failed to start auto tagging: {err}"));
			}
		}
	}

	/// Runs one keyboard action. While the edit form is open every binding
	/// except the edit toggle is inert, so typing never mutates the record.
	pub async fn dispatch_shortcut(
		&mut self,
		action: PanelAction,
		svc: &dyn CatalogService,
		notify: &mut NotificationCenter,
	) -> Option<Route> {
		if self.is_editing() && action != PanelAction::ToggleEdit {
			return None;
		}
		match action {
			PanelAction::ToggleEdit => {
				self.toggle_edit();
				None
			}
			PanelAction::ShowScenes => self.select_tab(Some(TabKey::Scenes)),
			PanelAction::ShowGalleries => self.select_tab(Some(TabKey::Galleries)),
			PanelAction::ShowMovies => self.select_tab(Some(TabKey::Movies)),
			PanelAction::ToggleFavorite => {
				let target = !self.record.favorite;
				self.set_favorite(svc, target, notify).await;
				None
			}
			PanelAction::ToggleCollapsed => {
				self.toggle_collapsed();
				None
			}
			PanelAction::SetRating(digit) => {
				let rating = (digit > 0).then(|| digit.min(5) * 20);
				self.set_rating(svc, rating, notify).await;
				None
			}
		}
	}
}

fn populated_default_tab(record: &PerformerRecord) -> TabKey {
	if record.scene_count > 0 {
		return TabKey::Scenes;
	}
	[
		(record.gallery_count, TabKey::Galleries),
		(record.image_count, TabKey::Images),
		(record.movie_count, TabKey::Movies),
	]
	.into_iter()
	.find_map(|(count, tab)| (count > 0).then_some(tab))
	.unwrap_or(TabKey::Scenes)
}

/// Result of resolving a performer URL.
#[derive(Debug)]
pub enum LoadOutcome {
	Panel(Box<PerformerPanel>),
	NotFound,
	/// The tab segment was not recognised; the URL should be replaced with
	/// the canonical one.
	RedirectToCanonical(Route),
}

/// Loads a performer page from its URL parts. The `default` tab segment
/// resolves to the populated default without a redirect.
pub async fn load_performer(
	svc: &dyn CatalogService,
	id: &EntityId,
	tab_segment: Option<&str>,
	cfg: &UiConfig,
) -> ServiceResult<LoadOutcome> {
	let Some(record) = svc.find_performer(id).await? else {
		info!(%id, "performer not found");
		return Ok(LoadOutcome::NotFound);
	};
	let requested = match tab_segment {
		None | Some("default") => None,
		Some(segment) => match TabKey::from_segment(segment) {
			Some(tab) => Some(tab),
			None => {
				debug!(%id, segment, "unknown tab segment");
				return Ok(LoadOutcome::RedirectToCanonical(Route::performer(id.clone(), None)));
			}
		},
	};
	info!(%id, name = %record.name, "loaded performer");
	Ok(LoadOutcome::Panel(Box::new(PerformerPanel::new(record, cfg, requested))))
}
