//! The entity select model.
//!
//! A headless dropdown over [`EntityRef`] candidates: ordered deduplicated
//! selection, case-insensitive filtering, option capping with a hidden
//! count, and inline creation. The host renders [`MenuView`] however it
//! likes and feeds interactions back in.

use indexmap::IndexMap;
use mediathek_core::{
	CatalogService, EntityId, EntityKind, EntityRef, NotificationCenter, ServiceError,
	ServiceResult,
};
use tracing::debug;

/// Fallback option cap when no configuration is supplied.
pub const DEFAULT_MAX_OPTIONS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
	Single,
	Multi,
}

/// How the widget handles free-text entries the candidate list lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreateMode {
	Off,
	/// Create through the catalog service.
	Catalog,
	/// Accept the text as-is, id equal to label.
	Inline,
}

/// What to show when the menu has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOptions {
	/// Generic "No options" text.
	Default,
	/// Nothing at all.
	Silent,
	/// Nothing until a query is typed, then "No <kind> found.".
	Remote { label: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRow {
	Item(EntityRef),
	/// Offer to create an entity named after the current query.
	Create(String),
}

/// One computed rendering of the dropdown menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuView {
	pub group_header: Option<String>,
	pub rows: Vec<MenuRow>,
	/// Candidates suppressed by the option cap.
	pub hidden: usize,
	pub no_options: Option<String>,
}

pub struct SelectModel {
	mode: SelectMode,
	kind: Option<EntityKind>,
	candidates: Vec<EntityRef>,
	selection: IndexMap<EntityId, EntityRef>,
	create: CreateMode,
	no_options: NoOptions,
	max_options: usize,
	disabled: bool,
	clearable: bool,
	loading: bool,
	searching: bool,
	close_on_select: bool,
	searchable: bool,
	hide_selected: bool,
	placeholder: Option<String>,
	group_header: Option<String>,
}

impl SelectModel {
	pub fn new(mode: SelectMode) -> Self {
		Self {
			mode,
			kind: None,
			candidates: Vec::new(),
			selection: IndexMap::new(),
			create: CreateMode::Off,
			no_options: NoOptions::Default,
			max_options: DEFAULT_MAX_OPTIONS,
			disabled: false,
			clearable: true,
			loading: false,
			searching: false,
			close_on_select: mode == SelectMode::Single,
			searchable: true,
			// multi hides rows already chosen, single keeps them visible
			hide_selected: mode == SelectMode::Multi,
			placeholder: None,
			group_header: None,
		}
	}

	pub fn kind(mut self, kind: EntityKind) -> Self {
		self.kind = Some(kind);
		self
	}

	/// Enables or disables catalog-backed creation.
	pub fn creatable(mut self, creatable: bool) -> Self {
		self.create = if creatable {
			CreateMode::Catalog
		} else {
			CreateMode::Off
		};
		self
	}

	/// Accept novel entries locally, without a catalog round trip.
	pub fn creatable_inline(mut self) -> Self {
		self.create = CreateMode::Inline;
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn clearable(mut self, clearable: bool) -> Self {
		self.clearable = clearable;
		self
	}

	pub fn close_on_select(mut self, close: bool) -> Self {
		self.close_on_select = close;
		self
	}

	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	pub fn hide_selected(mut self, hide: bool) -> Self {
		self.hide_selected = hide;
		self
	}

	pub fn max_options(mut self, max: usize) -> Self {
		self.max_options = max;
		self
	}

	pub fn no_options(mut self, policy: NoOptions) -> Self {
		self.no_options = policy;
		self
	}

	pub fn placeholder(mut self, text: impl Into<String>) -> Self {
		self.placeholder = Some(text.into());
		self
	}

	pub fn group_header(mut self, text: impl Into<String>) -> Self {
		self.group_header = Some(text.into());
		self
	}

	pub fn mode(&self) -> SelectMode {
		self.mode
	}

	/// Disabled explicitly, or implicitly while a creation is in flight.
	pub fn is_disabled(&self) -> bool {
		self.disabled || self.loading
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// True while a remote search is in flight.
	pub fn is_searching(&self) -> bool {
		self.searching
	}

	pub(crate) fn set_searching(&mut self, searching: bool) {
		self.searching = searching;
	}

	pub fn is_clearable(&self) -> bool {
		self.clearable && !self.disabled
	}

	pub fn closes_on_select(&self) -> bool {
		self.close_on_select
	}

	/// Placeholder text; a disabled widget shows none.
	pub fn placeholder_text(&self) -> Option<&str> {
		if self.disabled {
			return None;
		}
		self.placeholder.as_deref()
	}

	pub fn candidates(&self) -> &[EntityRef] {
		&self.candidates
	}

	/// Replaces the candidate list. Selected refs that vanish from the
	/// new list persist as disconnected refs until explicitly removed.
	pub fn set_candidates(&mut self, candidates: Vec<EntityRef>) {
		self.candidates = candidates;
	}

	/// Current selection in insertion order.
	pub fn selection(&self) -> Vec<EntityRef> {
		self.selection.values().cloned().collect()
	}

	pub fn selected_ids(&self) -> Vec<EntityId> {
		self.selection.keys().cloned().collect()
	}

	pub fn is_selected(&self, id: &EntityId) -> bool {
		self.selection.contains_key(id)
	}

	pub fn select(&mut self, entity: EntityRef) {
		if self.disabled {
			return;
		}
		self.choose(entity);
	}

	fn choose(&mut self, entity: EntityRef) {
		if self.mode == SelectMode::Single {
			self.selection.clear();
		}
		self.selection.insert(entity.id.clone(), entity);
	}

	pub fn deselect(&mut self, id: &EntityId) {
		if self.disabled {
			return;
		}
		self.selection.shift_remove(id);
	}

	pub fn clear(&mut self) {
		if self.disabled {
			return;
		}
		self.selection.clear();
	}

	/// Rebuilds the selection as the ids' intersection with the current
	/// candidates, in candidate order.
	pub fn set_selected_ids(&mut self, ids: &[EntityId]) {
		self.selection = self
			.candidates
			.iter()
			.filter(|c| ids.contains(&c.id))
			.map(|c| (c.id.clone(), c.clone()))
			.collect();
	}

	/// Whether `query` qualifies for the creation row: non-empty and not
	/// already present among candidates or selection, case-insensitively.
	pub fn is_valid_new(&self, query: &str) -> bool {
		let query = query.trim();
		if query.is_empty() || self.create == CreateMode::Off {
			return false;
		}
		let taken = |label: &str| label.eq_ignore_ascii_case(query);
		!self.candidates.iter().any(|c| taken(&c.label))
			&& !self.selection.values().any(|c| taken(&c.label))
	}

	/// Computes the menu for the given query text.
	pub fn menu(&self, query: &str) -> MenuView {
		if self.is_disabled() {
			return MenuView::default();
		}

		let needle = query.to_lowercase();
		let mut rows: Vec<MenuRow> = self
			.candidates
			.iter()
			.filter(|c| !self.searchable || needle.is_empty() || c.label.to_lowercase().contains(&needle))
			.filter(|c| !self.hide_selected || !self.selection.contains_key(&c.id))
			.cloned()
			.map(MenuRow::Item)
			.collect();

		let item_count = rows.len();
		let creating = self.is_valid_new(query);
		if creating {
			rows.push(MenuRow::Create(query.trim().to_owned()));
		}

		let total = rows.len();
		let mut hidden = 0;
		if total > self.max_options {
			if creating && item_count >= self.max_options {
				// keep the creation row visible past the cap; it does not
				// count against the budget it occupies
				let create = rows.pop();
				rows.truncate(self.max_options.saturating_sub(1));
				rows.extend(create);
				hidden = total - self.max_options - 1;
			} else {
				rows.truncate(self.max_options);
				hidden = total - self.max_options;
			}
		}

		let no_options = if rows.is_empty() {
			match self.no_options {
				NoOptions::Default => Some("No options".to_owned()),
				NoOptions::Silent => None,
				NoOptions::Remote { label } => {
					(!query.is_empty()).then(|| format!("No {label} found."))
				}
			}
		} else {
			None
		};

		MenuView {
			group_header: self.group_header.clone(),
			rows,
			hidden,
			no_options,
		}
	}

	/// Creates an entity for `name` and merges it into the selection.
	///
	/// Catalog-backed creation toasts the outcome; on failure the
	/// selection, candidates and loading flag are all left as they were.
	pub async fn create(
		&mut self,
		svc: &dyn CatalogService,
		name: &str,
		notify: &mut NotificationCenter,
	) -> ServiceResult<EntityRef> {
		if self.is_disabled() || self.create == CreateMode::Off {
			return Err(ServiceError::Rejected("creation is not available".into()));
		}
		let name = name.trim();

		if self.create == CreateMode::Inline {
			let entity = EntityRef::new(name, name);
			self.choose(entity.clone());
			return Ok(entity);
		}

		let Some(kind) = self.kind else {
			return Err(ServiceError::Rejected("select has no entity kind".into()));
		};
		self.loading = true;
		match svc.create(kind, name).await {
			Ok(entity) => {
				self.loading = false;
				self.candidates.push(entity.clone());
				self.choose(entity.clone());
				notify.success(format!("Created {}: {}", kind.singular(), entity.label));
				Ok(entity)
			}
			Err(err) => {
				self.loading = false;
				debug!(%kind, name, %err, "creation failed");
				notify.error(format!("Failed to create {}: {err}", kind.singular()));
				Err(err)
			}
		}
	}
}
