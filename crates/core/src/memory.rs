//! In-process catalog used by tests and offline demos.
//!
//! Behaves like the real server for the operations the client exercises:
//! duplicate-name creation is refused, lookups miss politely, mutations
//! persist. Failure injection flips individual mutation families into
//! transport failures so error paths can be exercised deterministically.

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::entity::{EntityId, EntityKind, EntityRef};
use crate::patch::PerformerUpdate;
use crate::records::PerformerRecord;
use crate::service::{CatalogService, ServiceError, ServiceResult};

#[derive(Default)]
struct Inner {
	performers: Vec<PerformerRecord>,
	refs: FxHashMap<EntityKind, Vec<EntityRef>>,
	marker_titles: Vec<String>,
	auto_tag_started: Vec<EntityId>,
	next_id: u64,
	fail_creates: bool,
	fail_updates: bool,
	fail_deletes: bool,
}

/// In-memory [`CatalogService`] implementation.
pub struct MemoryCatalog {
	inner: Mutex<Inner>,
}

impl Default for MemoryCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryCatalog {
	pub fn new() -> Self {
		Self {
			inner: Mutex::new(Inner {
				// Seeded fixtures use their own low ids; generated ids
				// start high enough to never collide.
				next_id: 1000,
				..Inner::default()
			}),
		}
	}

	/// Adds a performer record and its selection reference.
	pub fn seed_performer(&self, record: PerformerRecord) {
		let mut inner = self.inner.lock();
		let entity_ref = record.entity_ref();
		inner.refs.entry(EntityKind::Performer).or_default().push(entity_ref);
		inner.performers.push(record);
	}

	/// Adds selection references for any kind.
	pub fn seed_refs(&self, kind: EntityKind, refs: impl IntoIterator<Item = EntityRef>) {
		self.inner.lock().refs.entry(kind).or_default().extend(refs);
	}

	/// Adds marker title suggestions.
	pub fn seed_marker_titles(&self, titles: impl IntoIterator<Item = String>) {
		self.inner.lock().marker_titles.extend(titles);
	}

	/// Forces subsequent `create` calls to fail with a transport error.
	pub fn set_fail_creates(&self, fail: bool) {
		self.inner.lock().fail_creates = fail;
	}

	/// Forces subsequent `update_performer` calls to fail.
	pub fn set_fail_updates(&self, fail: bool) {
		self.inner.lock().fail_updates = fail;
	}

	/// Forces subsequent `delete_performer` calls to fail.
	pub fn set_fail_deletes(&self, fail: bool) {
		self.inner.lock().fail_deletes = fail;
	}

	/// Performers for which auto-tagging was started, in call order.
	pub fn auto_tag_started(&self) -> Vec<EntityId> {
		self.inner.lock().auto_tag_started.clone()
	}
}

fn injected() -> ServiceError {
	ServiceError::Transport("injected failure".into())
}

#[async_trait]
impl CatalogService for MemoryCatalog {
	async fn find_performer(&self, id: &EntityId) -> ServiceResult<Option<PerformerRecord>> {
		let inner = self.inner.lock();
		Ok(inner.performers.iter().find(|p| &p.id == id).cloned())
	}

	async fn update_performer(&self, update: PerformerUpdate) -> ServiceResult<PerformerRecord> {
		let mut inner = self.inner.lock();
		if inner.fail_updates {
			debug!(id = %update.id, "injected update failure");
			return Err(injected());
		}
		let record = inner
			.performers
			.iter_mut()
			.find(|p| p.id == update.id)
			.ok_or_else(|| ServiceError::NotFound {
				kind: EntityKind::Performer,
				id: update.id.clone(),
			})?;
		update.patch.apply_to(record);
		Ok(record.clone())
	}

	async fn delete_performer(&self, id: &EntityId) -> ServiceResult<()> {
		let mut inner = self.inner.lock();
		if inner.fail_deletes {
			debug!(%id, "injected delete failure");
			return Err(injected());
		}
		let before = inner.performers.len();
		inner.performers.retain(|p| &p.id != id);
		if inner.performers.len() == before {
			return Err(ServiceError::NotFound {
				kind: EntityKind::Performer,
				id: id.clone(),
			});
		}
		if let Some(refs) = inner.refs.get_mut(&EntityKind::Performer) {
			refs.retain(|r| &r.id != id);
		}
		Ok(())
	}

	async fn all(&self, kind: EntityKind) -> ServiceResult<Vec<EntityRef>> {
		Ok(self.inner.lock().refs.get(&kind).cloned().unwrap_or_default())
	}

	async fn search(&self, kind: EntityKind, query: &str) -> ServiceResult<Vec<EntityRef>> {
		if query.is_empty() {
			return Ok(Vec::new());
		}
		let needle = query.to_lowercase();
		let inner = self.inner.lock();
		Ok(inner
			.refs
			.get(&kind)
			.map(|refs| {
				refs.iter()
					.filter(|r| r.label.to_lowercase().contains(&needle))
					.cloned()
					.collect()
			})
			.unwrap_or_default())
	}

	async fn create(&self, kind: EntityKind, name: &str) -> ServiceResult<EntityRef> {
		let mut inner = self.inner.lock();
		if inner.fail_creates {
			debug!(%kind, name, "injected create failure");
			return Err(injected());
		}
		let exists = inner
			.refs
			.get(&kind)
			.is_some_and(|refs| refs.iter().any(|r| r.label.eq_ignore_ascii_case(name)));
		if exists {
			return Err(ServiceError::AlreadyExists {
				kind,
				name: name.to_owned(),
			});
		}
		let id = EntityId::new(inner.next_id.to_string());
		inner.next_id += 1;
		let entity_ref = EntityRef::new(id, name);
		inner.refs.entry(kind).or_default().push(entity_ref.clone());
		debug!(%kind, name, id = %entity_ref.id, "created entity");
		Ok(entity_ref)
	}

	async fn marker_titles(&self) -> ServiceResult<Vec<String>> {
		Ok(self.inner.lock().marker_titles.clone())
	}

	async fn auto_tag(&self, performer: &EntityId) -> ServiceResult<()> {
		let mut inner = self.inner.lock();
		let known = inner.performers.iter().any(|p| &p.id == performer);
		if !known {
			return Err(ServiceError::NotFound {
				kind: EntityKind::Performer,
				id: performer.clone(),
			});
		}
		inner.auto_tag_started.push(performer.clone());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn create_rejects_duplicate_names() {
		let catalog = MemoryCatalog::new();
		catalog.seed_refs(EntityKind::Movie, [EntityRef::new("1", "Heat")]);

		let err = catalog.create(EntityKind::Movie, "heat").await.unwrap_err();
		assert_eq!(
			err,
			ServiceError::AlreadyExists {
				kind: EntityKind::Movie,
				name: "heat".into(),
			}
		);

		let created = catalog.create(EntityKind::Movie, "Ronin").await.unwrap();
		assert_eq!(created.label, "Ronin");
	}

	#[tokio::test]
	async fn search_is_substring_and_skips_empty() {
		let catalog = MemoryCatalog::new();
		catalog.seed_refs(
			EntityKind::Scene,
			[EntityRef::new("1", "Opening Night"), EntityRef::new("2", "Finale")],
		);

		assert!(catalog.search(EntityKind::Scene, "").await.unwrap().is_empty());
		let hits = catalog.search(EntityKind::Scene, "night").await.unwrap();
		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].id, EntityId::from("1"));
	}
}
