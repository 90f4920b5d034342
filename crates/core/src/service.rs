//! Asynchronous boundary to the catalog server.
//!
//! Everything the client knows about the server fits behind
//! [`CatalogService`]: lookups, text search, inline creation and the
//! mutation set the detail pages use. Implementations wrap whatever
//! transport the deployment uses; [`MemoryCatalog`] is the in-process
//! implementation used by tests and demos.
//!
//! [`MemoryCatalog`]: crate::memory::MemoryCatalog

use async_trait::async_trait;
use thiserror::Error;

use crate::entity::{EntityId, EntityKind, EntityRef};
use crate::patch::PerformerUpdate;
use crate::records::PerformerRecord;

/// Failure of a catalog operation.
///
/// All variants are recoverable at the page level: they surface as
/// notifications or not-found views, never as process failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
	#[error("{kind} not found: {id}")]
	NotFound { kind: EntityKind, id: EntityId },
	#[error("{kind} already exists: {name}")]
	AlreadyExists { kind: EntityKind, name: String },
	/// The server understood and refused the operation.
	#[error("operation rejected: {0}")]
	Rejected(String),
	/// The server could not be reached or answered garbage.
	#[error("transport failure: {0}")]
	Transport(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Async query/mutation surface of the catalog server.
///
/// Search and candidate listings return [`EntityRef`] projections directly;
/// only the performer detail flow needs full records.
#[async_trait]
pub trait CatalogService: Send + Sync {
	/// Fetches one performer; `Ok(None)` when the id is unknown.
	async fn find_performer(&self, id: &EntityId) -> ServiceResult<Option<PerformerRecord>>;

	/// Applies a field patch and returns the updated record.
	async fn update_performer(&self, update: PerformerUpdate) -> ServiceResult<PerformerRecord>;

	/// Deletes a performer.
	async fn delete_performer(&self, id: &EntityId) -> ServiceResult<()>;

	/// Full candidate corpus for locally-filtered kinds (performers,
	/// studios, tags, movies).
	async fn all(&self, kind: EntityKind) -> ServiceResult<Vec<EntityRef>>;

	/// Text search over remote-corpus kinds (scenes, galleries, images).
	async fn search(&self, kind: EntityKind, query: &str) -> ServiceResult<Vec<EntityRef>>;

	/// Creates an entity by name. Duplicate names fail with
	/// [`ServiceError::AlreadyExists`].
	async fn create(&self, kind: EntityKind, name: &str) -> ServiceResult<EntityRef>;

	/// Previously-used scene marker titles, for suggestion lists.
	async fn marker_titles(&self) -> ServiceResult<Vec<String>>;

	/// Starts the auto-tag maintenance job for one performer.
	async fn auto_tag(&self, performer: &EntityId) -> ServiceResult<()>;
}
