//! Shared foundation for the mediathek client crates.
//!
//! Entity identities and records, the catalog service trait plus an
//! in-memory implementation, field patches for partial updates, interface
//! configuration, and the toast queue.

pub mod config;
pub mod entity;
pub mod memory;
pub mod notify;
pub mod patch;
pub mod records;
pub mod service;
pub mod text;

pub use config::{ConfigError, DisableDropdownCreate, UiConfig};
pub use entity::{EntityId, EntityKind, EntityRef};
pub use memory::MemoryCatalog;
pub use notify::{Level, NotificationCenter, Toast};
pub use patch::{FieldPatch, PerformerPatch, PerformerUpdate};
pub use records::{
	GalleryRecord, ImageRecord, MovieRecord, NamedRecord, PerformerRecord, SceneRecord,
	StudioRecord, TagRecord,
};
pub use service::{CatalogService, ServiceError, ServiceResult};
