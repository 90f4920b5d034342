//! Headless entity select widgets.
//!
//! [`SelectModel`] owns selection state and menu computation; kind-specific
//! constructors in [`kinds`] configure it for each entity picker, and
//! [`RemoteSelect`] adds debounced search for the large corpora.

pub mod debounce;
pub mod kinds;
pub mod model;
pub mod remote;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use model::{DEFAULT_MAX_OPTIONS, MenuRow, MenuView, NoOptions, SelectMode, SelectModel};
pub use remote::{RemoteSelect, SearchRequest};
