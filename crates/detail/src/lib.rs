//! The performer detail page.
//!
//! [`load_performer`] resolves a URL into a [`PerformerPanel`], which owns
//! the active tab, edit mode and the page mutations. [`shortcuts`] carries
//! the page keymap and [`links`] the header presentation helpers.

pub mod links;
pub mod panel;
pub mod route;
pub mod shortcuts;

pub use links::{LinkSet, alias_line, details_links, link_set};
pub use panel::{ActiveImage, LoadOutcome, PanelMode, PerformerPanel, StagedImage, load_performer};
pub use route::{Route, TabKey};
pub use shortcuts::{PanelAction, SHORTCUTS, bind_shortcuts, shortcut_set};
