//! Keyboard shortcuts for the performer page.

use mediathek_keymap::{KeyParseError, ShortcutDef, ShortcutGuard, ShortcutRouter, ShortcutSet};

/// Actions reachable from the keyboard while a performer page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
	ToggleEdit,
	ShowScenes,
	ShowGalleries,
	ShowMovies,
	ToggleFavorite,
	ToggleCollapsed,
	/// Digit pressed on the rating row; `0` clears the rating, digits
	/// above `5` count as `5`.
	SetRating(u8),
}

/// Binding table registered for the lifetime of the page.
pub const SHORTCUTS: &[ShortcutDef<PanelAction>] = &[
	ShortcutDef { keys: "e", action: PanelAction::ToggleEdit },
	ShortcutDef { keys: "c", action: PanelAction::ShowScenes },
	ShortcutDef { keys: "g", action: PanelAction::ShowGalleries },
	ShortcutDef { keys: "m", action: PanelAction::ShowMovies },
	ShortcutDef { keys: "f", action: PanelAction::ToggleFavorite },
	ShortcutDef { keys: ",", action: PanelAction::ToggleCollapsed },
	ShortcutDef { keys: "0", action: PanelAction::SetRating(0) },
	ShortcutDef { keys: "1", action: PanelAction::SetRating(1) },
	ShortcutDef { keys: "2", action: PanelAction::SetRating(2) },
	ShortcutDef { keys: "3", action: PanelAction::SetRating(3) },
	ShortcutDef { keys: "4", action: PanelAction::SetRating(4) },
	ShortcutDef { keys: "5", action: PanelAction::SetRating(5) },
];

/// Compiles the page bindings, ready to hand to a router layer.
pub fn shortcut_set() -> Result<ShortcutSet<PanelAction>, KeyParseError> {
	ShortcutSet::compile(SHORTCUTS)
}

/// Subscribes the page bindings on `router`. The layer lives as long as
/// the returned guard, so the host keeps it next to the panel and drops
/// both when the page closes.
pub fn bind_shortcuts(
	router: &ShortcutRouter<PanelAction>,
) -> Result<ShortcutGuard<PanelAction>, KeyParseError> {
	Ok(router.subscribe(shortcut_set()?))
}
