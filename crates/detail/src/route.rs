//! Tab keys and routes for the performer page.

use std::fmt;

use mediathek_core::EntityId;

/// Content tabs on the performer page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKey {
	Scenes,
	Galleries,
	Images,
	Movies,
	AppearsWith,
}

impl TabKey {
	pub const ALL: [TabKey; 5] = [
		TabKey::Scenes,
		TabKey::Galleries,
		TabKey::Images,
		TabKey::Movies,
		TabKey::AppearsWith,
	];

	/// Parses a URL tab segment. The `default` sentinel is not a tab and
	/// resolves elsewhere; anything unknown returns `None`.
	pub fn from_segment(segment: &str) -> Option<Self> {
		match segment {
			"scenes" => Some(Self::Scenes),
			"galleries" => Some(Self::Galleries),
			"images" => Some(Self::Images),
			"movies" => Some(Self::Movies),
			"appearswith" => Some(Self::AppearsWith),
			_ => None,
		}
	}

	pub fn segment(self) -> &'static str {
		match self {
			Self::Scenes => "scenes",
			Self::Galleries => "galleries",
			Self::Images => "images",
			Self::Movies => "movies",
			Self::AppearsWith => "appearswith",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Scenes => "Scenes",
			Self::Galleries => "Galleries",
			Self::Images => "Images",
			Self::Movies => "Movies",
			Self::AppearsWith => "Appears With",
		}
	}
}

impl fmt::Display for TabKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.segment())
	}
}

/// Navigation targets the page can emit.
///
/// The default tab is carried as `tab: None` so the canonical URL for a
/// performer never spells it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Performers,
	Performer { id: EntityId, tab: Option<TabKey> },
}

impl Route {
	pub fn performer(id: impl Into<EntityId>, tab: Option<TabKey>) -> Self {
		Self::Performer { id: id.into(), tab }
	}

	pub fn path(&self) -> String {
		match self {
			Self::Performers => "/performers".to_owned(),
			Self::Performer { id, tab: None } => format!("/performers/{id}"),
			Self::Performer { id, tab: Some(tab) } => format!("/performers/{id}/{tab}"),
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn segments_round_trip() {
		for tab in TabKey::ALL {
			assert_eq!(TabKey::from_segment(tab.segment()), Some(tab));
		}
	}

	#[test]
	fn unknown_segments_are_rejected() {
		assert_eq!(TabKey::from_segment("default"), None);
		assert_eq!(TabKey::from_segment("markers"), None);
		assert_eq!(TabKey::from_segment(""), None);
	}

	#[test]
	fn route_paths() {
		assert_eq!(Route::Performers.path(), "/performers");
		assert_eq!(Route::performer("12", None).path(), "/performers/12");
		assert_eq!(
			Route::performer("12", Some(TabKey::AppearsWith)).path(),
			"/performers/12/appearswith"
		);
	}
}
