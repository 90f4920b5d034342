//! Interface configuration.
//!
//! A TOML file controls presentation defaults; every field falls back to a
//! built-in value so partial files and a missing file both work.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Per-kind switches that remove the inline "create" row from dropdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisableDropdownCreate {
	pub performer: bool,
	pub studio: bool,
	pub tag: bool,
	pub movie: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
	/// Show all detail rows on detail pages instead of a shortlist.
	pub show_all_details: bool,
	/// Render expanded details in the compact layout.
	pub compact_expanded_details: bool,
	/// Dropdown option cap; options beyond it collapse into a count row.
	pub max_options_shown: usize,
	/// Use the performer image as the detail page backdrop.
	pub enable_background_image: bool,
	/// Abbreviate large counter values (1.2K style).
	pub abbreviate_counters: bool,
	pub disable_dropdown_create: DisableDropdownCreate,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			show_all_details: true,
			compact_expanded_details: false,
			max_options_shown: 200,
			enable_background_image: false,
			abbreviate_counters: false,
			disable_dropdown_create: DisableDropdownCreate::default(),
		}
	}
}

impl UiConfig {
	/// Loads config from `path`. A missing file yields the defaults;
	/// any other read or parse problem is an error.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let raw = match std::fs::read_to_string(path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no config file, using defaults");
				return Ok(Self::default());
			}
			Err(source) => {
				return Err(ConfigError::Io {
					path: path.to_owned(),
					source,
				});
			}
		};
		Ok(toml::from_str(&raw)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn defaults() {
		let config = UiConfig::default();
		assert!(config.show_all_details);
		assert_eq!(config.max_options_shown, 200);
		assert!(!config.disable_dropdown_create.tag);
	}

	#[test]
	fn partial_file_keeps_defaults_for_missing_fields() {
		let config: UiConfig = toml::from_str(
			r#"
			max_options_shown = 50

			[disable_dropdown_create]
			tag = true
			"#,
		)
		.unwrap();
		assert_eq!(config.max_options_shown, 50);
		assert!(config.disable_dropdown_create.tag);
		assert!(!config.disable_dropdown_create.studio);
		assert!(config.show_all_details);
	}

	#[test]
	fn missing_file_is_defaults() {
		let config = UiConfig::load(Path::new("/nonexistent/mediathek.toml")).unwrap();
		assert_eq!(config, UiConfig::default());
	}
}
