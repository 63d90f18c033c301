//! Configuration for the Unmovable plugin.
//!
//! Configuration is written in KDL (v2). A single `options` block holds the
//! plugin's settings:
//!
//! ```kdl
//! options {
//!     preserve-menu #true
//! }
//! ```
//!
//! Unknown options produce warnings (collected in [`Config::warnings`]),
//! never parse failures, so a newer config file keeps loading on an older
//! build. Missing options resolve to their defaults.

pub mod error;

use std::path::Path;

pub use error::{ConfigError, ConfigWarning, Result};

/// Configuration group this plugin owns.
///
/// Change notifications carry a group name; the plugin only reacts to
/// changes in its own group.
pub const CONFIG_GROUP: &str = "unmovable";

/// KDL key of the preserve-menu option.
pub const PRESERVE_MENU_KEY: &str = "preserve-menu";

/// Parsed plugin configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
	/// "Preserve menu": when enabled, swaps 'walk here' with 'cancel'
	/// instead of removing it. `None` when the file does not set it.
	pub preserve_menu: Option<bool>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

impl Config {
	/// Effective preserve-menu setting; defaults to `false`.
	pub fn preserve_menu(&self) -> bool {
		self.preserve_menu.unwrap_or(false)
	}

	/// Parse a KDL string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let doc: kdl::KdlDocument = input.parse()?;
		let mut config = Config::default();

		if let Some(options) = doc.get("options").and_then(|n| n.children()) {
			for node in options.nodes() {
				match node.name().value() {
					PRESERVE_MENU_KEY => {
						let value = node.get(0).and_then(|v| v.as_bool()).ok_or_else(|| {
							ConfigError::InvalidValue {
								key: PRESERVE_MENU_KEY.to_string(),
								expected: "a boolean (#true or #false)",
							}
						})?;
						config.preserve_menu = Some(value);
					}
					unknown => config.warnings.push(ConfigWarning::UnknownOption {
						key: unknown.to_string(),
					}),
				}
			}
		}

		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merge another config into this one.
	///
	/// Values set in `other` override values in `self`; warnings accumulate.
	pub fn merge(&mut self, other: Config) {
		if other.preserve_menu.is_some() {
			self.preserve_menu = other.preserve_menu;
		}
		self.warnings.extend(other.warnings);
	}
}
