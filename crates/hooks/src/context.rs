//! Typed event payloads handed to hooks.

use unmovable_config::Config;
use unmovable_primitives::{MenuEntry, Modifiers};

/// Mutable view of one menu build cycle.
///
/// `entries` is the full candidate list in display-priority order (the tail
/// is the highest priority, rendered top). A hook that changes the menu
/// installs the replacement through the borrow; later hooks observe it.
pub struct MenuContext<'a> {
	/// Candidate entries, lowest display priority first.
	pub entries: &'a mut Vec<MenuEntry>,
	/// Modifier keys sampled at build time.
	pub modifiers: Modifiers,
	/// True when an unrelated menu is already open and mid-interaction.
	pub menu_open: bool,
}

/// Payload of a configuration change notification.
pub struct ConfigContext<'a> {
	/// The configuration group that changed.
	pub group: &'a str,
	/// The freshly loaded configuration.
	pub config: &'a Config,
}
