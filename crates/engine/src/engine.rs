//! The rule engine: strategy storage plus the per-build decision.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;
use unmovable_config::Config;
use unmovable_primitives::{MenuEntry, Modifiers};

use crate::rules;
use crate::strategy::Strategy;

/// Decides, once per menu build, whether the walk action is removed,
/// demoted, or left alone.
///
/// The engine is stateless across builds except for the active [`Strategy`].
/// That field is written only by configuration-change handling and read on
/// every build; it sits behind an [`ArcSwap`] so hosts that dispatch config
/// updates and menu events on different threads still get untorn reads
/// without a lock. Single-threaded hosts pay only an atomic load.
pub struct RuleEngine {
	strategy: ArcSwap<Strategy>,
}

impl RuleEngine {
	/// Creates an engine with an explicit strategy.
	pub fn new(strategy: Strategy) -> Self {
		Self {
			strategy: ArcSwap::from_pointee(strategy),
		}
	}

	/// Creates an engine with the strategy derived from `config`.
	pub fn from_config(config: &Config) -> Self {
		Self::new(Strategy::from_preserve_flag(config.preserve_menu()))
	}

	/// The active strategy.
	pub fn strategy(&self) -> Strategy {
		**self.strategy.load()
	}

	/// Replaces the active strategy.
	pub fn set_strategy(&self, strategy: Strategy) {
		self.strategy.store(Arc::new(strategy));
	}

	/// Re-derives the strategy from a freshly loaded `config`.
	pub fn reload(&self, config: &Config) {
		let strategy = Strategy::from_preserve_flag(config.preserve_menu());
		if strategy != self.strategy() {
			debug!(?strategy, "strategy changed");
		}
		self.set_strategy(strategy);
	}

	/// Decides the fate of one composed menu.
	///
	/// `entries` is the final sorted candidate list, lowest display priority
	/// first. Returns `None` when the menu must be left untouched: shift is
	/// held, another menu is open, the list is empty, the tail is not the
	/// walk action, or the active strategy has nothing sensible to do.
	/// Otherwise returns the replacement list the host installs verbatim,
	/// possibly empty when filtering a walk-only menu.
	pub fn on_menu_composed(
		&self,
		entries: &[MenuEntry],
		modifiers: Modifiers,
		menu_open: bool,
	) -> Option<Vec<MenuEntry>> {
		// Checked before any inspection of the entries: shift is the explicit
		// "let me walk" override, and mutating entries under an open menu
		// would corrupt the visible UI.
		if modifiers.shift || menu_open {
			return None;
		}

		let strategy = self.strategy();
		let replacement = rules::apply(entries, strategy)?;
		debug!(
			?strategy,
			before = entries.len(),
			after = replacement.len(),
			"menu rule fired"
		);
		Some(replacement)
	}
}

impl std::fmt::Debug for RuleEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RuleEngine").field("strategy", &self.strategy()).finish()
	}
}
