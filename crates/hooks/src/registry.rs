//! Runtime hook registry and synchronous emission.

use tracing::debug;

use crate::context::{ConfigContext, MenuContext};
use crate::types::{ConfigHook, HookResult, MenuHook};
use crate::{CONFIG_CHANGED, MENU_COMPOSED};

/// Owns every hook plugins register against the host's event cycle.
///
/// Emission is synchronous: hooks run on the host's dispatch thread in
/// ascending priority order. Ties run in registration order.
#[derive(Debug, Default)]
pub struct HookRegistry {
	menu: Vec<MenuHook>,
	config: Vec<ConfigHook>,
}

impl HookRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a menu build hook, keeping the dispatch order sorted.
	pub fn register_menu(&mut self, hook: MenuHook) {
		self.menu.push(hook);
		// Stable sort: equal priorities keep registration order.
		self.menu.sort_by_key(|h| h.meta.priority);
	}

	/// Registers a configuration change hook, keeping the dispatch order sorted.
	pub fn register_config(&mut self, hook: ConfigHook) {
		self.config.push(hook);
		self.config.sort_by_key(|h| h.meta.priority);
	}

	/// Dispatches the end of a menu build cycle.
	///
	/// Returns [`HookResult::Cancel`] as soon as any hook cancels, otherwise
	/// [`HookResult::Continue`].
	pub fn emit_menu_composed(&self, ctx: &mut MenuContext<'_>) -> HookResult {
		for hook in &self.menu {
			if (hook.handler)(ctx) == HookResult::Cancel {
				debug!(event = MENU_COMPOSED, hook = hook.meta.name, "hook cancelled dispatch");
				return HookResult::Cancel;
			}
		}
		HookResult::Continue
	}

	/// Dispatches a configuration change notification.
	///
	/// Returns [`HookResult::Cancel`] as soon as any hook cancels, otherwise
	/// [`HookResult::Continue`].
	pub fn emit_config_changed(&self, ctx: &ConfigContext<'_>) -> HookResult {
		for hook in &self.config {
			if (hook.handler)(ctx) == HookResult::Cancel {
				debug!(event = CONFIG_CHANGED, hook = hook.meta.name, "hook cancelled dispatch");
				return HookResult::Cancel;
			}
		}
		HookResult::Continue
	}
}
