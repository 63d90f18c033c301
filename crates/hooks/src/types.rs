//! Hook definitions: metadata, results, handler types.

use crate::context::{ConfigContext, MenuContext};

/// Result of a hook execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookResult {
	/// Continue dispatching this event to later hooks.
	#[default]
	Continue,
	/// Stop dispatching this event to later hooks.
	Cancel,
}

/// Common hook metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookMeta {
	/// Unique hook name, by convention `"plugin:purpose"`.
	pub name: &'static str,
	/// Human-readable description for host diagnostics.
	pub description: &'static str,
	/// Dispatch order: lower priority runs first. Default hooks use 0.
	pub priority: i32,
}

/// Handler for a menu build cycle.
pub type MenuHandler = Box<dyn Fn(&mut MenuContext<'_>) -> HookResult + Send + Sync>;

/// Handler for a configuration change.
pub type ConfigHandler = Box<dyn Fn(&ConfigContext<'_>) -> HookResult + Send + Sync>;

/// A hook subscribed to menu build events.
pub struct MenuHook {
	/// Common registry metadata.
	pub meta: HookMeta,
	/// The hook handler.
	pub handler: MenuHandler,
}

impl MenuHook {
	/// Creates a menu hook from metadata and a handler closure.
	pub fn new(
		meta: HookMeta,
		handler: impl Fn(&mut MenuContext<'_>) -> HookResult + Send + Sync + 'static,
	) -> Self {
		Self {
			meta,
			handler: Box::new(handler),
		}
	}
}

impl std::fmt::Debug for MenuHook {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MenuHook").field("meta", &self.meta).finish()
	}
}

/// A hook subscribed to configuration changes.
pub struct ConfigHook {
	/// Common registry metadata.
	pub meta: HookMeta,
	/// The hook handler.
	pub handler: ConfigHandler,
}

impl ConfigHook {
	/// Creates a config hook from metadata and a handler closure.
	pub fn new(
		meta: HookMeta,
		handler: impl Fn(&ConfigContext<'_>) -> HookResult + Send + Sync + 'static,
	) -> Self {
		Self {
			meta,
			handler: Box::new(handler),
		}
	}
}

impl std::fmt::Debug for ConfigHook {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConfigHook").field("meta", &self.meta).finish()
	}
}
