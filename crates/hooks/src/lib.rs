//! Host event dispatch for the Unmovable plugin.
//!
//! The host calls into a [`HookRegistry`] once per event. Hooks run
//! synchronously on the host's dispatch thread in ascending priority order
//! (lower priority runs first; registration order breaks ties), so a hook
//! that must observe the final menu order registers with a high priority
//! and runs after every other menu-modifying hook.

mod context;
mod registry;
mod types;

pub use context::{ConfigContext, MenuContext};
pub use registry::HookRegistry;
pub use types::{ConfigHandler, ConfigHook, HookMeta, HookResult, MenuHandler, MenuHook};

/// Event name for the end of a menu build cycle.
pub const MENU_COMPOSED: &str = "menu:composed";
/// Event name for a configuration group change.
pub const CONFIG_CHANGED: &str = "config:changed";
