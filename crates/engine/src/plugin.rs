//! Plugin descriptor and host wiring.

use std::sync::Arc;

use unmovable_config::{CONFIG_GROUP, Config};
use unmovable_hooks::{ConfigHook, HookMeta, HookRegistry, HookResult, MenuHook};

use crate::engine::RuleEngine;

/// Plugin name shown in the host's plugin list.
pub const PLUGIN_NAME: &str = "Unmovable";

/// Plugin description shown in the host's plugin list.
pub const PLUGIN_DESCRIPTION: &str =
	"Disables left-click on ground to walk. Hold shift+click to walk. Useful for kiting.";

/// Search tags for the host's plugin list.
pub const PLUGIN_TAGS: &[&str] = &["swapper", "kiting", "walk", "misclick"];

/// Dispatch priority of the menu rule hook.
///
/// Other menu-modifying hooks register at the default priority 0; this rule
/// must observe the entry order they produce, so it runs after them.
pub const MENU_RULE_PRIORITY: i32 = 100;

/// The Unmovable plugin: owns the rule engine and subscribes it to the
/// host's event cycle.
#[derive(Debug)]
pub struct MenuRulePlugin {
	engine: Arc<RuleEngine>,
}

impl MenuRulePlugin {
	/// Builds the plugin with the strategy derived from `config`.
	pub fn new(config: &Config) -> Self {
		Self {
			engine: Arc::new(RuleEngine::from_config(config)),
		}
	}

	/// The shared rule engine.
	pub fn engine(&self) -> &Arc<RuleEngine> {
		&self.engine
	}

	/// Subscribes the plugin to menu builds and configuration changes.
	pub fn register(&self, hooks: &mut HookRegistry) {
		let engine = Arc::clone(&self.engine);
		hooks.register_menu(MenuHook::new(
			HookMeta {
				name: "unmovable:menu-rule",
				description: "Removes or demotes the walk action at the top of the menu",
				priority: MENU_RULE_PRIORITY,
			},
			move |ctx| {
				if let Some(replacement) =
					engine.on_menu_composed(ctx.entries, ctx.modifiers, ctx.menu_open)
				{
					*ctx.entries = replacement;
				}
				HookResult::Continue
			},
		));

		let engine = Arc::clone(&self.engine);
		hooks.register_config(ConfigHook::new(
			HookMeta {
				name: "unmovable:reload",
				description: "Re-derives the strategy when the plugin's config group changes",
				priority: 0,
			},
			move |ctx| {
				if ctx.group == CONFIG_GROUP {
					engine.reload(ctx.config);
				}
				HookResult::Continue
			},
		));
	}
}
