//! End-to-end tests: config to plugin to hook dispatch.
//!
//! These exercise the full path a host takes (parse configuration, build
//! the plugin, register it, then emit events), including the contract that
//! the menu rule observes the entry order produced by every other
//! menu-modifying hook.

use unmovable_config::{CONFIG_GROUP, Config};
use unmovable_engine::{MenuRulePlugin, Strategy};
use unmovable_hooks::{ConfigContext, HookMeta, HookRegistry, HookResult, MenuContext, MenuHook};
use unmovable_primitives::{ActionKind, MenuEntry, Modifiers};

fn other(label: &str) -> MenuEntry {
	MenuEntry::new(ActionKind::Other, label)
}

fn walk() -> MenuEntry {
	MenuEntry::new(ActionKind::Walk, "Walk here")
}

fn cancel() -> MenuEntry {
	MenuEntry::new(ActionKind::Cancel, "Cancel")
}

fn registered_plugin(config: &Config) -> (MenuRulePlugin, HookRegistry) {
	let plugin = MenuRulePlugin::new(config);
	let mut registry = HookRegistry::new();
	plugin.register(&mut registry);
	(plugin, registry)
}

fn compose(registry: &HookRegistry, entries: &mut Vec<MenuEntry>, modifiers: Modifiers, menu_open: bool) {
	let mut ctx = MenuContext {
		entries,
		modifiers,
		menu_open,
	};
	registry.emit_menu_composed(&mut ctx);
}

#[test]
fn filter_removes_walk_through_the_registry() {
	let (_plugin, registry) = registered_plugin(&Config::default());

	let mut entries = vec![cancel(), other("Examine"), walk()];
	compose(&registry, &mut entries, Modifiers::NONE, false);

	assert_eq!(entries, vec![cancel(), other("Examine")]);
}

#[test]
fn shift_passes_through_untouched() {
	let (_plugin, registry) = registered_plugin(&Config::default());

	let mut entries = vec![other("Examine"), walk()];
	compose(&registry, &mut entries, Modifiers::SHIFT, false);

	assert_eq!(entries, vec![other("Examine"), walk()]);
}

#[test]
fn open_menu_passes_through_untouched() {
	let (_plugin, registry) = registered_plugin(&Config::default());

	let mut entries = vec![other("Examine"), walk()];
	compose(&registry, &mut entries, Modifiers::NONE, true);

	assert_eq!(entries, vec![other("Examine"), walk()]);
}

#[test]
fn rule_runs_after_other_menu_hooks() {
	let (_plugin, mut registry) = registered_plugin(&Config::default());

	// A competing reordering hook at the default priority: promotes the
	// examine entry to the top of the menu.
	registry.register_menu(MenuHook::new(
		HookMeta {
			name: "test:promote-examine",
			description: "moves the examine entry to the tail",
			priority: 0,
		},
		|ctx| {
			if let Some(pos) = ctx.entries.iter().position(|e| e.label() == "Examine") {
				let entry = ctx.entries.remove(pos);
				ctx.entries.push(entry);
			}
			HookResult::Continue
		},
	));

	let mut entries = vec![cancel(), other("Examine"), walk()];
	compose(&registry, &mut entries, Modifiers::NONE, false);

	// The promoter made Examine the tail before the rule ran, so the rule
	// saw a menu whose top entry is not walk and left everything alone. Had
	// it run first, walk would have been filtered out.
	assert_eq!(entries, vec![cancel(), walk(), other("Examine")]);
}

#[test]
fn config_change_switches_strategy_before_next_build() {
	let initial = Config::parse("").unwrap();
	let (plugin, registry) = registered_plugin(&initial);
	assert_eq!(plugin.engine().strategy(), Strategy::Filter);

	let updated = Config::parse("options {\n    preserve-menu #true\n}").unwrap();
	registry.emit_config_changed(&ConfigContext {
		group: CONFIG_GROUP,
		config: &updated,
	});
	assert_eq!(plugin.engine().strategy(), Strategy::Preserve);

	let mut entries = vec![cancel(), other("Examine"), walk()];
	compose(&registry, &mut entries, Modifiers::NONE, false);

	assert_eq!(entries, vec![walk(), other("Examine"), cancel()]);
}

#[test]
fn foreign_config_group_is_ignored() {
	let (plugin, registry) = registered_plugin(&Config::default());

	let updated = Config::parse("options {\n    preserve-menu #true\n}").unwrap();
	registry.emit_config_changed(&ConfigContext {
		group: "camera",
		config: &updated,
	});
	assert_eq!(plugin.engine().strategy(), Strategy::Filter);

	let mut entries = vec![cancel(), walk()];
	compose(&registry, &mut entries, Modifiers::NONE, false);

	assert_eq!(entries, vec![cancel()]);
}
