//! Menu rule engine for the Unmovable plugin.
//!
//! Disables left-click on ground to walk: when the walk action is the
//! highest-priority candidate in the contextual menu, the engine removes it
//! ([`Strategy::Filter`]) or demotes it below the cancel action
//! ([`Strategy::Preserve`]). Holding shift, or having another menu open,
//! leaves the menu untouched.

mod engine;
mod plugin;
mod rules;
mod strategy;

pub use engine::RuleEngine;
pub use plugin::{
	MENU_RULE_PRIORITY, MenuRulePlugin, PLUGIN_DESCRIPTION, PLUGIN_NAME, PLUGIN_TAGS,
};
pub use strategy::Strategy;
