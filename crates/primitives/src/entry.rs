//! Menu entries: opaque candidate actions in display-priority order.

use crate::action::ActionKind;
use crate::text;

/// Substring identifying the walk action in a display label, matched
/// case-insensitively after formatting tags are stripped.
const WALK_LABEL: &str = "walk here";

/// One candidate action offered in the contextual menu.
///
/// Entries are opaque to the rule engine beyond the structural kind tag and
/// the display label; they are compared by value and never mutated, only
/// repositioned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuEntry {
	kind: Option<ActionKind>,
	label: String,
}

impl MenuEntry {
	/// Creates an entry carrying a structural kind tag.
	pub fn new(kind: ActionKind, label: impl Into<String>) -> Self {
		Self {
			kind: Some(kind),
			label: label.into(),
		}
	}

	/// Creates an untagged entry; classification falls back to the label.
	pub fn labeled(label: impl Into<String>) -> Self {
		Self {
			kind: None,
			label: label.into(),
		}
	}

	/// The structural kind tag, if the host provided one.
	pub fn kind(&self) -> Option<ActionKind> {
		self.kind
	}

	/// The display label as provided by the host, markup included.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Whether this entry is the walk action.
	///
	/// The structural tag wins when present; only untagged entries fall back
	/// to label matching, so a recolored or localized label cannot
	/// misclassify an entry the host already tagged.
	pub fn is_walk(&self) -> bool {
		match self.kind {
			Some(kind) => kind == ActionKind::Walk,
			None => text::strip_tags(&self.label).to_lowercase().contains(WALK_LABEL),
		}
	}

	/// Whether this entry is the cancel action. Structural tag only.
	pub fn is_cancel(&self) -> bool {
		self.kind == Some(ActionKind::Cancel)
	}
}
