//! The menu-entry transforms behind each strategy.

use unmovable_primitives::MenuEntry;

use crate::strategy::Strategy;

/// Applies `strategy` when the walk action is the tail (highest-priority)
/// entry, returning the replacement sequence or `None` for no change.
///
/// Walk buried anywhere but the tail never triggers either strategy.
pub(crate) fn apply(entries: &[MenuEntry], strategy: Strategy) -> Option<Vec<MenuEntry>> {
	if !tail_is_walk(entries) {
		return None;
	}

	match strategy {
		Strategy::Filter => Some(remove_walk(entries)),
		Strategy::Preserve => swap_with_cancel(entries),
	}
}

/// Returns true if the walk action is the tail of `entries`.
fn tail_is_walk(entries: &[MenuEntry]) -> bool {
	entries.last().is_some_and(MenuEntry::is_walk)
}

/// Removes the tail entry. A walk-only menu becomes the empty menu.
fn remove_walk(entries: &[MenuEntry]) -> Vec<MenuEntry> {
	entries[..entries.len() - 1].to_vec()
}

/// Swaps the walk tail with the first cancel entry.
///
/// Returns `None` when the menu is a singleton (swapping the sole entry with
/// itself changes nothing) or when no cancel entry exists; keeping the
/// original ordering is the defined fallback, not an error. Cancel and walk
/// classifications are disjoint, so a found cancel index never equals the
/// tail index.
fn swap_with_cancel(entries: &[MenuEntry]) -> Option<Vec<MenuEntry>> {
	if entries.len() == 1 {
		return None;
	}

	let cancel = entries.iter().position(|e| e.is_cancel())?;
	let mut swapped = entries.to_vec();
	let tail = swapped.len() - 1;
	swapped.swap(cancel, tail);
	Some(swapped)
}
