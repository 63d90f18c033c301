//! Modifier-key snapshot sampled at menu-build time.

/// Modifier keys held at the instant the host composed the menu.
///
/// Sampled fresh on every build cycle and never stored. The menu rule
/// consults only `shift`; the remaining keys ride along for hosts that
/// report the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers held.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Only Shift held.
	pub const SHIFT: Self = Self {
		ctrl: false,
		alt: false,
		shift: true,
	};

	/// Returns true if no modifiers are held.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}
