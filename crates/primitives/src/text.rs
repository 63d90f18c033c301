//! Display-label text helpers.

use std::borrow::Cow;

/// Strips rich-text formatting runs (`<col=ff9040>`, `</col>`, ...) from a
/// display label.
///
/// Hosts decorate labels with angle-bracket markup; classification must see
/// the plain text. An unterminated `<` is not markup and is kept verbatim.
/// Labels without markup are returned borrowed.
pub fn strip_tags(label: &str) -> Cow<'_, str> {
	if !label.contains('<') {
		return Cow::Borrowed(label);
	}

	let mut out = String::with_capacity(label.len());
	let mut rest = label;
	loop {
		match rest.find('<') {
			None => {
				out.push_str(rest);
				break;
			}
			Some(open) => {
				out.push_str(&rest[..open]);
				match rest[open..].find('>') {
					Some(close) => rest = &rest[open + close + 1..],
					None => {
						out.push_str(&rest[open..]);
						break;
					}
				}
			}
		}
	}
	Cow::Owned(out)
}
