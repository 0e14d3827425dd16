//! Element identifiers.
//!
//! Form fields get deterministic ids derived from their `name`, so the same
//! input always produces the same id and labels can point at it. Overlays
//! such as tooltips and dropdowns need a distinct id per rendered instance
//! and use [`UniqueId`] instead.

use std::fmt;
use uuid::Uuid;

/// Id used when a name sanitizes to nothing.
pub const FALLBACK_ID: &str = "field";

/// Derives an element id from a form field name.
///
/// Letters and digits (any script), `-` and `.` are kept. Every other
/// character, brackets and whitespace included, becomes `_`; runs of `_`
/// collapse into one and trailing `_` are stripped. The function is pure and
/// idempotent.
///
/// # Examples
///
/// ```
/// use reinhardt_html::derive_id;
///
/// assert_eq!(derive_id("user[email]"), "user_email");
/// assert_eq!(derive_id("tags[]"), "tags");
/// assert_eq!(derive_id("user[address][zip-code]"), "user_address_zip-code");
/// assert_eq!(derive_id("user[名前]"), "user_名前");
/// assert_eq!(derive_id("[]"), "field");
/// ```
pub fn derive_id(name: &str) -> String {
	let mut id = String::with_capacity(name.len());
	for ch in name.chars() {
		if is_id_char(ch) || ch == '.' {
			id.push(ch);
		} else if !id.ends_with('_') {
			id.push('_');
		}
	}
	let trimmed = id.trim_end_matches('_');
	if trimmed.is_empty() {
		FALLBACK_ID.to_string()
	} else {
		trimmed.to_string()
	}
}

/// Replaces every character other than letters, digits, `_` and `-` with `_`.
///
/// Unlike [`derive_id`] this keeps runs and trailing underscores, so two
/// distinct values stay distinct as often as possible.
pub fn sanitize_id_fragment(fragment: &str) -> String {
	fragment
		.chars()
		.map(|ch| {
			if is_id_char(ch) || ch == '_' {
				ch
			} else {
				'_'
			}
		})
		.collect()
}

fn is_id_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '-'
}

/// Derives an id for one member of a group, such as a radio button.
///
/// ```
/// use reinhardt_html::derive_id_with;
///
/// assert_eq!(derive_id_with("plan", "pro-plan-$19"), "plan_pro-plan-_19");
/// assert_eq!(derive_id_with("size", 2), "size_2");
/// assert_eq!(derive_id_with("size", ""), "size");
/// ```
pub fn derive_id_with(name: &str, discriminator: impl fmt::Display) -> String {
	let base = derive_id(name);
	let fragment = sanitize_id_fragment(&discriminator.to_string());
	if fragment.is_empty() {
		base
	} else {
		format!("{}_{}", base, fragment)
	}
}

/// A per-instance id: `{prefix}-{8 hex chars}`.
///
/// ```
/// use reinhardt_html::UniqueId;
///
/// let a = UniqueId::generate("tooltip");
/// let b = UniqueId::generate("tooltip");
/// assert!(a.as_str().starts_with("tooltip-"));
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueId(String);

impl UniqueId {
	/// Length of the random suffix.
	pub const SUFFIX_LEN: usize = 8;

	pub fn generate(prefix: &str) -> Self {
		let random = Uuid::new_v4().simple().to_string();
		let id = format!("{}-{}", derive_id(prefix), &random[..Self::SUFFIX_LEN]);
		tracing::trace!(id = %id, "generated unique element id");
		Self(id)
	}

	/// Derives a related id such as `{id}-content`.
	pub fn suffixed(&self, suffix: &str) -> String {
		format!("{}-{}", self.0, suffix)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for UniqueId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for UniqueId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
