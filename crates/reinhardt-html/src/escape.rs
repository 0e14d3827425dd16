//! HTML escaping and the `SafeHtml` marker type.

use std::borrow::Cow;
use std::fmt;

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use reinhardt_html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(
///     escape("<script>alert('XSS')</script>"),
///     "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
/// );
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}
	let mut escaped = String::with_capacity(text.len() + 8);
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}

/// Markup that is safe to embed in a page without further escaping.
///
/// A `SafeHtml` can only come from three places: [`SafeHtml::escape`], the
/// audited [`SafeHtml::trusted`] constructor for string literals, or the
/// renderer in [`crate::page`], which escapes every text node and attribute
/// value it emits. There is deliberately no `From<String>` conversion, so an
/// unescaped runtime string can never be passed where markup is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeHtml(String);

impl SafeHtml {
	/// Creates empty markup.
	pub fn new() -> Self {
		Self(String::new())
	}

	/// Escapes `text` and wraps the result.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html::SafeHtml;
	///
	/// let html = SafeHtml::escape("<b>5 & 6</b>");
	/// assert_eq!(html.as_str(), "&lt;b&gt;5 &amp; 6&lt;/b&gt;");
	/// ```
	pub fn escape(text: &str) -> Self {
		Self(escape(text).into_owned())
	}

	/// Trusts a compile-time literal as markup.
	///
	/// Only `&'static str` is accepted, so the trusted markup is always
	/// visible in the source.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html::SafeHtml;
	///
	/// let icon = SafeHtml::trusted("<span aria-hidden=\"true\">&times;</span>");
	/// assert!(icon.as_str().starts_with("<span"));
	/// ```
	pub fn trusted(literal: &'static str) -> Self {
		Self(literal.to_owned())
	}

	/// Wraps markup produced by the renderer.
	pub(crate) fn from_rendered(markup: String) -> Self {
		Self(markup)
	}

	/// Appends other safe markup.
	pub fn push(&mut self, other: &SafeHtml) {
		self.0.push_str(&other.0);
	}

	/// Escapes `text` and appends it.
	pub fn push_escaped(&mut self, text: &str) {
		self.0.push_str(&escape(text));
	}

	/// Returns the markup.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper and returns the markup.
	pub fn into_string(self) -> String {
		self.0
	}

	/// Returns `true` when there is no markup.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the length of the markup in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl fmt::Display for SafeHtml {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for SafeHtml {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for SafeHtml {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for SafeHtml {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl Extend<SafeHtml> for SafeHtml {
	fn extend<I: IntoIterator<Item = SafeHtml>>(&mut self, iter: I) {
		for html in iter {
			self.0.push_str(&html.0);
		}
	}
}

impl FromIterator<SafeHtml> for SafeHtml {
	fn from_iter<I: IntoIterator<Item = SafeHtml>>(iter: I) -> Self {
		let mut html = SafeHtml::new();
		html.extend(iter);
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_no_special_chars_borrows() {
		assert_eq!(escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("\"test\" 'value'", "&quot;test&quot; &#x27;value&#x27;")]
	#[case("こんにちは<>&", "こんにちは&lt;&gt;&amp;")]
	#[case("", "")]
	fn test_escape_replaces_special_chars(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), expected);
	}

	#[rstest]
	fn test_escape_is_not_idempotent_on_entities() {
		// Already-escaped input is escaped again; callers must escape exactly once.
		assert_eq!(escape("&amp;"), "&amp;amp;");
	}

	#[rstest]
	fn test_safe_html_escape_and_push() {
		let mut html = SafeHtml::trusted("<p>");
		html.push_escaped("<script>");
		html.push(&SafeHtml::trusted("</p>"));

		assert_eq!(html, "<p>&lt;script&gt;</p>");
		assert_eq!(html.len(), "<p>&lt;script&gt;</p>".len());
	}

	#[rstest]
	fn test_safe_html_collect() {
		let html: SafeHtml = ["<a>", "<b>"].iter().map(|s| SafeHtml::escape(s)).collect();
		assert_eq!(html.as_str(), "&lt;a&gt;&lt;b&gt;");
	}

	#[rstest]
	fn test_safe_html_display() {
		let html = SafeHtml::escape("x & y");
		assert_eq!(format!("{}", html), "x &amp; y");
		assert!(!SafeHtml::new().to_string().contains('x'));
		assert!(SafeHtml::new().is_empty());
	}
}
