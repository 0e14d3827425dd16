//! Facet-ordered CSS class composition.
//!
//! A component's class attribute is built from four facets that are always
//! emitted in the same order: the base class, the size class, the state
//! class and finally the classes supplied by the caller. Emitting the user
//! facet last lets stylesheet overrides win without `!important`.

use std::fmt;

/// One facet of a composed class string, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
	/// Classes that identify the component (`form-control`, `btn`).
	Base,
	/// Classes derived from the size option.
	Size,
	/// Classes derived from the field state (`is-invalid`).
	State,
	/// Classes supplied by the caller.
	Override,
}

impl Facet {
	/// All facets in emission order.
	pub const ALL: [Facet; 4] = [Facet::Base, Facet::Size, Facet::State, Facet::Override];

	fn index(self) -> usize {
		match self {
			Facet::Base => 0,
			Facet::Size => 1,
			Facet::State => 2,
			Facet::Override => 3,
		}
	}
}

/// Accumulates class tokens per facet.
///
/// # Examples
///
/// ```
/// use reinhardt_html::ClassList;
///
/// let classes = ClassList::new()
///     .user("mt-2")
///     .state("is-invalid")
///     .base("form-control")
///     .size("form-control-sm");
///
/// assert_eq!(
///     classes.to_class_string(),
///     "form-control form-control-sm is-invalid mt-2"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
	facets: [Vec<String>; 4],
}

impl ClassList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn base(self, tokens: &str) -> Self {
		self.with(Facet::Base, tokens)
	}

	pub fn size(self, tokens: &str) -> Self {
		self.with(Facet::Size, tokens)
	}

	pub fn state(self, tokens: &str) -> Self {
		self.with(Facet::State, tokens)
	}

	pub fn user(self, tokens: &str) -> Self {
		self.with(Facet::Override, tokens)
	}

	/// Builder-style [`ClassList::add`].
	pub fn with(mut self, facet: Facet, tokens: &str) -> Self {
		self.add(facet, tokens);
		self
	}

	/// Appends whitespace-separated `tokens` to `facet`.
	pub fn add(&mut self, facet: Facet, tokens: &str) {
		self.facets[facet.index()].extend(tokens.split_whitespace().map(str::to_owned));
	}

	/// Appends every facet of `other` after the matching facet of `self`.
	pub fn extend_from(&mut self, other: &ClassList) {
		for facet in Facet::ALL {
			self.facets[facet.index()].extend(other.facets[facet.index()].iter().cloned());
		}
	}

	/// Returns `true` if any facet contains `token`.
	pub fn contains(&self, token: &str) -> bool {
		self.facets.iter().flatten().any(|t| t == token)
	}

	/// Tokens of a single facet.
	pub fn tokens(&self, facet: Facet) -> &[String] {
		&self.facets[facet.index()]
	}

	pub fn is_empty(&self) -> bool {
		self.facets.iter().all(Vec::is_empty)
	}

	/// Joins all facets in emission order with single spaces.
	///
	/// Duplicate tokens are kept; each facet decides its own tokens.
	pub fn to_class_string(&self) -> String {
		self.facets
			.iter()
			.flatten()
			.map(String::as_str)
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl fmt::Display for ClassList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_class_string())
	}
}

/// Composes a class string from `(facet, tokens)` pairs in any order.
///
/// ```
/// use reinhardt_html::{Facet, compose_classes};
///
/// let class = compose_classes(&[
///     (Facet::Override, "w-100"),
///     (Facet::Base, "btn btn-primary"),
///     (Facet::Size, ""),
/// ]);
/// assert_eq!(class, "btn btn-primary w-100");
/// ```
pub fn compose_classes(parts: &[(Facet, &str)]) -> String {
	parts
		.iter()
		.fold(ClassList::new(), |list, (facet, tokens)| list.with(*facet, tokens))
		.to_class_string()
}

/// Returns the value paired with the first `true` condition, or `fallback`.
///
/// Used for mutually exclusive states where one outranks the others.
///
/// ```
/// use reinhardt_html::first_active;
///
/// let state = first_active(&[(false, "is-invalid"), (true, "is-disabled")], "");
/// assert_eq!(state, "is-disabled");
/// ```
pub fn first_active<T: Copy>(candidates: &[(bool, T)], fallback: T) -> T {
	candidates
		.iter()
		.find(|(active, _)| *active)
		.map_or(fallback, |(_, value)| *value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_facets_emit_in_fixed_order() {
		// Arrange
		let mut classes = ClassList::new();

		// Act
		classes.add(Facet::Override, "custom");
		classes.add(Facet::State, "is-invalid");
		classes.add(Facet::Size, "form-control-lg");
		classes.add(Facet::Base, "form-control");

		// Assert
		assert_eq!(
			classes.to_class_string(),
			"form-control form-control-lg is-invalid custom"
		);
	}

	#[rstest]
	#[case("  a   b  ", "a b")]
	#[case("", "")]
	#[case("\tx\ny ", "x y")]
	fn test_whitespace_is_normalized(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(ClassList::new().user(input).to_class_string(), expected);
	}

	#[rstest]
	fn test_empty_facets_leave_no_gaps() {
		let classes = ClassList::new().base("btn").user("");
		assert_eq!(classes.to_string(), "btn");
		assert!(!classes.to_string().contains("  "));
	}

	#[rstest]
	fn test_duplicates_are_kept() {
		let classes = ClassList::new().base("btn").user("btn");
		assert_eq!(classes.to_class_string(), "btn btn");
	}

	#[rstest]
	fn test_extend_from_preserves_facet_order() {
		let mut classes = ClassList::new().base("a").user("z");
		classes.extend_from(&ClassList::new().base("b").state("s"));

		assert_eq!(classes.to_class_string(), "a b s z");
		assert!(classes.contains("s"));
		assert_eq!(classes.tokens(Facet::Base), ["a".to_string(), "b".to_string()]);
	}

	#[rstest]
	#[case(vec![(true, 1), (true, 2)], 1)]
	#[case(vec![(false, 1), (true, 2)], 2)]
	#[case(vec![(false, 1), (false, 2)], 0)]
	#[case(vec![], 0)]
	fn test_first_active(#[case] candidates: Vec<(bool, i32)>, #[case] expected: i32) {
		assert_eq!(first_active(&candidates, 0), expected);
	}
}
