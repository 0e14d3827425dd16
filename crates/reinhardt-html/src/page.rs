//! Render tree for server-side markup.
//!
//! Components build a [`Page`] out of [`PageElement`]s and text nodes and
//! render it once to [`SafeHtml`]. Text nodes and attribute values are
//! escaped by the renderer; only [`Page::Raw`] bypasses escaping, and it
//! can only hold markup that is already [`SafeHtml`].
//!
//! ## Example
//!
//! ```
//! use reinhardt_html::{Facet, IntoPage, PageElement};
//!
//! let page = PageElement::new("label")
//!     .add_class(Facet::Base, "form-label")
//!     .attr("for", "email")
//!     .child("Email")
//!     .into_page();
//!
//! assert_eq!(
//!     page.render().as_str(),
//!     r#"<label class="form-label" for="email">Email</label>"#
//! );
//! ```

use crate::attributes::{AttributeValue, Attributes};
use crate::classes::{ClassList, Facet};
use crate::escape::{SafeHtml, escape};
use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
	/// An element.
	Element(PageElement),
	/// A text node, escaped on render.
	Text(Cow<'static, str>),
	/// Markup inserted verbatim.
	Raw(SafeHtml),
	/// Several nodes without a wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// An element in the render tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	classes: ClassList,
	attrs: Attributes,
	children: Vec<Page>,
	is_void: bool,
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			classes: ClassList::new(),
			attrs: Attributes::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets an attribute, replacing any previous value.
	///
	/// Setting `class` here adds to the override facet instead.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.set_attr(name, value);
		self
	}

	/// Sets a boolean attribute.
	///
	/// `true` renders the bare attribute name (`disabled`); `false` removes it.
	pub fn bool_attr(self, name: impl Into<String>, value: bool) -> Self {
		self.attr(name, AttributeValue::Bool(value))
	}

	/// Merges a nested attribute map into this element.
	///
	/// A `class` entry in `attrs` is moved to the override facet.
	pub fn attrs(mut self, mut attrs: Attributes) -> Self {
		if let Some(class) = attrs.remove("class").as_ref().and_then(AttributeValue::as_text) {
			self.classes.add(Facet::Override, &class);
		}
		self.attrs.deep_merge(attrs);
		self
	}

	/// Adds class tokens to one facet.
	pub fn add_class(mut self, facet: Facet, tokens: &str) -> Self {
		self.classes.add(facet, tokens);
		self
	}

	/// Appends a composed class list.
	pub fn classes(mut self, classes: &ClassList) -> Self {
		self.classes.extend_from(classes);
		self
	}

	/// Adds a child.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Sets an attribute mutably.
	pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
		let name = name.into();
		let value = value.into();
		if name == "class" {
			if let Some(class) = value.as_text() {
				self.classes.add(Facet::Override, &class);
			}
			return;
		}
		self.attrs.insert(name, value);
	}

	/// Adds a child mutably.
	pub fn add_child(&mut self, child: impl IntoPage) {
		self.children.push(child.into_page());
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes, without `class`.
	pub fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns the composed classes.
	pub fn class_list(&self) -> &ClassList {
		&self.classes
	}

	/// Returns the child nodes.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl Page {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns `true` if this node renders nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			Page::Empty => true,
			Page::Fragment(children) => children.iter().all(Page::is_empty),
			_ => false,
		}
	}

	/// Renders the tree to markup.
	pub fn render(&self) -> SafeHtml {
		let mut output = String::new();
		self.render_inner(&mut output);
		SafeHtml::from_rendered(output)
	}

	fn render_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				if !el.classes.is_empty() {
					output.push_str(" class=\"");
					output.push_str(&escape(&el.classes.to_class_string()));
					output.push('"');
				}

				let attrs = el.attrs.flatten().serialize();
				if !attrs.is_empty() {
					output.push(' ');
					output.push_str(attrs.as_str());
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&escape(text));
			}
			Page::Raw(html) => {
				output.push_str(html.as_str());
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

impl From<PageElement> for Page {
	fn from(element: PageElement) -> Self {
		Page::Element(element)
	}
}

/// Types that can be placed in the render tree.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for SafeHtml {
	fn into_page(self) -> Page {
		Page::Raw(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_void_element_detection() {
		assert!(PageElement::new("br").is_void());
		assert!(PageElement::new("input").is_void());
		assert!(!PageElement::new("div").is_void());
		assert!(!PageElement::new("textarea").is_void());
	}

	#[test]
	fn test_render_void_element() {
		let view = PageElement::new("input").attr("type", "text").into_page();
		assert_eq!(view.render(), r#"<input type="text" />"#);
	}

	#[test]
	fn test_render_element_with_children() {
		let view = PageElement::new("div")
			.child("Hello, ")
			.child(PageElement::new("strong").child("World"))
			.into_page();
		assert_eq!(view.render(), "<div>Hello, <strong>World</strong></div>");
	}

	#[test]
	fn test_render_text_with_escaping() {
		let view = Page::text("<script>alert('xss')</script>");
		assert_eq!(
			view.render(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[test]
	fn test_render_raw_is_verbatim() {
		let view = PageElement::new("span")
			.child(SafeHtml::trusted("&times;"))
			.into_page();
		assert_eq!(view.render(), "<span>&times;</span>");
	}

	#[test]
	fn test_class_renders_first_in_facet_order() {
		let view = PageElement::new("input")
			.attr("id", "email")
			.attrs(Attributes::new().with("class", "mt-2"))
			.add_class(Facet::State, "is-invalid")
			.add_class(Facet::Base, "form-control")
			.into_page();

		assert_eq!(
			view.render(),
			r#"<input class="form-control is-invalid mt-2" id="email" />"#
		);
	}

	#[test]
	fn test_class_attr_goes_to_override_facet() {
		let view = PageElement::new("div")
			.attr("class", "user")
			.add_class(Facet::Base, "base")
			.into_page();
		assert_eq!(view.render(), r#"<div class="base user"></div>"#);
	}

	#[test]
	fn test_boolean_attributes() {
		let view = PageElement::new("input")
			.bool_attr("disabled", false)
			.bool_attr("required", true)
			.attr("placeholder", "")
			.into_page();

		let html = view.render();

		assert_eq!(html, r#"<input required placeholder="" />"#);
		assert!(!html.as_str().contains("disabled"));
	}

	#[test]
	fn test_bool_attr_can_be_cleared() {
		let view = PageElement::new("button")
			.bool_attr("disabled", true)
			.bool_attr("disabled", false)
			.into_page();
		assert_eq!(view.render(), "<button></button>");
	}

	#[test]
	fn test_attribute_values_are_escaped() {
		let view = PageElement::new("div")
			.attr("title", "\"><script>")
			.into_page();
		assert_eq!(
			view.render(),
			r#"<div title="&quot;&gt;&lt;script&gt;"></div>"#
		);
	}

	#[test]
	fn test_render_fragment_and_empty() {
		assert_eq!(Page::fragment(["One", "Two"]).render(), "OneTwo");
		assert!(Page::empty().render().is_empty());
		assert!(Page::fragment(Vec::<Page>::new()).is_empty());
	}

	#[test]
	fn test_into_page_option() {
		assert_eq!(Some("Hello").into_page().render(), "Hello");
		assert_eq!(None::<String>.into_page().render(), "");
	}

	#[test]
	fn test_into_page_tuple() {
		let view = ("Hello, ", String::from("World!")).into_page();
		assert_eq!(view.render(), "Hello, World!");
	}
}
