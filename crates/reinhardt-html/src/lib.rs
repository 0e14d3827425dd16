//! # Reinhardt HTML
//!
//! The attribute, class and identifier engine shared by every Reinhardt UI
//! component, plus the small render tree that turns them into markup.
//!
//! ## Modules
//!
//! - [`escape`]: HTML escaping and the [`SafeHtml`] marker type
//! - [`attributes`]: nested attribute maps, flattening and serialization
//! - [`classes`]: facet-ordered CSS class composition
//! - [`ids`]: deterministic id derivation and unique per-instance ids
//! - [`page`]: the [`Page`] / [`PageElement`] render tree
//!
//! ## Example
//!
//! ```
//! use reinhardt_html::{Attributes, IntoPage, PageElement};
//!
//! let data = Attributes::new().with("controller", "x").with("action", "y");
//! let html = PageElement::new("div")
//!     .attrs(Attributes::new().with("data", data))
//!     .child("<hello>")
//!     .into_page()
//!     .render();
//!
//! assert_eq!(
//!     html.as_str(),
//!     r#"<div data-controller="x" data-action="y">&lt;hello&gt;</div>"#
//! );
//! ```

pub mod attributes;
pub mod classes;
pub mod escape;
pub mod ids;
pub mod page;

pub use attributes::{
	AttributeValue, Attributes, FlatAttributes, FlatValue, RESERVED_KEYS, flatten,
	is_valid_attribute_name, serialize,
};
pub use classes::{ClassList, Facet, compose_classes, first_active};
pub use escape::{SafeHtml, escape};
pub use ids::{FALLBACK_ID, UniqueId, derive_id, derive_id_with, sanitize_id_fragment};
pub use page::{IntoPage, Page, PageElement};
