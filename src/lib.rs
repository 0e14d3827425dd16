//! # Reinhardt UI
//!
//! Server-rendered UI components for Reinhardt.
//!
//! Every component is configured from a JSON options object, validated up
//! front and rendered to a single HTML-safe fragment. Nothing reaches the
//! output without going through the escaper.
//!
//! ## Crates
//!
//! - [`html`]: escaping, attribute flattening, class composition, id derivation
//! - [`i18n`]: message catalogs with mandatory English defaults
//! - [`components`]: the component catalog and its settings
//!
//! ## Feature Flags
//!
//! - `i18n` - Translation lookup
//! - `components` (default) - Component catalog, implies `i18n`
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "components")]
//! # {
//! use reinhardt_ui::prelude::*;
//! use serde_json::json;
//!
//! let html = TextField::from_json(json!({
//!     "name": "user[email]",
//!     "label": "Email",
//!     "required": true,
//!     "error": ["is blank", "is invalid"],
//! }))
//! .unwrap()
//! .render();
//!
//! assert!(html.as_str().contains(r#"id="user_email""#));
//! assert!(html.as_str().contains("is blank, is invalid"));
//! # }
//! ```

pub mod components;
pub mod html;
pub mod i18n;

/// Prelude module for convenient imports
///
/// Brings the render tree, the component traits and the whole catalog into
/// scope.
pub mod prelude {
	pub use crate::html::{Attributes, IntoPage, Page, PageElement, SafeHtml, escape};

	#[cfg(feature = "i18n")]
	pub use crate::i18n::{MessageCatalog, TranslationContext, Translator};

	#[cfg(feature = "components")]
	pub use crate::components::{
		Alert, AutoRefresh, Badge, Breadcrumbs, Button, Checkbox, CheckboxGroup, Component,
		DateRangePicker, Dropdown, FromOptions, InvalidOption, RadioGroup, RenderContext, Select,
		TextArea, TextField, Tooltip, UiSettings,
	};
}
