//! # Reinhardt Pages Components
//!
//! Server-rendered UI components: form fields, navigation and display
//! widgets that turn a configuration object into one escaped HTML fragment.
//!
//! ## Pipeline
//!
//! 1. [`options::RawOptions`] wraps the raw configuration and
//!    [`ComponentOptions::normalize`] validates it. Unknown enum values,
//!    malformed dates and inverted ranges fail with [`InvalidOption`] before
//!    anything is rendered.
//! 2. Components compute ids, classes and attributes through
//!    [`reinhardt_html`] and build a [`reinhardt_html::Page`].
//! 3. [`Component::render`] produces [`reinhardt_html::SafeHtml`].
//!
//! Library-wide defaults live in [`UiSettings`]; built-in labels are
//! translated through [`reinhardt_i18n`] and always fall back to English.
//!
//! ## Example
//!
//! ```
//! use reinhardt_pages_components::{Checkbox, Component, FromOptions};
//! use serde_json::json;
//!
//! let html = Checkbox::from_json(json!({
//!     "name": "terms",
//!     "checked": true,
//!     "label": "I agree",
//! }))
//! .unwrap()
//! .render();
//!
//! assert!(html.as_str().contains(r#"type="checkbox""#));
//! assert!(html.as_str().contains(" checked"));
//! ```

pub mod component;
pub mod components;
pub mod error;
pub mod field;
pub mod options;
pub mod settings;

pub use component::{
	ButtonType, Component, FromOptions, InputType, Layout, Placement, RenderContext, Size, Variant,
};
pub use components::{
	Alert, AutoRefresh, Badge, Breadcrumbs, Button, Checkbox, CheckboxGroup, Choice,
	DateRangePicker, Dropdown, NavItem, RadioGroup, Select, TextArea, TextField, Tooltip,
};
pub use error::{InvalidOption, Result};
pub use field::{FieldBase, FieldState};
pub use options::{
	Bounds, ComponentOptions, ComponentOptionsBuilder, ComponentSpec, DateRange, FieldValue,
	OptionEnum, normalize_messages,
};
pub use settings::{ENV_PREFIX, RefreshBounds, SettingsError, UiSettings};
