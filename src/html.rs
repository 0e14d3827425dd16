//! HTML primitives module.
//!
//! Escaping, attribute flattening, class composition, id derivation and the
//! render tree components are built from.
//!
//! # Examples
//!
//! ```
//! use reinhardt_ui::html::{Attributes, derive_id, escape};
//!
//! assert_eq!(derive_id("user[email]"), "user_email");
//! assert_eq!(escape("a < b"), "a &lt; b");
//! assert_eq!(
//!     Attributes::new()
//!         .with("data", Attributes::new().with("controller", "x"))
//!         .flatten()
//!         .serialize(),
//!     r#"data-controller="x""#
//! );
//! ```

pub use reinhardt_html::*;
