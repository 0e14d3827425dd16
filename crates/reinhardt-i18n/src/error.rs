//! Translation errors.

use thiserror::Error;

/// Errors reported by catalogs and translators.
///
/// [`crate::translate`] never surfaces these; a missing translation falls
/// back to the caller's default.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
	#[error("no translation for '{key}' in locale '{locale}'")]
	MissingTranslation { key: String, locale: String },

	#[error("a translation context is already installed")]
	CatalogAlreadyInstalled,

	#[error("invalid locale '{0}'")]
	InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, I18nError>;
