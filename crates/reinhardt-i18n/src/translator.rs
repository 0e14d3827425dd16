//! Translators and the process-wide translation context.

use crate::catalog::MessageCatalog;
use crate::error::{I18nError, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Looks up translated strings by full key.
pub trait Translator: Send + Sync {
	/// The locale translations are returned in.
	fn locale(&self) -> &str;

	/// Returns the translation for `key`.
	fn lookup(&self, key: &str) -> Result<String>;

	/// Returns the plural form of `key` for `count`.
	fn lookup_plural(&self, key: &str, count: usize) -> Result<String>;
}

/// A translator without catalogs; every lookup is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
	fn locale(&self) -> &str {
		"en"
	}

	fn lookup(&self, key: &str) -> Result<String> {
		Err(missing(key, self.locale()))
	}

	fn lookup_plural(&self, key: &str, _count: usize) -> Result<String> {
		Err(missing(key, self.locale()))
	}
}

fn missing(key: &str, locale: &str) -> I18nError {
	I18nError::MissingTranslation {
		key: key.to_string(),
		locale: locale.to_string(),
	}
}

/// Normalizes a locale tag: `_` becomes `-`, surrounding whitespace is removed.
///
/// Returns [`I18nError::InvalidLocale`] for empty tags or tags containing
/// anything other than ASCII letters, digits and separators.
pub fn normalize_locale(locale: &str) -> Result<String> {
	let trimmed = locale.trim();
	if trimmed.is_empty()
		|| !trimmed
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
	{
		return Err(I18nError::InvalidLocale(locale.to_string()));
	}
	Ok(trimmed.replace('_', "-"))
}

/// Catalogs for several locales plus an active and a fallback locale.
///
/// Lookups try the active locale first, then the fallback locale.
///
/// ```
/// use reinhardt_i18n::{MessageCatalog, TranslationContext, Translator};
///
/// let mut ctx = TranslationContext::new("de", "en");
/// ctx.add_catalog("en", MessageCatalog::new("en").with("greeting", "Hello")).unwrap();
///
/// assert_eq!(ctx.lookup("greeting").unwrap(), "Hello");
/// assert!(ctx.lookup("farewell").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TranslationContext {
	locale: String,
	fallback: String,
	catalogs: HashMap<String, MessageCatalog>,
}

impl TranslationContext {
	/// Creates a context with no catalogs.
	///
	/// Locales are stored as given (after `_` to `-` normalization); they are
	/// not validated here so that a misconfigured locale still renders
	/// defaults instead of failing.
	pub fn new(locale: &str, fallback: &str) -> Self {
		Self {
			locale: normalize_locale(locale).unwrap_or_else(|_| locale.to_string()),
			fallback: normalize_locale(fallback).unwrap_or_else(|_| fallback.to_string()),
			catalogs: HashMap::new(),
		}
	}

	/// Registers the catalog for `locale`, replacing any previous one.
	pub fn add_catalog(&mut self, locale: &str, catalog: MessageCatalog) -> Result<()> {
		let locale = normalize_locale(locale)?;
		self.catalogs.insert(locale, catalog);
		Ok(())
	}

	/// Builder-style [`TranslationContext::add_catalog`].
	pub fn with_catalog(mut self, catalog: MessageCatalog) -> Result<Self> {
		let locale = catalog.locale().to_string();
		self.add_catalog(&locale, catalog)?;
		Ok(self)
	}

	/// Switches the active locale.
	pub fn set_locale(&mut self, locale: &str) -> Result<()> {
		self.locale = normalize_locale(locale)?;
		Ok(())
	}

	pub fn fallback_locale(&self) -> &str {
		&self.fallback
	}

	pub fn catalog(&self, locale: &str) -> Option<&MessageCatalog> {
		self.catalogs.get(locale)
	}

	fn search<'a, F>(&'a self, key: &str, find: F) -> Result<String>
	where
		F: Fn(&'a MessageCatalog) -> Option<&'a str>,
	{
		[self.locale.as_str(), self.fallback.as_str()]
			.iter()
			.filter_map(|locale| self.catalogs.get(*locale))
			.find_map(find)
			.map(str::to_string)
			.ok_or_else(|| missing(key, &self.locale))
	}
}

impl Translator for TranslationContext {
	fn locale(&self) -> &str {
		&self.locale
	}

	fn lookup(&self, key: &str) -> Result<String> {
		self.search(key, |catalog| catalog.get(key))
	}

	fn lookup_plural(&self, key: &str, count: usize) -> Result<String> {
		self.search(key, |catalog| catalog.get_plural(key, count))
	}
}

static INSTALLED: OnceCell<TranslationContext> = OnceCell::new();
static NULL_TRANSLATOR: NullTranslator = NullTranslator;

/// Installs the process-wide translation context.
///
/// Catalogs are loaded once at startup and read-only afterwards, so the
/// context can be installed only once.
pub fn install(context: TranslationContext) -> Result<()> {
	INSTALLED
		.set(context)
		.map_err(|_| I18nError::CatalogAlreadyInstalled)
}

/// Returns `true` once [`install`] has succeeded.
pub fn is_installed() -> bool {
	INSTALLED.get().is_some()
}

/// Returns the installed context, or a [`NullTranslator`] if none is installed.
pub fn global() -> &'static dyn Translator {
	match INSTALLED.get() {
		Some(context) => context,
		None => &NULL_TRANSLATOR,
	}
}
