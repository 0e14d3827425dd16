//! Library-wide defaults.
//!
//! Settings are the lowest layer of option defaulting: an explicit option
//! wins, then the component's own default, then these values. They are
//! loaded from TOML (file or string) with environment overrides on top:
//!
//! ```toml
//! default_size = "medium"
//! checkbox_include_hidden = true
//! locale = "fr"
//! fallback_locale = "en"
//!
//! [refresh]
//! min_seconds = 5
//! max_seconds = 3600
//! default_seconds = 30
//! ```

use crate::component::Size;
use crate::options::Bounds;
use once_cell::sync::{Lazy, OnceCell};
use reinhardt_i18n::TranslationContext;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default prefix for environment overrides.
pub const ENV_PREFIX: &str = "REINHARDT_UI_";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Environment error: {var}: {message}")]
	Env { var: String, message: String },

	#[error("Invalid settings: {0}")]
	Invalid(String),

	#[error("UI settings are already installed")]
	AlreadyInstalled,
}

/// Bounds for auto-refresh intervals, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefreshBounds {
	pub min_seconds: i64,
	pub max_seconds: i64,
	pub default_seconds: i64,
}

impl Default for RefreshBounds {
	fn default() -> Self {
		Self {
			min_seconds: 5,
			max_seconds: 3600,
			default_seconds: 30,
		}
	}
}

impl RefreshBounds {
	pub fn bounds(&self) -> Bounds {
		Bounds::new(self.min_seconds, self.max_seconds)
	}
}

/// Library-wide defaults for component options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiSettings {
	/// Size used when neither the options nor the component pick one.
	pub default_size: Size,
	/// Whether checkboxes render a hidden unchecked companion by default.
	pub checkbox_include_hidden: bool,
	/// Prepended to generated per-instance ids.
	pub unique_id_prefix: Option<String>,
	pub locale: String,
	pub fallback_locale: String,
	pub refresh: RefreshBounds,
}

impl Default for UiSettings {
	fn default() -> Self {
		Self {
			default_size: Size::Medium,
			checkbox_include_hidden: true,
			unique_id_prefix: None,
			locale: "en".to_string(),
			fallback_locale: "en".to_string(),
			refresh: RefreshBounds::default(),
		}
	}
}

static INSTALLED: OnceCell<UiSettings> = OnceCell::new();
static DEFAULTS: Lazy<UiSettings> = Lazy::new(UiSettings::default);

impl UiSettings {
	/// Parses settings from a TOML document and validates them.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let settings: UiSettings = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a TOML file. A missing file yields the defaults.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		if !path.exists() {
			tracing::debug!(path = %path.display(), "settings file not found, using defaults");
			return Ok(Self::default());
		}
		let content = fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Applies `{prefix}*` overrides from the process environment.
	pub fn with_env_overrides(self, prefix: &str) -> Result<Self, SettingsError> {
		self.apply_overrides(prefix, std::env::vars())
	}

	/// Applies `{prefix}*` overrides from `vars`.
	///
	/// Recognized suffixes: `DEFAULT_SIZE`, `CHECKBOX_INCLUDE_HIDDEN`,
	/// `UNIQUE_ID_PREFIX`, `LOCALE`, `FALLBACK_LOCALE`,
	/// `REFRESH_MIN_SECONDS`, `REFRESH_MAX_SECONDS`, `REFRESH_DEFAULT_SECONDS`.
	/// Other variables with the prefix are ignored.
	pub fn apply_overrides<I, K, V>(mut self, prefix: &str, vars: I) -> Result<Self, SettingsError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		for (key, value) in vars {
			let key = key.as_ref();
			let Some(name) = key.strip_prefix(prefix) else {
				continue;
			};
			let value = value.as_ref().trim();
			let env_error = |message: String| SettingsError::Env {
				var: key.to_string(),
				message,
			};
			match name {
				"DEFAULT_SIZE" => {
					self.default_size = value.parse().map_err(|e| env_error(format!("{}", e)))?;
				}
				"CHECKBOX_INCLUDE_HIDDEN" => {
					self.checkbox_include_hidden = parse_env_bool(value)
						.ok_or_else(|| env_error(format!("expected a boolean, got '{}'", value)))?;
				}
				"UNIQUE_ID_PREFIX" => {
					self.unique_id_prefix = Some(value.to_string()).filter(|v| !v.is_empty());
				}
				"LOCALE" => self.locale = value.to_string(),
				"FALLBACK_LOCALE" => self.fallback_locale = value.to_string(),
				"REFRESH_MIN_SECONDS" | "REFRESH_MAX_SECONDS" | "REFRESH_DEFAULT_SECONDS" => {
					let seconds: i64 = value
						.parse()
						.map_err(|_| env_error(format!("expected an integer, got '{}'", value)))?;
					match name {
						"REFRESH_MIN_SECONDS" => self.refresh.min_seconds = seconds,
						"REFRESH_MAX_SECONDS" => self.refresh.max_seconds = seconds,
						_ => self.refresh.default_seconds = seconds,
					}
				}
				_ => tracing::debug!(var = key, "ignoring unknown UI settings override"),
			}
		}
		self.validate()?;
		Ok(self)
	}

	/// Checks cross-field consistency.
	pub fn validate(&self) -> Result<(), SettingsError> {
		let refresh = &self.refresh;
		if refresh.min_seconds < 1 {
			return Err(SettingsError::Invalid(format!(
				"refresh.min_seconds must be at least 1, got {}",
				refresh.min_seconds
			)));
		}
		if !(refresh.min_seconds <= refresh.default_seconds
			&& refresh.default_seconds <= refresh.max_seconds)
		{
			return Err(SettingsError::Invalid(format!(
				"refresh bounds must satisfy min <= default <= max, got {} <= {} <= {}",
				refresh.min_seconds, refresh.default_seconds, refresh.max_seconds
			)));
		}
		if self.locale.trim().is_empty() || self.fallback_locale.trim().is_empty() {
			return Err(SettingsError::Invalid("locale must not be empty".to_string()));
		}
		Ok(())
	}

	/// Installs the process-wide settings. Only the first call succeeds.
	pub fn install(settings: UiSettings) -> Result<(), SettingsError> {
		settings.validate()?;
		INSTALLED
			.set(settings)
			.map_err(|_| SettingsError::AlreadyInstalled)
	}

	/// The installed settings, or the defaults when none were installed.
	pub fn global() -> &'static UiSettings {
		INSTALLED.get().unwrap_or_else(|| &*DEFAULTS)
	}

	/// An empty translation context for the configured locales.
	pub fn translation_context(&self) -> TranslationContext {
		TranslationContext::new(&self.locale, &self.fallback_locale)
	}

	/// Prefix for a per-instance id of `component`.
	pub fn unique_id_prefix_for(&self, component: &str) -> String {
		match &self.unique_id_prefix {
			Some(prefix) => format!("{}-{}", prefix, component),
			None => component.to_string(),
		}
	}
}

fn parse_env_bool(value: &str) -> Option<bool> {
	match value.to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = UiSettings::default();

		assert_eq!(settings.default_size, Size::Medium);
		assert!(settings.checkbox_include_hidden);
		assert_eq!(settings.refresh.bounds(), Bounds::new(5, 3600));
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_from_toml_str_partial() {
		// Arrange
		let content = r#"
			default_size = ":large"
			locale = "fr"

			[refresh]
			max_seconds = 600
		"#;

		// Act
		let settings = UiSettings::from_toml_str(content).unwrap();

		// Assert
		assert_eq!(settings.default_size, Size::Large);
		assert_eq!(settings.locale, "fr");
		assert_eq!(settings.fallback_locale, "en");
		assert_eq!(settings.refresh.max_seconds, 600);
		assert_eq!(settings.refresh.min_seconds, 5);
	}

	#[rstest]
	#[case(r#"default_size = "huge""#)]
	#[case(r#"colour = "red""#)]
	#[case("[refresh]\nmin_seconds = 100\nmax_seconds = 10")]
	#[case("[refresh]\nmin_seconds = 0")]
	#[case(r#"locale = "  ""#)]
	fn test_from_toml_str_rejects(#[case] content: &str) {
		assert!(UiSettings::from_toml_str(content).is_err());
	}

	#[rstest]
	fn test_env_overrides_win() {
		// Arrange
		let vars = [
			("REINHARDT_UI_DEFAULT_SIZE", "small"),
			("REINHARDT_UI_CHECKBOX_INCLUDE_HIDDEN", "false"),
			("REINHARDT_UI_UNIQUE_ID_PREFIX", "app"),
			("REINHARDT_UI_REFRESH_DEFAULT_SECONDS", "60"),
			("OTHER_LOCALE", "de"),
		];

		// Act
		let settings = UiSettings::default()
			.apply_overrides(ENV_PREFIX, vars)
			.unwrap();

		// Assert
		assert_eq!(settings.default_size, Size::Small);
		assert!(!settings.checkbox_include_hidden);
		assert_eq!(settings.unique_id_prefix.as_deref(), Some("app"));
		assert_eq!(settings.refresh.default_seconds, 60);
		assert_eq!(settings.locale, "en");
		assert_eq!(settings.unique_id_prefix_for("tooltip"), "app-tooltip");
	}

	#[rstest]
	#[case("REINHARDT_UI_DEFAULT_SIZE", "enormous")]
	#[case("REINHARDT_UI_CHECKBOX_INCLUDE_HIDDEN", "maybe")]
	#[case("REINHARDT_UI_REFRESH_MAX_SECONDS", "soon")]
	fn test_env_override_errors_name_the_variable(#[case] var: &str, #[case] value: &str) {
		let err = UiSettings::default()
			.apply_overrides(ENV_PREFIX, [(var, value)])
			.unwrap_err();

		match err {
			SettingsError::Env { var: reported, .. } => assert_eq!(reported, var),
			other => panic!("unexpected error: {}", other),
		}
	}

	#[rstest]
	fn test_from_file_and_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("ui.toml");
		std::fs::write(&path, "checkbox_include_hidden = false\n").unwrap();

		let loaded = UiSettings::from_file(&path).unwrap();
		let missing = UiSettings::from_file(dir.path().join("absent.toml")).unwrap();

		assert!(!loaded.checkbox_include_hidden);
		assert_eq!(missing, UiSettings::default());
	}

	#[rstest]
	fn test_translation_context_uses_configured_locales() {
		let settings = UiSettings {
			locale: "de".to_string(),
			..UiSettings::default()
		};

		let ctx = settings.translation_context();

		assert_eq!(reinhardt_i18n::Translator::locale(&ctx), "de");
		assert_eq!(ctx.fallback_locale(), "en");
	}
}
