//! Error types for reinhardt-pages-components

use thiserror::Error;

/// A component option that failed validation.
///
/// Raised while normalizing options, before anything is rendered; a
/// component either renders completely or not at all.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOption {
	/// A closed-set option received a value outside the set.
	#[error("invalid value '{value}' for option '{key}', expected one of: {}", allowed.join(", "))]
	UnknownValue {
		key: String,
		value: String,
		allowed: Vec<String>,
	},

	/// A value that must be parsed (a date, a number) could not be.
	#[error("{message}")]
	InvalidFormat {
		key: String,
		value: String,
		message: String,
	},

	/// Individually valid values that are inconsistent with each other.
	#[error("{message}")]
	InvalidRange { key: String, message: String },

	/// A required option is absent or empty.
	#[error("missing required option '{key}'")]
	Missing { key: String },

	/// An option has the wrong JSON type.
	#[error("option '{key}' must be {expected}")]
	WrongType { key: String, expected: &'static str },
}

impl InvalidOption {
	/// The option key the error refers to.
	pub fn key(&self) -> &str {
		match self {
			Self::UnknownValue { key, .. }
			| Self::InvalidFormat { key, .. }
			| Self::InvalidRange { key, .. }
			| Self::Missing { key }
			| Self::WrongType { key, .. } => key,
		}
	}

	pub(crate) fn unknown_value(key: &str, value: &str, allowed: &[&str]) -> Self {
		tracing::debug!(key, value, "rejected option value");
		Self::UnknownValue {
			key: key.to_string(),
			value: value.to_string(),
			allowed: allowed.iter().map(|s| s.to_string()).collect(),
		}
	}

	pub(crate) fn invalid_format(key: &str, value: &str, message: impl Into<String>) -> Self {
		tracing::debug!(key, value, "rejected unparseable option");
		Self::InvalidFormat {
			key: key.to_string(),
			value: value.to_string(),
			message: message.into(),
		}
	}

	pub(crate) fn invalid_range(key: &str, message: impl Into<String>) -> Self {
		let message = message.into();
		tracing::debug!(key, %message, "rejected option range");
		Self::InvalidRange {
			key: key.to_string(),
			message,
		}
	}

	pub(crate) fn missing(key: &str) -> Self {
		tracing::debug!(key, "missing required option");
		Self::Missing {
			key: key.to_string(),
		}
	}

	pub(crate) fn wrong_type(key: &str, expected: &'static str) -> Self {
		tracing::debug!(key, expected, "option has the wrong type");
		Self::WrongType {
			key: key.to_string(),
			expected,
		}
	}
}

/// Result type for component construction
pub type Result<T> = std::result::Result<T, InvalidOption>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unknown_value_message_lists_allowed_values() {
		// Arrange
		let err = InvalidOption::unknown_value("size", "huge", &["small", "medium", "large"]);

		// Act
		let message = err.to_string();

		// Assert
		assert_eq!(
			message,
			"invalid value 'huge' for option 'size', expected one of: small, medium, large"
		);
		assert_eq!(err.key(), "size");
	}

	#[rstest]
	#[case(InvalidOption::missing("name"), "name", "missing required option 'name'")]
	#[case(
		InvalidOption::wrong_type("rows", "an integer"),
		"rows",
		"option 'rows' must be an integer"
	)]
	#[case(
		InvalidOption::invalid_range(
			"min",
			"min date 2024-01-01 cannot be greater than max date 2023-01-01",
		),
		"min",
		"min date 2024-01-01 cannot be greater than max date 2023-01-01"
	)]
	#[case(
		InvalidOption::invalid_format("max", "soon", "invalid max date format"),
		"max",
		"invalid max date format"
	)]
	fn test_messages_and_keys(
		#[case] err: InvalidOption,
		#[case] key: &str,
		#[case] message: &str,
	) {
		assert_eq!(err.key(), key);
		assert_eq!(err.to_string(), message);
	}
}
