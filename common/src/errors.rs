//! # Errors
//!
//! Basic error types for all sorts of earcon components.

use thiserror::Error;

/// The common earcon error type.
/// This is specifically typed as a `#[non_exhaustive]` enum so that adding a new variant of error type does not cause an API break.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EarconError {
	/// Embedded catalog data could not be deserialized.
	#[error("could not parse JSON: {0}")]
	Json(#[from] serde_json::Error),
	/// See: [`SchemaError`].
	#[error(transparent)]
	Schema(#[from] SchemaError),
	/// See: [`ConfigError`].
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// A settings document could not be used as a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	/// A settings document was valid JSON, but not a JSON object at the top level.
	#[error("settings must be a JSON object, found {0}")]
	NotAnObject(&'static str),
}

/// A value was rejected by a registered property schema.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
	/// No registered configuration node declares this key.
	#[error("unknown setting `{0}`")]
	UnknownSetting(String),
	/// The value has the wrong JSON type.
	#[error("`{key}` expects a value of type {expected}")]
	TypeMismatch {
		/// Setting (or `setting.subproperty`) being validated.
		key: String,
		/// Name of the expected type.
		expected: &'static str,
	},
	/// The value is not one of the enumerated choices.
	#[error("`{key}` does not accept {value}")]
	NotInEnum {
		/// Setting (or `setting.subproperty`) being validated.
		key: String,
		/// The rejected value, rendered as JSON.
		value: String,
	},
	/// A number is smaller than the declared minimum.
	#[error("`{key}` must be at least {minimum}, got {value}")]
	BelowMinimum {
		/// Setting being validated.
		key: String,
		/// Inclusive lower bound.
		minimum: f64,
		/// Rejected value.
		value: f64,
	},
	/// A number is larger than the declared maximum.
	#[error("`{key}` must be at most {maximum}, got {value}")]
	AboveMaximum {
		/// Setting being validated.
		key: String,
		/// Inclusive upper bound.
		maximum: f64,
		/// Rejected value.
		value: f64,
	},
	/// An object carries a sub-property its schema does not declare.
	#[error("`{key}` has no property named `{property}`")]
	UnknownProperty {
		/// Setting being validated.
		key: String,
		/// The undeclared sub-property.
		property: String,
	},
}
