//! Migration rules and the writes they produce.

use std::fmt;

use serde_json::Value;

use crate::configuration::ConfigurationRead;

/// One key/value change described by a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationWrite {
	/// Setting to change.
	pub key: String,
	/// New value; `None` is a tombstone and deletes the key.
	pub value: Option<Value>,
}

impl ConfigurationWrite {
	/// Set `key` to `value`.
	pub fn set(key: impl Into<String>, value: impl Into<Value>) -> Self {
		Self { key: key.into(), value: Some(value.into()) }
	}

	/// Delete `key`.
	pub fn remove(key: impl Into<String>) -> Self {
		Self { key: key.into(), value: None }
	}

	/// Whether this write deletes its key.
	#[must_use]
	pub fn is_tombstone(&self) -> bool {
		self.value.is_none()
	}
}

/// Body of a rule: the legacy value and a snapshot of everything else in, writes out.
pub type MigrateFn =
	dyn Fn(&Value, &dyn ConfigurationRead) -> Vec<ConfigurationWrite> + Send + Sync;

/// Folds one legacy key into its replacement(s).
///
/// The body must be pure: it describes writes and never touches a store itself. It is only
/// called when its key is present, and may return no writes when there is nothing to do.
pub struct MigrationRule {
	key: String,
	migrate: Box<MigrateFn>,
}

impl MigrationRule {
	/// A rule triggered by `key`.
	pub fn new<F>(key: impl Into<String>, migrate: F) -> Self
	where
		F: Fn(&Value, &dyn ConfigurationRead) -> Vec<ConfigurationWrite> + Send + Sync + 'static,
	{
		Self { key: key.into(), migrate: Box::new(migrate) }
	}

	/// The legacy key that triggers this rule.
	#[must_use]
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Run the rule on the legacy `value`, reading siblings from `read`.
	pub fn migrate(&self, value: &Value, read: &dyn ConfigurationRead) -> Vec<ConfigurationWrite> {
		(self.migrate)(value, read)
	}
}

impl fmt::Debug for MigrationRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MigrationRule").field("key", &self.key).finish_non_exhaustive()
	}
}
