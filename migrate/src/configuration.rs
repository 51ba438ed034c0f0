//! The flat key/value configuration migrations read from and write into.

use earcon_common::errors::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rule::ConfigurationWrite;

/// Read-only access to the effective value of a setting.
///
/// Rules only ever see this trait, never the store they will eventually be applied to.
pub trait ConfigurationRead {
	/// The value of `key`, or `None` when it is not set.
	fn read(&self, key: &str) -> Option<&Value>;
}

impl ConfigurationRead for Map<String, Value> {
	fn read(&self, key: &str) -> Option<&Value> {
		self.get(key)
	}
}

/// Settings keyed by their full dotted name, in the shape of a `settings.json` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
	/// An empty configuration.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// The value of `key`.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Set `key`, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	/// Remove `key`, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.remove(key)
	}

	/// Apply one write: a tombstone removes the key, anything else sets it.
	/// Returns whether the configuration changed.
	pub fn apply(&mut self, write: &ConfigurationWrite) -> bool {
		match &write.value {
			None => self.0.remove(&write.key).is_some(),
			Some(value) => self.0.insert(write.key.clone(), value.clone()).as_ref() != Some(value),
		}
	}

	/// Whether `key` is set.
	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Iterate over every setting.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}

	/// Number of settings.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether nothing is set.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// The underlying JSON object.
	#[must_use]
	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}

impl ConfigurationRead for Configuration {
	fn read(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}
}

impl From<Map<String, Value>> for Configuration {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl From<Configuration> for Value {
	fn from(config: Configuration) -> Self {
		Value::Object(config.0)
	}
}

impl TryFrom<Value> for Configuration {
	type Error = ConfigError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			Value::Null => Err(ConfigError::NotAnObject("null")),
			Value::Bool(_) => Err(ConfigError::NotAnObject("a boolean")),
			Value::Number(_) => Err(ConfigError::NotAnObject("a number")),
			Value::String(_) => Err(ConfigError::NotAnObject("a string")),
			Value::Array(_) => Err(ConfigError::NotAnObject("an array")),
		}
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Configuration {
	fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn apply_reports_changes() {
		let mut config = Configuration::new();
		assert!(config.apply(&ConfigurationWrite::set("a", 1)));
		assert!(!config.apply(&ConfigurationWrite::set("a", 1)));
		assert!(config.apply(&ConfigurationWrite::remove("a")));
		assert!(!config.apply(&ConfigurationWrite::remove("a")));
		assert!(config.is_empty());
	}

	#[test]
	fn only_objects_convert() {
		assert_eq!(Configuration::try_from(json!([1])), Err(ConfigError::NotAnObject("an array")));
		let config = Configuration::try_from(json!({ "a": true })).unwrap();
		assert_eq!(config.read("a"), Some(&json!(true)));
	}
}
