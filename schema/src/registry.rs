//! The configuration registry: the place schema nodes get registered into, and the lookup side a
//! settings store or settings UI reads from.

use earcon_common::errors::SchemaError;
use serde_json::Value;

use crate::property::{ConfigurationNode, PropertySchema};

/// Registered configuration nodes, in registration order.
///
/// This is built once at startup and handed by reference to whatever needs to register or read
/// schemas; there is no process-wide instance.
#[derive(Debug, Default, Clone)]
pub struct ConfigurationRegistry {
	nodes: Vec<ConfigurationNode>,
}

impl ConfigurationRegistry {
	/// An empty registry.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `node`. A node with the same id registered earlier is replaced in place, so the
	/// most recent registration always wins.
	#[tracing::instrument(
		level = "debug",
		skip_all,
		fields(id = %node.id, properties = node.properties.len())
	)]
	pub fn register_configuration(&mut self, node: ConfigurationNode) {
		match self.nodes.iter_mut().find(|existing| existing.id == node.id) {
			Some(existing) => {
				tracing::debug!("replacing previously registered node");
				*existing = node;
			}
			None => self.nodes.push(node),
		}
	}

	/// Look up a node by id.
	#[must_use]
	pub fn node(&self, id: &str) -> Option<&ConfigurationNode> {
		self.nodes.iter().find(|node| node.id == id)
	}

	/// All nodes, in registration order.
	pub fn nodes(&self) -> impl Iterator<Item = &ConfigurationNode> {
		self.nodes.iter()
	}

	/// The definition of `key`. If several nodes declare it, the latest registered one wins.
	#[must_use]
	pub fn property(&self, key: &str) -> Option<&PropertySchema> {
		self.nodes.iter().rev().find_map(|node| node.properties.get(key))
	}

	/// Every known setting key with its definition.
	pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
		self.nodes
			.iter()
			.flat_map(|node| node.properties.iter().map(|(k, v)| (k.as_str(), v)))
	}

	/// The default value of `key`, if it is known and declares one.
	#[must_use]
	pub fn default_value(&self, key: &str) -> Option<&Value> {
		self.property(key).and_then(|schema| schema.default.as_ref())
	}

	/// Check `value` against the definition of `key`.
	///
	/// # Errors
	///
	/// [`SchemaError::UnknownSetting`] when no node declares `key`, otherwise the first
	/// violation reported by [`PropertySchema::validate`].
	pub fn validate(&self, key: &str, value: &Value) -> Result<(), SchemaError> {
		self.property(key)
			.ok_or_else(|| SchemaError::UnknownSetting(key.to_owned()))?
			.validate(key, value)
	}

	/// `value` pulled inside the numeric bounds of `key`.
	/// `None` when `key` is unknown.
	#[must_use]
	pub fn clamp(&self, key: &str, value: &Value) -> Option<Value> {
		self.property(key).map(|schema| schema.clamp(value))
	}
}
