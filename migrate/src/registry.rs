//! Where migration rules are registered.

use crate::rule::MigrationRule;

/// Registered rules, in registration order.
///
/// Several rules may share a key; all of them are kept and run in the order they were registered.
#[derive(Debug, Default)]
pub struct MigrationRegistry {
	rules: Vec<MigrationRule>,
}

impl MigrationRegistry {
	/// An empty registry.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `rules`, keeping their order.
	pub fn register<I>(&mut self, rules: I)
	where
		I: IntoIterator<Item = MigrationRule>,
	{
		let before = self.rules.len();
		self.rules.extend(rules);
		tracing::debug!(
			added = self.rules.len() - before,
			total = self.rules.len(),
			"registered configuration migrations"
		);
	}

	/// Every rule triggered by `key`, in registration order.
	pub fn lookup<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a MigrationRule> + 'a {
		self.rules.iter().filter(move |rule| rule.key() == key)
	}

	/// Every rule, in registration order.
	pub fn rules(&self) -> impl Iterator<Item = &MigrationRule> {
		self.rules.iter()
	}

	/// Number of registered rules.
	#[must_use]
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Whether no rule is registered.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rule::ConfigurationWrite;

	fn rule(key: &str, marker: i64) -> MigrationRule {
		MigrationRule::new(key, move |_, _| vec![ConfigurationWrite::set("marker", marker)])
	}

	#[test]
	fn duplicates_are_kept_in_order() {
		let mut registry = MigrationRegistry::new();
		registry.register([rule("a", 1), rule("b", 2)]);
		registry.register([rule("a", 3)]);
		let markers: Vec<_> = registry
			.lookup("a")
			.map(|rule| rule.migrate(&serde_json::Value::Null, &serde_json::Map::new()))
			.collect();
		assert_eq!(
			markers,
			[vec![ConfigurationWrite::set("marker", 1)], vec![ConfigurationWrite::set("marker", 3)]]
		);
		assert_eq!(registry.len(), 3);
		assert_eq!(registry.lookup("c").count(), 0);
	}
}
