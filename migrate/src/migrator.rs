//! Running registered rules over a loaded configuration.

use std::collections::HashMap;

use serde_json::Value;

use crate::{
	configuration::{Configuration, ConfigurationRead},
	registry::MigrationRegistry,
	rule::ConfigurationWrite,
};

/// Two rules in the same pass wrote different values to one key.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
	/// The contested key.
	pub key: String,
	/// Legacy key of the rule whose write was overridden.
	pub overridden: String,
	/// Legacy key of the rule whose write was kept.
	pub kept: String,
}

/// What a migration run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationReport {
	/// Legacy keys whose rules produced writes, in the order they ran.
	pub migrated: Vec<String>,
	/// Every write that was applied, in order.
	pub writes: Vec<ConfigurationWrite>,
	/// Conflicting writes within a pass.
	pub collisions: Vec<Collision>,
	/// Whether the configuration is different afterwards.
	pub changed: bool,
	/// How many passes ran.
	pub passes: usize,
}

impl MigrationReport {
	fn absorb(&mut self, other: Self) {
		self.migrated.extend(other.migrated);
		self.writes.extend(other.writes);
		self.collisions.extend(other.collisions);
		self.changed |= other.changed;
		self.passes += other.passes;
	}
}

/// Applies the rules of a [`MigrationRegistry`] to a [`Configuration`].
#[derive(Debug, Clone, Copy)]
pub struct Migrator<'r> {
	registry: &'r MigrationRegistry,
}

impl<'r> Migrator<'r> {
	/// A migrator over `registry`.
	#[must_use]
	pub fn new(registry: &'r MigrationRegistry) -> Self {
		Self { registry }
	}

	/// One pass: every rule whose key holds a value other than `null` runs against a snapshot of
	/// `config` taken before any write, then all writes are applied in registration order.
	///
	/// If two rules write different values to the same key, the later one wins and the pair is
	/// recorded in [`MigrationReport::collisions`].
	#[tracing::instrument(
		level = "debug",
		skip_all,
		fields(rules = self.registry.len(), settings = config.len())
	)]
	pub fn migrate(&self, config: &mut Configuration) -> MigrationReport {
		let snapshot = config.clone();
		let mut report = MigrationReport { passes: 1, ..MigrationReport::default() };
		let mut planned: Vec<(&str, ConfigurationWrite)> = Vec::new();
		for rule in self.registry.rules() {
			let Some(value) = snapshot.read(rule.key()).filter(|value| !value.is_null()) else {
				continue;
			};
			let writes = rule.migrate(value, &snapshot);
			if writes.is_empty() {
				tracing::trace!(key = rule.key(), "nothing to migrate");
				continue;
			}
			tracing::debug!(key = rule.key(), writes = writes.len(), "migrating legacy setting");
			report.migrated.push(rule.key().to_owned());
			planned.extend(writes.into_iter().map(|write| (rule.key(), write)));
		}

		{
			let mut last_write: HashMap<&str, (&str, &Option<Value>)> = HashMap::new();
			for (origin, write) in &planned {
				let previous = last_write.insert(write.key.as_str(), (*origin, &write.value));
				if let Some((overridden, value)) = previous {
					if value != &write.value {
						tracing::warn!(
							key = %write.key,
							overridden,
							kept = *origin,
							"two migrations wrote different values to the same setting"
						);
						report.collisions.push(Collision {
							key: write.key.clone(),
							overridden: overridden.to_owned(),
							kept: (*origin).to_owned(),
						});
					}
				}
			}
		}

		for (_, write) in planned {
			report.changed |= config.apply(&write);
			report.writes.push(write);
		}
		report
	}

	/// Repeat [`Self::migrate`] until a pass changes nothing, at most `max_passes` times.
	///
	/// A single pass is enough unless an overridden write came from a rule whose key survived
	/// the pass, like the nested `delays` rename losing to a fold; the next pass runs it again.
	pub fn migrate_until_settled(
		&self,
		config: &mut Configuration,
		max_passes: usize,
	) -> MigrationReport {
		let mut total = MigrationReport::default();
		for _ in 0..max_passes {
			let pass = self.migrate(config);
			let changed = pass.changed;
			total.absorb(pass);
			if !changed {
				break;
			}
		}
		if total.changed {
			tracing::info!(
				passes = total.passes,
				migrated = total.migrated.len(),
				"migrated legacy settings"
			);
		}
		total
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rule::MigrationRule;
	use serde_json::json;

	fn registry(rules: Vec<MigrationRule>) -> MigrationRegistry {
		let mut registry = MigrationRegistry::new();
		registry.register(rules);
		registry
	}

	#[test]
	fn rules_read_the_snapshot_not_earlier_writes() {
		let registry = registry(vec![
			MigrationRule::new("a", |_, _| {
				vec![ConfigurationWrite::set("b", 2), ConfigurationWrite::remove("a")]
			}),
			MigrationRule::new("b", |value, _| {
				vec![ConfigurationWrite::set("seen", value.clone())]
			}),
		]);
		let mut config = Configuration::from_iter([("a", json!(1)), ("b", json!(1))]);
		let report = Migrator::new(&registry).migrate(&mut config);
		assert_eq!(config.get("seen"), Some(&json!(1)));
		assert_eq!(config.get("b"), Some(&json!(2)));
		assert_eq!(report.migrated, ["a", "b"]);
	}

	#[test]
	fn absent_key_does_not_trigger_rule() {
		let registry = registry(vec![MigrationRule::new("a", |_, _| {
			vec![ConfigurationWrite::set("touched", true)]
		})]);
		let mut config = Configuration::from_iter([("b", json!(1))]);
		let report = Migrator::new(&registry).migrate(&mut config);
		assert!(!report.changed);
		assert!(report.migrated.is_empty());
		assert!(!config.contains_key("touched"));
	}

	#[test]
	fn null_key_does_not_trigger_rule() {
		let registry = registry(vec![MigrationRule::new("a", |value, _| {
			vec![ConfigurationWrite::set("b", value.clone()), ConfigurationWrite::remove("a")]
		})]);
		let mut config = Configuration::from_iter([("a", Value::Null)]);
		let report = Migrator::new(&registry).migrate(&mut config);
		assert!(!report.changed);
		assert!(report.migrated.is_empty());
		assert_eq!(config, Configuration::from_iter([("a", Value::Null)]));
	}

	#[test]
	fn conflicting_writes_are_reported_and_last_wins() {
		let registry = registry(vec![
			MigrationRule::new("a", |_, _| vec![ConfigurationWrite::set("x", 1)]),
			MigrationRule::new("b", |_, _| vec![ConfigurationWrite::set("x", 2)]),
			MigrationRule::new("c", |_, _| vec![ConfigurationWrite::set("x", 2)]),
		]);
		let mut config =
			Configuration::from_iter([("a", json!(0)), ("b", json!(0)), ("c", json!(0))]);
		let report = Migrator::new(&registry).migrate(&mut config);
		assert_eq!(config.get("x"), Some(&json!(2)));
		assert_eq!(
			report.collisions,
			[Collision { key: "x".to_owned(), overridden: "a".to_owned(), kept: "b".to_owned() }]
		);
	}

	#[test]
	fn settles_after_a_pass_without_changes() {
		let registry = registry(vec![MigrationRule::new("a", |value, _| {
			vec![ConfigurationWrite::set("b", value.clone()), ConfigurationWrite::remove("a")]
		})]);
		let mut config = Configuration::from_iter([("a", json!(1))]);
		let report = Migrator::new(&registry).migrate_until_settled(&mut config, 5);
		assert_eq!(report.passes, 2);
		assert_eq!(config, Configuration::from_iter([("b", json!(1))]));
	}
}
