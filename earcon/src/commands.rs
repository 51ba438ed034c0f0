//! What each subcommand does, kept apart from argument parsing and output so it can be tested.

use std::{fs, path::Path};

use earcon_common::errors::SchemaError;
use earcon_migrate::{Configuration, MigrationRegistry, MigrationReport, Migrator};
use earcon_schema::{ConfigurationNode, ConfigurationRegistry};
use eyre::{eyre, WrapErr};
use serde_json::Value;

/// Upper bound on passes over one file. Passes only repeat after a collision.
pub const MAX_PASSES: usize = 4;

/// Settings outside this namespace belong to other features and are never validated.
const ACCESSIBILITY_PREFIX: &str = "accessibility.";

/// Parse a `settings.json` file.
pub fn read_settings(path: &Path) -> eyre::Result<Configuration> {
	let text = fs::read_to_string(path)
		.wrap_err_with(|| format!("reading settings file '{}'", path.display()))?;
	let value: Value = serde_json::from_str(&text)
		.wrap_err_with(|| format!("parsing settings file '{}'", path.display()))?;
	Ok(Configuration::try_from(value)?)
}

/// Write `config` back as pretty JSON.
pub fn write_settings(path: &Path, config: &Configuration) -> eyre::Result<()> {
	let mut text = serde_json::to_string_pretty(config)?;
	text.push('\n');
	fs::write(path, text).wrap_err_with(|| format!("writing settings file '{}'", path.display()))
}

/// Migrate `config` until no rule has anything left to do.
#[tracing::instrument(skip_all)]
pub fn migrate(registry: &MigrationRegistry, config: &mut Configuration) -> MigrationReport {
	let report = Migrator::new(registry).migrate_until_settled(config, MAX_PASSES);
	for key in &report.migrated {
		tracing::info!(key = %key, "migrated");
	}
	if report.changed && report.passes == MAX_PASSES {
		tracing::warn!(passes = MAX_PASSES, "migration did not settle");
	}
	report
}

/// Every accessibility setting in `config` the schema rejects.
///
/// Registered keys are checked against their schema; unregistered keys under the accessibility
/// namespace are reported as unknown.
pub fn violations(schema: &ConfigurationRegistry, config: &Configuration) -> Vec<SchemaError> {
	config
		.iter()
		.filter_map(|(key, value)| match schema.property(key) {
			Some(property) => property.validate(key, value).err(),
			None if key.starts_with(ACCESSIBILITY_PREFIX) => {
				Some(SchemaError::UnknownSetting(key.clone()))
			}
			None => None,
		})
		.collect()
}

/// The registered nodes, or just the one named `node`, as JSON.
pub fn schema_json(schema: &ConfigurationRegistry, node: Option<&str>) -> eyre::Result<Value> {
	let value = match node {
		Some(id) => {
			let node = schema.node(id).ok_or_else(|| eyre!("no configuration node named '{id}'"))?;
			serde_json::to_value(node)?
		}
		None => serde_json::to_value(schema.nodes().collect::<Vec<&ConfigurationNode>>())?,
	};
	Ok(value)
}
