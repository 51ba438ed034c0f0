#![deny(
	clippy::all,
	clippy::pedantic,
	clippy::cargo,
	clippy::map_unwrap_or,
	clippy::unwrap_used,
	missing_docs,
	unsafe_code
)]
#![allow(clippy::multiple_crate_versions)]

//! Rewrites deprecated accessibility settings into their current keys.
//!
//! A [`MigrationRule`] is keyed by a legacy setting. Given the legacy value and read access to a
//! snapshot of the whole configuration it describes [`ConfigurationWrite`]s, where a write
//! without a value deletes its key. Rules live in a [`MigrationRegistry`], and a [`Migrator`]
//! runs them over a loaded [`Configuration`].

pub mod coerce;
pub mod configuration;
pub mod migrator;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod signals;

pub use configuration::{Configuration, ConfigurationRead};
pub use migrator::{Collision, MigrationReport, Migrator};
pub use registry::MigrationRegistry;
pub use rule::{ConfigurationWrite, MigrationRule};
pub use rules::accessibility_migrations;

/// A registry holding every accessibility migration.
#[must_use]
pub fn accessibility_registry() -> MigrationRegistry {
	let mut registry = MigrationRegistry::new();
	registry.register(accessibility_migrations());
	registry
}
