#![deny(
	clippy::all,
	clippy::pedantic,
	clippy::cargo,
	clippy::map_unwrap_or,
	clippy::unwrap_used,
	unsafe_code
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod commands;
mod logging;

use std::{fs, path::PathBuf, process::exit};

use crate::cli::{Args, Command};
use clap::Parser;
use earcon_common::settings::ApplicationConfig;
use earcon_migrate::accessibility_registry;
use earcon_schema::{
	register_accessibility_configuration, ConfigurationRegistry, DynamicSpeechConfiguration,
	ManualSpeechService, TemplateLocalizer,
};
use eyre::WrapErr;
use figment::{
	providers::{Format, Serialized, Toml},
	Figment,
};

fn main() -> eyre::Result<()> {
	let args = Args::parse();
	let config = load_configuration(args.config)?;
	logging::init(&config)?;
	tracing::debug!(?config, "loaded configuration");

	let localizer = TemplateLocalizer;
	let mut schema = ConfigurationRegistry::new();
	register_accessibility_configuration(&mut schema, &localizer)?;
	let speech = ManualSpeechService::new(config.speech.provider_available);
	let _voice = DynamicSpeechConfiguration::new(
		&speech,
		&localizer,
		config.product.quality,
		&mut schema,
	);

	match args.command {
		Command::Migrate { settings, write } => {
			let mut settings_json = commands::read_settings(&settings)?;
			let report = commands::migrate(&accessibility_registry(), &mut settings_json);
			if write {
				if report.changed {
					commands::write_settings(&settings, &settings_json)?;
				}
			} else {
				println!("{}", serde_json::to_string_pretty(&settings_json)?);
			}
			eprintln!(
				"{} legacy settings migrated in {} passes, {} collisions",
				report.migrated.len(),
				report.passes,
				report.collisions.len()
			);
		}
		Command::Validate { settings } => {
			let mut settings_json = commands::read_settings(&settings)?;
			commands::migrate(&accessibility_registry(), &mut settings_json);
			let violations = commands::violations(&schema, &settings_json);
			for violation in &violations {
				println!("{violation}");
			}
			if !violations.is_empty() {
				tracing::error!(count = violations.len(), "settings failed validation");
				exit(1);
			}
		}
		Command::Schema { node } => {
			let value = commands::schema_json(&schema, node.as_deref())?;
			println!("{}", serde_json::to_string_pretty(&value)?);
		}
	}
	Ok(())
}

fn load_configuration(cli_override: Option<PathBuf>) -> eyre::Result<ApplicationConfig> {
	// Lowest priority first: built-in defaults, /etc/earcon/config.toml, the XDG config file,
	// then a file given on the command line.
	// If the XDG file does not exist yet, write the effective configuration there to be edited.
	let xdg_dirs = xdg::BaseDirectories::with_prefix("earcon").wrap_err(
		"unable to find the earcon config directory according to the xdg dirs specification",
	)?;
	let config_path = xdg_dirs
		.place_config_file("config.toml")
		.wrap_err("unable to place configuration file. Maybe your system is readonly?")?;

	let figment = Figment::from(Serialized::defaults(ApplicationConfig::default()))
		.admerge(Toml::file("/etc/earcon/config.toml"))
		.admerge(Toml::file(&config_path));
	let figment =
		if let Some(path) = cli_override { figment.merge(Toml::file(path)) } else { figment };
	let config: ApplicationConfig = figment.extract()?;
	if !config_path.exists() {
		let toml = toml::to_string(&config)?;
		fs::write(&config_path, toml).wrap_err("unable to create default config file")?;
	}
	Ok(config)
}
