//!Logging with the [`tracing`] crate.
//!
//! Log lines go to the terminal, a file or the journal, never to stdout, which carries command output.

use std::{env, fs::OpenOptions, io};

use earcon_common::settings::{log::LoggingKind, ApplicationConfig};
use eyre::Context;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Initialise the logging stack
/// this requires an application configuration structure, so configuration must be initialized before logging is
pub fn init(config: &ApplicationConfig) -> eyre::Result<()> {
	let env_filter = match env::var("EARCON_LOG").or_else(|_| env::var("RUST_LOG")) {
		Ok(s) => EnvFilter::from(s),
		_ => EnvFilter::from(&config.log.level),
	};
	let tree = HierarchicalLayer::new(4)
		.with_bracketed_fields(true)
		.with_targets(true)
		.with_deferred_spans(true)
		.with_span_retrace(true)
		.with_indent_lines(true)
		.with_ansi(false)
		.with_wraparound(4);
	//boxed, because each arm produces a differently typed layer
	let final_layer = match &config.log.logger {
		LoggingKind::File(path) => {
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("opening log file '{}'", path.display()))?;
			tree.with_writer(file).boxed()
		}
		LoggingKind::Tty => tree.with_writer(io::stderr).with_ansi(true).boxed(),
		LoggingKind::Syslog => tracing_journald::Layer::new()
			.wrap_err("connecting to the systemd journal")?
			.with_syslog_identifier("earcon".to_owned())
			.boxed(),
	};
	tracing_subscriber::Registry::default()
		.with(env_filter)
		.with(ErrorLayer::default())
		.with(final_layer)
		.init();
	Ok(())
}
