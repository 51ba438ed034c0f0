//! Logging options.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

///structure used for all the configurable options related to logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogSettings {
	/// the filter directive used when neither `EARCON_LOG` nor `RUST_LOG` is set
	pub level: String,
	/// where the log lines end up
	pub logger: LoggingKind,
}

impl Default for LogSettings {
	fn default() -> Self {
		Self { level: "info".to_owned(), logger: LoggingKind::Tty }
	}
}

/// the log destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoggingKind {
	/// append to the given file, creating it if needed
	File(PathBuf),
	/// standard error of the terminal
	Tty,
	/// the systemd journal
	Syslog,
}
