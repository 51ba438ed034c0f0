use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author)]
pub struct Args {
	/// Specify a custom earcon configuration path
	#[arg(short, long, value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Rewrite deprecated accessibility settings in a settings.json file
	Migrate {
		/// The settings file to migrate
		#[arg(value_name = "SETTINGS")]
		settings: PathBuf,
		/// Write the result back instead of printing it
		#[arg(short, long)]
		write: bool,
	},
	/// Migrate a settings file in memory, then check every accessibility setting against the schema
	Validate {
		/// The settings file to check
		#[arg(value_name = "SETTINGS")]
		settings: PathBuf,
	},
	/// Print the registered accessibility schema as JSON
	Schema {
		/// Only print the node with this id
		#[arg(long, value_name = "ID")]
		node: Option<String>,
	},
}
