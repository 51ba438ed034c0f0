//! Settings of the `earcon` tool itself, as opposed to the editor settings it migrates.

pub mod log;
pub mod product;
pub mod speech;

use log::LogSettings;
use product::ProductSettings;
use speech::SpeechSettings;

use serde::{Deserialize, Serialize};

///type representing a *read-only* view of the earcon configuration
/// this type should only be obtained as a result of parsing earcon's configuration files, as it contains types for each section responsible for controlling various parts of the tool
/// the only way this config should change is if the configuration file changes, in which case the entire view will be replaced to reflect the fact
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApplicationConfig {
	/// see [`SpeechSettings`]
	pub speech: SpeechSettings,
	/// see [`LogSettings`]
	pub log: LogSettings,
	/// see [`ProductSettings`]
	pub product: ProductSettings,
}
