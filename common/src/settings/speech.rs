//! Speech backend options.

use serde::{Deserialize, Serialize};

///structure for all the speech related configuration options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SpeechSettings {
	/// whether a speech-to-text provider should be treated as installed
	/// voice settings are only registered into the schema when this is true
	pub provider_available: bool,
}
impl SpeechSettings {
	/// Create speech settings with an explicit provider state.
	#[must_use]
	pub fn new(provider_available: bool) -> Self {
		Self { provider_available }
	}
}
