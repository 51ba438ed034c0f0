//! Product channel metadata.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// product metadata used to choose defaults which differ between release channels
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ProductSettings {
	/// the release channel of the editor the settings belong to
	pub quality: ProductQuality,
}

/// release channel
#[derive(Debug, Serialize, Deserialize, Display, EnumString, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductQuality {
	/// the default, public channel
	#[default]
	Stable,
	/// nightly builds
	Insider,
	/// experimental builds ahead of insider
	Exploration,
}

impl ProductQuality {
	/// true for every channel except [`ProductQuality::Stable`]
	#[must_use]
	pub fn is_prerelease(self) -> bool {
		self != Self::Stable
	}
}
