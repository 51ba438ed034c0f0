//! This module describes the values accepted by accessibility signal settings.
//! Settings are stored as loose JSON, but consumers that read them back should prefer these types over matching on strings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// When a signal plays its sound, for most signals.
#[derive(
	Serialize,
	Deserialize,
	Display,
	EnumString,
	VariantNames,
	Debug,
	Clone,
	Copy,
	Eq,
	PartialEq,
	Hash,
	Default,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SoundPolicy {
	/// Play the sound only when a screen reader is attached.
	#[default]
	Auto,
	/// Always play the sound.
	On,
	/// Never play the sound.
	Off,
}

/// When a signal is announced to a screen reader, for most signals.
#[derive(
	Serialize,
	Deserialize,
	Display,
	EnumString,
	VariantNames,
	Debug,
	Clone,
	Copy,
	Eq,
	PartialEq,
	Hash,
	Default,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AnnouncementPolicy {
	/// Announce when a screen reader is attached.
	#[default]
	Auto,
	/// Never announce.
	Off,
}

impl From<bool> for AnnouncementPolicy {
	fn from(enabled: bool) -> Self {
		if enabled {
			Self::Auto
		} else {
			Self::Off
		}
	}
}

/// Sound policy for signals bound to user actions, like saving or formatting a file.
#[derive(
	Serialize,
	Deserialize,
	Display,
	EnumString,
	VariantNames,
	Debug,
	Clone,
	Copy,
	Eq,
	PartialEq,
	Hash,
	Default,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GestureSoundPolicy {
	/// Play only when the action was explicitly triggered by the user.
	UserGesture,
	/// Play whenever the action happens, including automatic triggers.
	Always,
	/// Never play.
	#[default]
	Never,
}

/// Announcement policy for signals bound to user actions.
/// Same choices as [`GestureSoundPolicy`], but kept separate so the two fields cannot be swapped by accident.
#[derive(
	Serialize,
	Deserialize,
	Display,
	EnumString,
	VariantNames,
	Debug,
	Clone,
	Copy,
	Eq,
	PartialEq,
	Hash,
	Default,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GestureAnnouncementPolicy {
	/// Announce only when the action was explicitly triggered by the user.
	UserGesture,
	/// Announce whenever the action happens.
	Always,
	/// Never announce.
	#[default]
	Never,
}
