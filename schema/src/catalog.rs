//! The static accessibility catalog.
//!
//! The property definitions are inert data and live in `catalog/*.json`, embedded at build time.
//! Signal settings all share the same `{ sound, announcement? }` shape, so the data file only
//! lists each signal once and [`signal_schema`] expands it into a full property.

use std::collections::BTreeMap;

use earcon_common::{
	types::{AnnouncementPolicy, GestureAnnouncementPolicy, GestureSoundPolicy, SoundPolicy},
	EarconResult,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use strum::VariantNames;

use crate::{
	localize::Localizer,
	property::{ConfigurationNode, PropertySchema, PropertyType},
	registry::ConfigurationRegistry,
};

/// Id of the node holding verbosity, signal and accessible view settings.
pub const ACCESSIBILITY_NODE_ID: &str = "accessibility";
/// Id of the node holding the workbench dim/hide settings.
pub const WORKBENCH_NODE_ID: &str = "workbench.accessibility";

const ACCESSIBILITY_CATALOG: &str = include_str!("../catalog/accessibility.json");
const WORKBENCH_CATALOG: &str = include_str!("../catalog/workbench.json");

/// The two families of choices a signal can offer.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SignalFamily {
	/// `auto`/`on`/`off` sounds, `auto`/`off` announcements.
	Event,
	/// `userGesture`/`always`/`never` for both.
	Gesture,
}

/// One signal as listed in the catalog data.
#[derive(Deserialize, Debug, Clone)]
pub struct SignalEntry {
	/// Full setting key, `accessibility.signals.<event>`.
	pub key: String,
	/// Completes the sentence "Plays a sound when ...".
	pub when: String,
	/// Which set of choices the signal offers.
	pub family: SignalFamily,
	/// Default sound policy.
	pub sound: String,
	/// Default announcement policy. Signals without one never announce.
	#[serde(default)]
	pub announcement: Option<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
	#[serde(flatten)]
	node: ConfigurationNode,
	#[serde(default)]
	signals: Vec<SignalEntry>,
}

fn sound_choices(
	family: SignalFamily,
	localizer: &dyn Localizer,
) -> (&'static [&'static str], Vec<String>) {
	match family {
		SignalFamily::Event => (
			SoundPolicy::VARIANTS,
			vec![
				localizer.localize(
					"signal.sound.auto",
					"Enable sound when a screen reader is attached.",
					&[],
				),
				localizer.localize("signal.sound.on", "Enable sound.", &[]),
				localizer.localize("signal.sound.off", "Disable sound.", &[]),
			],
		),
		SignalFamily::Gesture => (GestureSoundPolicy::VARIANTS, gesture_descriptions(localizer)),
	}
}

fn announcement_choices(
	family: SignalFamily,
	localizer: &dyn Localizer,
) -> (&'static [&'static str], Vec<String>) {
	match family {
		SignalFamily::Event => (
			AnnouncementPolicy::VARIANTS,
			vec![
				localizer.localize(
					"signal.announcement.auto",
					"Enable announcement, will only play when in screen reader optimized mode.",
					&[],
				),
				localizer.localize("signal.announcement.off", "Disable announcement.", &[]),
			],
		),
		SignalFamily::Gesture => {
			(GestureAnnouncementPolicy::VARIANTS, gesture_descriptions(localizer))
		}
	}
}

fn gesture_descriptions(localizer: &dyn Localizer) -> Vec<String> {
	vec![
		localizer.localize(
			"signal.userGesture",
			"Plays the signal only when triggered by the user.",
			&[],
		),
		localizer.localize(
			"signal.always",
			"Plays the signal whenever the action happens, including automatic triggers.",
			&[],
		),
		localizer.localize("signal.never", "Never plays the signal.", &[]),
	]
}

/// Expand a catalog signal entry into the schema of its `{ sound, announcement? }` object.
#[must_use]
pub fn signal_schema(entry: &SignalEntry, localizer: &dyn Localizer) -> PropertySchema {
	let when = localizer.localize(&format!("{}.when", entry.key), &entry.when, &[]);
	let (sounds, sound_descriptions) = sound_choices(entry.family, localizer);
	let sound = PropertySchema::new(PropertyType::String)
		.with_choices(sounds.iter().copied(), sound_descriptions)
		.with_default(entry.sound.as_str())
		.with_description(localizer.localize(
			"signal.sound",
			"Plays a sound when {0}.",
			&[when.as_str()],
		));

	let mut fields = Map::new();
	fields.insert("sound".to_owned(), Value::String(entry.sound.clone()));
	let mut properties = BTreeMap::from([("sound".to_owned(), sound)]);
	let description = if let Some(default) = &entry.announcement {
		let (announcements, announcement_descriptions) =
			announcement_choices(entry.family, localizer);
		properties.insert(
			"announcement".to_owned(),
			PropertySchema::new(PropertyType::String)
				.with_choices(announcements.iter().copied(), announcement_descriptions)
				.with_default(default.as_str())
				.with_description(localizer.localize(
					"signal.announcement",
					"Announces when {0}.",
					&[when.as_str()],
				)),
		);
		fields.insert("announcement".to_owned(), Value::String(default.clone()));
		localizer.localize(
			"signal.description",
			"Plays a signal - sound (audio cue) and/or announcement (alert) - when {0}.",
			&[when.as_str()],
		)
	} else {
		localizer.localize("signal.sound", "Plays a sound when {0}.", &[when.as_str()])
	};

	let mut schema = PropertySchema::new(PropertyType::Object)
		.with_default(fields)
		.with_description(description)
		.tagged("accessibility");
	schema.properties = Some(properties);
	schema.additional_properties = Some(false);
	schema
}

fn load(data: &str, localizer: &dyn Localizer) -> EarconResult<ConfigurationNode> {
	let CatalogFile { mut node, signals } = serde_json::from_str(data)?;
	if let Some(title) = node.title.as_mut() {
		*title = localizer.localize(&format!("{}.title", node.id), title, &[]);
	}
	for (key, schema) in &mut node.properties {
		if let Some(description) = schema.description.as_mut() {
			*description = localizer.localize(&format!("{key}.description"), description, &[]);
		}
		if let Some(description) = schema.markdown_description.as_mut() {
			*description =
				localizer.localize(&format!("{key}.markdownDescription"), description, &[]);
		}
	}
	for entry in &signals {
		node.properties.insert(entry.key.clone(), signal_schema(entry, localizer));
	}
	Ok(node)
}

/// The signal entries listed in the accessibility catalog.
///
/// # Errors
///
/// Only if the embedded data is malformed.
pub fn signal_entries() -> EarconResult<Vec<SignalEntry>> {
	let file: CatalogFile = serde_json::from_str(ACCESSIBILITY_CATALOG)?;
	Ok(file.signals)
}

/// The `accessibility` node: verbosity, signal options, one property per signal, accessible view.
///
/// # Errors
///
/// Only if the embedded data is malformed.
pub fn accessibility_node(localizer: &dyn Localizer) -> EarconResult<ConfigurationNode> {
	load(ACCESSIBILITY_CATALOG, localizer)
}

/// The workbench level `dimUnfocused`/`hideAccessibleView` node.
///
/// # Errors
///
/// Only if the embedded data is malformed.
pub fn workbench_node(localizer: &dyn Localizer) -> EarconResult<ConfigurationNode> {
	load(WORKBENCH_CATALOG, localizer)
}

/// Register both static nodes.
///
/// # Errors
///
/// Only if the embedded data is malformed.
#[tracing::instrument(level = "debug", skip_all, err)]
pub fn register_accessibility_configuration(
	registry: &mut ConfigurationRegistry,
	localizer: &dyn Localizer,
) -> EarconResult<()> {
	registry.register_configuration(accessibility_node(localizer)?);
	registry.register_configuration(workbench_node(localizer)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::localize::TemplateLocalizer;
	use serde_json::json;

	#[test]
	fn catalog_defaults_satisfy_their_own_schema() {
		let mut registry = ConfigurationRegistry::new();
		register_accessibility_configuration(&mut registry, &TemplateLocalizer).unwrap();
		for (key, schema) in registry.properties() {
			let default = schema.default.as_ref().unwrap_or_else(|| panic!("{key} has no default"));
			assert_eq!(schema.validate(key, default), Ok(()), "{key}");
		}
	}

	#[test]
	fn signal_without_announcement_only_offers_sound() {
		let entry = SignalEntry {
			key: "accessibility.signals.diffLineInserted".to_owned(),
			when: "a line is inserted".to_owned(),
			family: SignalFamily::Event,
			sound: "auto".to_owned(),
			announcement: None,
		};
		let schema = signal_schema(&entry, &TemplateLocalizer);
		assert_eq!(schema.default, Some(json!({ "sound": "auto" })));
		assert_eq!(schema.description.as_deref(), Some("Plays a sound when a line is inserted."));
		assert!(schema
			.validate(&entry.key, &json!({ "sound": "auto", "announcement": "auto" }))
			.is_err());
	}

	struct Overriding;

	impl Localizer for Overriding {
		fn localize(&self, key: &str, template: &str, args: &[&str]) -> String {
			match key {
				"accessibility.hideAccessibleView.description" => "overridden".to_owned(),
				"workbench.accessibility.title" => "Barrierefreiheit".to_owned(),
				_ => TemplateLocalizer.localize(key, template, args),
			}
		}
	}

	#[test]
	fn descriptions_and_titles_go_through_localizer() {
		let node = workbench_node(&Overriding).unwrap();
		assert_eq!(node.title.as_deref(), Some("Barrierefreiheit"));
		assert_eq!(
			node.properties["accessibility.hideAccessibleView"].description.as_deref(),
			Some("overridden")
		);
	}

	#[test]
	fn gesture_signals_use_gesture_choices() {
		let node = accessibility_node(&TemplateLocalizer).unwrap();
		let save = &node.properties["accessibility.signals.save"];
		assert_eq!(save.default, Some(json!({ "sound": "never", "announcement": "never" })));
		assert!(save
			.validate(
				"accessibility.signals.save",
				&json!({ "sound": "userGesture", "announcement": "always" })
			)
			.is_ok());
		assert!(save.validate("accessibility.signals.save", &json!({ "sound": "on" })).is_err());
	}
}
