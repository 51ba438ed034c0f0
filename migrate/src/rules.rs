//! The accessibility migrations, and the rule shapes they are built from.

use serde_json::{Map, Value};

use crate::{
	coerce::{is_truthy, normalize_announcement, nullish_coalesce, or_chain},
	configuration::ConfigurationRead,
	rule::{ConfigurationWrite, MigrationRule},
	signals::{LegacySignal, LEGACY_SIGNALS},
};

/// Options shared by every signal.
pub const SIGNAL_OPTIONS: &str = "accessibility.signalOptions";

/// A field of [`SIGNAL_OPTIONS`] that used to be a setting of its own, twice over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalOptionField {
	/// Name of the field inside [`SIGNAL_OPTIONS`].
	pub field: &'static str,
	/// The `accessibility.signals.*` key it had before moving into [`SIGNAL_OPTIONS`].
	pub legacy_key: &'static str,
	/// The `audioCues.*` key it had before that.
	pub oldest_key: &'static str,
}

/// Signal volume in percent.
pub const VOLUME: SignalOptionField = SignalOptionField {
	field: "volume",
	legacy_key: "accessibility.signals.sounds.volume",
	oldest_key: "audioCues.volume",
};

/// Whether position change signals are debounced.
pub const DEBOUNCE_POSITION_CHANGES: SignalOptionField = SignalOptionField {
	field: "debouncePositionChanges",
	legacy_key: "accessibility.signals.debouncePositionChanges",
	oldest_key: "audioCues.debouncePositionChanges",
};

impl SignalOptionField {
	/// Current value from the first truthy source: the migrated field, then the newer legacy key,
	/// then the older one.
	fn lookup(self, read: &dyn ConfigurationRead) -> Option<Value> {
		or_chain([
			read.read(SIGNAL_OPTIONS).and_then(|options| options.get(self.field)),
			read.read(self.legacy_key),
			read.read(self.oldest_key),
		])
	}
}

/// The current object at `key`, or an empty one. Anything that is not an object is discarded.
fn current_object(read: &dyn ConfigurationRead, key: &str) -> Map<String, Value> {
	read.read(key).and_then(Value::as_object).cloned().unwrap_or_default()
}

/// Fold `legacy_key`, a former spelling of `own`, into [`SIGNAL_OPTIONS`], picking up `other`
/// from wherever it currently lives.
#[must_use]
pub fn fold_signal_option(
	legacy_key: &'static str,
	own: SignalOptionField,
	other: SignalOptionField,
) -> MigrationRule {
	MigrationRule::new(legacy_key, move |value, read| {
		let mut options = current_object(read, SIGNAL_OPTIONS);
		options.insert(own.field.to_owned(), value.clone());
		if let Some(other_value) = other.lookup(read) {
			options.insert(other.field.to_owned(), other_value);
		}
		vec![
			ConfigurationWrite::set(SIGNAL_OPTIONS, options),
			ConfigurationWrite::remove(legacy_key),
		]
	})
}

/// Move the `from` field of the object at `key` to `to`, keeping every other field.
/// Does nothing unless `from` holds a truthy value.
#[must_use]
pub fn rename_nested_field(
	key: &'static str,
	from: &'static str,
	to: &'static str,
) -> MigrationRule {
	MigrationRule::new(key, move |value, _| {
		let Some(moved) = value.get(from).filter(|moved| is_truthy(moved)) else {
			return Vec::new();
		};
		let mut fields = value.as_object().cloned().unwrap_or_default();
		fields.insert(to.to_owned(), moved.clone());
		fields.remove(from);
		vec![ConfigurationWrite::set(key, fields)]
	})
}

/// The signal object at `key` with `sound` and `announcement` laid over its current fields.
fn merged_signal(
	read: &dyn ConfigurationRead,
	key: &str,
	sound: Option<Value>,
	announcement: Option<Value>,
) -> Map<String, Value> {
	let mut fields = current_object(read, key);
	if let Some(sound) = sound {
		fields.insert("sound".to_owned(), sound);
	}
	if let Some(announcement) = announcement {
		fields.insert("announcement".to_owned(), announcement);
	}
	fields
}

/// Triggered by the legacy sound key of `signal`.
#[must_use]
pub fn migrate_signal_sound(signal: LegacySignal) -> MigrationRule {
	MigrationRule::new(signal.legacy_sound_key, move |sound, read| {
		let mut writes = vec![ConfigurationWrite::remove(signal.legacy_sound_key)];
		let announcement = signal.legacy_announcement_key.and_then(|legacy| {
			let legacy_value = read.read(legacy);
			if legacy_value.is_some() {
				writes.push(ConfigurationWrite::remove(legacy));
			}
			nullish_coalesce([
				read.read(signal.settings_key).and_then(|current| current.get("announcement")),
				legacy_value,
			])
			.map(normalize_announcement)
		});
		writes.push(ConfigurationWrite::set(
			signal.settings_key,
			merged_signal(read, signal.settings_key, Some(sound.clone()), announcement),
		));
		writes
	})
}

/// Triggered by the legacy announcement key of `signal`; `None` for signals that never had one.
///
/// While the legacy sound key is still set this does nothing: the sound rule folds the
/// announcement in and deletes both keys.
#[must_use]
pub fn migrate_signal_announcement(signal: LegacySignal) -> Option<MigrationRule> {
	let legacy_announcement = signal.legacy_announcement_key?;
	Some(MigrationRule::new(legacy_announcement, move |announcement, read| {
		if read.read(signal.legacy_sound_key).is_some_and(|sound| !sound.is_null()) {
			return Vec::new();
		}
		let announcement = normalize_announcement(announcement.clone());
		vec![
			ConfigurationWrite::set(
				signal.settings_key,
				merged_signal(read, signal.settings_key, None, Some(announcement)),
			),
			ConfigurationWrite::remove(legacy_announcement),
		]
	}))
}

/// Move the value of `from` to `to` untouched.
#[must_use]
pub fn rename(from: &'static str, to: &'static str) -> MigrationRule {
	MigrationRule::new(from, move |value, _| {
		vec![ConfigurationWrite::set(to, value.clone()), ConfigurationWrite::remove(from)]
	})
}

/// Every accessibility migration, in the order they should run.
///
/// The `delays` rename comes before the folds into [`SIGNAL_OPTIONS`]: when both fire in the same
/// pass the folds write last, so a migrated volume is never overwritten by the rename.
#[must_use]
pub fn accessibility_migrations() -> Vec<MigrationRule> {
	let mut rules = vec![
		rename_nested_field(SIGNAL_OPTIONS, "delays", "experimental.delays"),
		fold_signal_option(VOLUME.oldest_key, VOLUME, DEBOUNCE_POSITION_CHANGES),
		fold_signal_option(DEBOUNCE_POSITION_CHANGES.oldest_key, DEBOUNCE_POSITION_CHANGES, VOLUME),
		fold_signal_option(VOLUME.legacy_key, VOLUME, DEBOUNCE_POSITION_CHANGES),
		fold_signal_option(DEBOUNCE_POSITION_CHANGES.legacy_key, DEBOUNCE_POSITION_CHANGES, VOLUME),
	];
	rules.extend(LEGACY_SIGNALS.iter().copied().map(migrate_signal_sound));
	rules.extend(LEGACY_SIGNALS.iter().copied().filter_map(migrate_signal_announcement));
	rules.push(rename(
		"accessibility.signals.chatResponsePending",
		"accessibility.signals.progress",
	));
	rules
}
