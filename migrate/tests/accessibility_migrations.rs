use earcon_migrate::{
	accessibility_registry,
	rules::SIGNAL_OPTIONS,
	signals::LEGACY_SIGNALS,
	Configuration, ConfigurationRead, Migrator,
};
use earcon_schema::{register_accessibility_configuration, ConfigurationRegistry, TemplateLocalizer};
use serde_json::{json, Value};

fn migrate(settings: Value) -> (Configuration, earcon_migrate::MigrationReport) {
	let registry = accessibility_registry();
	let mut config = Configuration::try_from(settings).unwrap();
	let report = Migrator::new(&registry).migrate(&mut config);
	(config, report)
}

#[test]
fn volume_and_debounce_fold_into_signal_options() {
	let (config, report) = migrate(json!({
		"accessibility.signals.sounds.volume": 80,
		"accessibility.signals.debouncePositionChanges": true,
	}));
	assert_eq!(
		config.read(SIGNAL_OPTIONS),
		Some(&json!({ "volume": 80, "debouncePositionChanges": true }))
	);
	assert_eq!(config.read("accessibility.signals.sounds.volume"), None);
	assert_eq!(config.read("accessibility.signals.debouncePositionChanges"), None);
	assert!(report.collisions.is_empty());
}

#[test]
fn oldest_volume_key_folds_alone() {
	let (config, _) = migrate(json!({ "audioCues.volume": 35, "editor.fontSize": 14 }));
	assert_eq!(config.read(SIGNAL_OPTIONS), Some(&json!({ "volume": 35 })));
	assert_eq!(config.read("audioCues.volume"), None);
	assert_eq!(config.read("editor.fontSize"), Some(&json!(14)));
}

#[test]
fn fold_keeps_existing_signal_option_fields() {
	let (config, _) = migrate(json!({
		"audioCues.debouncePositionChanges": true,
		"accessibility.signalOptions": {
			"volume": 20,
			"experimental.delays": { "general": { "sound": 100 } }
		},
	}));
	assert_eq!(
		config.read(SIGNAL_OPTIONS),
		Some(&json!({
			"volume": 20,
			"debouncePositionChanges": true,
			"experimental.delays": { "general": { "sound": 100 } }
		}))
	);
}

#[test]
fn legacy_boolean_announcement_becomes_auto() {
	let (config, report) = migrate(json!({
		"audioCues.lineHasError": "on",
		"accessibility.alert.error": true,
	}));
	assert_eq!(
		config.read("accessibility.signals.lineHasError"),
		Some(&json!({ "sound": "on", "announcement": "auto" }))
	);
	assert_eq!(config.read("audioCues.lineHasError"), None);
	assert_eq!(config.read("accessibility.alert.error"), None);
	assert!(report.collisions.is_empty());
}

#[test]
fn legacy_announcement_alone_keeps_missing_sound_out() {
	let (config, _) = migrate(json!({ "accessibility.alert.taskFailed": false }));
	assert_eq!(
		config.read("accessibility.signals.taskFailed"),
		Some(&json!({ "announcement": "off" }))
	);
}

#[test]
fn both_legacy_keys_over_existing_signal_keep_legacy_sound() {
	let registry = accessibility_registry();
	let mut config = Configuration::try_from(json!({
		"accessibility.signals.lineHasError": { "sound": "auto", "announcement": "auto" },
		"audioCues.lineHasError": "off",
		"accessibility.alert.error": false,
	}))
	.unwrap();
	let report = Migrator::new(&registry).migrate_until_settled(&mut config, 4);
	assert!(report.collisions.is_empty(), "{:?}", report.collisions);
	assert_eq!(
		Value::from(config),
		json!({ "accessibility.signals.lineHasError": { "sound": "off", "announcement": "auto" } })
	);
}

#[test]
fn null_legacy_sound_is_left_alone() {
	let (config, report) = migrate(json!({ "audioCues.lineHasError": null }));
	assert!(!report.changed);
	assert_eq!(config.read("accessibility.signals.lineHasError"), None);
}

#[test]
fn chat_response_pending_is_renamed_to_progress() {
	let (config, _) =
		migrate(json!({ "accessibility.signals.chatResponsePending": { "sound": "auto" } }));
	assert_eq!(config.read("accessibility.signals.progress"), Some(&json!({ "sound": "auto" })));
	assert_eq!(config.read("accessibility.signals.chatResponsePending"), None);
}

#[test]
fn delays_move_under_experimental() {
	let (config, _) = migrate(json!({
		"accessibility.signalOptions": { "volume": 50, "delays": { "general": { "sound": 400 } } }
	}));
	assert_eq!(
		config.read(SIGNAL_OPTIONS),
		Some(&json!({ "volume": 50, "experimental.delays": { "general": { "sound": 400 } } }))
	);
}

#[test]
fn signal_options_without_delays_are_left_alone() {
	let settings = json!({ "accessibility.signalOptions": { "volume": 50 } });
	let (config, report) = migrate(settings.clone());
	assert_eq!(Value::from(config), settings);
	assert!(!report.changed);
	assert!(report.writes.is_empty());
}

#[test]
fn second_pass_changes_nothing() {
	let registry = accessibility_registry();
	let migrator = Migrator::new(&registry);
	let mut config = Configuration::try_from(json!({
		"audioCues.volume": 60,
		"audioCues.taskCompleted": "off",
		"accessibility.alert.taskCompleted": "auto",
		"accessibility.signals.chatResponsePending": { "sound": "on" },
		"accessibility.signalOptions": { "debouncePositionChanges": true },
	}))
	.unwrap();
	migrator.migrate(&mut config);
	let migrated = config.clone();
	let second = migrator.migrate(&mut config);
	assert!(!second.changed, "{:?}", second.writes);
	assert_eq!(config, migrated);
}

#[test]
fn colliding_delays_rename_is_finished_by_a_later_pass() {
	let registry = accessibility_registry();
	let mut config = Configuration::try_from(json!({
		"audioCues.volume": 60,
		"accessibility.signalOptions": { "delays": { "general": { "sound": 400 } } },
	}))
	.unwrap();
	let report = Migrator::new(&registry).migrate_until_settled(&mut config, 4);
	assert_eq!(report.collisions.len(), 1);
	assert_eq!(report.collisions[0].key, SIGNAL_OPTIONS);
	assert_eq!(report.collisions[0].kept, "audioCues.volume");
	assert_eq!(
		config.read(SIGNAL_OPTIONS),
		Some(&json!({ "volume": 60, "experimental.delays": { "general": { "sound": 400 } } }))
	);
	assert_eq!(report.passes, 3);
}

#[test]
fn destinations_are_registered_settings_and_legacy_keys_are_not() {
	let mut schema = ConfigurationRegistry::new();
	register_accessibility_configuration(&mut schema, &TemplateLocalizer).unwrap();
	assert!(schema.property(SIGNAL_OPTIONS).is_some());
	for signal in LEGACY_SIGNALS {
		assert!(schema.property(signal.settings_key).is_some(), "{}", signal.settings_key);
		assert!(schema.property(signal.legacy_sound_key).is_none());
	}
	for rule in accessibility_registry().rules().filter(|rule| rule.key() != SIGNAL_OPTIONS) {
		assert!(
			schema.property(rule.key()).is_none(),
			"{} is still a registered setting",
			rule.key()
		);
	}
}

#[test]
fn migrated_signals_validate_against_schema() {
	let mut schema = ConfigurationRegistry::new();
	register_accessibility_configuration(&mut schema, &TemplateLocalizer).unwrap();
	let (config, _) = migrate(json!({
		"audioCues.lineHasWarning": "auto",
		"accessibility.alert.warning": false,
		"audioCues.diffLineDeleted": "off",
		"audioCues.save": "userGesture",
		"accessibility.alert.save": "always",
	}));
	for (key, value) in config.iter() {
		assert_eq!(schema.validate(key, value), Ok(()), "{key}");
	}
}
