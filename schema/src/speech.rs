//! Voice settings, which only exist while a speech provider is installed.
//!
//! The node is rebuilt and registered again every time the provider reports a change, replacing
//! whatever was registered under [`SPEECH_NODE_ID`] before.

use std::cell::{Cell, RefCell};

use async_channel::{Receiver, Sender};
use earcon_common::settings::product::ProductQuality;
use serde_json::Value;

use crate::{
	localize::Localizer,
	property::{ConfigurationNode, PropertySchema, PropertyType},
	registry::ConfigurationRegistry,
};

/// Id of the dynamically registered voice node.
pub const SPEECH_NODE_ID: &str = "accessibility.voice";

/// Language tags a speech provider may support, with their display names.
pub const SPEECH_LANGUAGES: &[(&str, &str)] = &[
	("da-DK", "Danish (Denmark)"),
	("de-DE", "German (Germany)"),
	("en-AU", "English (Australia)"),
	("en-CA", "English (Canada)"),
	("en-GB", "English (United Kingdom)"),
	("en-IE", "English (Ireland)"),
	("en-IN", "English (India)"),
	("en-NZ", "English (New Zealand)"),
	("en-US", "English (United States)"),
	("es-ES", "Spanish (Spain)"),
	("es-MX", "Spanish (Mexico)"),
	("fr-CA", "French (Canada)"),
	("fr-FR", "French (France)"),
	("hi-IN", "Hindi (India)"),
	("it-IT", "Italian (Italy)"),
	("ja-JP", "Japanese (Japan)"),
	("ko-KR", "Korean (South Korea)"),
	("nl-NL", "Dutch (Netherlands)"),
	("pt-PT", "Portuguese (Portugal)"),
	("pt-BR", "Portuguese (Brazil)"),
	("ru-RU", "Russian (Russia)"),
	("sv-SE", "Swedish (Sweden)"),
	("tr-TR", "Turkish (Türkiye)"),
	("zh-CN", "Chinese (Simplified, China)"),
	("zh-HK", "Chinese (Traditional, Hong Kong)"),
	("zh-TW", "Chinese (Traditional, Taiwan)"),
];

/// Sent by a [`SpeechService`] whenever a provider appears or goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechProviderChanged;

/// The speech backend, as far as the settings catalog cares about it.
pub trait SpeechService {
	/// Whether any speech provider is currently installed.
	fn has_speech_provider(&self) -> bool;
	/// A new receiver of change notifications.
	fn subscribe(&self) -> Receiver<SpeechProviderChanged>;
}

/// A [`SpeechService`] whose provider state is set by hand.
/// Used by the `earcon` binary, where the state comes from its config file.
#[derive(Debug, Default)]
pub struct ManualSpeechService {
	available: Cell<bool>,
	subscribers: RefCell<Vec<Sender<SpeechProviderChanged>>>,
}

impl ManualSpeechService {
	/// A service which starts with the given provider state.
	#[must_use]
	pub fn new(available: bool) -> Self {
		Self { available: Cell::new(available), subscribers: RefCell::default() }
	}

	/// Change the provider state; subscribers are notified only if it actually changed.
	pub fn set_has_speech_provider(&self, available: bool) {
		if self.available.replace(available) == available {
			return;
		}
		tracing::debug!(available, "speech provider changed");
		// closed receivers are dropped here
		self.subscribers
			.borrow_mut()
			.retain(|tx| tx.try_send(SpeechProviderChanged).is_ok());
	}
}

impl SpeechService for ManualSpeechService {
	fn has_speech_provider(&self) -> bool {
		self.available.get()
	}

	fn subscribe(&self) -> Receiver<SpeechProviderChanged> {
		let (tx, rx) = async_channel::unbounded();
		self.subscribers.borrow_mut().push(tx);
		rx
	}
}

/// Build the voice node. `quality` picks the default of `autoSynthesize`.
#[must_use]
pub fn speech_node(localizer: &dyn Localizer, quality: ProductQuality) -> ConfigurationNode {
	let mut languages: Vec<(&str, String)> =
		std::iter::once(("auto", "Auto (Use Display Language)"))
			.chain(SPEECH_LANGUAGES.iter().copied())
			.map(|(tag, name)| {
				(tag, localizer.localize(&format!("speechLanguage.{tag}"), name, &[]))
			})
			.collect();
	languages.sort_by(|a, b| a.1.cmp(&b.1));
	let names: Vec<String> = languages.iter().map(|(_, name)| name.clone()).collect();

	let mut speech_language = PropertySchema::new(PropertyType::String)
		.with_choices(languages.iter().map(|(tag, _)| *tag), names.clone())
		.with_default("auto")
		.tagged("accessibility");
	speech_language.enum_item_labels = Some(names);
	speech_language.markdown_description = Some(localizer.localize(
		"accessibility.voice.speechLanguage",
		"The language that text-to-speech and speech-to-text should use. Select `auto` to use the configured display language if possible. Note that not all display languages maybe supported by speech recognition and synthesizers.",
		&[],
	));

	let mut speech_timeout = PropertySchema::new(PropertyType::Number)
		.with_default(1200)
		.with_bounds(Some(0.0), None)
		.tagged("accessibility");
	speech_timeout.markdown_description = Some(localizer.localize(
		"accessibility.voice.speechTimeout",
		"The duration in milliseconds that voice speech recognition remains active after you stop speaking. For example in a chat session, the transcribed text is submitted automatically after the timeout is met. Set to `0` to disable this feature.",
		&[],
	));

	let ignore_code_blocks = PropertySchema::new(PropertyType::Boolean)
		.with_default(false)
		.with_description(localizer.localize(
			"accessibility.voice.ignoreCodeBlocks",
			"Whether to ignore code snippets in text-to-speech synthesis.",
			&[],
		))
		.tagged("accessibility");

	let auto_synthesize = PropertySchema::new(PropertyType::String)
		.with_choices(
			["on", "off", "auto"],
			vec![
				localizer.localize(
					"autoSynthesize.on",
					"Enable the feature. When a screen reader is enabled, note that this will disable aria updates.",
					&[],
				),
				localizer.localize("autoSynthesize.off", "Disable the feature.", &[]),
				localizer.localize(
					"autoSynthesize.auto",
					"When a screen reader is detected, disable the feature. Otherwise, enable the feature.",
					&[],
				),
			],
		)
		.with_default(Value::from(if quality.is_prerelease() { "auto" } else { "off" }))
		.with_description(localizer.localize(
			"accessibility.voice.autoSynthesize",
			"Whether a textual response should automatically be read out aloud when speech was used as input. For example in a chat session, a response is automatically synthesized when voice was used as chat request.",
			&[],
		))
		.tagged("accessibility");

	let title = localizer.localize("accessibility.voice.title", "Voice", &[]);
	ConfigurationNode::new(SPEECH_NODE_ID, title)
		.with_property("accessibility.voice.speechTimeout", speech_timeout)
		.with_property("accessibility.voice.ignoreCodeBlocks", ignore_code_blocks)
		.with_property("accessibility.voice.speechLanguage", speech_language)
		.with_property("accessibility.voice.autoSynthesize", auto_synthesize)
}

/// Keeps the voice node in sync with a [`SpeechService`].
///
/// Subscribes once on construction; every queued notification re-runs [`Self::update`].
pub struct DynamicSpeechConfiguration<'a> {
	service: &'a dyn SpeechService,
	localizer: &'a dyn Localizer,
	quality: ProductQuality,
	changes: Receiver<SpeechProviderChanged>,
}

impl<'a> DynamicSpeechConfiguration<'a> {
	/// Subscribe to `service` and perform the initial registration.
	pub fn new(
		service: &'a dyn SpeechService,
		localizer: &'a dyn Localizer,
		quality: ProductQuality,
		registry: &mut ConfigurationRegistry,
	) -> Self {
		let this = Self { service, localizer, quality, changes: service.subscribe() };
		this.update(registry);
		this
	}

	/// Register a freshly computed voice node if a provider is installed.
	/// Returns whether a node was registered.
	#[tracing::instrument(level = "debug", skip_all, ret)]
	pub fn update(&self, registry: &mut ConfigurationRegistry) -> bool {
		if !self.service.has_speech_provider() {
			return false;
		}
		registry.register_configuration(speech_node(self.localizer, self.quality));
		true
	}

	/// Handle every notification received since the last call.
	/// Returns how many were handled.
	pub fn process_pending(&self, registry: &mut ConfigurationRegistry) -> usize {
		let mut handled = 0;
		while self.changes.try_recv().is_ok() {
			self.update(registry);
			handled += 1;
		}
		handled
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::localize::TemplateLocalizer;
	use serde_json::json;

	#[test]
	fn languages_are_sorted_by_display_name() {
		let node = speech_node(&TemplateLocalizer, ProductQuality::Stable);
		let language = &node.properties["accessibility.voice.speechLanguage"];
		let labels = language.enum_item_labels.clone().unwrap();
		let mut sorted = labels.clone();
		sorted.sort();
		assert_eq!(labels, sorted);
		assert_eq!(labels.len(), SPEECH_LANGUAGES.len() + 1);
		assert!(language.choices.as_ref().unwrap().contains(&json!("auto")));
	}

	#[test]
	fn auto_synthesize_default_follows_quality() {
		let stable = speech_node(&TemplateLocalizer, ProductQuality::Stable);
		let insider = speech_node(&TemplateLocalizer, ProductQuality::Insider);
		let key = "accessibility.voice.autoSynthesize";
		assert_eq!(stable.properties[key].default, Some(json!("off")));
		assert_eq!(insider.properties[key].default, Some(json!("auto")));
	}

	#[test]
	fn unchanged_state_does_not_notify() {
		let service = ManualSpeechService::new(true);
		let rx = service.subscribe();
		service.set_has_speech_provider(true);
		assert!(rx.try_recv().is_err());
		service.set_has_speech_provider(false);
		assert_eq!(rx.try_recv(), Ok(SpeechProviderChanged));
	}
}
