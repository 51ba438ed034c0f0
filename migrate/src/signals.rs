//! Which legacy keys each accessibility signal used to be stored under.
//!
//! Before signals were merged into one `{ sound, announcement }` object, the sound lived under
//! `audioCues.<event>` and the announcement under `accessibility.alert.<event>`.

/// Current and legacy keys of one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacySignal {
	/// Current key, `accessibility.signals.<event>`.
	pub settings_key: &'static str,
	/// Where the sound used to be stored.
	pub legacy_sound_key: &'static str,
	/// Where the announcement used to be stored, for signals that had one.
	pub legacy_announcement_key: Option<&'static str>,
}

macro_rules! legacy_signal {
	($event:ident, $sound:literal) => {
		LegacySignal {
			settings_key: concat!("accessibility.signals.", stringify!($event)),
			legacy_sound_key: $sound,
			legacy_announcement_key: None,
		}
	};
	($event:ident, $sound:literal, $announcement:literal) => {
		LegacySignal {
			settings_key: concat!("accessibility.signals.", stringify!($event)),
			legacy_sound_key: $sound,
			legacy_announcement_key: Some($announcement),
		}
	};
}

/// Every signal that existed before the merge.
pub const LEGACY_SIGNALS: &[LegacySignal] = &[
	legacy_signal!(lineHasError, "audioCues.lineHasError", "accessibility.alert.error"),
	legacy_signal!(lineHasWarning, "audioCues.lineHasWarning", "accessibility.alert.warning"),
	legacy_signal!(
		lineHasFoldedArea,
		"audioCues.lineHasFoldedArea",
		"accessibility.alert.foldedArea"
	),
	legacy_signal!(
		lineHasBreakpoint,
		"audioCues.lineHasBreakpoint",
		"accessibility.alert.breakpoint"
	),
	legacy_signal!(lineHasInlineSuggestion, "audioCues.lineHasInlineSuggestion"),
	legacy_signal!(
		terminalQuickFix,
		"audioCues.terminalQuickFix",
		"accessibility.alert.terminalQuickFix"
	),
	legacy_signal!(onDebugBreak, "audioCues.onDebugBreak", "accessibility.alert.onDebugBreak"),
	legacy_signal!(noInlayHints, "audioCues.noInlayHints", "accessibility.alert.noInlayHints"),
	legacy_signal!(taskCompleted, "audioCues.taskCompleted", "accessibility.alert.taskCompleted"),
	legacy_signal!(taskFailed, "audioCues.taskFailed", "accessibility.alert.taskFailed"),
	legacy_signal!(
		terminalCommandFailed,
		"audioCues.terminalCommandFailed",
		"accessibility.alert.terminalCommandFailed"
	),
	legacy_signal!(terminalBell, "audioCues.terminalBell", "accessibility.alert.terminalBell"),
	legacy_signal!(diffLineInserted, "audioCues.diffLineInserted"),
	legacy_signal!(diffLineDeleted, "audioCues.diffLineDeleted"),
	legacy_signal!(diffLineModified, "audioCues.diffLineModified"),
	legacy_signal!(
		notebookCellCompleted,
		"audioCues.notebookCellCompleted",
		"accessibility.alert.notebookCellCompleted"
	),
	legacy_signal!(
		notebookCellFailed,
		"audioCues.notebookCellFailed",
		"accessibility.alert.notebookCellFailed"
	),
	legacy_signal!(
		chatRequestSent,
		"audioCues.chatRequestSent",
		"accessibility.alert.chatRequestSent"
	),
	legacy_signal!(chatResponseReceived, "audioCues.chatResponseReceived"),
	legacy_signal!(
		progress,
		"audioCues.chatResponsePending",
		"accessibility.alert.chatResponseProgress"
	),
	legacy_signal!(clear, "audioCues.clear", "accessibility.alert.clear"),
	legacy_signal!(save, "audioCues.save", "accessibility.alert.save"),
	legacy_signal!(format, "audioCues.format", "accessibility.alert.format"),
	legacy_signal!(voiceRecordingStarted, "audioCues.voiceRecordingStarted"),
	legacy_signal!(voiceRecordingStopped, "audioCues.voiceRecordingStopped"),
];

#[cfg(test)]
mod tests {
	use super::LEGACY_SIGNALS;
	use std::collections::HashSet;

	#[test]
	fn keys_are_unique() {
		let mut seen = HashSet::new();
		for signal in LEGACY_SIGNALS {
			assert!(seen.insert(signal.settings_key), "{}", signal.settings_key);
			assert!(seen.insert(signal.legacy_sound_key), "{}", signal.legacy_sound_key);
			if let Some(key) = signal.legacy_announcement_key {
				assert!(seen.insert(key), "{key}");
			}
		}
	}

	#[test]
	fn settings_keys_are_expanded() {
		assert_eq!(LEGACY_SIGNALS[0].settings_key, "accessibility.signals.lineHasError");
	}
}
