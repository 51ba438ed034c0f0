#![deny(
	clippy::all,
	clippy::pedantic,
	clippy::cargo,
	clippy::map_unwrap_or,
	clippy::unwrap_used,
	missing_docs,
	unsafe_code
)]
#![allow(clippy::multiple_crate_versions)]

//! Schema side of the accessibility settings: property definitions, the registry they are
//! registered into, the static catalog and the voice node that follows the speech provider.

pub mod catalog;
pub mod localize;
pub mod property;
pub mod registry;
pub mod speech;

pub use catalog::register_accessibility_configuration;
pub use localize::{Localizer, TemplateLocalizer};
pub use property::{ConfigurationNode, PropertySchema, PropertyType, Scope};
pub use registry::ConfigurationRegistry;
pub use speech::{DynamicSpeechConfiguration, ManualSpeechService, SpeechService};
