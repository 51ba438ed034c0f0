#![deny(
	clippy::all,
	clippy::pedantic,
	clippy::cargo,
	clippy::map_unwrap_or,
	clippy::unwrap_used,
	missing_docs,
	unsafe_code
)]

//! Types shared between the earcon schema catalog, the migration engine, and the `earcon` binary.

pub mod errors;
pub mod settings;
pub mod types;

/// A result type that is generally quicker to write when using `Result<T, EarconError>`.
pub type EarconResult<T> = Result<T, errors::EarconError>;
