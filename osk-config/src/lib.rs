//! # OSK Config
//!
//! Loads key set documents, which are rows of [`KeyData`](osk_types::key_data::KeyData)
//! trees in JSON or TOML, and the settings they are resolved with.

pub mod config;
pub mod error;
pub mod key_set;
pub mod settings;

pub use self::config::{KeySetLoader, Validator};
pub use error::{ConfigError, ConfigResult, DocumentFormat};
pub use key_set::KeySetConfig;
pub use settings::ResolveSettings;
