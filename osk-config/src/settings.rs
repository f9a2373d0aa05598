//! Resolve settings.
//!
//! The context keys are resolved and rendered in, layered from built-in defaults, an
//! optional TOML file and `OSK_*` environment variables, later layers win.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use log::debug;
use osk_types::key_type::KeyVariation;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

use crate::error::ConfigResult;

/// Context of resolving and rendering a key set
#[serde_inline_default]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ResolveSettings {
    /// Resolve with caps active
    #[serde_inline_default(false)]
    pub caps: bool,
    /// Variation of the focused text field
    #[serde(default)]
    pub variation: KeyVariation,
    /// Render for the key face rather than the data sent to the editor
    #[serde_inline_default(true)]
    pub display: bool,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self {
            caps: false,
            variation: KeyVariation::All,
            display: true,
        }
    }
}

impl ResolveSettings {
    /// Load settings from `path`, if given, and the `OSK_*` environment variables
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with(path, Environment::with_prefix("OSK"))
    }

    /// Load settings with a custom environment source
    pub fn load_with(path: Option<&Path>, environment: Environment) -> ConfigResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Loading resolve settings from {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        let settings: Self = builder.add_source(environment).build()?.try_deserialize()?;
        debug!("Resolve settings: {:?}", settings);
        Ok(settings)
    }
}
