// Key set loader

use std::path::Path;

use log::{debug, info};

use super::validation::Validator;
use crate::error::{ConfigError, ConfigResult, DocumentFormat};
use crate::key_set::KeySetConfig;

/// Origin reported in errors of documents which don't come from a file
const IN_MEMORY: &str = "<memory>";

impl DocumentFormat {
    /// Detect the document format from the file extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DocumentFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(DocumentFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub struct KeySetLoader;

impl KeySetLoader {
    /// Load and validate a key set document.
    ///
    /// The format is picked from the file extension, `.json` or `.toml`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use osk_config::config::KeySetLoader;
    ///
    /// let key_set = KeySetLoader::load("qwerty.json").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<KeySetConfig> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let key_set = Self::decode(&content, format, &path.display().to_string())?;
        info!(
            "Loaded key set `{}` from {:?}: {} rows, {} keys",
            key_set.name,
            path,
            key_set.rows.len(),
            key_set.key_count()
        );
        Ok(key_set)
    }

    /// Decode and validate a JSON key set
    pub fn from_json_str(content: &str) -> ConfigResult<KeySetConfig> {
        Self::decode(content, DocumentFormat::Json, IN_MEMORY)
    }

    /// Decode and validate a TOML key set
    pub fn from_toml_str(content: &str) -> ConfigResult<KeySetConfig> {
        Self::decode(content, DocumentFormat::Toml, IN_MEMORY)
    }

    fn decode(content: &str, format: DocumentFormat, origin: &str) -> ConfigResult<KeySetConfig> {
        let parse_error = |message: String| ConfigError::Parse {
            path: origin.to_string(),
            format,
            message,
        };
        let key_set: KeySetConfig = match format {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.message().to_string()))?,
        };
        for (i, row) in key_set.rows.iter().enumerate() {
            debug!("Key set `{}` row {}: {} keys", key_set.name, i, row.len());
        }
        Validator::validate_key_set(&key_set)?;
        Ok(key_set)
    }
}
