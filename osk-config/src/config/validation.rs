// Centralized validation logic

use log::warn;
use osk_types::key_data::{EmojiKeyData, KeyData};

use crate::error::{ConfigError, ConfigResult};
use crate::key_set::KeySetConfig;

pub struct Validator;

impl Validator {
    /// Validate a decoded key set.
    ///
    /// Decoding already rejects malformed records, this checks what the wire format can't
    /// express: a usable document and emoji made of real scalar values.
    pub fn validate_key_set(key_set: &KeySetConfig) -> ConfigResult<()> {
        if key_set.name.trim().is_empty() {
            return Err(ConfigError::validation("name", "key set name must not be empty"));
        }
        if key_set.rows.is_empty() {
            return Err(ConfigError::validation("rows", "key set must have at least one row"));
        }
        for (i, row) in key_set.rows.iter().enumerate() {
            if row.is_empty() {
                warn!("Key set `{}`: row {} is empty", key_set.name, i);
            }
            for (j, key) in row.iter().enumerate() {
                Self::validate_key(key, &format!("rows[{}][{}]", i, j))?;
            }
        }
        Ok(())
    }

    /// Validate a key tree, `field` is the location of `key` used in errors
    pub fn validate_key(key: &KeyData, field: &str) -> ConfigResult<()> {
        match key {
            KeyData::Text(_) | KeyData::PopupAwareText(_) => Ok(()),
            KeyData::Emoji(emoji) => Self::validate_emoji(emoji, field),
            KeyData::CaseSelector(selector) => {
                Self::validate_key(&selector.lower, &format!("{}.lower", field))?;
                Self::validate_key(&selector.upper, &format!("{}.upper", field))
            }
            KeyData::VariationSelector(selector) => {
                Self::validate_key(&selector.default, &format!("{}.default", field))?;
                let branches = [
                    ("email", &selector.email),
                    ("normal", &selector.normal),
                    ("password", &selector.password),
                    ("uri", &selector.uri),
                ];
                for (name, branch) in branches {
                    if let Some(branch) = branch {
                        Self::validate_key(branch, &format!("{}.{}", field, name))?;
                    }
                }
                Ok(())
            }
        }
    }

    fn validate_emoji(emoji: &EmojiKeyData, field: &str) -> ConfigResult<()> {
        if !emoji.is_valid() {
            return Err(ConfigError::validation(
                format!("{}.codePoints", field),
                format!("{:?} are not all Unicode scalar values", emoji.code_points),
            ));
        }
        for (i, variant) in emoji.popup.iter().enumerate() {
            Self::validate_emoji(variant, &format!("{}.popup[{}]", field, i))?;
        }
        Ok(())
    }
}
