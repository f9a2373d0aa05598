use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classification of a key. Some actions require both the code and the type to match.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum KeyType {
    #[default]
    #[serde(alias = "character")]
    Character,
    #[serde(alias = "enter_editing")]
    EnterEditing,
    #[serde(alias = "function")]
    Function,
    #[serde(alias = "lock")]
    Lock,
    #[serde(alias = "modifier")]
    Modifier,
    #[serde(alias = "navigation")]
    Navigation,
    #[serde(alias = "system_gui")]
    SystemGui,
    #[serde(alias = "numeric")]
    Numeric,
    #[serde(alias = "placeholder")]
    Placeholder,
    #[serde(alias = "unspecified")]
    Unspecified,
}

/// Semantic category of the focused text field
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum KeyVariation {
    /// Unrestricted, selectors always pick their default branch
    #[default]
    #[serde(alias = "all")]
    #[strum(to_string = "ALL")]
    All,
    #[serde(alias = "email", alias = "email_address")]
    #[strum(to_string = "EMAIL_ADDRESS", serialize = "email")]
    EmailAddress,
    #[serde(alias = "normal")]
    #[strum(to_string = "NORMAL")]
    Normal,
    #[serde(alias = "password")]
    #[strum(to_string = "PASSWORD")]
    Password,
    #[serde(alias = "uri", alias = "url")]
    #[strum(to_string = "URI", serialize = "url")]
    Uri,
}

#[cfg(test)]
mod test {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_key_type_names() {
        assert_eq!(KeyType::default(), KeyType::Character);
        assert_eq!(KeyType::SystemGui.to_string(), "SYSTEM_GUI");
        assert_eq!(KeyType::from_str("enter_editing"), Ok(KeyType::EnterEditing));
        assert_eq!(KeyType::from_str("NAVIGATION"), Ok(KeyType::Navigation));
        assert!(KeyType::from_str("keyboard").is_err());
    }

    #[test]
    fn test_key_variation_parse() {
        assert_eq!(KeyVariation::default(), KeyVariation::All);
        assert_eq!(KeyVariation::from_str("email"), Ok(KeyVariation::EmailAddress));
        assert_eq!(KeyVariation::from_str("EMAIL_ADDRESS"), Ok(KeyVariation::EmailAddress));
        assert_eq!(KeyVariation::from_str("password"), Ok(KeyVariation::Password));
        assert_eq!(KeyVariation::from_str("Uri"), Ok(KeyVariation::Uri));
        assert_eq!(KeyVariation::EmailAddress.to_string(), "EMAIL_ADDRESS");
    }
}
