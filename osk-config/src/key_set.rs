use std::borrow::Cow;

use osk_types::key_data::KeyData;
use osk_types::key_type::KeyVariation;
use serde_derive::{Deserialize, Serialize};

/// A key set document: rows of keys, each key a [`KeyData`] tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KeySetConfig {
    /// Name of the key set
    pub name: String,
    /// Authors, optional
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Rows of keys, top to bottom
    #[serde(alias = "arrangement")]
    pub rows: Vec<Vec<KeyData>>,
}

impl KeySetConfig {
    /// Total number of keys over all rows
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Resolve every key for the caps state and the text field variation
    pub fn resolve(&self, caps: bool, variation: KeyVariation) -> Vec<Vec<Cow<'_, KeyData>>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|key| key.compute(caps, variation)).collect())
            .collect()
    }

    /// Resolve and render every key, see [`KeyData::as_string`]
    pub fn render(&self, caps: bool, variation: KeyVariation, is_for_display: bool) -> Vec<Vec<String>> {
        self.resolve(caps, variation)
            .iter()
            .map(|row| row.iter().map(|key| key.as_string(is_for_display)).collect())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use osk_types::key_data::{TextKeyData, VariationSelector};
    use osk_types::{case, emoji, txt};

    use super::*;

    fn sample() -> KeySetConfig {
        KeySetConfig {
            name: "sample".to_string(),
            authors: vec![],
            rows: vec![
                vec![case!(txt!('q'), txt!('Q')), txt!('w'), emoji!(0x1F600)],
                vec![
                    KeyData::Text(TextKeyData::SHIFT),
                    KeyData::from(
                        VariationSelector::new(TextKeyData::character(','))
                            .with(KeyVariation::EmailAddress, TextKeyData::character('@')),
                    ),
                    KeyData::Text(TextKeyData::new(Default::default(), 0x0301, "\u{0301}")),
                ],
            ],
        }
    }

    #[test]
    fn test_render_lower() {
        let rendered = sample().render(false, KeyVariation::All, true);
        assert_eq!(rendered[0], vec!["q", "w", "😀"]);
        assert_eq!(rendered[1], vec!["shift", ",", "\u{25CC}\u{0301}"]);
    }

    #[test]
    fn test_render_caps_email_raw() {
        let rendered = sample().render(true, KeyVariation::EmailAddress, false);
        assert_eq!(rendered[0], vec!["Q", "W", "😀"]);
        assert_eq!(rendered[1], vec!["shift", "@", "\u{0301}"]);
    }

    #[test]
    fn test_resolve_only_leaves() {
        let key_set = sample();
        assert_eq!(key_set.key_count(), 6);
        for row in key_set.resolve(true, KeyVariation::Uri) {
            assert!(row.iter().all(|key| key.is_leaf()));
        }
    }
}
