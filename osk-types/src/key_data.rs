//! Key identities.
//!
//! This module defines what a single key of the on-screen keyboard is. A key is either a
//! leaf, which can be rendered and dispatched directly, or a selector, which picks one of
//! its children depending on the runtime context.
//!
//! Key types:
//! - [`KeyData`] - The closed set of key shapes, this is what layouts are made of
//! - [`TextKeyData`] - A character or action key
//! - [`PopupAwareTextKeyData`] - A character or action key with long-press popups
//! - [`EmojiKeyData`] - A single emoji, possibly made of several code points
//! - [`CaseSelector`] - Picks a branch by caps state
//! - [`VariationSelector`] - Picks a branch by text field variation
//!
//! A key tree is resolved with [`KeyData::compute`] whenever the caps state or the focused
//! field changes, and the resulting leaf is rendered with [`KeyData::as_string`].

mod predefined;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::FromRepr;

use crate::key_type::{KeyType, KeyVariation};
use crate::keycode::{DOTTED_CIRCLE, is_combining_mark, is_printable};
use crate::popup::PopupSet;

/// A key identity, tagged with `$` on the wire
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "$")]
pub enum KeyData {
    #[serde(rename = "text_key")]
    Text(TextKeyData),
    #[serde(rename = "popup_aware_text_key")]
    PopupAwareText(PopupAwareTextKeyData),
    #[serde(rename = "emoji_key")]
    Emoji(EmojiKeyData),
    #[serde(rename = "case_selector")]
    CaseSelector(CaseSelector),
    #[serde(rename = "variation_selector")]
    VariationSelector(VariationSelector),
}

impl KeyData {
    /// Resolve the key for the given caps state and text field variation.
    ///
    /// The result is always a leaf. Selectors are followed recursively until a leaf is
    /// reached, and character leaves are upper-cased when `caps` is set. A leaf that doesn't
    /// change is returned as is, borrowed from `self`.
    pub fn compute(&self, caps: bool, variation: KeyVariation) -> Cow<'_, KeyData> {
        match self {
            KeyData::Text(key) => match key.compute(caps) {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(key) => Cow::Owned(KeyData::Text(key)),
            },
            KeyData::PopupAwareText(key) => match key.compute(caps) {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(key) => Cow::Owned(KeyData::PopupAwareText(key)),
            },
            KeyData::Emoji(_) => Cow::Borrowed(self),
            KeyData::CaseSelector(selector) => selector.select(caps).compute(caps, variation),
            KeyData::VariationSelector(selector) => selector.select(variation).compute(caps, variation),
        }
    }

    /// Text of the key.
    ///
    /// With `is_for_display` the text is meant for the key face, otherwise it's the data sent
    /// to the editor. Selectors render as an empty string, [`compute`](Self::compute) them first.
    pub fn as_string(&self, is_for_display: bool) -> String {
        match self {
            KeyData::Text(key) => key.as_string(is_for_display),
            KeyData::PopupAwareText(key) => key.as_string(is_for_display),
            KeyData::Emoji(key) => key.as_string(),
            KeyData::CaseSelector(_) | KeyData::VariationSelector(_) => String::new(),
        }
    }

    /// Whether the key can be rendered and dispatched without resolving it first
    pub fn is_leaf(&self) -> bool {
        match self {
            KeyData::Text(_) | KeyData::PopupAwareText(_) | KeyData::Emoji(_) => true,
            KeyData::CaseSelector(_) | KeyData::VariationSelector(_) => false,
        }
    }

    pub fn is_composite(&self) -> bool {
        !self.is_leaf()
    }
}

impl From<TextKeyData> for KeyData {
    fn from(value: TextKeyData) -> Self {
        KeyData::Text(value)
    }
}

impl From<PopupAwareTextKeyData> for KeyData {
    fn from(value: PopupAwareTextKeyData) -> Self {
        KeyData::PopupAwareText(value)
    }
}

impl From<EmojiKeyData> for KeyData {
    fn from(value: EmojiKeyData) -> Self {
        KeyData::Emoji(value)
    }
}

impl From<CaseSelector> for KeyData {
    fn from(value: CaseSelector) -> Self {
        KeyData::CaseSelector(value)
    }
}

impl From<VariationSelector> for KeyData {
    fn from(value: VariationSelector) -> Self {
        KeyData::VariationSelector(value)
    }
}

impl fmt::Display for KeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyData::Text(key) => fmt::Display::fmt(key, f),
            KeyData::PopupAwareText(key) => fmt::Display::fmt(key, f),
            KeyData::Emoji(key) => fmt::Display::fmt(key, f),
            KeyData::CaseSelector(selector) => fmt::Display::fmt(selector, f),
            KeyData::VariationSelector(selector) => fmt::Display::fmt(selector, f),
        }
    }
}

/// Upper-case form of a character key's code, if the key is affected by caps.
///
/// This is the simple (single character) case mapping of `UnicodeData.txt`. A character
/// without a simple upper-case form (`ß`, `ŉ`) stays as is.
fn upper_case(code: i32) -> Option<char> {
    if !is_printable(code) {
        return None;
    }
    let c = char::from_u32(u32::try_from(code).ok()?)?;
    if let Some(upper) = simple_upper_case_override(c) {
        return Some(upper);
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => Some(c),
    }
}

/// Characters whose full upper-case mapping expands but whose simple mapping is a single
/// character: Greek vowels with ypogegrammeni map to their prosgegrammeni forms.
fn simple_upper_case_override(c: char) -> Option<char> {
    let upper = match c as u32 {
        cp @ (0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7) => cp + 8,
        0x1FB3 => 0x1FBC,
        0x1FC3 => 0x1FCC,
        0x1FF3 => 0x1FFC,
        _ => return None,
    };
    char::from_u32(upper)
}

fn render_text(code: i32, label: &str, is_for_display: bool) -> String {
    let mut s = String::with_capacity(label.len() + DOTTED_CIRCLE.len_utf8());
    // A standalone combining mark is invisible without a base character
    if is_for_display && is_combining_mark(code) {
        s.push(DOTTED_CIRCLE);
    }
    s.push_str(label);
    s
}

/// A single key and its attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextKeyData {
    /// Type of the key. Some actions require both `code` and `type` to match.
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// Unicode scalar value of the character, or a reserved action code below
    /// [`SPACE_CODE`](crate::keycode::SPACE_CODE). This is the data passed to the editor.
    pub code: i32,
    /// Text shown on the key, not passed to the editor
    pub label: Cow<'static, str>,
}

impl TextKeyData {
    pub fn new(key_type: KeyType, code: i32, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key_type,
            code,
            label: label.into(),
        }
    }

    /// Same as [`new`](Self::new), usable in constants
    pub const fn from_static(key_type: KeyType, code: i32, label: &'static str) -> Self {
        Self {
            key_type,
            code,
            label: Cow::Borrowed(label),
        }
    }

    /// A character key labelled with the character itself
    pub fn character(c: char) -> Self {
        Self {
            key_type: KeyType::Character,
            code: c as i32,
            label: Cow::Owned(String::from(c)),
        }
    }

    /// Resolve the key for the caps state, see [`KeyData::compute`]
    pub fn compute(&self, caps: bool) -> Cow<'_, TextKeyData> {
        let upper = if caps { upper_case(self.code) } else { None };
        match upper {
            Some(upper) => Cow::Owned(Self {
                key_type: self.key_type,
                code: upper as i32,
                label: Cow::Owned(String::from(upper)),
            }),
            None => Cow::Borrowed(self),
        }
    }

    pub fn as_string(&self, is_for_display: bool) -> String {
        render_text(self.code, &self.label, is_for_display)
    }
}

impl From<&PopupAwareTextKeyData> for TextKeyData {
    fn from(value: &PopupAwareTextKeyData) -> Self {
        Self {
            key_type: value.key_type,
            code: value.code,
            label: value.label.clone(),
        }
    }
}

impl From<PopupAwareTextKeyData> for TextKeyData {
    fn from(value: PopupAwareTextKeyData) -> Self {
        Self {
            key_type: value.key_type,
            code: value.code,
            label: value.label,
        }
    }
}

impl fmt::Display for TextKeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextKeyData {{ type={} code={} label={:?} }}",
            self.key_type, self.code, self.label
        )
    }
}

/// Popup group of a key. A key in a group other than [`KeyGroup::Default`] gets the popups
/// defined for that group in the popup mapping.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, FromRepr)]
pub enum KeyGroup {
    /// No special group, keys are assigned to it unless specified otherwise
    #[default]
    Default = 0,
    /// Popups of `~left`
    Left = 1,
    /// Popups of `~right`
    Right = 2,
    /// Popups of `~enter`
    Enter = 3,
}

impl Serialize for KeyGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for KeyGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = i32::deserialize(deserializer)?;
        KeyGroup::from_repr(id).ok_or_else(|| {
            de::Error::invalid_value(
                Unexpected::Signed(id.into()),
                &"a `groupId` of 0 (default), 1 (left), 2 (right) or 3 (enter)",
            )
        })
    }
}

/// A character or action key with long-press popups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupAwareTextKeyData {
    #[serde(rename = "type")]
    pub key_type: KeyType,
    pub code: i32,
    pub label: Cow<'static, str>,
    /// Bucket of the popup mapping this key draws extra popups from
    pub group_id: KeyGroup,
    pub popup: PopupSet<TextKeyData>,
}

impl PopupAwareTextKeyData {
    pub fn new(key_type: KeyType, code: i32, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key_type,
            code,
            label: label.into(),
            group_id: KeyGroup::Default,
            popup: PopupSet::new(),
        }
    }

    pub fn with_group(mut self, group_id: KeyGroup) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn with_popup(mut self, popup: PopupSet<TextKeyData>) -> Self {
        self.popup = popup;
        self
    }

    /// Resolve the key for the caps state, group and popups are kept
    pub fn compute(&self, caps: bool) -> Cow<'_, PopupAwareTextKeyData> {
        let upper = if caps { upper_case(self.code) } else { None };
        match upper {
            Some(upper) => Cow::Owned(Self {
                key_type: self.key_type,
                code: upper as i32,
                label: Cow::Owned(String::from(upper)),
                group_id: self.group_id,
                popup: self.popup.clone(),
            }),
            None => Cow::Borrowed(self),
        }
    }

    pub fn as_string(&self, is_for_display: bool) -> String {
        render_text(self.code, &self.label, is_for_display)
    }
}

impl From<TextKeyData> for PopupAwareTextKeyData {
    fn from(value: TextKeyData) -> Self {
        Self {
            key_type: value.key_type,
            code: value.code,
            label: value.label,
            group_id: KeyGroup::Default,
            popup: PopupSet::new(),
        }
    }
}

impl fmt::Display for PopupAwareTextKeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PopupAwareTextKeyData {{ type={} code={} label={:?} groupId={} popup={} }}",
            self.key_type,
            self.code,
            self.label,
            self.group_id as i32,
            self.popup.len()
        )
    }
}

fn non_empty_code_points<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let code_points = Vec::<i32>::deserialize(deserializer)?;
    if code_points.is_empty() {
        return Err(de::Error::invalid_length(0, &"a non-empty `codePoints` list"));
    }
    Ok(code_points)
}

/// A single emoji, with its variants (e.g. skin tones) as popups.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiKeyData {
    /// Code points of the emoji, in order. Never empty.
    #[serde(deserialize_with = "non_empty_code_points")]
    pub code_points: Vec<i32>,
    /// Name of the emoji
    #[serde(default)]
    pub label: Cow<'static, str>,
    #[serde(default)]
    pub popup: Vec<EmojiKeyData>,
}

impl EmojiKeyData {
    pub fn new(code_points: Vec<i32>, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code_points,
            label: label.into(),
            popup: Vec::new(),
        }
    }

    pub fn with_popup(mut self, popup: Vec<EmojiKeyData>) -> Self {
        self.popup = popup;
        self
    }

    /// Whether every code point is a Unicode scalar value
    pub fn is_valid(&self) -> bool {
        !self.code_points.is_empty()
            && self
                .code_points
                .iter()
                .all(|&cp| u32::try_from(cp).ok().and_then(char::from_u32).is_some())
    }

    /// The emoji itself. Code points which aren't scalar values render as U+FFFD.
    pub fn as_string(&self) -> String {
        self.code_points
            .iter()
            .map(|&cp| {
                u32::try_from(cp)
                    .ok()
                    .and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect()
    }
}

impl fmt::Display for EmojiKeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmojiKeyData {{ codePoints=[")?;
        for (i, cp) in self.code_points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:#X}", cp)?;
        }
        write!(f, "] label={:?} }}", self.label)
    }
}

/// Picks `upper` when caps is active, `lower` otherwise
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseSelector {
    pub lower: Box<KeyData>,
    pub upper: Box<KeyData>,
}

impl CaseSelector {
    pub fn new(lower: impl Into<KeyData>, upper: impl Into<KeyData>) -> Self {
        Self {
            lower: Box::new(lower.into()),
            upper: Box::new(upper.into()),
        }
    }

    /// Branch for the caps state, not resolved yet
    pub fn select(&self, caps: bool) -> &KeyData {
        if caps { &self.upper } else { &self.lower }
    }
}

impl fmt::Display for CaseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CaseSelector {{ lower={} upper={} }}", self.lower, self.upper)
    }
}

/// Picks a branch by the variation of the focused text field, falling back to `default`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariationSelector {
    pub default: Box<KeyData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Box<KeyData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<Box<KeyData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Box<KeyData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<Box<KeyData>>,
}

impl VariationSelector {
    pub fn new(default: impl Into<KeyData>) -> Self {
        Self {
            default: Box::new(default.into()),
            email: None,
            normal: None,
            password: None,
            uri: None,
        }
    }

    /// Set the branch of `variation`. [`KeyVariation::All`] replaces the default branch.
    pub fn with(mut self, variation: KeyVariation, key: impl Into<KeyData>) -> Self {
        let key = Box::new(key.into());
        match variation {
            KeyVariation::All => self.default = key,
            KeyVariation::EmailAddress => self.email = Some(key),
            KeyVariation::Normal => self.normal = Some(key),
            KeyVariation::Password => self.password = Some(key),
            KeyVariation::Uri => self.uri = Some(key),
        }
        self
    }

    /// Branch explicitly set for `variation`. [`KeyVariation::All`] maps to the default branch.
    pub fn branch(&self, variation: KeyVariation) -> Option<&KeyData> {
        match variation {
            KeyVariation::All => Some(&self.default),
            KeyVariation::EmailAddress => self.email.as_deref(),
            KeyVariation::Normal => self.normal.as_deref(),
            KeyVariation::Password => self.password.as_deref(),
            KeyVariation::Uri => self.uri.as_deref(),
        }
    }

    /// Branch for `variation`, or the default one if it isn't set. Not resolved yet.
    pub fn select(&self, variation: KeyVariation) -> &KeyData {
        self.branch(variation).unwrap_or(&self.default)
    }
}

impl fmt::Display for VariationSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariationSelector {{ default={}", self.default)?;
        let branches = [
            ("email", &self.email),
            ("normal", &self.normal),
            ("password", &self.password),
            ("uri", &self.uri),
        ];
        for (name, branch) in branches {
            if let Some(key) = branch {
                write!(f, " {}={}", name, key)?;
            }
        }
        write!(f, " }}")
    }
}
