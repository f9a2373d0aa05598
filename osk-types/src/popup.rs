//! Long-press popups.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Popup alternatives of a key, shown on long press.
///
/// The set is carried along with its key; which alternative gets picked is decided by the
/// popup UI, not here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopupSet<T> {
    /// Alternative selected by default when the popup opens
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub main: Option<T>,
    /// Further alternatives, in display order
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub relevant: Vec<T>,
}

impl<T> PopupSet<T> {
    /// An empty popup set
    pub const fn new() -> Self {
        Self {
            main: None,
            relevant: Vec::new(),
        }
    }

    pub fn with_main(mut self, main: T) -> Self {
        self.main = Some(main);
        self
    }

    pub fn with_relevant(mut self, relevant: Vec<T>) -> Self {
        self.relevant = relevant;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.relevant.is_empty()
    }

    /// Number of alternatives, including the main one
    pub fn len(&self) -> usize {
        self.relevant.len() + usize::from(self.main.is_some())
    }

    /// All alternatives, main first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.main.iter().chain(self.relevant.iter())
    }
}

impl<T> Default for PopupSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
