//! Key codes.
//!
//! A key's `code` is either a Unicode scalar value, which is the character sent to the
//! editor, or one of the reserved values in [`KeyCode`] below [`SPACE_CODE`] denoting an
//! action.

use core::ops::RangeInclusive;

use strum::{FromRepr, IntoStaticStr};

/// Code of the space character, every code below it is reserved for actions
pub const SPACE_CODE: i32 = KeyCode::Space as i32;

/// The Combining Diacritical Marks block.
/// Ref: <https://en.wikipedia.org/wiki/Combining_Diacritical_Marks>
pub const COMBINING_DIACRITICAL_MARKS: RangeInclusive<i32> = 0x0300..=0x036F;

/// Placeholder shown in front of a standalone combining mark, `◌`
pub const DOTTED_CIRCLE: char = '\u{25CC}';

/// Named codes understood by the input method
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum KeyCode {
    /// No key
    Unspecified = 0,

    Tab = 9,
    Enter = 10,
    Space = 32,

    // Modifiers
    Ctrl = -1,
    CtrlLock = -2,
    Alt = -3,
    AltLock = -4,
    Shift = -11,
    ShiftLock = -12,
    CapsLock = -13,

    // Editing
    Delete = -7,
    DeleteWord = -8,
    ForwardDelete = -9,
    ForwardDeleteWord = -10,

    // Cursor movement
    ArrowLeft = -21,
    ArrowRight = -22,
    ArrowUp = -23,
    ArrowDown = -24,
    MoveStartOfPage = -25,
    MoveEndOfPage = -26,
    MoveStartOfLine = -27,
    MoveEndOfLine = -28,

    // Clipboard
    ClipboardCopy = -31,
    ClipboardCut = -32,
    ClipboardPaste = -33,
    ClipboardSelect = -34,
    ClipboardSelectAll = -35,
    ClipboardClearHistory = -36,

    Undo = -131,
    Redo = -132,

    // Views and contexts
    ViewCharacters = -201,
    ViewSymbols = -202,
    ViewSymbols2 = -203,
    ViewNumeric = -204,
    ViewNumericAdvanced = -205,
    ViewPhone = -206,
    ViewPhone2 = -207,
    ShowInputMethodPicker = -211,
    SwitchToTextContext = -212,
    SwitchToMediaContext = -213,
    SwitchToClipboardContext = -214,

    /// Groups the following edits into one batch
    InternalBatchEdit = -901,
}

impl KeyCode {
    /// Raw code of this key
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Snake case name of the code, e.g. `arrow_down`
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl From<KeyCode> for i32 {
    fn from(value: KeyCode) -> Self {
        value as i32
    }
}

/// Whether `code` is a character rather than a reserved action code
pub const fn is_printable(code: i32) -> bool {
    code >= SPACE_CODE
}

/// Whether `code` is a combining diacritical mark, which needs a base to be visible
pub fn is_combining_mark(code: i32) -> bool {
    COMBINING_DIACRITICAL_MARKS.contains(&code)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_action_codes_below_space() {
        for code in -1000..SPACE_CODE {
            if let Some(key) = KeyCode::from_repr(code) {
                assert!(!is_printable(key.code()), "{:?} must not be printable", key);
            }
        }
        assert!(is_printable(KeyCode::Space.code()));
        assert!(is_printable('a' as i32));
    }

    #[test]
    fn test_key_code_from_repr() {
        assert_eq!(KeyCode::from_repr(-24), Some(KeyCode::ArrowDown));
        assert_eq!(KeyCode::from_repr(32), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_repr(-999), None);
        assert_eq!(KeyCode::ArrowDown.name(), "arrow_down");
        assert_eq!(KeyCode::ViewSymbols2.name(), "view_symbols2");
    }

    #[test]
    fn test_combining_mark_range() {
        assert!(!is_combining_mark(0x02FF));
        assert!(is_combining_mark(0x0300));
        assert!(is_combining_mark(0x0301));
        assert!(is_combining_mark(0x036F));
        assert!(!is_combining_mark(0x0370));
    }
}
