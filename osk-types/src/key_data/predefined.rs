//! Built-in action keys.

use super::TextKeyData;
use crate::key_type::KeyType;
use crate::keycode::KeyCode;

const fn action(key_type: KeyType, code: KeyCode, label: &'static str) -> TextKeyData {
    TextKeyData::from_static(key_type, code.code(), label)
}

impl TextKeyData {
    pub const ARROW_DOWN: Self = action(KeyType::Navigation, KeyCode::ArrowDown, "arrow_down");
    pub const ARROW_LEFT: Self = action(KeyType::Navigation, KeyCode::ArrowLeft, "arrow_left");
    pub const ARROW_RIGHT: Self = action(KeyType::Navigation, KeyCode::ArrowRight, "arrow_right");
    pub const ARROW_UP: Self = action(KeyType::Navigation, KeyCode::ArrowUp, "arrow_up");
    pub const CLIPBOARD_COPY: Self = action(KeyType::SystemGui, KeyCode::ClipboardCopy, "clipboard_copy");
    pub const CLIPBOARD_CUT: Self = action(KeyType::SystemGui, KeyCode::ClipboardCut, "clipboard_cut");
    pub const CLIPBOARD_PASTE: Self = action(KeyType::SystemGui, KeyCode::ClipboardPaste, "clipboard_paste");
    pub const CLIPBOARD_SELECT: Self = action(KeyType::SystemGui, KeyCode::ClipboardSelect, "clipboard_select");
    pub const CLIPBOARD_SELECT_ALL: Self =
        action(KeyType::SystemGui, KeyCode::ClipboardSelectAll, "clipboard_select_all");
    pub const DELETE: Self = action(KeyType::EnterEditing, KeyCode::Delete, "delete");
    pub const DELETE_WORD: Self = action(KeyType::EnterEditing, KeyCode::DeleteWord, "delete_word");
    pub const INTERNAL_BATCH_EDIT: Self =
        action(KeyType::Function, KeyCode::InternalBatchEdit, "internal_batch_edit");
    pub const MOVE_START_OF_LINE: Self =
        action(KeyType::Navigation, KeyCode::MoveStartOfLine, "move_start_of_line");
    pub const MOVE_END_OF_LINE: Self = action(KeyType::Navigation, KeyCode::MoveEndOfLine, "move_end_of_line");
    pub const MOVE_START_OF_PAGE: Self =
        action(KeyType::Navigation, KeyCode::MoveStartOfPage, "move_start_of_page");
    pub const MOVE_END_OF_PAGE: Self = action(KeyType::Navigation, KeyCode::MoveEndOfPage, "move_end_of_page");
    pub const REDO: Self = action(KeyType::SystemGui, KeyCode::Redo, "redo");
    pub const SHOW_INPUT_METHOD_PICKER: Self =
        action(KeyType::Function, KeyCode::ShowInputMethodPicker, "show_input_method_picker");
    pub const SWITCH_TO_TEXT_CONTEXT: Self =
        action(KeyType::SystemGui, KeyCode::SwitchToTextContext, "switch_to_text_context");
    pub const SWITCH_TO_CLIPBOARD_CONTEXT: Self = action(
        KeyType::SystemGui,
        KeyCode::SwitchToClipboardContext,
        "switch_to_clipboard_context",
    );
    pub const SHIFT: Self = action(KeyType::Modifier, KeyCode::Shift, "shift");
    pub const SHIFT_LOCK: Self = action(KeyType::Modifier, KeyCode::ShiftLock, "shift_lock");
    pub const SPACE: Self = action(KeyType::Character, KeyCode::Space, "space");
    pub const UNDO: Self = action(KeyType::SystemGui, KeyCode::Undo, "undo");
    pub const UNSPECIFIED: Self = action(KeyType::Unspecified, KeyCode::Unspecified, "unspecified");
    pub const VIEW_CHARACTERS: Self = action(KeyType::SystemGui, KeyCode::ViewCharacters, "view_characters");
    pub const VIEW_SYMBOLS: Self = action(KeyType::SystemGui, KeyCode::ViewSymbols, "view_symbols");
    pub const VIEW_SYMBOLS2: Self = action(KeyType::SystemGui, KeyCode::ViewSymbols2, "view_symbols2");
    pub const VIEW_NUMERIC_ADVANCED: Self =
        action(KeyType::SystemGui, KeyCode::ViewNumericAdvanced, "view_numeric_advanced");

    /// Built-in key for `code`, if there is one
    pub fn predefined(code: KeyCode) -> Option<&'static TextKeyData> {
        PREDEFINED.iter().find(|key| key.code == code.code())
    }
}

static PREDEFINED: [TextKeyData; 29] = [
    TextKeyData::ARROW_DOWN,
    TextKeyData::ARROW_LEFT,
    TextKeyData::ARROW_RIGHT,
    TextKeyData::ARROW_UP,
    TextKeyData::CLIPBOARD_COPY,
    TextKeyData::CLIPBOARD_CUT,
    TextKeyData::CLIPBOARD_PASTE,
    TextKeyData::CLIPBOARD_SELECT,
    TextKeyData::CLIPBOARD_SELECT_ALL,
    TextKeyData::DELETE,
    TextKeyData::DELETE_WORD,
    TextKeyData::INTERNAL_BATCH_EDIT,
    TextKeyData::MOVE_START_OF_LINE,
    TextKeyData::MOVE_END_OF_LINE,
    TextKeyData::MOVE_START_OF_PAGE,
    TextKeyData::MOVE_END_OF_PAGE,
    TextKeyData::REDO,
    TextKeyData::SHOW_INPUT_METHOD_PICKER,
    TextKeyData::SWITCH_TO_TEXT_CONTEXT,
    TextKeyData::SWITCH_TO_CLIPBOARD_CONTEXT,
    TextKeyData::SHIFT,
    TextKeyData::SHIFT_LOCK,
    TextKeyData::SPACE,
    TextKeyData::UNDO,
    TextKeyData::UNSPECIFIED,
    TextKeyData::VIEW_CHARACTERS,
    TextKeyData::VIEW_SYMBOLS,
    TextKeyData::VIEW_SYMBOLS2,
    TextKeyData::VIEW_NUMERIC_ADVANCED,
];
