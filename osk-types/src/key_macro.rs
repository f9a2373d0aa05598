/// Create a character key. For example, `txt!('a')` represents `KeyData::Text(TextKeyData::character('a'))`
#[macro_export]
macro_rules! txt {
    ($c: literal) => {
        $crate::key_data::KeyData::Text($crate::key_data::TextKeyData::character($c))
    };
}

/// Create a popup-aware character key with popup alternatives, e.g. `popup!('e', ['é', 'è'])`
#[macro_export]
macro_rules! popup {
    ($c: literal, [$($p: literal),* $(,)?]) => {
        $crate::key_data::KeyData::PopupAwareText(
            $crate::key_data::PopupAwareTextKeyData::from($crate::key_data::TextKeyData::character($c)).with_popup(
                $crate::popup::PopupSet::new()
                    .with_relevant([$($crate::key_data::TextKeyData::character($p)),*].into_iter().collect()),
            ),
        )
    };
}

/// Create an emoji key from its code points, e.g. `emoji!(0x1F600)`
#[macro_export]
macro_rules! emoji {
    ($($cp: expr),+ $(,)?) => {
        $crate::key_data::KeyData::Emoji($crate::key_data::EmojiKeyData::new(
            [$($cp),+].into_iter().collect(),
            "",
        ))
    };
}

/// Create a case selector, `case!(lower, upper)`
#[macro_export]
macro_rules! case {
    ($lower: expr, $upper: expr $(,)?) => {
        $crate::key_data::KeyData::CaseSelector($crate::key_data::CaseSelector::new($lower, $upper))
    };
}

/// Create a variation selector. For example, `variation!(txt!(','), Uri => txt!('/'))` types `/`
/// in URI fields and `,` everywhere else.
#[macro_export]
macro_rules! variation {
    ($default: expr $(, $v: ident => $k: expr)* $(,)?) => {
        $crate::key_data::KeyData::VariationSelector(
            $crate::key_data::VariationSelector::new($default)
                $(.with($crate::key_type::KeyVariation::$v, $k))*
        )
    };
}
