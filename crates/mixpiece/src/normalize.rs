//! # Full-Width to Half-Width Normalization
//!
//! CJK typesetting encodes the printable ASCII range a second time, as
//! double-width "full-width" forms at `U+FF01..=U+FF5E` (plus the ideographic
//! space `U+3000`). Normalization maps those back onto ASCII, one character at
//! a time, so the vocabulary only needs to carry one form.
//!
//! The CJK sentence punctuation in [`PRESERVED_PUNCTUATION`] is left untouched.

use std::borrow::Cow;

/// Full-width CJK punctuation which is never normalized.
pub const PRESERVED_PUNCTUATION: [char; 9] = ['，', '。', '！', '（', '）', '？', '、', '；', '：'];

/// The ideographic (full-width) space.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// The offset between a full-width form and its ASCII counterpart.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Map a full-width character to its half-width form ("Q2B").
///
/// Total: characters with no half-width form are returned unchanged.
#[inline]
pub fn q2b(c: char) -> char {
    if PRESERVED_PUNCTUATION.contains(&c) {
        return c;
    }

    let code = match c {
        IDEOGRAPHIC_SPACE => 0x20,
        _ => match (c as u32).checked_sub(FULL_WIDTH_OFFSET) {
            Some(code) => code,
            None => return c,
        },
    };

    if (0x20..=0x7E).contains(&code) {
        // The range check makes this infallible.
        char::from_u32(code).unwrap_or(c)
    } else {
        c
    }
}

/// Is `text` unchanged by [`normalize_text`]?
pub fn is_normalized(text: &str) -> bool {
    text.chars().all(|c| q2b(c) == c)
}

/// Apply [`q2b`] to every character of `text`.
///
/// The result has the same number of characters as the input.
/// Text which is already normalized is borrowed.
pub fn normalize_text(text: &str) -> Cow<'_, str> {
    if is_normalized(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().map(q2b).collect())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_q2b() {
        assert_eq!(q2b('Ａ'), 'A');
        assert_eq!(q2b('ｚ'), 'z');
        assert_eq!(q2b('０'), '0');
        assert_eq!(q2b('！'), '！');
        assert_eq!(q2b('＃'), '#');
        assert_eq!(q2b('～'), '~');
        assert_eq!(q2b('　'), ' ');

        // Not full-width forms.
        assert_eq!(q2b('A'), 'A');
        assert_eq!(q2b(' '), ' ');
        assert_eq!(q2b('中'), '中');
        assert_eq!(q2b('｟'), '｟');
        assert_eq!(q2b('\u{FEE0}'), '\u{FEE0}');

        // Unassigned, but the shift lands on ASCII space.
        assert_eq!(q2b('\u{FF00}'), ' ');
    }

    #[test]
    fn test_preserved_punctuation_fixpoint() {
        for c in PRESERVED_PUNCTUATION {
            assert_eq!(q2b(c), c);
        }
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Ｈｅｌｌｏ，　ＷＯＲＬＤ！"), "Hello， WORLD！");
        assert_eq!(normalize_text("（１２３）"), "（123）");

        assert!(matches!(normalize_text("plain 中文"), Cow::Borrowed(_)));
        assert!(is_normalized("plain 中文。"));
        assert!(!is_normalized("ｐlain"));
    }

    proptest! {
        #[test]
        fn prop_normalize_preserves_length(text in "\\PC*") {
            let normalized = normalize_text(&text);
            prop_assert_eq!(normalized.chars().count(), text.chars().count());
        }

        #[test]
        fn prop_normalize_is_idempotent(text in "\\PC*") {
            let once = normalize_text(&text).into_owned();
            prop_assert!(is_normalized(&once));
            prop_assert_eq!(normalize_text(&once), once.as_str());
        }
    }
}
