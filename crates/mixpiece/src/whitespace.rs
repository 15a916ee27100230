//! # Whitespace Glyph Codec
//!
//! Vocabulary entries are whitespace-stripped, so literal spaces and newlines
//! can never be vocabulary tokens. Before wordpiece splitting they are swapped
//! for two glyphs which can be, and swapped back after decoding.

use std::borrow::Cow;

/// The glyph standing in for `' '`.
pub const SPACE_GLYPH: char = '\u{2582}';

/// The glyph standing in for `'\n'`.
pub const NEWLINE_GLYPH: char = '\u{2583}';

/// Map `' '` and `'\n'` to their glyphs; all other characters are unchanged.
#[inline(always)]
pub fn encode_whitespace_char(c: char) -> char {
    match c {
        ' ' => SPACE_GLYPH,
        '\n' => NEWLINE_GLYPH,
        c => c,
    }
}

/// The inverse of [`encode_whitespace_char`].
#[inline(always)]
pub fn decode_whitespace_char(c: char) -> char {
    match c {
        SPACE_GLYPH => ' ',
        NEWLINE_GLYPH => '\n',
        c => c,
    }
}

fn translate<F>(
    text: &str,
    needs: [char; 2],
    f: F,
) -> Cow<'_, str>
where
    F: Fn(char) -> char,
{
    if text.contains(needs) {
        Cow::Owned(text.chars().map(f).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace literal spaces and newlines with their glyphs.
pub fn encode_whitespace(text: &str) -> Cow<'_, str> {
    translate(text, [' ', '\n'], encode_whitespace_char)
}

/// Replace whitespace glyphs with literal spaces and newlines.
pub fn decode_whitespace(text: &str) -> Cow<'_, str> {
    translate(text, [SPACE_GLYPH, NEWLINE_GLYPH], decode_whitespace_char)
}
