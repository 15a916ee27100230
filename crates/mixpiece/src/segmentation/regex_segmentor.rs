//! # Regex Segmentor

use crate::{
    errors::MPResult,
    segmentation::{RegexWrapper, TextSegmentor},
};

/// The longest Han run [`DEFAULT_SEGMENT_PATTERN`] emits as one segment.
///
/// Longer runs are cut into consecutive chunks of at most this many chars,
/// which keeps every segment well under the wordpiece word length limit.
pub const MAX_HAN_SEGMENT_CHARS: usize = 32;

/// The default word pattern.
///
/// Runs of Han characters (at most [`MAX_HAN_SEGMENT_CHARS`] per segment),
/// runs of ASCII word characters (plus `+#&._%-`), `\r\n`, and then any
/// other single character, so every whitespace or punctuation character
/// becomes its own segment.
///
/// Han is the CJK Unified Ideographs range `U+4E00..=U+9FD5`, as in jieba's
/// block split; ideographs from the extension blocks fall through to the
/// single character branch.
pub const DEFAULT_SEGMENT_PATTERN: &str =
    r"(?s)[\x{4E00}-\x{9FD5}]{1,32}|[a-zA-Z0-9+#&._%\-]+|\r\n|.";

/// Span Label for [`RegexSegmentor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef<'t> {
    /// A pattern match.
    Word(&'t str),

    /// Text between (or around) pattern matches.
    Gap(&'t str),
}

impl<'t> SpanRef<'t> {
    /// The covered text.
    pub fn as_str(&self) -> &'t str {
        match *self {
            Self::Word(s) => s,
            Self::Gap(s) => s,
        }
    }
}

/// Regex-based [`TextSegmentor`].
///
/// Pattern matches are words; text the pattern does not match is emitted
/// as gap segments, so coverage is total for any pattern.
#[derive(Debug, Clone)]
pub struct RegexSegmentor {
    word_re: RegexWrapper,
}

impl Default for RegexSegmentor {
    fn default() -> Self {
        Self::new(RegexWrapper::Basic(default_segment_regex()))
    }
}

fn default_segment_regex() -> regex::Regex {
    static DEFAULT: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
        // Constant pattern; `test_default_patterns_compile` covers it.
        regex::Regex::new(DEFAULT_SEGMENT_PATTERN).expect("default pattern is valid")
    });
    DEFAULT.clone()
}

impl RegexSegmentor {
    /// Build a new [`RegexSegmentor`] from a compiled regex.
    pub fn new(word_re: RegexWrapper) -> Self {
        Self { word_re }
    }

    /// Build a new [`RegexSegmentor`] from a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The word pattern; look-around patterns use `fancy_regex`.
    pub fn from_pattern(pattern: &str) -> MPResult<Self> {
        Ok(Self::new(RegexWrapper::compile(pattern)?))
    }

    /// Get the word regex.
    pub fn word_regex(&self) -> &RegexWrapper {
        &self.word_re
    }

    /// Visit every [`SpanRef`] in `text`, in order.
    ///
    /// Empty matches are dropped.
    pub fn for_each_span_ref<'t, F>(
        &self,
        text: &'t str,
        mut f: F,
    ) where
        F: FnMut(SpanRef<'t>),
    {
        let mut last = 0;
        self.word_re.for_each_match(text, |range| {
            if range.is_empty() {
                return;
            }
            if last < range.start {
                f(SpanRef::Gap(&text[last..range.start]));
            }
            last = range.end;
            f(SpanRef::Word(&text[range]));
        });

        if last < text.len() {
            f(SpanRef::Gap(&text[last..]));
        }
    }

    /// Split `text` into [`SpanRef`]s.
    pub fn split_span_refs<'t>(
        &self,
        text: &'t str,
    ) -> Vec<SpanRef<'t>> {
        let mut spans = Vec::new();
        self.for_each_span_ref(text, |span| spans.push(span));
        spans
    }
}

impl TextSegmentor for RegexSegmentor {
    fn for_each_segment<'t>(
        &self,
        text: &'t str,
        f: &mut dyn FnMut(&'t str),
    ) {
        self.for_each_span_ref(text, |span| f(span.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::segmentation::DICTIONARY_BLOCK_PATTERN;

    #[test]
    fn test_default_segments() {
        let segmentor = RegexSegmentor::default();

        assert_eq!(
            segmentor.segment("hello world"),
            vec!["hello", " ", "world"]
        );
        assert_eq!(
            segmentor.segment("我爱北京天安门，v1.0版本!\r\n  end\n"),
            vec![
                "我爱北京天安门",
                "，",
                "v1.0",
                "版本",
                "!",
                "\r\n",
                " ",
                " ",
                "end",
                "\n"
            ]
        );
        assert!(segmentor.segment("").is_empty());
    }

    #[test]
    fn test_default_patterns_compile() {
        for pattern in [DEFAULT_SEGMENT_PATTERN, DICTIONARY_BLOCK_PATTERN] {
            let re = RegexWrapper::compile(pattern).unwrap();
            assert!(!re.is_fancy(), "{pattern}");
        }
        assert!(DEFAULT_SEGMENT_PATTERN.contains(&format!("{{1,{MAX_HAN_SEGMENT_CHARS}}}")));
    }

    #[test]
    fn test_long_han_runs_are_chunked() {
        let segmentor = RegexSegmentor::default();

        let text = "我爱北京".repeat(51);
        let segments = segmentor.segment(&text);
        assert_eq!(segments.concat(), text);
        assert_eq!(segments.len(), 7);
        assert!(
            segments
                .iter()
                .all(|s| s.chars().count() <= MAX_HAN_SEGMENT_CHARS)
        );
        assert_eq!(segments[6].chars().count(), 204 - 6 * MAX_HAN_SEGMENT_CHARS);
    }

    #[test]
    fn test_han_range() {
        let segmentor = RegexSegmentor::default();

        // U+20000 and U+3400 are outside U+4E00..=U+9FD5.
        assert_eq!(
            segmentor.segment("北京\u{20000}\u{3400}大学"),
            vec!["北京", "\u{20000}", "\u{3400}", "大学"]
        );
    }

    #[test]
    fn test_gaps() {
        let segmentor = RegexSegmentor::from_pattern(r"[a-z]+").unwrap();

        assert_eq!(
            segmentor.split_span_refs("  ab12cd!"),
            vec![
                SpanRef::Gap("  "),
                SpanRef::Word("ab"),
                SpanRef::Gap("12"),
                SpanRef::Word("cd"),
                SpanRef::Gap("!"),
            ]
        );
    }

    #[test]
    fn test_empty_matches_dropped() {
        let segmentor = RegexSegmentor::from_pattern(r"[a-z]*").unwrap();
        assert_eq!(segmentor.segment("ab 12"), vec!["ab", " 12"]);
    }

    proptest! {
        #[test]
        fn prop_default_coverage(text in "[a-zA-Z0-9 \n\r\t.,!中文的是，。]*") {
            let segments = RegexSegmentor::default().segment(&text);
            prop_assert!(segments.iter().all(|s| !s.is_empty()));
            prop_assert_eq!(segments.concat(), text);
        }
    }
}
