//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

use crate::errors::{MPResult, MixpieceError};

/// Wrapper for regex patterns.
///
/// Patterns are compiled with `regex` when possible, and with `fancy_regex`
/// when they need look-around or back-references.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Compile a pattern; try `regex` first, and fall back to `fancy_regex`.
    pub fn compile(pattern: &str) -> MPResult<Self> {
        regex::Regex::new(pattern).map(Self::from).or_else(|_| {
            fancy_regex::Regex::new(pattern)
                .map(Self::from)
                .map_err(|err| MixpieceError::Regex(err.to_string()))
        })
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Visit the byte range of every non-overlapping match, in order.
    ///
    /// A `fancy_regex` runtime error (such as an exceeded backtrack limit)
    /// ends the scan; the unscanned remainder produces no matches.
    pub fn for_each_match<F>(
        &self,
        haystack: &str,
        mut f: F,
    ) where
        F: FnMut(Range<usize>),
    {
        match self {
            Self::Basic(regex) => regex.find_iter(haystack).for_each(|m| f(m.range())),
            Self::Fancy(regex) => {
                for m in regex.find_iter(haystack) {
                    match m {
                        Ok(m) => f(m.range()),
                        Err(err) => {
                            log::warn!("regex scan of {} bytes stopped: {err}", haystack.len());
                            break;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_adaptive() {
        let basic = RegexWrapper::compile(r"\w+").unwrap();
        assert!(!basic.is_fancy());
        assert_eq!(basic.as_str(), r"\w+");

        let fancy = RegexWrapper::compile(r"\w+(?=!)").unwrap();
        assert!(fancy.is_fancy());

        assert!(matches!(
            RegexWrapper::compile(r"(unclosed"),
            Err(MixpieceError::Regex(_))
        ));
    }

    #[test]
    fn test_for_each_match() {
        let text = "ab cd! ef!";
        for pattern in [r"\w+", r"\w+(?=!)"] {
            let re = RegexWrapper::compile(pattern).unwrap();
            let mut found = Vec::new();
            re.for_each_match(text, |r| found.push(&text[r]));

            if re.is_fancy() {
                assert_eq!(found, vec!["cd", "ef"]);
            } else {
                assert_eq!(found, vec!["ab", "cd", "ef"]);
            }
        }
    }
}
