//! # Special Tokens
//!
//! The closed set of document/unknown markers, and the numbered
//! `<s_N>` sentinel family used to mark masked spans.

use crate::{
    errors::{MPResult, MixpieceError},
    types::TokenType,
    vocab::Vocabulary,
};

/// The start-of-document token.
pub const SOD_TOKEN: &str = "<s>";

/// The end-of-document token.
pub const EOD_TOKEN: &str = "<eod>";

/// The unknown token.
pub const UNK_TOKEN: &str = "<unk>";

/// The default number of sentinel tokens expected in a vocabulary.
pub const DEFAULT_MAX_SENTINELS: usize = 190;

/// Format the `n`-th sentinel token, `<s_n>`.
pub fn sentinel_token(n: usize) -> String {
    format!("<s_{n}>")
}

/// The fixed special tokens.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
pub enum SpecialToken {
    /// `<s>`
    #[strum(serialize = "<s>")]
    StartOfDocument,

    /// `<eod>`
    #[strum(serialize = "<eod>")]
    EndOfDocument,

    /// `<unk>`
    #[strum(serialize = "<unk>")]
    Unknown,
}

impl SpecialToken {
    /// The token string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StartOfDocument => SOD_TOKEN,
            Self::EndOfDocument => EOD_TOKEN,
            Self::Unknown => UNK_TOKEN,
        }
    }
}

/// Special token ids, resolved once against a [`Vocabulary`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialTokenIds<T: TokenType> {
    sod: T,
    eod: T,
    unk: T,
    sentinels: Vec<T>,
}

impl<T: TokenType> SpecialTokenIds<T> {
    /// Resolve the special tokens and the first `max_sentinels` sentinels.
    ///
    /// ## Returns
    /// [`MixpieceError::MissingSpecialToken`] for the first token not in `vocab`.
    pub fn resolve(
        vocab: &Vocabulary<T>,
        max_sentinels: usize,
    ) -> MPResult<Self> {
        let lookup = |token: &str| {
            vocab
                .get_id(token)
                .ok_or_else(|| MixpieceError::MissingSpecialToken(token.to_string()))
        };

        let sentinels = (0..max_sentinels)
            .map(|n| lookup(&sentinel_token(n)))
            .collect::<MPResult<Vec<T>>>()?;

        Ok(Self {
            sod: lookup(SpecialToken::StartOfDocument.as_str())?,
            eod: lookup(SpecialToken::EndOfDocument.as_str())?,
            unk: lookup(SpecialToken::Unknown.as_str())?,
            sentinels,
        })
    }

    /// The id of a fixed special token.
    pub fn get(
        &self,
        token: SpecialToken,
    ) -> T {
        match token {
            SpecialToken::StartOfDocument => self.sod,
            SpecialToken::EndOfDocument => self.eod,
            SpecialToken::Unknown => self.unk,
        }
    }

    /// The `<s>` id.
    pub fn sod(&self) -> T {
        self.sod
    }

    /// The `<eod>` id.
    pub fn eod(&self) -> T {
        self.eod
    }

    /// The `<unk>` id.
    pub fn unk(&self) -> T {
        self.unk
    }

    /// The number of resolved sentinels.
    pub fn max_sentinels(&self) -> usize {
        self.sentinels.len()
    }

    /// All sentinel ids, in order.
    pub fn sentinels(&self) -> &[T] {
        &self.sentinels
    }

    /// The id of `<s_n>`.
    ///
    /// ## Returns
    /// [`MixpieceError::SpanOutOfRange`] when `n >= max_sentinels`.
    pub fn sentinel(
        &self,
        n: usize,
    ) -> MPResult<T> {
        self.sentinels
            .get(n)
            .copied()
            .ok_or(MixpieceError::SpanOutOfRange {
                index: n,
                max_sentinels: self.sentinels.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_special_token_strings() {
        for token in SpecialToken::iter() {
            assert_eq!(token.as_ref(), token.as_str());
            assert_eq!(token.to_string(), token.as_str());
            assert_eq!(SpecialToken::from_str(token.as_str()).unwrap(), token);
        }
        assert_eq!(sentinel_token(12), "<s_12>");
    }

    #[test]
    fn test_resolve() {
        type T = u32;

        let vocab = Vocabulary::<T>::from_tokens([
            "<s_1>", "<unk>", "<s>", "<eod>", "<s_0>", "x",
        ])
        .unwrap();

        let ids = SpecialTokenIds::resolve(&vocab, 2).unwrap();
        assert_eq!(ids.unk(), 1);
        assert_eq!(ids.sod(), 2);
        assert_eq!(ids.eod(), 3);
        assert_eq!(ids.get(SpecialToken::Unknown), 1);
        assert_eq!(ids.sentinels(), &[4, 0]);
        assert_eq!(ids.sentinel(1).unwrap(), 0);
        assert!(matches!(
            ids.sentinel(2),
            Err(MixpieceError::SpanOutOfRange {
                index: 2,
                max_sentinels: 2
            })
        ));

        assert!(matches!(
            SpecialTokenIds::resolve(&vocab, 3),
            Err(MixpieceError::MissingSpecialToken(ref s)) if s == "<s_2>"
        ));
    }

    #[test]
    fn test_missing_unk() {
        type T = u32;

        let vocab = Vocabulary::<T>::from_tokens(["<s>", "<eod>"]).unwrap();
        assert!(matches!(
            SpecialTokenIds::resolve(&vocab, 0),
            Err(MixpieceError::MissingSpecialToken(ref s)) if s == UNK_TOKEN
        ));
    }
}
