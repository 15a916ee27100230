//! # Vocabulary Test Utilities

use crate::{
    types::TokenType,
    vocab::{
        Vocabulary,
        special::{EOD_TOKEN, SOD_TOKEN, UNK_TOKEN, sentinel_token},
    },
};

/// Build a token list: `<unk>`, `<s>`, `<eod>`, then `words`, then `max_sentinels` sentinels.
pub fn build_test_vocab_tokens(
    words: &[&str],
    max_sentinels: usize,
) -> Vec<String> {
    [UNK_TOKEN, SOD_TOKEN, EOD_TOKEN]
        .iter()
        .chain(words)
        .map(|s| s.to_string())
        .chain((0..max_sentinels).map(sentinel_token))
        .collect()
}

/// Build a test [`Vocabulary`] from [`build_test_vocab_tokens`].
///
/// ## Panics
/// If `words` repeats a token.
pub fn build_test_vocab<T: TokenType>(
    words: &[&str],
    max_sentinels: usize,
) -> Vocabulary<T> {
    Vocabulary::from_tokens(build_test_vocab_tokens(words, max_sentinels))
        .expect("test vocab words must be unique")
}
