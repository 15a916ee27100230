//! # Wordpiece Tokenizer
//!
//! Greedy longest-match-first splitting of a single word against a
//! [`Vocabulary`].
//!
//! Pieces are matched verbatim; there is no continuation prefix.
//! A position where no vocabulary entry starts produces one unknown piece
//! and the cursor advances by a single character.

use std::sync::Arc;

use crate::{
    types::TokenType,
    vocab::{Vocabulary, special::UNK_TOKEN},
};

/// Words longer than this many chars become a single unknown piece.
pub const DEFAULT_MAX_INPUT_CHARS_PER_WORD: usize = 200;

/// One piece of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordPiece<'w, T: TokenType> {
    /// A vocabulary entry.
    Known {
        /// The matched text; equal to the vocabulary token.
        text: &'w str,

        /// The vocabulary id of `text`.
        id: T,
    },

    /// Text with no vocabulary match.
    Unknown,
}

impl<'w, T: TokenType> WordPiece<'w, T> {
    /// The piece id, substituting `unk_id` for unknown pieces.
    #[inline]
    pub fn id_or(
        &self,
        unk_id: T,
    ) -> T {
        match *self {
            Self::Known { id, .. } => id,
            Self::Unknown => unk_id,
        }
    }

    /// The piece token, substituting `unk_token` for unknown pieces.
    #[inline]
    pub fn token_or<'a>(
        &self,
        unk_token: &'a str,
    ) -> &'a str
    where
        'w: 'a,
    {
        match *self {
            Self::Known { text, .. } => text,
            Self::Unknown => unk_token,
        }
    }
}

/// Greedy longest-match-first wordpiece splitter.
#[derive(Debug, Clone)]
pub struct WordpieceTokenizer<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    unk_token: String,
    max_input_chars_per_word: usize,
}

impl<T: TokenType> WordpieceTokenizer<T> {
    /// Create a new splitter over `vocab`, using `<unk>` as the unknown token.
    pub fn new(vocab: Arc<Vocabulary<T>>) -> Self {
        Self {
            vocab,
            unk_token: UNK_TOKEN.to_string(),
            max_input_chars_per_word: DEFAULT_MAX_INPUT_CHARS_PER_WORD,
        }
    }

    /// Set the unknown token string emitted by [`Self::tokenize_word`].
    pub fn with_unk_token<S: Into<String>>(
        self,
        unk_token: S,
    ) -> Self {
        Self {
            unk_token: unk_token.into(),
            ..self
        }
    }

    /// Set the word length limit, in chars.
    pub fn with_max_input_chars_per_word(
        self,
        max_input_chars_per_word: usize,
    ) -> Self {
        Self {
            max_input_chars_per_word,
            ..self
        }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// Get the unknown token string.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// Get the word length limit, in chars.
    pub fn max_input_chars_per_word(&self) -> usize {
        self.max_input_chars_per_word
    }

    /// Visit the pieces of `word`, in order.
    ///
    /// ## Arguments
    /// * `word` - A single pre-segmented word.
    /// * `f` - Called once per piece.
    pub fn for_each_piece<'w, F>(
        &self,
        word: &'w str,
        mut f: F,
    ) where
        F: FnMut(WordPiece<'w, T>),
    {
        // Char boundaries, plus `word.len()`.
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain([word.len()])
            .collect();
        let n = bounds.len() - 1;

        if n > self.max_input_chars_per_word {
            f(WordPiece::Unknown);
            return;
        }

        let max_chars = self.vocab.max_token_chars();
        let mut start = 0;
        while start < n {
            let longest = (n - start).min(max_chars);
            let found = (1..=longest).rev().find_map(|len| {
                let text = &word[bounds[start]..bounds[start + len]];
                self.vocab
                    .get_id(text)
                    .map(|id| (len, WordPiece::Known { text, id }))
            });

            match found {
                Some((len, piece)) => {
                    f(piece);
                    start += len;
                }
                None => {
                    f(WordPiece::Unknown);
                    start += 1;
                }
            }
        }
    }

    /// Split `word` into [`WordPiece`]s.
    pub fn pieces<'w>(
        &self,
        word: &'w str,
    ) -> Vec<WordPiece<'w, T>> {
        let mut pieces = Vec::new();
        self.for_each_piece(word, |piece| pieces.push(piece));
        pieces
    }

    /// Split `word` into token strings.
    ///
    /// ## Returns
    /// The pieces, with unknown pieces replaced by the unknown token;
    /// non-empty for non-empty `word`.
    pub fn tokenize_word(
        &self,
        word: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        self.for_each_piece(word, |piece| {
            tokens.push(piece.token_or(&self.unk_token).to_string())
        });
        tokens
    }
}
