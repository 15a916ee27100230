//! # Error Types

/// Errors from mixpiece operations.
#[derive(Debug, thiserror::Error)]
pub enum MixpieceError {
    /// A token string is not present in the vocabulary.
    #[error("token not found in vocabulary: {0:?}")]
    TokenNotFound(String),

    /// A token id is outside of the vocabulary range.
    #[error("token id not found in vocabulary: {0}")]
    IdNotFound(usize),

    /// A sentinel span index is beyond the configured sentinel count.
    #[error("span index ({index}) out of range; max_sentinels is {max_sentinels}")]
    SpanOutOfRange {
        /// The requested span index.
        index: usize,

        /// The configured sentinel count.
        max_sentinels: usize,
    },

    /// A required special token is missing from the vocabulary.
    #[error("special token missing from vocabulary: {0:?}")]
    MissingSpecialToken(String),

    /// The vocabulary source contains a token more than once.
    #[error("duplicate token {token:?} at entry {line}; first seen at entry {first}")]
    DuplicateToken {
        /// The duplicated token.
        token: String,

        /// The id assigned to the first occurrence.
        first: usize,

        /// The (0-based, non-blank) entry index of the duplicate.
        line: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Invalid segmentation pattern.
    #[error("regex error: {0}")]
    Regex(String),

    /// The requested component needs a crate feature which is not enabled.
    #[error("feature {0:?} is not enabled")]
    FeatureDisabled(&'static str),

    /// Invalid or incomplete configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Parse error (dictionary, config, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MixpieceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type for mixpiece operations.
pub type MPResult<T> = core::result::Result<T, MixpieceError>;
