//! # Token Encoder Trait

use crate::types::TokenType;

/// A trait for text to token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Split text into token strings.
    ///
    /// ## Arguments
    /// * `text` - The text to tokenize.
    ///
    /// ## Returns
    /// The token strings; pieces without a vocabulary match are the unknown token.
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String>;

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The token ids; pieces without a vocabulary match are the unknown id.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T>;

    /// Split a batch of text into token strings.
    ///
    /// ## Arguments
    /// * `batch` - The texts to tokenize.
    ///
    /// ## Returns
    /// One token string vector per text.
    fn tokenize_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<String>> {
        batch.iter().map(|text| self.tokenize(text)).collect()
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - The texts to encode.
    ///
    /// ## Returns
    /// One token vector per text.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
