//! # Token Decoder Trait

use crate::{errors::MPResult, types::TokenType};

/// A trait for token to text decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens into text.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens to decode.
    ///
    /// ## Returns
    /// The text, or [`MixpieceError::IdNotFound`](crate::errors::MixpieceError::IdNotFound)
    /// for the first token outside of the vocabulary.
    fn decode(
        &self,
        tokens: &[T],
    ) -> MPResult<String>;

    /// Decode a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - The token sequences to decode.
    ///
    /// ## Returns
    /// One string per sequence; or the first decode error.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> MPResult<Vec<String>> {
        batch.iter().map(|tokens| self.decode(tokens)).collect()
    }
}
