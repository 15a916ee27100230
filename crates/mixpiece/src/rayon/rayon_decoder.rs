//! # Parallel Decoder

use crate::{decoders::TokenDecoder, errors::MPResult, types::TokenType};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
#[derive(Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: std::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn decode(
        &self,
        tokens: &[T],
    ) -> MPResult<String> {
        self.inner.decode(tokens)
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> MPResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.decode(tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        errors::MixpieceError,
        segmentation::RegexSegmentor,
        tokenizer::{Tokenizer, TokenizerOptions},
        vocab::testing::build_test_vocab,
    };

    #[test]
    fn test_decoder() {
        type T = u32;

        let samples = vec!["hello world", "你好\n世界", "world hello"];

        let vocab = build_test_vocab::<T>(&["hello", "world", "你好", "世界", "▂", "▃"], 1);
        let options = TokenizerOptions::default().with_max_sentinels(1);
        let tokenizer = Tokenizer::from_options(
            Arc::new(vocab),
            Arc::new(RegexSegmentor::default()),
            &options,
        )
        .unwrap();

        let decoder = ParallelRayonDecoder::new(tokenizer.clone());

        let token_batch: Vec<Vec<T>> = samples.iter().map(|s| tokenizer.encode(s)).collect();
        let refs: Vec<&[T]> = token_batch.iter().map(Vec::as_slice).collect();

        assert_eq!(decoder.decode_batch(&refs).unwrap(), samples);
        assert_eq!(decoder.decode(refs[1]).unwrap(), samples[1]);

        let bad: [&[T]; 2] = [&[3], &[3, 1000]];
        assert!(matches!(
            decoder.decode_batch(&bad),
            Err(MixpieceError::IdNotFound(1000))
        ));
    }
}
