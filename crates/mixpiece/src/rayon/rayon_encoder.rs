//! # Parallel Encoder

use crate::{encoders::TokenEncoder, types::TokenType};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, D: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: D,

    _marker: std::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, D> TokenEncoder<T> for ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.inner.tokenize(text)
    }

    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.inner.encode(text)
    }

    fn tokenize_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<String>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.inner.tokenize(text)).collect()
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }
}
