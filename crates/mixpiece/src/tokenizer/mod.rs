//! # Combined Tokenizer
//!
//! * [`Tokenizer`] - the normalize, segment, wordpiece pipeline and its inverse.
//! * [`TokenizerOptions`] - serializable construction parameters.

mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
