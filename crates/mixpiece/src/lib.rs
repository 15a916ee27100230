//! # `mixpiece` Mixed Chinese/Latin Wordpiece Tokenizer
//!
//! Converts mixed Chinese/Latin text into vocabulary token ids, and back.
//!
//! Encoding runs a two-stage pipeline:
//! 1. [`normalize`] full-width forms to half-width, then split the text into
//!    words with a [`segmentation::TextSegmentor`];
//! 2. replace spaces and newlines with glyphs ([`whitespace`]), then split each
//!    word by greedy longest-match-first [`wordpiece`] lookup against a
//!    [`vocab::Vocabulary`].
//!
//! Decoding concatenates the tokens and restores the whitespace.
//!
//! See:
//! * [`tokenizer`] for the combined [`Tokenizer`] and its options.
//! * [`encoders`] / [`decoders`] for the batch traits.
//! * [`vocab`] for vocabularies, special tokens, and vocab io.
//!
//! ```rust,ignore
//! use mixpiece::{TokenizerOptions, segmentation::SegmentorConfig};
//!
//! let tokenizer = TokenizerOptions::default()
//!     .with_vocab_path("vocab.txt")
//!     .with_segmentor(SegmentorConfig::from_dictionary_path("dict.txt"))
//!     .build::<u32>()?;
//!
//! let ids = tokenizer.encode("我爱北京天安门 hello world");
//! let text = tokenizer.decode(&ids)?;
//! let span = tokenizer.get_span(5)?;
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod normalize;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;
pub mod whitespace;
pub mod wordpiece;

#[cfg(feature = "rayon")]
pub mod rayon;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{MPResult, MixpieceError};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::Vocabulary;
