//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! * [`Vocabulary`] - the dense, ordered ``{ String <-> T }`` token map.
//! * [`special`] - the fixed special tokens and the `<s_N>` sentinel family.
//! * [`io`] - the one-token-per-line vocab file format.

pub mod io;
pub mod special;
mod vocabulary;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use special::{SpecialToken, SpecialTokenIds};
#[doc(inline)]
pub use vocabulary::{DuplicatePolicy, Vocabulary};
