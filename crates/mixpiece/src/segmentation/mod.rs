//! # Text Segmentation
//!
//! Word segmentation ahead of wordpiece splitting.
//!
//! * [`TextSegmentor`] - the segmentation trait.
//! * [`RegexSegmentor`] - block segmentation by a word regex (the default).
//! * [`DictionarySegmentor`] - frequency-dictionary segmentation of Han text.
//! * `JiebaSegmentor` - ``jieba-rs`` segmentation (feature `jieba`).
//! * [`SegmentorConfig`] - serializable segmentor selection.

mod dictionary_segmentor;
#[cfg(feature = "jieba")]
mod jieba_segmentor;
mod regex_segmentor;
mod regex_wrapper;
mod segmentor_config;
mod text_segmentor;

#[doc(inline)]
pub use dictionary_segmentor::{
    DICTIONARY_BLOCK_PATTERN,
    DictionarySegmentor,
    load_dictionary_path,
    read_dictionary,
};
#[cfg(feature = "jieba")]
#[doc(inline)]
pub use jieba_segmentor::JiebaSegmentor;
#[doc(inline)]
pub use regex_segmentor::{
    DEFAULT_SEGMENT_PATTERN,
    MAX_HAN_SEGMENT_CHARS,
    RegexSegmentor,
    SpanRef,
};
#[doc(inline)]
pub use regex_wrapper::RegexWrapper;
#[doc(inline)]
pub use segmentor_config::SegmentorConfig;
#[doc(inline)]
pub use text_segmentor::TextSegmentor;
