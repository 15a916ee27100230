//! # Jieba Segmentor

use crate::segmentation::TextSegmentor;

/// [`TextSegmentor`] backed by ``jieba-rs``, using its bundled dictionary.
///
/// Uses accurate mode (not full mode), with HMM discovery of unknown words
/// enabled by default.
pub struct JiebaSegmentor {
    jieba: jieba_rs::Jieba,
    hmm: bool,
}

impl Default for JiebaSegmentor {
    fn default() -> Self {
        Self::from_jieba(jieba_rs::Jieba::new())
    }
}

impl JiebaSegmentor {
    /// Wrap a configured [`jieba_rs::Jieba`].
    pub fn from_jieba(jieba: jieba_rs::Jieba) -> Self {
        Self { jieba, hmm: true }
    }

    /// Enable or disable HMM unknown-word discovery.
    pub fn with_hmm(
        mut self,
        hmm: bool,
    ) -> Self {
        self.hmm = hmm;
        self
    }
}

impl TextSegmentor for JiebaSegmentor {
    fn for_each_segment<'t>(
        &self,
        text: &'t str,
        f: &mut dyn FnMut(&'t str),
    ) {
        for word in self.jieba.cut(text, self.hmm) {
            f(word);
        }
    }
}
