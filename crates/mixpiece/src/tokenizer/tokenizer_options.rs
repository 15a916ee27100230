use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
    decoders::TokenDecoder,
    encoders::TokenEncoder,
    errors::{MPResult, MixpieceError},
    segmentation::SegmentorConfig,
    tokenizer::Tokenizer,
    types::TokenType,
    vocab::{DuplicatePolicy, Vocabulary, io::load_vocab_path, special::DEFAULT_MAX_SENTINELS},
    wordpiece::DEFAULT_MAX_INPUT_CHARS_PER_WORD,
};

/// Options for configuring a [`Tokenizer`].
///
/// Every field has a default, so a JSON options file only needs
/// the fields it changes:
///
/// ```json
/// {
///   "vocab_path": "vocab.txt",
///   "max_sentinels": 190,
///   "segmentor": {"kind": "dictionary", "path": "dict.txt"}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// The vocabulary file; required by [`Self::build`].
    pub vocab_path: Option<PathBuf>,

    /// Sequence length limit for downstream truncation.
    pub max_len: Option<usize>,

    /// The number of `<s_N>` sentinels the vocabulary must hold.
    pub max_sentinels: usize,

    /// Words longer than this many chars become a single unknown token.
    pub max_input_chars_per_word: usize,

    /// Handling of repeated vocabulary entries.
    pub duplicates: DuplicatePolicy,

    /// The word segmentor.
    pub segmentor: SegmentorConfig,

    /// Request ``rayon`` batch parallelism.
    pub parallel: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            vocab_path: None,
            max_len: None,
            max_sentinels: DEFAULT_MAX_SENTINELS,
            max_input_chars_per_word: DEFAULT_MAX_INPUT_CHARS_PER_WORD,
            duplicates: DuplicatePolicy::default(),
            segmentor: SegmentorConfig::default(),
            parallel: false,
        }
    }
}

impl TokenizerOptions {
    /// Load options from a JSON file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> MPResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(json: &str) -> MPResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the options as pretty JSON.
    pub fn to_json_string(&self) -> MPResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Gets the vocabulary path.
    pub fn vocab_path(&self) -> Option<&Path> {
        self.vocab_path.as_deref()
    }

    /// Sets the vocabulary path.
    pub fn with_vocab_path<P: Into<PathBuf>>(
        mut self,
        path: P,
    ) -> Self {
        self.vocab_path = Some(path.into());
        self
    }

    /// Gets the sequence length limit.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Sets the sequence length limit.
    pub fn with_max_len(
        mut self,
        max_len: Option<usize>,
    ) -> Self {
        self.max_len = max_len;
        self
    }

    /// Gets the sentinel count.
    pub fn max_sentinels(&self) -> usize {
        self.max_sentinels
    }

    /// Sets the sentinel count.
    pub fn with_max_sentinels(
        mut self,
        max_sentinels: usize,
    ) -> Self {
        self.max_sentinels = max_sentinels;
        self
    }

    /// Gets the word length limit, in chars.
    pub fn max_input_chars_per_word(&self) -> usize {
        self.max_input_chars_per_word
    }

    /// Sets the word length limit, in chars.
    pub fn with_max_input_chars_per_word(
        mut self,
        max_input_chars_per_word: usize,
    ) -> Self {
        self.max_input_chars_per_word = max_input_chars_per_word;
        self
    }

    /// Gets the duplicate token policy.
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Sets the duplicate token policy.
    pub fn with_duplicates(
        mut self,
        duplicates: DuplicatePolicy,
    ) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Gets the segmentor config.
    pub fn segmentor(&self) -> &SegmentorConfig {
        &self.segmentor
    }

    /// Sets the segmentor config.
    pub fn with_segmentor(
        mut self,
        segmentor: SegmentorConfig,
    ) -> Self {
        self.segmentor = segmentor;
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`Tokenizer`], loading the vocabulary from `vocab_path`.
    ///
    /// ## Returns
    /// The tokenizer; [`MixpieceError::Config`] when `vocab_path` is unset.
    pub fn build<T: TokenType>(&self) -> MPResult<Tokenizer<T>> {
        let path = self
            .vocab_path()
            .ok_or_else(|| MixpieceError::Config("vocab_path is not set".to_string()))?;
        let vocab = load_vocab_path(path, self.duplicates)?;
        self.build_with_vocab(Arc::new(vocab))
    }

    /// Build a [`Tokenizer`] for the given vocab; `vocab_path` is ignored.
    pub fn build_with_vocab<T: TokenType>(
        &self,
        vocab: Arc<Vocabulary<T>>,
    ) -> MPResult<Tokenizer<T>> {
        Tokenizer::from_options(vocab, self.segmentor.build()?, self)
    }

    /// Build a [`TokenEncoder`]; batch-parallel when [`Self::parallel`] is set.
    pub fn build_encoder<T: TokenType>(&self) -> MPResult<Arc<dyn TokenEncoder<T>>> {
        let tokenizer = self.build::<T>()?;
        Ok(self.wrap_encoder(tokenizer))
    }

    /// Build a [`TokenDecoder`]; batch-parallel when [`Self::parallel`] is set.
    pub fn build_decoder<T: TokenType>(&self) -> MPResult<Arc<dyn TokenDecoder<T>>> {
        let tokenizer = self.build::<T>()?;
        Ok(self.wrap_decoder(tokenizer))
    }

    /// Wrap a tokenizer as a [`TokenEncoder`], honoring [`Self::parallel`].
    pub fn wrap_encoder<T: TokenType>(
        &self,
        tokenizer: Tokenizer<T>,
    ) -> Arc<dyn TokenEncoder<T>> {
        #[cfg(feature = "rayon")]
        if self.parallel {
            return Arc::new(crate::rayon::ParallelRayonEncoder::new(tokenizer));
        }
        #[cfg(not(feature = "rayon"))]
        if self.parallel {
            log::warn!("parallel encoding requested without the \"rayon\" feature");
        }
        Arc::new(tokenizer)
    }

    /// Wrap a tokenizer as a [`TokenDecoder`], honoring [`Self::parallel`].
    pub fn wrap_decoder<T: TokenType>(
        &self,
        tokenizer: Tokenizer<T>,
    ) -> Arc<dyn TokenDecoder<T>> {
        #[cfg(feature = "rayon")]
        if self.parallel {
            return Arc::new(crate::rayon::ParallelRayonDecoder::new(tokenizer));
        }
        #[cfg(not(feature = "rayon"))]
        if self.parallel {
            log::warn!("parallel decoding requested without the \"rayon\" feature");
        }
        Arc::new(tokenizer)
    }
}
