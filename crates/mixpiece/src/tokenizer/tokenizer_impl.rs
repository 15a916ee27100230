//! # Combined Tokenizer

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    encoders::TokenEncoder,
    errors::MPResult,
    normalize::normalize_text,
    segmentation::TextSegmentor,
    tokenizer::TokenizerOptions,
    types::TokenType,
    vocab::{
        SpecialToken,
        SpecialTokenIds,
        Vocabulary,
        special::{EOD_TOKEN, SOD_TOKEN, UNK_TOKEN},
    },
    whitespace::{decode_whitespace, encode_whitespace},
    wordpiece::{WordPiece, WordpieceTokenizer},
};

/// Mixed Chinese/Latin Wordpiece Tokenizer.
///
/// Combines:
///  * full-width to half-width normalization,
///  * a [`TextSegmentor`] for word segmentation,
///  * whitespace glyph substitution, and
///  * a [`WordpieceTokenizer`] over a shared [`Vocabulary`].
///
/// Cloning is cheap; all state is shared.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    segmentor: Arc<dyn TextSegmentor>,
    wordpiece: WordpieceTokenizer<T>,
    specials: Arc<SpecialTokenIds<T>>,
    max_len: Option<usize>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer with default options.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary; it must hold `<s>`, `<eod>`, `<unk>`,
    ///   and the default number of `<s_N>` sentinels.
    /// * `segmentor` - The word segmentor.
    pub fn new(
        vocab: Arc<Vocabulary<T>>,
        segmentor: Arc<dyn TextSegmentor>,
    ) -> MPResult<Self> {
        Self::from_options(vocab, segmentor, &TokenizerOptions::default())
    }

    /// Create a new tokenizer.
    ///
    /// The `vocab_path`, `duplicates`, `segmentor`, and `parallel`
    /// fields of `options` are ignored; they only apply to
    /// [`TokenizerOptions::build`].
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `segmentor` - The word segmentor.
    /// * `options` - The options.
    ///
    /// ## Returns
    /// The tokenizer, or [`MixpieceError::MissingSpecialToken`](crate::errors::MixpieceError::MissingSpecialToken)
    /// if `vocab` lacks a special or sentinel token.
    pub fn from_options(
        vocab: Arc<Vocabulary<T>>,
        segmentor: Arc<dyn TextSegmentor>,
        options: &TokenizerOptions,
    ) -> MPResult<Self> {
        let specials = SpecialTokenIds::resolve(&vocab, options.max_sentinels())?;
        let wordpiece = WordpieceTokenizer::new(vocab.clone())
            .with_unk_token(UNK_TOKEN)
            .with_max_input_chars_per_word(options.max_input_chars_per_word());

        log::debug!(
            "tokenizer ready: {} vocab entries, {} sentinels, max_len {:?}",
            vocab.len(),
            specials.max_sentinels(),
            options.max_len(),
        );

        Ok(Self {
            vocab,
            segmentor,
            wordpiece,
            specials: Arc::new(specials),
            max_len: options.max_len(),
        })
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// Get the word segmentor.
    pub fn segmentor(&self) -> &Arc<dyn TextSegmentor> {
        &self.segmentor
    }

    /// Get the wordpiece splitter.
    pub fn wordpiece(&self) -> &WordpieceTokenizer<T> {
        &self.wordpiece
    }

    /// Get the resolved special token ids.
    pub fn special_ids(&self) -> &SpecialTokenIds<T> {
        &self.specials
    }

    /// The number of vocabulary entries.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// The configured sequence length limit, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Cut `ids` to the configured sequence length limit.
    pub fn truncate<'a>(
        &self,
        ids: &'a [T],
    ) -> &'a [T] {
        match self.max_len {
            Some(max_len) if ids.len() > max_len => &ids[..max_len],
            _ => ids,
        }
    }

    /// The start-of-document token.
    pub fn sod_token(&self) -> &'static str {
        SOD_TOKEN
    }

    /// The start-of-document id.
    pub fn sod_id(&self) -> T {
        self.specials.sod()
    }

    /// The end-of-document token.
    pub fn eod_token(&self) -> &'static str {
        EOD_TOKEN
    }

    /// The end-of-document id.
    pub fn eod_id(&self) -> T {
        self.specials.eod()
    }

    /// The unknown token.
    pub fn unk_token(&self) -> &'static str {
        UNK_TOKEN
    }

    /// The unknown id.
    pub fn unk_id(&self) -> T {
        self.specials.unk()
    }

    /// The id of a fixed special token.
    pub fn special_id(
        &self,
        token: SpecialToken,
    ) -> T {
        self.specials.get(token)
    }

    /// The id of the `n`-th sentinel, `<s_n>`.
    ///
    /// ## Returns
    /// The id, or [`MixpieceError::SpanOutOfRange`](crate::errors::MixpieceError::SpanOutOfRange)
    /// when `n` is not below the sentinel count.
    pub fn get_span(
        &self,
        n: usize,
    ) -> MPResult<T> {
        self.specials.sentinel(n)
    }

    /// All sentinel ids, in order.
    pub fn sentinel_ids(&self) -> &[T] {
        self.specials.sentinels()
    }

    /// Visit every [`WordPiece`] of `text`, in order.
    ///
    /// Text is normalized, segmented, and each segment is whitespace-encoded
    /// and split into pieces.
    pub fn for_each_piece<F>(
        &self,
        text: &str,
        mut f: F,
    ) where
        F: FnMut(WordPiece<'_, T>),
    {
        let text = normalize_text(text);
        self.segmentor.for_each_segment(&text, &mut |segment| {
            let word = encode_whitespace(segment);
            self.wordpiece.for_each_piece(&word, &mut f);
        });
    }

    /// Split text into token strings.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        self.for_each_piece(text, |piece| {
            tokens.push(piece.token_or(UNK_TOKEN).to_string())
        });
        tokens
    }

    /// Encode text into token ids.
    ///
    /// Equal to `convert_tokens_to_ids(&tokenize(text))`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let unk_id = self.unk_id();
        let mut ids = Vec::new();
        self.for_each_piece(text, |piece| ids.push(piece.id_or(unk_id)));
        ids
    }

    /// Decode token ids into text.
    ///
    /// Tokens are concatenated and whitespace glyphs are restored.
    ///
    /// ## Returns
    /// The text, or [`MixpieceError::IdNotFound`](crate::errors::MixpieceError::IdNotFound)
    /// for the first id outside of the vocabulary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids)))]
    pub fn decode(
        &self,
        ids: &[T],
    ) -> MPResult<String> {
        let mut text = String::new();
        for &id in ids {
            text.push_str(self.vocab.token_of(id)?);
        }
        Ok(decode_whitespace(&text).into_owned())
    }

    /// Map token strings to ids; absent tokens become the unknown id.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        let unk_id = self.unk_id();
        tokens
            .iter()
            .map(|token| self.vocab.id_or(token.as_ref(), unk_id))
            .collect()
    }

    /// Map ids to token strings.
    ///
    /// ## Returns
    /// The tokens, or [`MixpieceError::IdNotFound`](crate::errors::MixpieceError::IdNotFound)
    /// for the first id outside of the vocabulary.
    pub fn convert_ids_to_tokens(
        &self,
        ids: &[T],
    ) -> MPResult<Vec<String>> {
        ids.iter()
            .map(|&id| self.vocab.token_of(id).map(str::to_string))
            .collect()
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        Tokenizer::tokenize(self, text)
    }

    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        Tokenizer::encode(self, text)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    fn decode(
        &self,
        tokens: &[T],
    ) -> MPResult<String> {
        Tokenizer::decode(self, tokens)
    }
}
