//! # Dense ``{ String <-> T }`` Vocabulary

use crate::{
    errors::{MPResult, MixpieceError},
    types::{MPHashMap, TokenType, hash_map_with_capacity, token_index, try_vocab_size},
};

/// How to treat a token which appears more than once in a vocabulary source.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum DuplicatePolicy {
    /// Fail construction with [`MixpieceError::DuplicateToken`].
    #[default]
    Reject,

    /// Keep the first occurrence, skip (and log) later ones.
    ///
    /// Every skipped entry shifts the ids of the following entries down by one.
    KeepFirst,
}

/// Token vocabulary as a dense, ordered ``{ String <-> T }`` mapping.
///
/// Ids are the range `[0, len)`, in source order.
/// The vocabulary is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: TokenType> {
    /// ``{ T -> String }``, indexed by id.
    id_to_token: Vec<String>,

    /// ``{ String -> T }``.
    token_to_id: MPHashMap<String, T>,

    /// The length, in chars, of the longest token.
    max_token_chars: usize,
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a vocabulary, rejecting duplicate tokens.
    ///
    /// Each entry is stripped of surrounding whitespace; empty entries are skipped.
    ///
    /// ## Arguments
    /// * `tokens` - The ordered token source.
    pub fn from_tokens<I, S>(tokens: I) -> MPResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokens_with_policy(tokens, DuplicatePolicy::Reject)
    }

    /// Build a vocabulary with an explicit [`DuplicatePolicy`].
    ///
    /// ## Arguments
    /// * `tokens` - The ordered token source.
    /// * `policy` - What to do with repeated tokens.
    pub fn from_tokens_with_policy<I, S>(
        tokens: I,
        policy: DuplicatePolicy,
    ) -> MPResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens.into_iter();
        let (lower, _) = tokens.size_hint();

        let mut id_to_token: Vec<String> = Vec::with_capacity(lower);
        let mut token_to_id: MPHashMap<String, T> = hash_map_with_capacity(lower);
        let mut max_token_chars = 0;

        for (line, entry) in tokens
            .filter_map(|s| {
                let s = s.as_ref().trim();
                (!s.is_empty()).then(|| s.to_string())
            })
            .enumerate()
        {
            if let Some(&first) = token_to_id.get(&entry) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(MixpieceError::DuplicateToken {
                            token: entry,
                            first: token_index(first),
                            line,
                        });
                    }
                    DuplicatePolicy::KeepFirst => {
                        log::warn!("skipping duplicate vocab entry {entry:?} at entry {line}");
                        continue;
                    }
                }
            }

            let id = id_to_token.len();
            try_vocab_size::<T>(id + 1)?;
            let token = T::from_usize(id).ok_or(MixpieceError::VocabSizeOverflow { size: id + 1 })?;

            max_token_chars = max_token_chars.max(entry.chars().count());
            token_to_id.insert(entry.clone(), token);
            id_to_token.push(entry);
        }

        id_to_token.shrink_to_fit();
        token_to_id.shrink_to_fit();

        Ok(Self {
            id_to_token,
            token_to_id,
            max_token_chars,
        })
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Alias for [`Self::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// The length, in chars, of the longest token.
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }

    /// Is `token` in the vocabulary?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Look up the id of `token`, if present.
    #[inline]
    pub fn get_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Look up the token for `id`, if present.
    #[inline]
    pub fn get_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_to_token.get(token_index(id)).map(String::as_str)
    }

    /// Look up the id of `token`.
    ///
    /// ## Returns
    /// The id, or [`MixpieceError::TokenNotFound`].
    pub fn id_of(
        &self,
        token: &str,
    ) -> MPResult<T> {
        self.get_id(token)
            .ok_or_else(|| MixpieceError::TokenNotFound(token.to_string()))
    }

    /// Look up the id of `token`, substituting `fallback` when absent.
    #[inline]
    pub fn id_or(
        &self,
        token: &str,
        fallback: T,
    ) -> T {
        self.get_id(token).unwrap_or(fallback)
    }

    /// Look up the token for `id`.
    ///
    /// ## Returns
    /// The token, or [`MixpieceError::IdNotFound`].
    pub fn token_of(
        &self,
        id: T,
    ) -> MPResult<&str> {
        self.get_token(id)
            .ok_or_else(|| MixpieceError::IdNotFound(token_index(id)))
    }

    /// Iterate over the tokens in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.id_to_token.iter().map(String::as_str)
    }

    /// Iterate over ``(token, id)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.id_to_token
            .iter()
            .enumerate()
            .filter_map(|(i, s)| T::from_usize(i).map(|t| (s.as_str(), t)))
    }
}
