//! # Segmentor Configuration

use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    errors::MPResult,
    segmentation::{RegexSegmentor, TextSegmentor, load_dictionary_path},
};

/// Serializable selection of a [`TextSegmentor`].
///
/// As JSON: `{"kind": "regex"}`, `{"kind": "regex", "pattern": "..."}`,
/// `{"kind": "dictionary", "path": "dict.txt"}`, or `{"kind": "jieba"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum SegmentorConfig {
    /// A [`RegexSegmentor`]; the default pattern when `pattern` is unset.
    Regex {
        /// The word pattern.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },

    /// A [`DictionarySegmentor`](crate::segmentation::DictionarySegmentor)
    /// loaded from a dictionary file.
    Dictionary {
        /// The dictionary path.
        path: PathBuf,
    },

    /// A `JiebaSegmentor` using the bundled ``jieba-rs`` dictionary.
    ///
    /// Requires the `jieba` feature.
    Jieba,
}

impl Default for SegmentorConfig {
    fn default() -> Self {
        Self::Regex { pattern: None }
    }
}

impl SegmentorConfig {
    /// A regex segmentor config for `pattern`.
    pub fn from_pattern<S: Into<String>>(pattern: S) -> Self {
        Self::Regex {
            pattern: Some(pattern.into()),
        }
    }

    /// A dictionary segmentor config for `path`.
    pub fn from_dictionary_path<P: Into<PathBuf>>(path: P) -> Self {
        Self::Dictionary { path: path.into() }
    }

    /// Build the configured segmentor.
    ///
    /// ## Returns
    /// The segmentor; or an error if a pattern is invalid, a dictionary
    /// cannot be loaded, or the segmentor needs a disabled feature.
    pub fn build(&self) -> MPResult<Arc<dyn TextSegmentor>> {
        Ok(match self {
            Self::Regex { pattern: None } => Arc::new(RegexSegmentor::default()),
            Self::Regex {
                pattern: Some(pattern),
            } => Arc::new(RegexSegmentor::from_pattern(pattern)?),
            Self::Dictionary { path } => Arc::new(load_dictionary_path(path)?),
            Self::Jieba => build_jieba()?,
        })
    }
}

#[cfg(feature = "jieba")]
fn build_jieba() -> MPResult<Arc<dyn TextSegmentor>> {
    Ok(Arc::new(crate::segmentation::JiebaSegmentor::default()))
}

#[cfg(not(feature = "jieba"))]
fn build_jieba() -> MPResult<Arc<dyn TextSegmentor>> {
    Err(crate::errors::MixpieceError::FeatureDisabled("jieba"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::errors::MixpieceError;

    #[test]
    fn test_serde() {
        let config: SegmentorConfig = serde_json::from_str(r#"{"kind": "regex"}"#).unwrap();
        assert_eq!(config, SegmentorConfig::default());

        let config: SegmentorConfig =
            serde_json::from_str(r#"{"kind": "dictionary", "path": "dict.txt"}"#).unwrap();
        assert_eq!(config, SegmentorConfig::from_dictionary_path("dict.txt"));

        let config: SegmentorConfig = serde_json::from_str(r#"{"kind": "jieba"}"#).unwrap();
        assert_eq!(config, SegmentorConfig::Jieba);

        assert_eq!(
            serde_json::to_string(&SegmentorConfig::from_pattern("[a-z]+")).unwrap(),
            r#"{"kind":"regex","pattern":"[a-z]+"}"#
        );
    }

    #[test]
    fn test_build() {
        let segmentor = SegmentorConfig::default().build().unwrap();
        assert_eq!(segmentor.segment("ab cd"), vec!["ab", " ", "cd"]);

        let segmentor = SegmentorConfig::from_pattern("[a-z]+").build().unwrap();
        assert_eq!(segmentor.segment("ab12"), vec!["ab", "12"]);

        assert!(matches!(
            SegmentorConfig::from_pattern("(oops").build(),
            Err(MixpieceError::Regex(_))
        ));

        let dir = tempdir::TempDir::new("mixpiece_segmentor").unwrap();
        let path = dir.path().join("dict.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "北京 10\n大学 10").unwrap();
        drop(file);

        let segmentor = SegmentorConfig::from_dictionary_path(&path)
            .build()
            .unwrap();
        assert_eq!(segmentor.segment("北京大学"), vec!["北京", "大学"]);

        assert!(matches!(
            SegmentorConfig::from_dictionary_path(dir.path().join("missing.txt")).build(),
            Err(MixpieceError::Io(_))
        ));
    }

    #[cfg(not(feature = "jieba"))]
    #[test]
    fn test_jieba_disabled() {
        assert!(matches!(
            SegmentorConfig::Jieba.build(),
            Err(MixpieceError::FeatureDisabled("jieba"))
        ));
    }
}
