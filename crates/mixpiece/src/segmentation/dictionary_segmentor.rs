//! # Dictionary Segmentor
//!
//! Frequency-dictionary word segmentation for text without word boundaries.
//!
//! Text is first split into blocks by a [`RegexSegmentor`]; word blocks are
//! then cut along the most probable path through the DAG of dictionary words
//! starting at each character, where a word's weight is
//! `ln(freq) - ln(total_freq)`.
//!
//! Dictionary format is one entry per line, `word [freq [tag]]`;
//! a missing frequency counts as 1.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{MPResult, MixpieceError},
    segmentation::{RegexSegmentor, RegexWrapper, SpanRef, TextSegmentor},
    types::{MPHashMap, hash_map_with_capacity},
};

/// The block pattern for dictionary segmentation.
///
/// Han is the CJK Unified Ideographs range `U+4E00..=U+9FD5`, as in jieba's
/// block split. Everything outside of a block, extension-block ideographs
/// included, is split into `\r\n` and single characters.
pub const DICTIONARY_BLOCK_PATTERN: &str = r"[\x{4E00}-\x{9FD5}a-zA-Z0-9+#&._%\-]+";

/// Dictionary-driven [`TextSegmentor`].
#[derive(Debug, Clone)]
pub struct DictionarySegmentor {
    blocks: RegexSegmentor,

    /// ``{ word -> freq }``; every proper prefix of a word is present, with freq 0.
    prefix_freq: MPHashMap<String, u64>,

    /// `ln(total_freq)`.
    log_total: f64,
}

impl DictionarySegmentor {
    /// Build a segmentor from ``(word, freq)`` entries.
    pub fn from_words<I, S>(words: I) -> MPResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let words = words.into_iter();
        let mut prefix_freq: MPHashMap<String, u64> = hash_map_with_capacity(words.size_hint().0);
        let mut total: u64 = 0;

        for (word, freq) in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }

            prefix_freq.insert(word.to_string(), freq);
            total = total.saturating_add(freq);

            for (idx, _) in word.char_indices().skip(1) {
                prefix_freq.entry(word[..idx].to_string()).or_insert(0);
            }
        }

        Ok(Self {
            blocks: RegexSegmentor::new(RegexWrapper::compile(DICTIONARY_BLOCK_PATTERN)?),
            prefix_freq,
            log_total: (total.max(1) as f64).ln(),
        })
    }

    /// The number of prefix-dictionary entries (words and word prefixes).
    pub fn prefix_len(&self) -> usize {
        self.prefix_freq.len()
    }

    /// The frequency of `word`; `None` for prefixes and unknown words.
    pub fn word_freq(
        &self,
        word: &str,
    ) -> Option<u64> {
        self.prefix_freq.get(word).copied().filter(|&f| f > 0)
    }

    /// Build the DAG of word end positions for each char position.
    ///
    /// `bounds` holds the byte offset of every char, plus `block.len()`.
    /// `dag[k]` lists the (inclusive) char index ends of dictionary words
    /// starting at `k`; it falls back to `[k]`.
    fn build_dag(
        &self,
        block: &str,
        bounds: &[usize],
    ) -> Vec<Vec<usize>> {
        let n = bounds.len() - 1;
        (0..n)
            .map(|k| {
                let mut ends = Vec::new();
                let mut i = k;
                while i < n {
                    match self.prefix_freq.get(&block[bounds[k]..bounds[i + 1]]) {
                        Some(&freq) => {
                            if freq > 0 {
                                ends.push(i);
                            }
                            i += 1;
                        }
                        None => break,
                    }
                }
                if ends.is_empty() {
                    ends.push(k);
                }
                ends
            })
            .collect()
    }

    /// Cut one block along the max-probability route.
    fn cut_block<'t>(
        &self,
        block: &'t str,
        f: &mut dyn FnMut(&'t str),
    ) {
        let bounds: Vec<usize> = block
            .char_indices()
            .map(|(i, _)| i)
            .chain([block.len()])
            .collect();
        let n = bounds.len() - 1;
        let dag = self.build_dag(block, &bounds);

        // route[k] = (best log-prob of block[k..], inclusive end of first word)
        let mut route: Vec<(f64, usize)> = vec![(0.0, 0); n + 1];
        for idx in (0..n).rev() {
            let mut best: Option<(f64, usize)> = None;
            for &x in &dag[idx] {
                let freq = self
                    .word_freq(&block[bounds[idx]..bounds[x + 1]])
                    .unwrap_or(1);
                let prob = (freq as f64).ln() - self.log_total + route[x + 1].0;
                best = match best {
                    Some((p, e)) if p > prob || (p == prob && e > x) => Some((p, e)),
                    _ => Some((prob, x)),
                };
            }
            route[idx] = best.unwrap_or((0.0, idx));
        }

        // Runs of single ASCII alphanumerics are merged back together.
        let mut x = 0;
        let mut buf_start: Option<usize> = None;
        while x < n {
            let y = route[x].1 + 1;
            let word = &block[bounds[x]..bounds[y]];
            let single_alnum = y == x + 1 && word.chars().all(|c| c.is_ascii_alphanumeric());

            if single_alnum {
                buf_start.get_or_insert(bounds[x]);
            } else {
                if let Some(start) = buf_start.take() {
                    f(&block[start..bounds[x]]);
                }
                f(word);
            }
            x = y;
        }
        if let Some(start) = buf_start {
            f(&block[start..]);
        }
    }
}

/// Split a gap into `\r\n` pairs and single characters.
fn cut_gap<'t>(
    gap: &'t str,
    f: &mut dyn FnMut(&'t str),
) {
    let mut rest = gap;
    while let Some(c) = rest.chars().next() {
        let len = if rest.starts_with("\r\n") { 2 } else { c.len_utf8() };
        f(&rest[..len]);
        rest = &rest[len..];
    }
}

impl TextSegmentor for DictionarySegmentor {
    fn for_each_segment<'t>(
        &self,
        text: &'t str,
        f: &mut dyn FnMut(&'t str),
    ) {
        self.blocks.for_each_span_ref(text, |span| match span {
            SpanRef::Word(block) => self.cut_block(block, &mut *f),
            SpanRef::Gap(gap) => cut_gap(gap, &mut *f),
        });
    }
}

/// Load a [`DictionarySegmentor`] from a dictionary file.
///
/// ## Arguments
/// * `path` - the path to the dictionary file.
pub fn load_dictionary_path<P: AsRef<Path>>(path: P) -> MPResult<DictionarySegmentor> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let segmentor = read_dictionary(reader)?;
    log::info!(
        "loaded segmentation dictionary from {} ({} prefix entries)",
        path.display(),
        segmentor.prefix_len()
    );
    Ok(segmentor)
}

/// Read a [`DictionarySegmentor`] from a [`BufRead`] stream.
pub fn read_dictionary<R: BufRead>(reader: R) -> MPResult<DictionarySegmentor> {
    let mut words = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let freq = match fields.next() {
            None => 1,
            Some(freq) => freq.parse::<u64>().map_err(|err| {
                MixpieceError::Parse(format!(
                    "dictionary line {}: bad frequency {freq:?}: {err}",
                    line_no + 1
                ))
            })?,
        };
        words.push((word.to_string(), freq));
    }
    DictionarySegmentor::from_words(words)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;

    use super::*;

    fn test_segmentor() -> DictionarySegmentor {
        DictionarySegmentor::from_words([
            ("我", 100),
            ("来到", 50),
            ("北京", 200),
            ("清华", 30),
            ("清华大学", 80),
            ("大学", 60),
            ("华大", 5),
        ])
        .unwrap()
    }

    #[test]
    fn test_prefix_dictionary() {
        let segmentor = test_segmentor();
        assert_eq!(segmentor.word_freq("清华大学"), Some(80));
        assert_eq!(segmentor.word_freq("清华大"), None);
        assert!(segmentor.prefix_freq.contains_key("清华大"));
        assert_eq!(segmentor.word_freq("上海"), None);
    }

    #[test]
    fn test_cut() {
        let segmentor = test_segmentor();

        assert_eq!(
            segmentor.segment("我来到北京清华大学"),
            vec!["我", "来到", "北京", "清华大学"]
        );
        assert_eq!(
            segmentor.segment("我来到 Beijing，abc1\r\n上海"),
            vec!["我", "来到", " ", "Beijing", "，", "abc1", "\r\n", "上", "海"]
        );
    }

    #[test]
    fn test_read_dictionary() {
        let data = "北京 200 ns\n\n大学 60\n清华\n";
        let segmentor = read_dictionary(Cursor::new(data)).unwrap();

        assert_eq!(segmentor.word_freq("北京"), Some(200));
        assert_eq!(segmentor.word_freq("清华"), Some(1));
        assert_eq!(segmentor.segment("北京大学"), vec!["北京", "大学"]);

        assert!(matches!(
            read_dictionary(Cursor::new("北京 lots\n")),
            Err(MixpieceError::Parse(_))
        ));
    }

    #[test]
    fn test_extension_ideographs_are_gaps() {
        let segmentor = test_segmentor();
        assert_eq!(
            segmentor.segment("北京\u{20000}大学"),
            vec!["北京", "\u{20000}", "大学"]
        );
    }

    #[test]
    fn test_empty_dictionary() {
        let segmentor = DictionarySegmentor::from_words(Vec::<(String, u64)>::new()).unwrap();
        assert_eq!(segmentor.segment("中文ab"), vec!["中", "文", "ab"]);
    }

    proptest! {
        #[test]
        fn prop_coverage(text in "[a-z0-9 \r\n，。我来到北京清华大学上海]*") {
            let segments = test_segmentor().segment(&text);
            prop_assert!(segments.iter().all(|s| !s.is_empty()));
            prop_assert_eq!(segments.concat(), text);
        }
    }
}
