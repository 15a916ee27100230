//! # Vocabulary IO
//!
//! The vocabulary file format is plain UTF-8 text, one token per line;
//! the line order defines the token id. Blank lines are ignored, and each
//! line is stripped of surrounding whitespace.
//!
//! ```rust,no_run
//! use mixpiece::vocab::{DuplicatePolicy, Vocabulary, io::load_vocab_path};
//!
//! fn example() -> mixpiece::MPResult<Vocabulary<u32>> {
//!     load_vocab_path("vocab.txt", DuplicatePolicy::Reject)
//! }
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::MPResult,
    types::TokenType,
    vocab::{DuplicatePolicy, Vocabulary},
};

/// Load a [`Vocabulary`] from a vocab file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
/// * `policy` - the duplicate token policy.
pub fn load_vocab_path<T, P>(
    path: P,
    policy: DuplicatePolicy,
) -> MPResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let vocab = read_vocab(reader, policy)?;
    log::info!("loaded {} vocab entries from {}", vocab.len(), path.display());

    Ok(vocab)
}

/// Read a [`Vocabulary`] from a [`BufRead`] stream.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `policy` - the duplicate token policy.
pub fn read_vocab<T, R>(
    reader: R,
    policy: DuplicatePolicy,
) -> MPResult<Vocabulary<T>>
where
    T: TokenType,
    R: BufRead,
{
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    Vocabulary::from_tokens_with_policy(lines, policy)
}

/// Save a [`Vocabulary`] to a vocab file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &Vocabulary<T>,
    path: P,
) -> MPResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`Vocabulary`] to a [`Write`] writer.
pub fn write_vocab<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> MPResult<()>
where
    T: TokenType,
    W: Write,
{
    for token in vocab.tokens() {
        writeln!(writer, "{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::errors::MixpieceError;

    #[test]
    fn test_read_vocab() {
        type T = u32;

        let data = "<unk>\r\n<s>\n\n  <eod>  \n你好\n";
        let vocab: Vocabulary<T> = read_vocab(Cursor::new(data), DuplicatePolicy::Reject).unwrap();

        assert_eq!(
            vocab.tokens().collect::<Vec<_>>(),
            vec!["<unk>", "<s>", "<eod>", "你好"]
        );
        assert_eq!(vocab.id_of("你好").unwrap(), 3);
    }

    #[test]
    fn test_read_vocab_duplicate() {
        type T = u32;

        let data = "a\nb\na\n";
        assert!(matches!(
            read_vocab::<T, _>(Cursor::new(data), DuplicatePolicy::Reject),
            Err(MixpieceError::DuplicateToken { .. })
        ));
    }

    #[test]
    fn test_save_load_vocab() {
        type T = u32;

        let vocab = Vocabulary::<T>::from_tokens(["<unk>", "apple", "香蕉", "pear"]).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: Vocabulary<T> =
                    load_vocab_path(&path, DuplicatePolicy::Reject).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        type T = u32;

        assert!(matches!(
            load_vocab_path::<T, _>("/nonexistent/mixpiece/vocab.txt", DuplicatePolicy::Reject),
            Err(MixpieceError::Io(_))
        ));
    }
}
