//! Loading of line-oriented word lists.
//!
//! A word list contains one word per line. Leading and trailing whitespace is trimmed from every
//! line, and blank lines are skipped. Words may contain inner whitespace, so `"bad word"` on a
//! single line is one word.
//!
//! The functions here only produce the list of words; they are meant to be passed on to
//! [`Filter::new()`] or [`FilterBuilder::words()`].
//!
//! # Example
//! ```
//! use sensitive_filter::{dictionary, Filter};
//!
//! let words = dictionary::parse("foo\n\n  bar baz  \n");
//! assert_eq!(words, vec!["foo", "bar baz"]);
//!
//! let filter = Filter::new(&words);
//! assert_eq!(filter.censor("foo, bar baz"), "***, *******");
//! ```
//!
//! [`Filter::new()`]: crate::Filter::new
//! [`FilterBuilder::words()`]: crate::FilterBuilder::words

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    string::{String, ToString},
    vec::Vec,
};
use thiserror::Error;

/// An error encountered while loading a word list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The word list file could not be opened.
    #[error("failed to open word list {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A line of the word list could not be read.
    ///
    /// This includes lines that are not valid UTF-8.
    #[error("failed to read word list at line {line}: {source}")]
    Read {
        /// The 1-based line number.
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Extract the word from a single line, if there is one.
fn trim_line(line: &str) -> Option<&str> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Parse a word list held in memory.
#[must_use]
pub fn parse(source: &str) -> Vec<String> {
    source.lines().filter_map(trim_line).map(ToString::to_string).collect()
}

/// Read a word list from `reader`.
///
/// # Errors
/// Returns [`Error::Read`] if a line cannot be read.
pub fn read<R>(reader: R) -> Result<Vec<String>, Error>
where
    R: BufRead,
{
    let mut words = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Read {
            line: index + 1,
            source,
        })?;
        if let Some(word) = trim_line(&line) {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Load a word list from the file at `path`.
///
/// # Errors
/// Returns [`Error::Open`] if the file cannot be opened, and [`Error::Read`] if one of its lines
/// cannot be read.
pub fn load<P>(path: P) -> Result<Vec<String>, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let words = read(BufReader::new(file))?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
