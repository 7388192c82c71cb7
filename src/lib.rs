//! A compiled filter for masking forbidden words in text.
//!
//! A [`Filter`] is built once from a fixed list of words and then used to scan any number of
//! inputs. Every `char` belonging to a matched word is replaced with a mask character, while every
//! other `char` (whitespace, punctuation and multi-byte characters included) is left untouched.
//! The output always contains exactly as many `char`s as the input.
//!
//! Internally, the words are compiled into a trie with failure links, so each input is scanned in
//! a single linear pass no matter how many words are being filtered. Matching is exact and
//! case-sensitive over Unicode scalar values.
//!
//! # Example
//! ```
//! use sensitive_filter::Filter;
//!
//! let filter = Filter::new(&["bad", "敏感词"]);
//!
//! assert_eq!(filter.censor("This is a bad word"), "This is a *** word");
//! assert_eq!(filter.censor("一个敏感词"), "一个***");
//! assert!(filter.check("bad"));
//! ```
//!
//! # Sharing
//! A `Filter` is never mutated after it is built, so it is `Send` and `Sync` and can be shared
//! between threads by reference or through an `Arc` without any locking. To change the word list,
//! build a new `Filter` and replace the shared reference.
//!
//! # Features
//! - `std` (enabled by default): provides the [`dictionary`] module for loading line-oriented word
//!   lists. Without it, the crate is `no_std` and only requires `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod automaton;
mod builder;
mod censor;
#[cfg(feature = "std")]
pub mod dictionary;
mod walker;

pub use builder::FilterBuilder;
pub use censor::DEFAULT_MASK;

use alloc::{string::String, vec, vec::Vec};
use automaton::{Automaton, State};
use core::ops::Range;
use walker::Walker;

/// Which matches are reported while scanning.
///
/// The two modes only differ when one word is a proper suffix of a prefix of another word. For
/// example, with the words `"abcd"` and `"bc"`, scanning `"abcx"` walks along the path of
/// `"abcd"`, and `"bc"` is only visible by following a failure link.
///
/// ```
/// use sensitive_filter::{FilterBuilder, MatchMode};
///
/// let direct = FilterBuilder::new().words(&["abcd", "bc"]).build();
/// let exhaustive = FilterBuilder::new()
///     .words(&["abcd", "bc"])
///     .match_mode(MatchMode::Exhaustive)
///     .build();
///
/// assert_eq!(direct.censor("abcx"), "abcx");
/// assert_eq!(exhaustive.censor("abcx"), "a**x");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MatchMode {
    /// Only the state reached after consuming each `char` is checked for a match.
    ///
    /// This is the default.
    Direct,
    /// Every word ending at each position is reported, including words only reachable through
    /// failure links.
    Exhaustive,
}

impl MatchMode {
    #[inline]
    fn exhaustive(self) -> bool {
        self == MatchMode::Exhaustive
    }
}

impl Default for MatchMode {
    #[inline]
    fn default() -> Self {
        MatchMode::Direct
    }
}

/// A single match found within an input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match<'a> {
    word: &'a str,
    start: usize,
    end: usize,
    len: usize,
}

impl<'a> Match<'a> {
    /// Create a match for a state's word ending at byte offset `end`.
    ///
    /// Since matches are exact, the matched input is byte-for-byte the word itself.
    fn new(state: &'a State, word: &'a str, end: usize) -> Self {
        Self {
            word,
            start: end - word.len(),
            end,
            len: state.len(),
        }
    }

    /// The filtered word that was matched.
    #[inline]
    #[must_use]
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Byte offset in the input where the match starts.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset in the input just past the end of the match.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched byte range, suitable for slicing the input.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of `char`s in the match.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, since empty words are never matched.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A compiled word filter.
///
/// A `Filter` is created either with [`Filter::new()`], using the default options, or with a
/// [`FilterBuilder`].
#[derive(Debug)]
pub struct Filter {
    automaton: Automaton,
    mask: char,
    match_mode: MatchMode,
}

impl Filter {
    /// Compile `words` into a new `Filter` masking with `'*'` in [`MatchMode::Direct`].
    ///
    /// Empty words are ignored, and duplicate words are treated as a single word.
    ///
    /// # Example
    /// ```
    /// use sensitive_filter::Filter;
    ///
    /// let filter = Filter::new(&["foo", "", "foo"]);
    ///
    /// assert_eq!(filter.len(), 1);
    /// ```
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parts(
            Automaton::compile(words),
            DEFAULT_MASK,
            MatchMode::default(),
        )
    }

    pub(crate) fn from_parts(automaton: Automaton, mask: char, match_mode: MatchMode) -> Self {
        Self {
            automaton,
            mask,
            match_mode,
        }
    }

    /// Find all matches within `input`.
    ///
    /// Matches are returned in order of where they end in `input`. Matches ending at the same
    /// position are returned longest first, which only happens in [`MatchMode::Exhaustive`].
    ///
    /// # Example
    /// ```
    /// use sensitive_filter::Filter;
    ///
    /// let filter = Filter::new(&["foo", "bar"]);
    /// let input = "foo and bar";
    ///
    /// let matches = filter.find(input).collect::<Vec<_>>();
    /// assert_eq!(matches.len(), 2);
    /// assert_eq!(matches[0].word(), "foo");
    /// assert_eq!(&input[matches[1].range()], "bar");
    /// ```
    pub fn find(&self, input: &str) -> vec::IntoIter<Match<'_>> {
        let mut walker = Walker::new(&self.automaton);
        let mut matches = Vec::new();

        for (index, c) in input.char_indices() {
            walker.step(c);
            let limit = match self.match_mode {
                MatchMode::Direct => usize::from(walker.state().is_terminal()),
                MatchMode::Exhaustive => usize::MAX,
            };
            let end = index + c.len_utf8();
            matches.extend(walker.outputs().take(limit).filter_map(|state| {
                state.word().map(|word| Match::new(state, word, end))
            }));
        }

        matches.into_iter()
    }

    /// Check whether `input` contains any filtered words.
    ///
    /// Returns `true` if matches are found, and `false` otherwise.
    ///
    /// # Example
    /// ```
    /// use sensitive_filter::Filter;
    ///
    /// let filter = Filter::new(&["foo"]);
    ///
    /// assert!(filter.check("this string contains foo"));
    /// assert!(!filter.check("this string contains fo"));
    /// ```
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        let mut walker = Walker::new(&self.automaton);
        let exhaustive = self.match_mode.exhaustive();
        input
            .chars()
            .any(|c| self.automaton.match_len(walker.step(c), exhaustive) > 0)
    }

    /// Censor all filtered words within `input`.
    ///
    /// Returns a newly-allocated `String` where every `char` covered by a match is replaced with
    /// the mask character. The result has the same number of `char`s as `input`.
    ///
    /// # Example
    /// ```
    /// use sensitive_filter::Filter;
    ///
    /// let filter = Filter::new(&["abc", "bc"]);
    ///
    /// assert_eq!(filter.censor("abcd"), "***d");
    /// ```
    #[must_use]
    pub fn censor(&self, input: &str) -> String {
        if self.automaton.words() == 0 {
            return input.into();
        }

        let mut walker = Walker::new(&self.automaton);
        let exhaustive = self.match_mode.exhaustive();
        let spans = input
            .chars()
            .map(|c| self.automaton.match_len(walker.step(c), exhaustive))
            .collect::<Vec<_>>();

        censor::apply(input, &censor::marks(&spans), self.mask)
    }

    /// The character written over matched `char`s.
    #[inline]
    #[must_use]
    pub fn mask(&self) -> char {
        self.mask
    }

    #[inline]
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Number of distinct words being filtered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.automaton.words()
    }

    /// Returns whether the filter has no words, in which case every input is returned unchanged.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
