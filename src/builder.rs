use crate::{automaton::Automaton, censor::DEFAULT_MASK, Filter, MatchMode};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// A non-consuming builder for a [`Filter`].
///
/// Words are collected first and compiled all at once when [`build()`] is called. The builder is
/// left untouched by `build()`, so it may be used as a template for several filters.
///
/// # Example
/// ```
/// use sensitive_filter::{FilterBuilder, MatchMode};
///
/// let filter = FilterBuilder::new()
///     .words(&["foo", "bar"])
///     .mask('#')
///     .match_mode(MatchMode::Exhaustive)
///     .build();
///
/// assert_eq!(filter.censor("foo and bar"), "### and ###");
/// ```
///
/// [`build()`]: FilterBuilder::build
#[derive(Clone, Debug)]
pub struct FilterBuilder {
    words: Vec<String>,
    mask: char,
    match_mode: MatchMode,
}

impl FilterBuilder {
    /// Creates a new `FilterBuilder` with no words, the `'*'` mask and [`MatchMode::Direct`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            mask: DEFAULT_MASK,
            match_mode: MatchMode::Direct,
        }
    }

    /// Adds a single word to be filtered.
    ///
    /// Empty words are accepted here and dropped during compilation.
    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.words.push(word.to_string());
        self
    }

    /// Adds words to be filtered.
    ///
    /// A word list loaded with `dictionary::load()` can be passed here directly.
    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.words.extend(words.into_iter().map(|s| s.to_string()));
        self
    }

    /// Sets the character written over every matched `char`.
    #[inline]
    pub fn mask(&mut self, mask: char) -> &mut Self {
        self.mask = mask;
        self
    }

    /// Sets which matches are reported while scanning.
    #[inline]
    pub fn match_mode(&mut self, match_mode: MatchMode) -> &mut Self {
        self.match_mode = match_mode;
        self
    }

    /// Compiles the collected words into a [`Filter`].
    #[must_use]
    pub fn build(&self) -> Filter {
        Filter::from_parts(
            Automaton::compile(&self.words),
            self.mask,
            self.match_mode,
        )
    }
}

impl Default for FilterBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
