//! Internal structs for the compiled multi-pattern automaton.
//!
//! A [`Filter`] is internally a trie over `char` edges, augmented with failure links in the manner
//! of Aho-Corasick. All states are stored in a single arena and reference each other by index, so
//! the compiled structure contains no pointers and can be shared freely across threads.
//!
//! Construction happens in two phases: every word is inserted into the trie, and then failure and
//! output links are computed with a breadth-first traversal from the root. Nothing is mutated
//! after [`Automaton::compile()`] returns.
//!
//! [`Filter`]: crate::Filter

use alloc::{boxed::Box, collections::VecDeque, vec, vec::Vec};
use bitflags::bitflags;
use hashbrown::HashMap;

/// Index of a [`State`] within the [`Automaton`]'s arena.
pub(crate) type StateId = usize;

/// The root state, representing the empty prefix.
///
/// The root's failure link points to itself. Any walk along failure links must stop here.
pub(crate) const ROOT: StateId = 0;

bitflags! {
    /// Bitflags that define attributes on a [`State`].
    pub(crate) struct Flags: u8 {
        /// A word ends exactly at this state.
        ///
        /// If this flag is set, the word and its length are stored within the state as well.
        const TERMINAL = 0b0000_0001;
        /// Some state on this state's failure chain (excluding itself) is terminal.
        ///
        /// This flag is set if and only if the state has an output link.
        const SUFFIX_TERMINAL = 0b0000_0010;
    }
}

/// Attributes of a [`State`].
///
/// Having these stored together ensures the `TERMINAL` flag is set if and only if `word` is
/// `Some`.
#[derive(Debug)]
pub(crate) struct Attributes {
    flags: Flags,
    /// The word ending at this state.
    word: Option<Box<str>>,
    /// Length of `word` in `char`s.
    len: usize,
}

impl Attributes {
    fn new() -> Self {
        Self {
            flags: Flags::empty(),
            word: None,
            len: 0,
        }
    }

    /// Mark the attributes as terminal for `word`.
    ///
    /// Calling this again with the same word leaves the attributes unchanged.
    fn set_terminal(&mut self, word: &str, len: usize) {
        self.flags.insert(Flags::TERMINAL);
        if self.word.is_none() {
            self.word = Some(word.into());
        }
        self.len = len;
    }

    #[inline]
    fn terminal(&self) -> bool {
        self.flags.contains(Flags::TERMINAL)
    }

    #[inline]
    fn suffix_terminal(&self) -> bool {
        self.flags.contains(Flags::SUFFIX_TERMINAL)
    }
}

/// A single state within the automaton.
#[derive(Debug)]
pub(crate) struct State {
    /// Direct character transitions. These are the trie's tree edges.
    children: HashMap<char, StateId>,
    /// The state representing the longest proper suffix of this state's path that is also a
    /// prefix of some word.
    failure: StateId,
    /// The nearest terminal state along the failure chain, excluding this state.
    output: Option<StateId>,
    attributes: Attributes,
}

impl State {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            failure: ROOT,
            output: None,
            attributes: Attributes::new(),
        }
    }

    /// Follow the direct transition on `c`, if one exists.
    #[inline]
    pub(crate) fn child(&self, c: char) -> Option<StateId> {
        self.children.get(&c).copied()
    }

    #[inline]
    pub(crate) fn failure(&self) -> StateId {
        self.failure
    }

    #[inline]
    pub(crate) fn output(&self) -> Option<StateId> {
        self.output
    }

    /// Returns whether a word ends exactly at this state.
    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.attributes.terminal()
    }

    /// The word ending at this state, if the state is terminal.
    #[inline]
    pub(crate) fn word(&self) -> Option<&str> {
        self.attributes.word.as_deref()
    }

    /// Length in `char`s of the word ending at this state, or `0` if the state is not terminal.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.attributes.len
    }
}

/// The compiled automaton.
///
/// The first state in `states` is always the root.
#[derive(Debug)]
pub(crate) struct Automaton {
    states: Vec<State>,
    /// Number of distinct words inserted.
    words: usize,
}

impl Automaton {
    /// Compile `words` into an automaton.
    ///
    /// Empty words are skipped, and duplicate words are only inserted once.
    pub(crate) fn compile<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self {
            states: vec![State::new()],
            words: 0,
        };

        let mut inserted = 0;
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                log::trace!("skipping empty word");
                continue;
            }
            automaton.insert(word);
            inserted += 1;
        }
        automaton.link();

        log::debug!(
            "compiled {} words ({} distinct) into {} states",
            inserted,
            automaton.words,
            automaton.states.len()
        );

        automaton
    }

    /// Add states and `char` edges representing `word`, marking the final state as terminal.
    fn insert(&mut self, word: &str) {
        let mut index = ROOT;
        let mut len = 0;
        for c in word.chars() {
            len += 1;
            index = match self.states[index].child(c) {
                Some(next) => next,
                None => {
                    let next = self.states.len();
                    self.states[index].children.insert(c, next);
                    self.states.push(State::new());
                    next
                }
            };
        }

        let attributes = &mut self.states[index].attributes;
        if !attributes.terminal() {
            self.words += 1;
        }
        attributes.set_terminal(word, len);
    }

    /// Compute failure and output links for every state.
    ///
    /// States are visited in breadth-first order, so a state's failure target (which is always
    /// shallower) has its own links computed before they are read.
    fn link(&mut self) {
        let mut queue = VecDeque::new();

        // Direct children of the root fail to the root, which `State::new()` already set.
        queue.extend(self.states[ROOT].children.values().copied());

        while let Some(parent) = queue.pop_front() {
            let edges = self.states[parent]
                .children
                .iter()
                .map(|(c, child)| (*c, *child))
                .collect::<Vec<_>>();
            for (c, child) in edges {
                let failure = self.fallback(self.states[parent].failure, c);
                let output = if self.states[failure].is_terminal() {
                    Some(failure)
                } else {
                    self.states[failure].output
                };

                let state = &mut self.states[child];
                state.failure = failure;
                state.output = output;
                if output.is_some() {
                    state.attributes.flags.insert(Flags::SUFFIX_TERMINAL);
                }

                queue.push_back(child);
            }
        }
    }

    /// Find the failure target for an edge on `c`, starting the search at the parent's failure
    /// state `from`.
    fn fallback(&self, mut from: StateId, c: char) -> StateId {
        loop {
            if let Some(next) = self.states[from].child(c) {
                return next;
            }
            if from == ROOT {
                return ROOT;
            }
            from = self.states[from].failure;
        }
    }

    #[inline]
    pub(crate) fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Number of distinct words compiled into the automaton.
    #[inline]
    pub(crate) fn words(&self) -> usize {
        self.words
    }

    /// Length of the longest word ending at state `id`, including words reachable through the
    /// failure chain when `exhaustive` is set.
    ///
    /// Returns `0` if no word ends there.
    #[inline]
    pub(crate) fn match_len(&self, id: StateId, exhaustive: bool) -> usize {
        let state = self.state(id);
        if state.is_terminal() {
            // Every word on the failure chain is a proper suffix of this one.
            state.len()
        } else if exhaustive && state.attributes.suffix_terminal() {
            state.output.map_or(0, |output| self.state(output).len())
        } else {
            0
        }
    }

    #[cfg(test)]
    pub(crate) fn search(&self, word: &str) -> Option<StateId> {
        let mut index = ROOT;
        for c in word.chars() {
            index = self.state(index).child(c)?;
        }
        Some(index)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
