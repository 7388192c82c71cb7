//! Walker for [`Filter`] internal searching.
//!
//! A [`Walker`] keeps track of the current state while stepping through an input one `char` at a
//! time. It only ever reads from the [`Automaton`], so any number of `Walker`s may search the same
//! automaton at once.
//!
//! [`Filter`]: crate::Filter

use crate::automaton::{Automaton, State, StateId, ROOT};

/// A cursor into an [`Automaton`].
#[derive(Clone, Debug)]
pub(crate) struct Walker<'a> {
    automaton: &'a Automaton,
    state: StateId,
}

impl<'a> Walker<'a> {
    /// Create a new `Walker` positioned at the root of `automaton`.
    pub(crate) fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            state: ROOT,
        }
    }

    /// Step the `Walker` along the character `c`, returning the state it lands on.
    ///
    /// If there is no transition on `c` from the current state, failure links are followed until
    /// one is found or the root is reached. A `Walker` at the root with no transition on `c` stays
    /// at the root.
    pub(crate) fn step(&mut self, c: char) -> StateId {
        let mut state = self.state;
        loop {
            if let Some(next) = self.automaton.state(state).child(c) {
                state = next;
                break;
            }
            if state == ROOT {
                break;
            }
            state = self.automaton.state(state).failure();
        }
        self.state = state;
        state
    }

    /// The state the `Walker` is currently at.
    #[inline]
    pub(crate) fn state(&self) -> &'a State {
        self.automaton.state(self.state)
    }

    /// Iterate over every terminal state matching at the current position.
    ///
    /// The current state is yielded first if it is terminal, followed by every terminal state on
    /// its failure chain, from longest to shortest.
    pub(crate) fn outputs(&self) -> Outputs<'a> {
        let state = self.state();
        Outputs {
            automaton: self.automaton,
            next: if state.is_terminal() {
                Some(self.state)
            } else {
                state.output()
            },
        }
    }
}

/// Iterator over the output chain of a state.
#[derive(Debug)]
pub(crate) struct Outputs<'a> {
    automaton: &'a Automaton,
    next: Option<StateId>,
}

impl<'a> Iterator for Outputs<'a> {
    type Item = &'a State;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.automaton.state(self.next?);
        self.next = state.output();
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        automaton::{Automaton, ROOT},
        walker::Walker,
    };
    use alloc::{vec, vec::Vec};

    #[test]
    fn step() {
        let automaton = Automaton::compile(&["foo"]);
        let mut walker = Walker::new(&automaton);

        assert_eq!(walker.step('f'), automaton.search("f").unwrap());
        assert_eq!(walker.step('o'), automaton.search("fo").unwrap());
        assert_eq!(walker.step('o'), automaton.search("foo").unwrap());
        assert!(walker.state().is_terminal());
    }

    #[test]
    fn step_no_transition_stays_at_root() {
        let automaton = Automaton::compile(&["foo"]);
        let mut walker = Walker::new(&automaton);

        assert_eq!(walker.step('x'), ROOT);
        assert_eq!(walker.step('y'), ROOT);
    }

    #[test]
    fn step_empty_automaton() {
        let automaton = Automaton::compile(Vec::<&str>::new());
        let mut walker = Walker::new(&automaton);

        for c in "anything".chars() {
            assert_eq!(walker.step(c), ROOT);
        }
    }

    #[test]
    fn step_follows_failure() {
        let automaton = Automaton::compile(&["abc", "bc"]);
        let mut walker = Walker::new(&automaton);

        walker.step('a');
        walker.step('b');
        // "ab" has no 'x', and neither does "b" or the root.
        assert_eq!(walker.step('x'), ROOT);

        walker.step('a');
        walker.step('b');
        // "ab" falls back through "b" to the root, which transitions to "b".
        assert_eq!(walker.step('b'), automaton.search("b").unwrap());
        assert_eq!(walker.step('c'), automaton.search("bc").unwrap());
    }

    #[test]
    fn step_restarts_from_root_child() {
        let automaton = Automaton::compile(&["ab"]);
        let mut walker = Walker::new(&automaton);

        walker.step('a');
        assert_eq!(walker.step('a'), automaton.search("a").unwrap());
        assert_eq!(walker.step('b'), automaton.search("ab").unwrap());
    }

    #[test]
    fn outputs() {
        let automaton = Automaton::compile(&["abcd", "bc", "c"]);
        let mut walker = Walker::new(&automaton);

        walker.step('a');
        walker.step('b');
        walker.step('c');

        assert_eq!(
            walker
                .outputs()
                .filter_map(|state| state.word())
                .collect::<Vec<_>>(),
            vec!["bc", "c"]
        );
    }

    #[test]
    fn outputs_terminal_first() {
        let automaton = Automaton::compile(&["he", "she"]);
        let mut walker = Walker::new(&automaton);

        for c in "she".chars() {
            walker.step(c);
        }

        assert_eq!(
            walker
                .outputs()
                .filter_map(|state| state.word())
                .collect::<Vec<_>>(),
            vec!["she", "he"]
        );
    }

    #[test]
    fn outputs_none() {
        let automaton = Automaton::compile(&["foo"]);
        let mut walker = Walker::new(&automaton);

        walker.step('f');

        assert_eq!(walker.outputs().count(), 0);
    }
}
