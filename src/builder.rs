use itertools::Itertools;
use tracing::debug;

use crate::{automaton::StateIndex, prelude::*, Map, Set};

/// A deterministic finite automaton whose transitions are stored in a table. The states are
/// values of type `Q`, which is typically a small enum listing the states of one particular
/// machine.
///
/// A `DFA` can only be obtained from a [`DFABuilder`], which makes sure that the transition
/// table is total and deterministic. Afterwards, the automaton cannot be modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DFA<Q: StateIndex> {
    alphabet: CharAlphabet,
    states: Vec<Q>,
    initial: Q,
    accepting: Set<Q>,
    transitions: Map<(Q, char), Q>,
}

impl<Q: StateIndex> DFA<Q> {
    /// Instantiates a new [`DFABuilder`] for states of type `Q`.
    pub fn builder() -> DFABuilder<Q> {
        DFABuilder::default()
    }
}

impl<Q: StateIndex> Deterministic for DFA<Q> {
    type StateIndex = Q;

    fn alphabet(&self) -> &CharAlphabet {
        &self.alphabet
    }

    fn state_indices(&self) -> impl Iterator<Item = Q> + '_ {
        self.states.iter().copied()
    }

    fn initial(&self) -> Q {
        self.initial
    }

    fn successor(&self, state: Q, symbol: char) -> Option<Q> {
        self.transitions.get(&(state, symbol)).copied()
    }

    fn is_accepting(&self, state: Q) -> bool {
        self.accepting.contains(&state)
    }
}

/// Helper struct for the construction of a [`DFA`]. It collects the alphabet, the states,
/// a list of edges and the accepting states and checks upon calling [`DFABuilder::into_dfa`]
/// that these describe a total deterministic transition table.
///
/// If no alphabet is given explicitly, the alphabet consists of the symbols that appear on
/// at least one edge. States that appear on an edge are declared implicitly.
///
/// # Example
///
/// A DFA over `{'a', 'b'}` with two states that accepts the words ending in `b`:
/// ```
/// use automata_product::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_edges([(0usize, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)])
///     .with_accepting([1])
///     .into_dfa(0)
///     .unwrap();
/// assert!(dfa.accepts("aab".chars()).unwrap());
/// assert!(!dfa.accepts("aba".chars()).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct DFABuilder<Q> {
    alphabet: Option<CharAlphabet>,
    states: Vec<Q>,
    edges: Vec<(Q, char, Q)>,
    accepting: Vec<Q>,
}

impl<Q> Default for DFABuilder<Q> {
    fn default() -> Self {
        Self {
            alphabet: None,
            states: vec![],
            edges: vec![],
            accepting: vec![],
        }
    }
}

impl<Q: StateIndex> DFABuilder<Q> {
    /// Fixes the alphabet. Edges on symbols outside of it make [`DFABuilder::into_dfa`] fail.
    pub fn with_alphabet(mut self, alphabet: CharAlphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Declares states, the order in which they are given is the order in which
    /// [`Deterministic::state_indices`] lists them.
    pub fn with_states<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Adds edges, given as triples `(origin, symbol, target)`.
    pub fn with_edges<I: IntoIterator<Item = (Q, char, Q)>>(mut self, edges: I) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Turns the collected information into a [`DFA`] with the given initial state, provided
    /// the transition table is total and deterministic over the alphabet. Otherwise, a
    /// [`AutomatonError::MalformedTransitionTable`] describing the first defect is returned.
    pub fn into_dfa(self, initial: Q) -> Result<DFA<Q>, AutomatonError> {
        let alphabet = match self.alphabet {
            Some(alphabet) => alphabet,
            None => self.edges.iter().map(|(_, sym, _)| *sym).collect(),
        };
        if alphabet.is_empty() {
            return Err(TableDefect::EmptyAlphabet.into());
        }

        // explicitly declared states come first, then those only mentioned on edges
        let states = self
            .states
            .iter()
            .chain(self.edges.iter().flat_map(|(p, _, q)| [p, q]))
            .copied()
            .unique()
            .collect_vec();
        let declared: Set<Q> = states.iter().copied().collect();

        if let Some(q) = std::iter::once(&initial)
            .chain(&self.accepting)
            .find(|q| !declared.contains(*q))
        {
            return Err(TableDefect::UndeclaredState(q.show()).into());
        }

        let mut transitions: Map<(Q, char), Q> = Map::default();
        for (origin, symbol, target) in self.edges {
            if !alphabet.contains(symbol) {
                return Err(TableDefect::ForeignSymbol {
                    state: origin.show(),
                    symbol,
                }
                .into());
            }
            match transitions.insert((origin, symbol), target) {
                Some(previous) if previous != target => {
                    return Err(TableDefect::Conflicting {
                        state: origin.show(),
                        symbol,
                        first: previous.show(),
                        second: target.show(),
                    }
                    .into())
                }
                _ => {}
            }
        }

        if let Some((state, symbol)) = states
            .iter()
            .flat_map(|q| alphabet.universe().map(move |sym| (*q, sym)))
            .find(|key| !transitions.contains_key(key))
        {
            return Err(TableDefect::Missing {
                state: state.show(),
                symbol,
            }
            .into());
        }

        debug!(
            "built DFA with {} states and {} transitions over {}",
            states.len(),
            transitions.len(),
            alphabet
        );
        Ok(DFA {
            alphabet,
            states,
            initial,
            accepting: self.accepting.into_iter().collect(),
            transitions,
        })
    }
}
