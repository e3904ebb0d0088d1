use std::{fmt::Debug, hash::Hash};

use tracing::trace;

use crate::prelude::*;

/// Bound for the types that are used as states of an automaton. Component machines use small
/// enums, products use [`ProductIndex`] pairs.
pub trait StateIndex: Copy + Eq + Ord + Hash + Debug + Show {}

impl<T: Copy + Eq + Ord + Hash + Debug + Show> StateIndex for T {}

/// A deterministic finite automaton. Implementors provide a finite set of states, a designated
/// initial state, a successor function that is total over the [`CharAlphabet`] and a predicate
/// telling whether a state is accepting.
///
/// The successor function may only return `None` for symbols that are not in the alphabet,
/// all other (state, symbol) pairs must lead to exactly one state from [`Self::state_indices`].
/// [`Self::verify_deterministic`] checks this exhaustively.
///
/// Nothing in this trait takes `&mut self`, an automaton is fixed once it has been built and
/// can be shared between any number of runs.
pub trait Deterministic {
    /// The type of states.
    type StateIndex: StateIndex;

    /// Returns the alphabet over which the automaton reads.
    fn alphabet(&self) -> &CharAlphabet;

    /// Iterates over all states of the automaton.
    fn state_indices(&self) -> impl Iterator<Item = Self::StateIndex> + '_;

    /// The state in which every run starts.
    fn initial(&self) -> Self::StateIndex;

    /// Returns the state that is reached from `state` on `symbol`, or `None` if `symbol`
    /// is not part of the alphabet.
    fn successor(&self, state: Self::StateIndex, symbol: char) -> Option<Self::StateIndex>;

    /// Returns true if `state` is accepting.
    fn is_accepting(&self, state: Self::StateIndex) -> bool;

    /// Like [`Self::successor`], but reports symbols outside of the alphabet as an
    /// [`AutomatonError::UnrecognizedSymbol`].
    fn step(
        &self,
        state: Self::StateIndex,
        symbol: char,
    ) -> Result<Self::StateIndex, AutomatonError> {
        self.successor(state, symbol)
            .ok_or(AutomatonError::UnrecognizedSymbol {
                symbol,
                position: None,
            })
    }

    /// Returns the number of states.
    fn size(&self) -> usize {
        self.state_indices().count()
    }

    /// Iterates over the accepting states.
    fn accepting_states(&self) -> impl Iterator<Item = Self::StateIndex> + '_ {
        self.state_indices().filter(move |q| self.is_accepting(*q))
    }

    /// Runs `word` from the initial state, see [`crate::run::run`].
    fn run<W>(&self, word: W) -> Result<RunResult<Self::StateIndex>, AutomatonError>
    where
        Self: Sized,
        W: IntoIterator<Item = char>,
    {
        crate::run::run(self, word)
    }

    /// Returns whether the automaton accepts `word`.
    fn accepts<W>(&self, word: W) -> Result<bool, AutomatonError>
    where
        Self: Sized,
        W: IntoIterator<Item = char>,
    {
        self.run(word).map(|result| result.accepted())
    }

    /// Verifies that the initial state is a state of the automaton and that every
    /// state has precisely one successor on every symbol, which is again a state of
    /// the automaton.
    fn verify_deterministic(&self) -> Result<(), AutomatonError> {
        let states: crate::Set<_> = self.state_indices().collect();
        if !states.contains(&self.initial()) {
            return Err(TableDefect::UndeclaredState(self.initial().show()).into());
        }
        if self.alphabet().is_empty() {
            return Err(TableDefect::EmptyAlphabet.into());
        }
        for state in self.state_indices() {
            for symbol in self.alphabet().universe() {
                let Some(target) = self.successor(state, symbol) else {
                    return Err(TableDefect::Missing {
                        state: state.show(),
                        symbol,
                    }
                    .into());
                };
                if !states.contains(&target) {
                    return Err(TableDefect::UndeclaredState(target.show()).into());
                }
            }
        }
        trace!(
            "verified {} states over {} to be deterministic",
            states.len(),
            self.alphabet()
        );
        Ok(())
    }

    /// Computes the intersection of `self` with `other` through the product construction.
    fn intersection<R: Deterministic>(self, other: R) -> Result<Product<Self, R>, AutomatonError>
    where
        Self: Sized,
    {
        Product::build(self, other, Combinator::And)
    }

    /// Computes the union of `self` with `other` through the product construction.
    fn union<R: Deterministic>(self, other: R) -> Result<Product<Self, R>, AutomatonError>
    where
        Self: Sized,
    {
        Product::build(self, other, Combinator::Or)
    }

    /// Builds a product accepting the words that precisely one of `self` and `other` accepts.
    fn symmetric_difference<R: Deterministic>(
        self,
        other: R,
    ) -> Result<Product<Self, R>, AutomatonError>
    where
        Self: Sized,
    {
        Product::build(self, other, Combinator::Xor)
    }

    /// Builds a product accepting the words that `self` accepts and `other` rejects.
    fn difference<R: Deterministic>(self, other: R) -> Result<Product<Self, R>, AutomatonError>
    where
        Self: Sized,
    {
        Product::build(self, other, Combinator::Difference)
    }
}

impl<D: Deterministic> Deterministic for &D {
    type StateIndex = D::StateIndex;

    fn alphabet(&self) -> &CharAlphabet {
        D::alphabet(self)
    }

    fn state_indices(&self) -> impl Iterator<Item = Self::StateIndex> + '_ {
        D::state_indices(self)
    }

    fn initial(&self) -> Self::StateIndex {
        D::initial(self)
    }

    fn successor(&self, state: Self::StateIndex, symbol: char) -> Option<Self::StateIndex> {
        D::successor(self, state, symbol)
    }

    fn is_accepting(&self, state: Self::StateIndex) -> bool {
        D::is_accepting(self, state)
    }
}
