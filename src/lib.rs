//! Deterministic finite automata over small character alphabets, together with the product
//! construction that combines two of them into a single machine.
//!
//! A DFA is anything implementing [`Deterministic`]: it names a finite set of states, an
//! [`Alphabet`](alphabet::CharAlphabet), a designated initial state, a total successor function and
//! a predicate telling which states are accepting. Concrete machines are usually written down as
//! tables through a [`DFABuilder`](builder::DFABuilder), which refuses to produce a DFA whose
//! transition table is not total and deterministic.
//!
//! Two DFAs over the same alphabet can be combined with [`Product::build`](product::Product::build).
//! The states of the product are pairs [`ProductIndex`](product::ProductIndex) of component states,
//! it moves both components in lockstep and its accepting states are determined once, at
//! construction time, by applying a boolean [`Combinator`](product::Combinator) to the acceptance
//! of the two components. As a product is itself [`Deterministic`], products can be nested.
//!
//! Words are fed to an automaton with [`run`](run::run), which returns a [`RunResult`](run::RunResult)
//! holding the reached state and the verdict. Acceptance is derived from the reached state and nothing else.
//!
//! ```
//! use automata_product::prelude::*;
//!
//! let dfa = machines::contains_011_and_even().unwrap();
//! assert!(dfa.accepts("00110".chars()).unwrap());
//! assert!(!dfa.accepts("0111".chars()).unwrap());
//! assert!(!dfa.accepts("".chars()).unwrap());
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use automata_product::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::CharAlphabet,
        automaton::{Deterministic, StateIndex},
        builder::DFABuilder,
        error::{AutomatonError, TableDefect},
        machines,
        machines::{Contains011, LastSymbol},
        product::{Combinator, Product, ProductIndex},
        run::{run, trace, RunResult},
        table::TransitionTable,
        Show, DFA,
    };
}

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Defines the [`Deterministic`] trait, which is the contract every automaton in this crate fulfils.
pub mod automaton;
pub use automaton::Deterministic;

/// Table-backed DFAs and the builder that validates them.
pub mod builder;
pub use builder::DFA;

/// The errors that construction and simulation may produce.
pub mod error;

/// Concrete machines: the recognizer for words containing `011`, the recognizer for words
/// ending in `0` and their intersection.
pub mod machines;

/// The product construction.
pub mod product;

/// Simulation of words on automata.
pub mod run;

/// Rendering of transition tables.
pub mod table;

/// Random words, mostly useful for testing and benchmarking. Feature gated behind `random`.
#[cfg(feature = "random")]
pub mod random;

use itertools::Itertools;

/// Helper trait which can be used to display states, symbols and words.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state that should be
    /// for example q0, q1, q2, ... and for a product state it should be (q0, p1).
    fn show(&self) -> String;

    /// Show a collection of the thing, for a collection of states this should be {q0, q1, q2, ...}.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(Show::show).join(", "))
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> String
    where
        Self: 'a,
    {
        format!("\"{}\"", iter.into_iter().join(""))
    }
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;
