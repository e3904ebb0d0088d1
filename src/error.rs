use thiserror::Error;

use crate::alphabet::CharAlphabet;

/// Abstracts the errors that can occur when building or running an automaton. None of them
/// leaves an automaton in a changed state, an automaton that was involved in a failed run can
/// be used for further runs.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AutomatonError {
    /// The two components of a product are defined over different alphabets.
    #[error("cannot build product of automata over different alphabets {left} and {right}")]
    AlphabetMismatch {
        /// Alphabet of the left component.
        left: CharAlphabet,
        /// Alphabet of the right component.
        right: CharAlphabet,
    },
    /// A symbol that is not part of the alphabet was encountered. If the symbol was read as part
    /// of a word, `position` is its index in that word.
    #[error("symbol `{symbol}` is not in the alphabet{}", at_position(.position))]
    UnrecognizedSymbol {
        /// The offending symbol.
        symbol: char,
        /// Position of the symbol in the input word, if any.
        position: Option<usize>,
    },
    /// The transition table that was handed to a builder does not describe a total DFA.
    #[error("malformed transition table: {0}")]
    MalformedTransitionTable(#[from] TableDefect),
}

fn at_position(position: &Option<usize>) -> String {
    match position {
        Some(i) => format!(" (at position {i})"),
        None => String::new(),
    }
}

/// Describes in which way a transition table fails to be that of a DFA. States are given by
/// their [`Show`](crate::Show) representation.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[allow(missing_docs)]
pub enum TableDefect {
    #[error("the alphabet is empty")]
    EmptyAlphabet,
    #[error("state {state} has no transition on `{symbol}`")]
    Missing { state: String, symbol: char },
    #[error("state {state} has transitions to {first} and {second} on `{symbol}`")]
    Conflicting {
        state: String,
        symbol: char,
        first: String,
        second: String,
    },
    #[error("transition from {state} uses `{symbol}`, which is not in the alphabet")]
    ForeignSymbol { state: String, symbol: char },
    #[error("state {0} is used but was never declared")]
    UndeclaredState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = AutomatonError::UnrecognizedSymbol {
            symbol: '2',
            position: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "symbol `2` is not in the alphabet (at position 3)"
        );

        let err = AutomatonError::from(TableDefect::Missing {
            state: "q1".into(),
            symbol: '0',
        });
        assert_eq!(
            err.to_string(),
            "malformed transition table: state q1 has no transition on `0`"
        );

        let err = AutomatonError::AlphabetMismatch {
            left: CharAlphabet::binary(),
            right: CharAlphabet::new(['a', 'b']),
        };
        assert!(err.to_string().contains("{'a', 'b'}"));
    }
}
