use crate::{automaton::StateIndex, prelude::*};

/// The outcome of running a word on an automaton: the state that is reached after reading the
/// whole word together with the verdict, which is whether that state is accepting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunResult<Q> {
    state: Q,
    accepted: bool,
}

impl<Q: Copy> RunResult<Q> {
    /// The state that was reached.
    pub fn state(&self) -> Q {
        self.state
    }

    /// Whether the reached state is accepting.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Decomposes `self` into the reached state and the verdict.
    pub fn into_parts(self) -> (Q, bool) {
        (self.state, self.accepted)
    }
}

impl<Q: StateIndex> Show for RunResult<Q> {
    fn show(&self) -> String {
        format!("{} {}", self.state.show(), self.accepted.show())
    }
}

/// Reads `word` symbol by symbol, starting in the initial state of `automaton`. Once the word
/// is consumed, the verdict is obtained by asking whether the reached state is accepting, which
/// for the empty word is simply the initial state.
///
/// If the word contains a symbol that does not belong to the alphabet, the run is aborted with
/// an [`AutomatonError::UnrecognizedSymbol`] that records the position of the symbol.
///
/// # Example
/// ```
/// use automata_product::prelude::*;
///
/// let dfa = machines::contains_011().unwrap();
/// let result = run(&dfa, "10110".chars()).unwrap();
/// assert_eq!(result.state(), Contains011::Q3);
/// assert!(result.accepted());
///
/// assert!(run(&dfa, "01a".chars()).is_err());
/// ```
pub fn run<D, W>(automaton: &D, word: W) -> Result<RunResult<D::StateIndex>, AutomatonError>
where
    D: Deterministic,
    W: IntoIterator<Item = char>,
{
    let state = word
        .into_iter()
        .enumerate()
        .try_fold(automaton.initial(), |state, (position, symbol)| {
            let next = advance(automaton, state, position, symbol)?;
            tracing::trace!("{} --{}--> {}", state.show(), symbol, next.show());
            Ok::<_, AutomatonError>(next)
        })?;

    Ok(RunResult {
        state,
        accepted: automaton.is_accepting(state),
    })
}

/// Like [`run`], but collects every state that is visited, beginning with the initial state.
/// For a word of length `n` the returned sequence therefore has `n + 1` entries and its last
/// entry is the state that [`run`] reports.
pub fn trace<D, W>(automaton: &D, word: W) -> Result<Vec<D::StateIndex>, AutomatonError>
where
    D: Deterministic,
    W: IntoIterator<Item = char>,
{
    let mut current = automaton.initial();
    let mut states = vec![current];
    for (position, symbol) in word.into_iter().enumerate() {
        current = advance(automaton, current, position, symbol)?;
        states.push(current);
    }
    Ok(states)
}

fn advance<D: Deterministic>(
    automaton: &D,
    state: D::StateIndex,
    position: usize,
    symbol: char,
) -> Result<D::StateIndex, AutomatonError> {
    automaton.step(state, symbol).map_err(|err| match err {
        AutomatonError::UnrecognizedSymbol { symbol, .. } => AutomatonError::UnrecognizedSymbol {
            symbol,
            position: Some(position),
        },
        other => other,
    })
}
