use owo_colors::OwoColorize;
use tabled::{builder::Builder, settings::Style};

use crate::prelude::*;

/// Tabular rendering of the transition function of a [`Deterministic`] automaton. There is one
/// row per state and one column per alphabet symbol. The initial state is marked with `→`, the
/// accepting states with `*`.
///
/// # Example
/// ```
/// use automata_product::prelude::*;
///
/// let dfa = machines::ends_in_zero().unwrap();
/// let rendered = TransitionTable::new(&dfa).to_string();
/// assert!(rendered.contains("→ pInit"));
/// assert!(rendered.contains("* p0"));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable {
    header: Vec<String>,
    rows: Vec<(bool, Vec<String>)>,
    colored: bool,
}

impl TransitionTable {
    /// Collects the transitions of `automaton`.
    pub fn new<D: Deterministic>(automaton: &D) -> Self {
        let header = std::iter::once("state".to_string())
            .chain(automaton.alphabet().universe().map(|sym| sym.show()))
            .collect();

        let rows = automaton
            .state_indices()
            .map(|q| {
                let accepting = automaton.is_accepting(q);
                let marker = match (q == automaton.initial(), accepting) {
                    (true, true) => "→*",
                    (true, false) => "→ ",
                    (false, true) => "* ",
                    (false, false) => "  ",
                };
                let cells = std::iter::once(format!("{marker}{}", q.show()))
                    .chain(automaton.alphabet().universe().map(|sym| {
                        automaton
                            .successor(q, sym)
                            .map(|p| p.show())
                            .unwrap_or_else(|| "-".to_string())
                    }))
                    .collect();
                (accepting, cells)
            })
            .collect();

        Self {
            header,
            rows,
            colored: false,
        }
    }

    /// Highlights the rows of accepting states with ANSI colors when rendered.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Returns the number of rendered states.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no states.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl std::fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(self.header.clone());
        for (accepting, cells) in &self.rows {
            if self.colored && *accepting {
                builder.push_record(cells.iter().map(|cell| cell.green().to_string()));
            } else {
                builder.push_record(cells.clone());
            }
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        write!(f, "{table}")
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn product_table() {
        let dfa = machines::contains_011_and_even().unwrap();
        let table = TransitionTable::new(&dfa);
        assert_eq!(table.len(), 12);

        let rendered = table.to_string();
        assert!(rendered.contains("→ (q0, pInit)"));
        assert!(rendered.contains("* (q3, p0)"));
        // header, one line per state and three borders
        assert_eq!(rendered.lines().count(), 12 + 4);
    }

    #[test]
    fn colors_only_when_asked() {
        let dfa = machines::contains_011().unwrap();
        assert!(!TransitionTable::new(&dfa).to_string().contains('\u{1b}'));
        assert!(TransitionTable::new(&dfa)
            .colored(true)
            .to_string()
            .contains('\u{1b}'));
    }
}
