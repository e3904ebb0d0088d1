use itertools::Itertools;

use crate::Show;

/// Represents an alphabet where a symbol is just a single `char`.
///
/// The symbols are kept sorted and free of duplicates, so two alphabets compare equal precisely
/// when they consist of the same symbols, no matter in which order these were supplied.
///
/// # Example
/// ```
/// use automata_product::prelude::*;
///
/// let alphabet = CharAlphabet::from_iter(['1', '0', '1']);
/// assert_eq!(alphabet, CharAlphabet::binary());
/// assert_eq!(alphabet.size(), 2);
/// assert!(alphabet.contains('0'));
/// assert!(!alphabet.contains('2'));
/// ```
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord, Default)]
pub struct CharAlphabet(Vec<char>);

impl CharAlphabet {
    /// Creates a new [`CharAlphabet`] from the given symbols.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        symbols.into_iter().collect()
    }

    /// The alphabet `{'0', '1'}` over which binary numbers are written.
    pub fn binary() -> Self {
        Self::new(['0', '1'])
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.0.binary_search(&symbol).is_ok()
    }

    /// Iterates over all symbols in ascending order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for CharAlphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().unique().sorted().collect())
    }
}

impl Show for CharAlphabet {
    fn show(&self) -> String {
        format!("{{{}}}", self.0.iter().map(|sym| format!("'{sym}'")).join(", "))
    }
}

impl std::fmt::Display for CharAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}
