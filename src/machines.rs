use crate::prelude::*;

/// States of the DFA returned by [`contains_011`]. Each state stands for the longest suffix of
/// the input read so far that is a proper prefix of `011`, except for [`Contains011::Q3`], which
/// is entered once `011` has occurred and is never left again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Contains011 {
    /// No prefix of `011` is pending.
    Q0,
    /// The input ends in `0`.
    Q1,
    /// The input ends in `01`.
    Q2,
    /// `011` has been read.
    Q3,
}

impl Show for Contains011 {
    fn show(&self) -> String {
        match self {
            Contains011::Q0 => "q0",
            Contains011::Q1 => "q1",
            Contains011::Q2 => "q2",
            Contains011::Q3 => "q3",
        }
        .to_string()
    }
}

/// States of the DFA returned by [`ends_in_zero`], which remembers the last symbol it has read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LastSymbol {
    /// Nothing has been read yet. The empty word does not end in `0`, so this state rejects.
    Init,
    /// The last symbol was `0`.
    Zero,
    /// The last symbol was `1`.
    One,
}

impl Show for LastSymbol {
    fn show(&self) -> String {
        match self {
            LastSymbol::Init => "pInit",
            LastSymbol::Zero => "p0",
            LastSymbol::One => "p1",
        }
        .to_string()
    }
}

/// DFA over `{'0', '1'}` accepting the words that contain `011` as a factor.
pub fn contains_011() -> Result<DFA<Contains011>, AutomatonError> {
    use Contains011::*;

    DFA::builder()
        .with_alphabet(CharAlphabet::binary())
        .with_states([Q0, Q1, Q2, Q3])
        .with_edges([
            (Q0, '0', Q1),
            (Q0, '1', Q0),
            (Q1, '0', Q1),
            (Q1, '1', Q2),
            (Q2, '0', Q1),
            (Q2, '1', Q3),
            (Q3, '0', Q3),
            (Q3, '1', Q3),
        ])
        .with_accepting([Q3])
        .into_dfa(Q0)
}

/// DFA over `{'0', '1'}` accepting the words ending in `0`, i.e. the binary representations of
/// even numbers. The empty word is rejected.
pub fn ends_in_zero() -> Result<DFA<LastSymbol>, AutomatonError> {
    use LastSymbol::*;

    DFA::builder()
        .with_alphabet(CharAlphabet::binary())
        .with_states([Init, Zero, One])
        .with_edges([
            (Init, '0', Zero),
            (Init, '1', One),
            (Zero, '0', Zero),
            (Zero, '1', One),
            (One, '0', Zero),
            (One, '1', One),
        ])
        .with_accepting([Zero])
        .into_dfa(Init)
}

/// The automaton for binary words that contain `011` and represent an even number, obtained
/// as the intersection of [`contains_011`] and [`ends_in_zero`].
pub type Contains011AndEven = Product<DFA<Contains011>, DFA<LastSymbol>>;

/// Builds the product of [`contains_011`] and [`ends_in_zero`] under [`Combinator::And`].
pub fn contains_011_and_even() -> Result<Contains011AndEven, AutomatonError> {
    Product::build(contains_011()?, ends_in_zero()?, Combinator::And)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_011_table() {
        use super::Contains011::*;
        let dfa = contains_011().unwrap();
        assert!(dfa.verify_deterministic().is_ok());
        assert_eq!(dfa.successor(Q2, '1'), Some(Q3));
        assert_eq!(dfa.successor(Q2, '0'), Some(Q1));

        for (word, expected) in [
            ("", false),
            ("011", true),
            ("0101", false),
            ("00110", true),
            ("1011", true),
            ("010", false),
            ("111000", false),
        ] {
            assert_eq!(dfa.accepts(word.chars()).unwrap(), expected, "{word:?}");
        }
    }

    #[test]
    fn ends_in_zero_table() {
        let dfa = ends_in_zero().unwrap();
        assert!(dfa.verify_deterministic().is_ok());
        assert!(!dfa.is_accepting(dfa.initial()));
        assert_eq!(dfa.run("".chars()).unwrap().state(), LastSymbol::Init);
        assert!(dfa.accepts("0".chars()).unwrap());
        assert!(dfa.accepts("110".chars()).unwrap());
        assert!(!dfa.accepts("01".chars()).unwrap());
    }

    #[test_log::test]
    fn battery() {
        let dfa = contains_011_and_even().unwrap();
        assert_eq!(dfa.size(), 12);
        for (word, expected) in [
            ("", false),
            ("0", false),
            ("011", false),
            ("0110", true),
            ("10110", true),
            ("110", false),
            ("1010110", true),
            ("010", false),
            ("00110", true),
            ("0111", false),
            ("1011", false),
        ] {
            assert_eq!(dfa.accepts(word.chars()).unwrap(), expected, "{word:?}");
        }
    }
}
