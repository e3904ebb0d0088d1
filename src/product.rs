use itertools::Itertools;
use tracing::debug;

use crate::{prelude::*, Set};

/// State of a [`Product`], a pair consisting of a state of the left and a state of the right
/// component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductIndex<L, R>(pub L, pub R);

impl<L: Show, R: Show> Show for ProductIndex<L, R> {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<L, R> From<(L, R)> for ProductIndex<L, R> {
    fn from((l, r): (L, R)) -> Self {
        ProductIndex(l, r)
    }
}

/// The boolean rules with which the acceptance of the two components of a [`Product`] is
/// commonly combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
    /// Both components accept, yields the intersection of the languages.
    #[default]
    And,
    /// At least one component accepts, yields the union.
    Or,
    /// Precisely one component accepts, yields the symmetric difference.
    Xor,
    /// The left component accepts and the right one rejects.
    Difference,
}

impl Combinator {
    /// Applies the rule to the verdicts of the left and right component.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Combinator::And => left && right,
            Combinator::Or => left || right,
            Combinator::Xor => left != right,
            Combinator::Difference => left && !right,
        }
    }
}

impl std::str::FromStr for Combinator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Combinator::And),
            "or" => Ok(Combinator::Or),
            "xor" => Ok(Combinator::Xor),
            "difference" | "diff" => Ok(Combinator::Difference),
            other => Err(format!("unknown combinator `{other}`")),
        }
    }
}

/// The product of two deterministic automata `L` and `R` over the same alphabet. It reads
/// a symbol by moving both components, so its states are pairs [`ProductIndex`] of component
/// states.
///
/// Which pairs are accepting is decided once in [`Product::build_with`], by applying a
/// boolean function to the acceptance of both components, and never changes afterwards. The
/// components are only ever read, they can be handed over by value or as references.
///
/// # Example
/// ```
/// use automata_product::prelude::*;
///
/// let contains = machines::contains_011().unwrap();
/// let even = machines::ends_in_zero().unwrap();
/// let product = Product::build(&contains, &even, Combinator::And).unwrap();
///
/// assert_eq!(product.size(), 12);
/// assert_eq!(product.initial(), ProductIndex(Contains011::Q0, LastSymbol::Init));
/// assert_eq!(
///     product.accepting_states().collect::<Vec<_>>(),
///     vec![ProductIndex(Contains011::Q3, LastSymbol::Zero)]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Product<L: Deterministic, R: Deterministic> {
    left: L,
    right: R,
    accepting: Set<ProductIndex<L::StateIndex, R::StateIndex>>,
}

impl<L: Deterministic, R: Deterministic> Product<L, R> {
    /// Builds the product of `left` and `right`, combining their acceptance with `combinator`.
    pub fn build(left: L, right: R, combinator: Combinator) -> Result<Self, AutomatonError> {
        Self::build_with(left, right, |l, r| combinator.apply(l, r))
    }

    /// Builds the product of `left` and `right`, where a pair of states is accepting if
    /// `combine` returns `true` for the acceptance of the left and the right state.
    ///
    /// Fails with [`AutomatonError::AlphabetMismatch`] if the components read over
    /// different alphabets and with [`AutomatonError::MalformedTransitionTable`] if one of
    /// them is not total, see [`Deterministic::verify_deterministic`].
    pub fn build_with<F>(left: L, right: R, combine: F) -> Result<Self, AutomatonError>
    where
        F: Fn(bool, bool) -> bool,
    {
        if left.alphabet() != right.alphabet() {
            return Err(AutomatonError::AlphabetMismatch {
                left: left.alphabet().clone(),
                right: right.alphabet().clone(),
            });
        }
        left.verify_deterministic()?;
        right.verify_deterministic()?;

        let right_states = right.state_indices().collect_vec();
        let accepting: Set<_> = left
            .state_indices()
            .cartesian_product(right_states)
            .filter(|(l, r)| combine(left.is_accepting(*l), right.is_accepting(*r)))
            .map(ProductIndex::from)
            .collect();

        debug!(
            "built product with {} states, {} of which are accepting",
            left.size() * right.size(),
            accepting.len()
        );
        Ok(Self {
            left,
            right,
            accepting,
        })
    }

    /// Returns a reference to the left component.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right component.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Decomposes the product into its two components.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: Deterministic, R: Deterministic> Deterministic for Product<L, R> {
    type StateIndex = ProductIndex<L::StateIndex, R::StateIndex>;

    fn alphabet(&self) -> &CharAlphabet {
        self.left.alphabet()
    }

    fn state_indices(&self) -> impl Iterator<Item = Self::StateIndex> + '_ {
        self.left
            .state_indices()
            .flat_map(move |l| self.right.state_indices().map(move |r| ProductIndex(l, r)))
    }

    fn initial(&self) -> Self::StateIndex {
        ProductIndex(self.left.initial(), self.right.initial())
    }

    fn successor(&self, state: Self::StateIndex, symbol: char) -> Option<Self::StateIndex> {
        let ProductIndex(l, r) = state;
        Some(ProductIndex(
            self.left.successor(l, symbol)?,
            self.right.successor(r, symbol)?,
        ))
    }

    fn is_accepting(&self, state: Self::StateIndex) -> bool {
        self.accepting.contains(&state)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn parity(accepting: usize) -> DFA<usize> {
        DFA::builder()
            .with_edges([(0, 'a', 1), (0, 'b', 0), (1, 'a', 0), (1, 'b', 1)])
            .with_accepting([accepting])
            .into_dfa(0)
            .unwrap()
    }

    fn ends_with_b() -> DFA<usize> {
        DFA::builder()
            .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap()
    }

    #[test_log::test]
    fn combinators() {
        let (even_a, ends_b) = (parity(0), ends_with_b());
        let words = ["", "a", "b", "ab", "aab", "ba", "abab", "bbba"];

        for combinator in [
            Combinator::And,
            Combinator::Or,
            Combinator::Xor,
            Combinator::Difference,
        ] {
            let product = Product::build(&even_a, &ends_b, combinator).unwrap();
            assert!(product.verify_deterministic().is_ok());
            for word in words {
                let l = even_a.accepts(word.chars()).unwrap();
                let r = ends_b.accepts(word.chars()).unwrap();
                assert_eq!(
                    product.accepts(word.chars()).unwrap(),
                    combinator.apply(l, r),
                    "{combinator:?} on {word:?}"
                );
            }
        }
    }

    #[test]
    fn custom_combination() {
        // accepts iff both components agree
        let product = Product::build_with(parity(0), ends_with_b(), |l, r| l == r).unwrap();
        assert!(product.accepts("b".chars()).unwrap());
        assert!(!product.accepts("".chars()).unwrap());
        assert_eq!(product.accepting_states().count(), 2);
    }

    #[test]
    fn products_nest() {
        let inner = parity(0).intersection(ends_with_b()).unwrap();
        let outer = inner.union(parity(1)).unwrap();
        assert_eq!(outer.size(), 8);
        assert!(outer.verify_deterministic().is_ok());
        assert!(outer.accepts("a".chars()).unwrap());
        assert!(outer.accepts("aab".chars()).unwrap());
        assert!(!outer.accepts("aa".chars()).unwrap());
        assert_eq!(outer.initial(), ProductIndex(ProductIndex(0, 0), 0));
    }

    #[test]
    fn alphabets_must_agree() {
        let letters = parity(0);
        let binary = machines::ends_in_zero().unwrap();
        let err = Product::build(&letters, &binary, Combinator::And).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::AlphabetMismatch {
                left: CharAlphabet::new(['a', 'b']),
                right: CharAlphabet::binary(),
            }
        );
    }

    /// Has no transitions out of state 1.
    #[derive(Debug)]
    struct Partial(CharAlphabet);

    impl Deterministic for Partial {
        type StateIndex = usize;

        fn alphabet(&self) -> &CharAlphabet {
            &self.0
        }

        fn state_indices(&self) -> impl Iterator<Item = usize> + '_ {
            0..2
        }

        fn initial(&self) -> usize {
            0
        }

        fn successor(&self, state: usize, symbol: char) -> Option<usize> {
            match (state, symbol) {
                (0, 'a' | 'b') => Some(1),
                _ => None,
            }
        }

        fn is_accepting(&self, state: usize) -> bool {
            state == 1
        }
    }

    #[test]
    fn partial_components_fail_construction() {
        let total = ends_with_b();
        let ab = CharAlphabet::new(['a', 'b']);
        let expected = AutomatonError::MalformedTransitionTable(TableDefect::Missing {
            state: "1".into(),
            symbol: 'a',
        });
        assert_eq!(
            Product::build(Partial(ab.clone()), &total, Combinator::And).unwrap_err(),
            expected
        );
        assert_eq!(
            Product::build(&total, Partial(ab), Combinator::Or).unwrap_err(),
            expected
        );
    }

    #[test]
    fn components_stay_accessible() {
        let product = parity(0).difference(ends_with_b()).unwrap();
        assert_eq!(product.left().size(), 2);
        let (left, right) = product.into_parts();
        assert!(left.accepts("".chars()).unwrap());
        assert!(!right.accepts("".chars()).unwrap());
    }

    #[test]
    fn parse_combinators() {
        assert_eq!("AND".parse::<Combinator>(), Ok(Combinator::And));
        assert_eq!("diff".parse::<Combinator>(), Ok(Combinator::Difference));
        assert!("nand".parse::<Combinator>().is_err());
    }
}
