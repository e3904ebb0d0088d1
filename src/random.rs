use crate::prelude::*;

/// Draws a word of length `len` whose symbols are picked uniformly from `alphabet`. For an
/// empty alphabet the only word there is, the empty one, is returned.
pub fn random_word(alphabet: &CharAlphabet, len: usize) -> Vec<char> {
    let symbols: Vec<char> = alphabet.universe().collect();
    if symbols.is_empty() {
        return vec![];
    }
    (0..len)
        .map(|_| symbols[fastrand::usize(..symbols.len())])
        .collect()
}

/// Draws `count` words with lengths picked uniformly between `0` and `max_len` (inclusive).
pub fn random_words(alphabet: &CharAlphabet, max_len: usize, count: usize) -> Vec<Vec<char>> {
    (0..count)
        .map(|_| random_word(alphabet, fastrand::usize(..=max_len)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_stay_within_bounds() {
        let alphabet = CharAlphabet::binary();
        let words = random_words(&alphabet, 6, 200);
        assert_eq!(words.len(), 200);
        assert!(words
            .iter()
            .all(|w| w.len() <= 6 && w.iter().all(|c| alphabet.contains(*c))));
        assert_eq!(random_word(&alphabet, 9).len(), 9);
        assert!(random_word(&CharAlphabet::default(), 3).is_empty());
    }
}
