//! Probabilistic pre-check for whole-word vocabulary membership.
//!
//! Every word is hashed with two independently seeded hash functions, and both codes are stored.
//! A candidate missing either code is certainly not a stored word. A candidate with both codes
//! might still not be one, so a positive answer must always be confirmed against the trie.

use hashbrown::HashSet;

/// Words and candidates shorter than this many characters never touch the bloom filter.
pub(crate) const BLOOM_MIN_LEN: usize = 4;

const SEEDS: [u32; 2] = [0x9747_b28c, 0x5bd1_e995];

/// Seeded 32-bit FNV-1a.
#[inline]
fn hash(word: &str, seed: u32) -> u32 {
    word.bytes().fold(0x811c_9dc5 ^ seed, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    })
}

#[derive(Debug, Default)]
pub(crate) struct BloomFilter {
    codes: HashSet<u32>,
}

impl BloomFilter {
    /// Adds `word` if it is long enough to be checked.
    pub(crate) fn insert(&mut self, word: &str) {
        if word.chars().count() < BLOOM_MIN_LEN {
            return;
        }
        for &seed in &SEEDS {
            self.codes.insert(hash(word, seed));
        }
    }

    /// Returns `false` only if `candidate` was certainly never inserted.
    ///
    /// Candidates shorter than [`BLOOM_MIN_LEN`] are not tracked, so they must not be checked here.
    #[inline]
    pub(crate) fn might_contain(&self, candidate: &str) -> bool {
        SEEDS
            .iter()
            .all(|&seed| self.codes.contains(&hash(candidate, seed)))
    }

    /// Number of stored codes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.codes.len()
    }
}

impl<'a> core::iter::FromIterator<&'a str> for BloomFilter {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut bloom = BloomFilter::default();
        for word in iter {
            bloom.insert(word);
        }
        bloom
    }
}

#[cfg(test)]
mod tests {
    use crate::bloom::{hash, BloomFilter, SEEDS};

    #[test]
    fn no_false_negatives() {
        let words = ["shit", "damn", "bastard", "bullshit"];
        let bloom = words.iter().copied().collect::<BloomFilter>();

        for word in &words {
            assert!(bloom.might_contain(word));
        }
    }

    #[test]
    fn rejects_unrelated_words() {
        let bloom = ["shit", "damn"].iter().copied().collect::<BloomFilter>();

        assert!(!bloom.might_contain("hello"));
        assert!(!bloom.might_contain("world"));
    }

    #[test]
    fn short_words_are_skipped() {
        let bloom = ["ass", "shit"].iter().copied().collect::<BloomFilter>();

        assert_eq!(bloom.len(), 2);
    }

    #[test]
    fn seeds_are_independent() {
        assert_ne!(hash("shit", SEEDS[0]), hash("shit", SEEDS[1]));
    }

    #[test]
    fn empty() {
        let bloom = BloomFilter::default();

        assert!(!bloom.might_contain("anything"));
    }
}
