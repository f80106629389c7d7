//! Prefix tree storing the filter's vocabulary.
//!
//! Edges between nodes are characters, and a node is marked once a stored word ends on it. The
//! tree is built once when a filter is constructed and only read afterwards.
//!
//! Besides exact membership, the tree can scan a text for stored words, either only where they
//! start and end on a word boundary or anywhere at all. Both scans can also treat a wildcard
//! character in the text as matching any single lowercase letter.

use alloc::{string::String, vec, vec::Vec};
use hashbrown::HashMap;

/// A stored word found within a text.
///
/// `start` and `end` are byte offsets into the searched text.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub word: String,
}

impl Match {
    /// Byte length of the matched span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single position in the tree.
#[derive(Debug, Default)]
struct Node {
    /// All children, keyed by character edges.
    children: HashMap<char, Node>,
    /// Whether a stored word ends here.
    end: bool,
}

/// Word characters, as opposed to characters forming a boundary between words.
#[inline]
fn is_word_char(c: char, wildcard: Option<char>) -> bool {
    c.is_alphanumeric() || Some(c) == wildcard
}

/// Returns whether `index` in `text` is at the start of a word.
#[inline]
fn starts_word(text: &str, index: usize, wildcard: Option<char>) -> bool {
    text[..index]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c, wildcard))
}

/// Returns whether `index` in `text` is at the end of a word.
#[inline]
fn ends_word(text: &str, index: usize, wildcard: Option<char>) -> bool {
    text[index..]
        .chars()
        .next()
        .map_or(true, |c| !is_word_char(c, wildcard))
}

/// A prefix tree of words.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `word`, creating nodes along its characters as needed.
    pub fn insert(&mut self, word: &str) {
        let node = word.chars().fold(&mut self.root, |node, c| {
            node.children.entry(c).or_insert_with(Node::default)
        });
        if !node.end {
            node.end = true;
            self.len += 1;
        }
    }

    /// Returns whether exactly `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            node = match node.children.get(&c) {
                Some(child) => child,
                None => return false,
            };
        }
        node.end
    }

    /// Walks the tree along `text` starting at byte `start`, pushing every stored word found.
    fn walk(&self, text: &str, start: usize, bounded: bool, matches: &mut Vec<Match>) {
        let mut node = &self.root;
        for (offset, c) in text[start..].char_indices() {
            node = match node.children.get(&c) {
                Some(child) => child,
                None => return,
            };
            let end = start + offset + c.len_utf8();
            if node.end && (!bounded || ends_word(text, end, None)) {
                matches.push(Match {
                    start,
                    end,
                    word: text[start..end].into(),
                });
            }
        }
    }

    fn scan(&self, text: &str, bounded: bool) -> Vec<Match> {
        let mut matches = Vec::new();
        for (start, _) in text.char_indices() {
            if bounded && !starts_word(text, start, None) {
                continue;
            }
            self.walk(text, start, bounded, &mut matches);
        }
        matches
    }

    /// Finds stored words in `text` that both start and end on a word boundary.
    ///
    /// A boundary is the start or end of `text` or any non-alphanumeric character.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("ass");
    ///
    /// assert_eq!(trie.find_matches("an ass").len(), 1);
    /// assert!(trie.find_matches("classic").is_empty());
    /// ```
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        self.scan(text, true)
    }

    /// Finds stored words anywhere in `text`, ignoring word boundaries.
    pub fn find_substrings(&self, text: &str) -> Vec<Match> {
        self.scan(text, false)
    }

    /// Depth-first search from byte `start`, where `wildcard` matches any lowercase letter.
    ///
    /// The search keeps an explicit stack and only fans out along existing children, so a
    /// wildcard costs at most the branching of the tree at that depth.
    fn walk_with_wildcards(
        &self,
        text: &str,
        start: usize,
        wildcard: char,
        bounded: bool,
        matches: &mut Vec<Match>,
    ) {
        let mut stack = vec![(&self.root, start, String::new())];
        while let Some((node, index, word)) = stack.pop() {
            if node.end && index > start && (!bounded || ends_word(text, index, Some(wildcard))) {
                matches.push(Match {
                    start,
                    end: index,
                    word: word.clone(),
                });
            }
            let c = match text[index..].chars().next() {
                Some(c) => c,
                None => continue,
            };
            let next = index + c.len_utf8();
            if c == wildcard {
                for (&edge, child) in node.children.iter().filter(|(edge, _)| edge.is_lowercase()) {
                    let mut word = word.clone();
                    word.push(edge);
                    stack.push((child, next, word));
                }
            } else if let Some(child) = node.children.get(&c) {
                let mut word = word;
                word.push(c);
                stack.push((child, next, word));
            }
        }
    }

    fn scan_with_wildcards(&self, text: &str, wildcard: char, bounded: bool) -> Vec<Match> {
        let mut matches = Vec::new();
        for (start, _) in text.char_indices() {
            if bounded && !starts_word(text, start, Some(wildcard)) {
                continue;
            }
            self.walk_with_wildcards(text, start, wildcard, bounded, &mut matches);
        }
        // Child iteration order is unspecified.
        matches.sort_unstable();
        matches
    }

    /// Like [`find_matches()`], but `wildcard` in `text` matches any single lowercase letter.
    ///
    /// The wildcard counts as a word character when determining boundaries.
    ///
    /// [`find_matches()`]: Trie::find_matches
    pub fn find_matches_with_wildcards(&self, text: &str, wildcard: char) -> Vec<Match> {
        self.scan_with_wildcards(text, wildcard, true)
    }

    /// Like [`find_substrings()`], but `wildcard` in `text` matches any single lowercase letter.
    ///
    /// [`find_substrings()`]: Trie::find_substrings
    pub fn find_substrings_with_wildcards(&self, text: &str, wildcard: char) -> Vec<Match> {
        self.scan_with_wildcards(text, wildcard, false)
    }
}

impl<'a> core::iter::FromIterator<&'a str> for Trie {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}
