//! Single-pass scanning of input text.
//!
//! The scanner walks the input once, splitting it into tokens. Each token is checked for
//! eligibility, optionally compressed, normalized into its canonical variants, and then looked up
//! in the vocabulary. The results are assembled into filtered text, a boolean, or a list of found
//! words.
//!
//! Before tokenizing, the whole text is checked for trigger characters. Text without any of them
//! cannot contain a match and is returned as is.

use crate::{
    bloom::{BloomFilter, BLOOM_MIN_LEN},
    censor::Censor,
    class::{classify, Class, Triggers},
    normalize::{normalize, WILDCARD},
    trie::{Match, Trie},
};
use alloc::{borrow::ToOwned, string::String, vec::Vec};
use core::{iter, str::CharIndices};
use log::{debug, trace};

/// Shortest token, core, and vocabulary word considered.
pub(crate) const MIN_WORD_LEN: usize = 3;
/// Cores longer than this are treated as likely compounds.
const COMPOUND_MIN_LEN: usize = 8;
/// Shortest word that may be found embedded inside a compound.
const EMBEDDED_MIN_LEN: usize = 4;
/// Longest run of a repeated letter that is still compressed.
const MAX_REPEAT: usize = 6;
/// Fewest non-wildcard characters a masked core needs to be looked up.
const MIN_LITERALS: usize = 2;
/// Fewest repetitions for the repeated-pattern shortcut.
const MIN_REPETITIONS: usize = 3;
/// Number of whitespace-terminated prefixes tried as a repeated pattern.
const PATTERN_CANDIDATES: usize = 8;
/// Texts shorter than this are never checked for repetition.
const MIN_REPETITION_TEXT_LEN: usize = 64;

/// Byte range of a token within the scanned text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Iterator over the tokens of a text.
///
/// Tokens start on a token character and end before the next boundary. Soft characters inside an
/// open token are kept only when another token character follows them, so `sh!t` is one token
/// while `shit!` is the token `shit`.
#[derive(Clone, Debug)]
pub(crate) struct Tokens<'a> {
    chars: CharIndices<'a>,
    start: Option<usize>,
    /// End of the last non-soft character of the open token.
    end: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            start: None,
            end: 0,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        for (index, c) in &mut self.chars {
            let class = classify(c);
            if class.contains(Class::BOUNDARY) {
                if let Some(start) = self.start.take() {
                    return Some(Token {
                        start,
                        end: self.end,
                    });
                }
            } else if !class.contains(Class::SOFT) {
                if self.start.is_none() {
                    self.start = Some(index);
                }
                self.end = index + c.len_utf8();
            }
        }
        let end = self.end;
        self.start.take().map(|start| Token { start, end })
    }
}

/// Length of the run of ASCII digits at the front of `chars`.
fn digit_run<I>(chars: I) -> usize
where
    I: Iterator<Item = char>,
{
    chars.take_while(char::is_ascii_digit).count()
}

/// Returns whether the token is part of a URL, path, hashtag, or number.
fn is_attached(text: &str, token: Token) -> bool {
    let raw = &text[token.start..token.end];
    raw.chars().any(|c| classify(c).contains(Class::URL))
        || digit_run(raw.chars()) >= 2
        || digit_run(raw.chars().rev()) >= 2
        || matches!(text[..token.start].chars().next_back(), Some('#') | Some('/'))
}

/// Returns whether the raw token looks like several words joined together.
fn is_compound(raw: &str) -> bool {
    raw.chars().any(|c| classify(c).contains(Class::JOINER))
        || raw
            .chars()
            .zip(raw.chars().skip(1))
            .any(|(a, b)| a.is_lowercase() && b.is_uppercase())
}

/// Collapses runs of a repeated character into a single occurrence.
///
/// Returns `None` if nothing repeats, or if the repetition looks like noise: a repeated
/// non-alphanumeric character or a run longer than [`MAX_REPEAT`].
fn compress(token: &str) -> Option<String> {
    let mut result = String::with_capacity(token.len());
    let mut collapsed = false;
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }
        if run > 1 {
            if run > MAX_REPEAT || !c.is_alphanumeric() {
                return None;
            }
            collapsed = true;
        }
        result.push(c);
    }
    if collapsed {
        Some(result)
    } else {
        None
    }
}

/// The alphanumeric and wildcard characters of a normalized variant.
fn core(variant: &str) -> String {
    variant
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == WILDCARD)
        .collect()
}

/// A text made of one whitespace-terminated pattern repeated, followed by a prefix of it.
#[derive(Debug, Eq, PartialEq)]
struct Repetition<'a> {
    pattern: &'a str,
    count: usize,
    rest: &'a str,
}

/// Detects whether `text` is a short pattern repeated at least [`MIN_REPETITIONS`] times.
///
/// Since the pattern ends in whitespace, no token spans two repetitions, and scanning the pattern
/// once gives the same result as scanning every repetition.
fn repetition(text: &str) -> Option<Repetition<'_>> {
    if text.len() < MIN_REPETITION_TEXT_LEN {
        return None;
    }
    text.char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .take(PATTERN_CANDIDATES)
        .map(|(index, c)| index + c.len_utf8())
        .find_map(|len| {
            let count = text.len() / len;
            if count < MIN_REPETITIONS {
                return None;
            }
            let pattern = &text[..len];
            if !text.as_bytes()[..count * len]
                .chunks(len)
                .all(|chunk| chunk == pattern.as_bytes())
            {
                return None;
            }
            let rest = &text[count * len..];
            if !pattern.starts_with(rest) {
                return None;
            }
            Some(Repetition {
                pattern,
                count,
                rest,
            })
        })
}

/// The detection engine: vocabulary, exceptions, and the structures derived from them.
#[derive(Debug)]
pub(crate) struct Scanner {
    words: Trie,
    exceptions: Trie,
    bloom: BloomFilter,
    triggers: Triggers,
}

impl Scanner {
    /// Builds the engine. All words are expected to be lowercase.
    pub(crate) fn new(words: &[String], exceptions: &[String]) -> Self {
        let scanner = Self {
            words: words.iter().map(String::as_str).collect(),
            exceptions: exceptions.iter().map(String::as_str).collect(),
            bloom: words.iter().map(String::as_str).collect(),
            triggers: Triggers::new(words.iter().map(String::as_str)),
        };
        debug!(
            "built scanner with {} words, {} exceptions, {} bloom codes",
            scanner.words.len(),
            scanner.exceptions.len(),
            scanner.bloom.len()
        );
        scanner
    }

    /// Discards matches that are too short to be embedded or that lie inside an exception, then
    /// resolves overlaps leftmost-longest.
    fn resolve(&self, core: &str, matches: Vec<Match>) -> Vec<String> {
        if matches.is_empty() {
            return Vec::new();
        }
        let exceptions = self.exceptions.find_substrings(core);
        let mut candidates = matches
            .into_iter()
            .filter(|m| {
                (m.len() == core.len() || m.word.chars().count() >= EMBEDDED_MIN_LEN)
                    && !exceptions
                        .iter()
                        .any(|e| e.start <= m.start && m.end <= e.end)
            })
            .collect::<Vec<_>>();
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut found = Vec::new();
        let mut end = 0;
        for candidate in candidates {
            if candidate.start >= end {
                end = candidate.end;
                found.push(candidate.word);
            }
        }
        found
    }

    /// Looks up one normalized core.
    fn lookup(&self, core: &str, compound: bool) -> Option<Vec<String>> {
        let len = core.chars().count();
        if len < MIN_WORD_LEN {
            return None;
        }
        let compound = compound || len > COMPOUND_MIN_LEN;
        let wildcards = core.chars().filter(|&c| c == WILDCARD).count();

        let matches = if wildcards > 0 {
            if len - wildcards < MIN_LITERALS {
                return None;
            }
            if compound {
                self.words.find_substrings_with_wildcards(core, WILDCARD)
            } else {
                self.words.find_matches_with_wildcards(core, WILDCARD)
            }
        } else if compound {
            self.words.find_substrings(core)
        } else {
            if len >= BLOOM_MIN_LEN && !self.bloom.might_contain(core) {
                return None;
            }
            self.words.find_matches(core)
        };

        let found = self.resolve(core, matches);
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// Returns whether an exception occurs anywhere in the normalized token.
    fn has_exception(&self, lowercase: &str) -> bool {
        normalize(lowercase)
            .iter()
            .any(|variant| !self.exceptions.find_substrings(&core(variant)).is_empty())
    }

    /// Decides whether a token is profane, returning the words it matched.
    fn evaluate(&self, text: &str, token: Token) -> Option<Vec<String>> {
        let raw = &text[token.start..token.end];
        if raw.chars().count() < MIN_WORD_LEN || is_attached(text, token) {
            return None;
        }
        let compound = is_compound(raw);
        let lowercase = raw.to_lowercase();
        // Compressing would hide exceptions such as `shuttlecock`.
        let compressed = compress(&lowercase).filter(|_| !self.has_exception(&lowercase));

        let found = iter::once(lowercase.as_str())
            .chain(compressed.as_deref())
            .flat_map(normalize)
            .find_map(|variant| self.lookup(&core(&variant), compound));
        if let Some(found) = &found {
            trace!("token {:?} at {}..{} matched {:?}", raw, token.start, token.end, found);
        }
        found
    }

    fn filter_once(&self, text: &str, censor: &Censor) -> String {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        for token in Tokens::new(text) {
            if self.evaluate(text, token).is_some() {
                output.push_str(&text[last..token.start]);
                output.push_str(&censor.censor(&text[token.start..token.end]));
                last = token.end;
            }
        }
        output.push_str(&text[last..]);
        output
    }

    fn contains_once(&self, text: &str) -> bool {
        Tokens::new(text).any(|token| self.evaluate(text, token).is_some())
    }

    fn find_once(&self, text: &str) -> Vec<String> {
        Tokens::new(text)
            .filter_map(|token| self.evaluate(text, token))
            .flatten()
            .collect()
    }

    /// Returns whether scanning `text` can be skipped entirely.
    #[inline]
    fn is_clean(&self, text: &str) -> bool {
        let clean = !self.triggers.any_in(text);
        if clean {
            trace!("no trigger characters in {} bytes of text", text.len());
        }
        clean
    }

    /// Replaces every profane token in `text` using `censor`.
    pub(crate) fn filter(&self, text: &str, censor: &Censor) -> String {
        if self.is_clean(text) {
            return text.to_owned();
        }
        match repetition(text) {
            Some(repetition) => {
                trace!(
                    "filtering {}-byte pattern repeated {} times",
                    repetition.pattern.len(),
                    repetition.count
                );
                let mut output = self
                    .filter_once(repetition.pattern, censor)
                    .repeat(repetition.count);
                output.push_str(&self.filter_once(repetition.rest, censor));
                output
            }
            None => self.filter_once(text, censor),
        }
    }

    /// Returns whether `text` contains a profane token, stopping at the first one.
    pub(crate) fn contains(&self, text: &str) -> bool {
        if self.is_clean(text) {
            return false;
        }
        match repetition(text) {
            Some(repetition) => {
                self.contains_once(repetition.pattern) || self.contains_once(repetition.rest)
            }
            None => self.contains_once(text),
        }
    }

    /// Returns every matched word in order of appearance, duplicates included.
    pub(crate) fn find(&self, text: &str) -> Vec<String> {
        if self.is_clean(text) {
            return Vec::new();
        }
        match repetition(text) {
            Some(repetition) => {
                let pattern = self.find_once(repetition.pattern);
                let mut found = Vec::with_capacity(pattern.len() * repetition.count);
                for _ in 0..repetition.count {
                    found.extend(pattern.iter().cloned());
                }
                found.extend(self.find_once(repetition.rest));
                found
            }
            None => self.find_once(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        censor::Censor,
        scanner::{
            compress, core, is_attached, is_compound, repetition, Repetition, Scanner, Token,
            Tokens,
        },
    };
    use alloc::{
        borrow::ToOwned,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    fn tokens(text: &str) -> Vec<&str> {
        Tokens::new(text)
            .map(|token| &text[token.start..token.end])
            .collect()
    }

    fn scanner(words: &[&str], exceptions: &[&str]) -> Scanner {
        Scanner::new(
            &words.iter().map(|word| word.to_string()).collect::<Vec<_>>(),
            &exceptions
                .iter()
                .map(|word| word.to_string())
                .collect::<Vec<_>>(),
        )
    }

    fn token(text: &str, word: &str) -> Token {
        let start = text.find(word).unwrap();
        Token {
            start,
            end: start + word.len(),
        }
    }

    #[test]
    fn tokenize_words() {
        assert_eq!(tokens("This is shit"), vec!["This", "is", "shit"]);
        assert_eq!(tokens("  spaced\t\nout  "), vec!["spaced", "out"]);
        assert!(tokens("").is_empty());
        assert!(tokens(" , ; ").is_empty());
    }

    #[test]
    fn tokenize_soft_characters_between_token_characters() {
        assert_eq!(tokens("sh!t fu(k"), vec!["sh!t", "fu(k"]);
        assert_eq!(tokens("bull-shit"), vec!["bull-shit"]);
        assert_eq!(tokens("example.com/shit"), vec!["example.com/shit"]);
    }

    #[test]
    fn tokenize_trailing_and_leading_soft_characters() {
        assert_eq!(tokens("shit!!! (really)"), vec!["shit", "really"]);
        assert_eq!(tokens("This is shit."), vec!["This", "is", "shit"]);
        assert_eq!(tokens("#shit --"), vec!["shit"]);
    }

    #[test]
    fn tokenize_symbols() {
        assert_eq!(tokens("$h1t f**k"), vec!["$h1t", "f**k"]);
        assert_eq!(tokens("«dämn»"), vec!["dämn"]);
    }

    #[test]
    fn attached_tokens() {
        let text = "shit123 12shit sh1t #shit example.com/shit";
        assert!(is_attached(text, token(text, "shit123")));
        assert!(is_attached(text, token(text, "12shit")));
        assert!(!is_attached(text, token(text, "sh1t")));
        assert!(is_attached(text, Token { start: 21, end: 25 }));
        assert!(is_attached(text, token(text, "example.com/shit")));
    }

    #[test]
    fn compound_tokens() {
        assert!(is_compound("bull-shit"));
        assert!(is_compound("bull_shit"));
        assert!(is_compound("youAreShit"));
        assert!(!is_compound("Shit"));
        assert!(!is_compound("SHIT"));
        assert!(!is_compound("classic"));
    }

    #[test]
    fn compress_repeated_letters() {
        assert_eq!(compress("shiiiit"), Some("shit".to_owned()));
        assert_eq!(compress("fuuck"), Some("fuck".to_owned()));
        assert_eq!(compress("shit"), None);
    }

    #[test]
    fn compress_skips_noise() {
        assert_eq!(compress("shiiiiiiit"), None);
        assert_eq!(compress("sh!!t"), None);
        assert_eq!(compress("f**k"), None);
    }

    #[test]
    fn core_keeps_alphanumerics_and_wildcards() {
        assert_eq!(core("bull-shit"), "bullshit");
        assert_eq!(core("f**k)"), "f**k");
        assert_eq!(core(""), "");
    }

    #[test]
    fn detects_repetition() {
        let text = "abc shit ".repeat(10) + "abc";

        assert_eq!(
            repetition(&text),
            Some(Repetition {
                pattern: "abc shit ",
                count: 10,
                rest: "abc",
            })
        );
    }

    #[test]
    fn no_repetition() {
        assert_eq!(repetition("short text"), None);
        assert_eq!(
            repetition("this sentence does not repeat itself in any way at all, not even once"),
            None
        );
    }

    #[test]
    fn exact_match() {
        let scanner = scanner(&["ass"], &[]);

        assert!(scanner.contains("You are an ass"));
        assert!(!scanner.contains("Class assignment"));
        assert!(!scanner.contains("classic"));
    }

    #[test]
    fn compound_match() {
        let scanner = scanner(&["shit", "hell"], &[]);

        assert!(scanner.contains("bull-shit"));
        assert!(scanner.contains("whatTheHell"));
        assert!(scanner.contains("totalbullshitry"));
        assert!(!scanner.contains("hello"));
        assert!(!scanner.contains("hellfire"));
    }

    #[test]
    fn embedded_short_words_are_ignored() {
        let scanner = scanner(&["ass"], &[]);

        assert!(!scanner.contains("assignment"));
        assert!(!scanner.contains("ClassAssignment"));
    }

    #[test]
    fn exceptions_suppress_contained_matches() {
        let scanner = scanner(&["cunt"], &["scunthorpe"]);

        assert!(!scanner.contains("Scunthorpe"));
        assert!(scanner.contains("scunthorpecunt"));
    }

    #[test]
    fn exceptions_survive_compression() {
        let scanner = scanner(&["cock"], &["shuttlecock"]);

        assert!(!scanner.contains("shuttlecock"));
        assert!(scanner.contains("cocck"));
    }

    #[test]
    fn wildcard_match() {
        let scanner = scanner(&["fuck"], &[]);

        assert!(scanner.contains("f**k"));
        assert!(!scanner.contains("****"));
        assert!(!scanner.contains("f***"));
    }

    #[test]
    fn repeated_letters() {
        let scanner = scanner(&["shit"], &[]);

        assert!(scanner.contains("shiiiiit"));
        assert!(!scanner.contains("shiiiiiiiiit"));
    }

    #[test]
    fn filter_replaces_whole_tokens() {
        let scanner = scanner(&["shit"], &[]);

        assert_eq!(
            scanner.filter("sh!t, this is bull-shit!", &Censor::default()),
            "****, this is *********!"
        );
    }

    #[test]
    fn filter_unchanged_without_matches() {
        let scanner = scanner(&["shit"], &[]);

        assert_eq!(scanner.filter("nothing here", &Censor::default()), "nothing here");
        assert_eq!(scanner.filter("", &Censor::default()), "");
    }

    #[test]
    fn find_preserves_duplicates_in_order() {
        let scanner = scanner(&["shit", "damn"], &[]);

        assert_eq!(
            scanner.find("damn shit, damn"),
            vec!["damn", "shit", "damn"]
        );
    }

    #[test]
    fn find_leftmost_longest() {
        let scanner = scanner(&["bull", "bullshit", "shit"], &[]);

        assert_eq!(scanner.find("bullshitting"), vec!["bullshit"]);
    }

    #[test]
    fn repetition_gives_same_result_as_full_scan() {
        let scanner = scanner(&["shit"], &[]);
        let censor = Censor::default();
        let text = "what a shit day ".repeat(20) + "what a sh";

        assert!(repetition(&text).is_some());
        let expected = String::from("what a **** day ").repeat(20) + "what a sh";
        assert_eq!(scanner.filter(&text, &censor), expected);
        assert_eq!(scanner.filter_once(&text, &censor), expected);
        assert_eq!(scanner.find(&text).len(), 20);
        assert!(scanner.contains(&text));
    }
}
