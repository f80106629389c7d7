//! Character classification for the scanner.
//!
//! Every character falls into one of four groups: boundaries, which always end a token; soft
//! characters, which only belong to a token when they sit between two token characters (`sh!t`,
//! `fu(k`, `bull-shit`); the wildcard; and everything else, which is a token character.
//!
//! ASCII characters are classified through a static table. Characters outside ASCII are boundaries
//! if they are whitespace or general punctuation, and token characters otherwise.

use crate::normalize::{self, WILDCARD};
use bitflags::bitflags;

bitflags! {
    /// Attributes of a single character.
    ///
    /// `BOUNDARY`, `SOFT` and `WILDCARD` are mutually exclusive. `URL` and `JOINER` are only ever
    /// set together with `SOFT`.
    pub(crate) struct Class: u8 {
        /// The character always ends a token.
        const BOUNDARY = 0b0000_0001;
        /// The character belongs to a token only between two token characters.
        const SOFT = 0b0000_0010;
        /// The masking character, standing in for any letter.
        const WILDCARD = 0b0000_0100;
        /// The character marks a token as part of a URL, path, or hashtag.
        const URL = 0b0000_1000;
        /// The character joins the parts of a compound word.
        const JOINER = 0b0001_0000;
    }
}

const B: u8 = Class::BOUNDARY.bits();
const S: u8 = Class::SOFT.bits();
const U: u8 = Class::SOFT.bits() | Class::URL.bits();
const J: u8 = Class::SOFT.bits() | Class::JOINER.bits();
const W: u8 = Class::WILDCARD.bits();

/// Raw class bits for every ASCII character.
const fn ascii_table() -> [u8; 128] {
    let mut table = [0; 128];
    let mut i = 0;
    while i < 0x20 {
        table[i] = B;
        i += 1;
    }
    table[0x7f] = B;
    table[b' ' as usize] = B;

    let boundaries = b",;?\"'`[]{}<>=&%^\\";
    let mut i = 0;
    while i < boundaries.len() {
        table[boundaries[i] as usize] = B;
        i += 1;
    }

    table[b'(' as usize] = S;
    table[b')' as usize] = S;
    table[b'!' as usize] = S;
    table[b'-' as usize] = J;
    table[b'_' as usize] = J;
    table[b'.' as usize] = U;
    table[b'/' as usize] = U;
    table[b':' as usize] = U;
    table[b'~' as usize] = U;
    table[b'#' as usize] = U;
    table[WILDCARD as usize] = W;

    table
}

static ASCII: [u8; 128] = ascii_table();

/// Returns the class of `c`.
#[inline]
pub(crate) fn classify(c: char) -> Class {
    if c.is_ascii() {
        Class::from_bits_truncate(ASCII[c as usize])
    } else if c.is_whitespace()
        || ('\u{2000}'..='\u{206f}').contains(&c)
        || ('\u{3000}'..='\u{303f}').contains(&c)
        || matches!(c, '\u{a1}' | '\u{ab}' | '\u{bb}' | '\u{bf}')
    {
        Class::BOUNDARY
    } else {
        Class::empty()
    }
}

/// Characters whose presence makes a text worth scanning.
///
/// A text without a single trigger cannot contain a match: every vocabulary character is a
/// trigger, as is every character the normalizer maps to a letter and every non-ASCII character.
#[derive(Debug)]
pub(crate) struct Triggers {
    ascii: u128,
}

impl Triggers {
    /// Creates the trigger set for the given vocabulary.
    pub(crate) fn new<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ascii = 1 << WILDCARD as u32;
        for c in normalize::substitution_keys() {
            ascii |= 1 << c as u32;
        }
        for word in words {
            for c in word.chars().filter(char::is_ascii) {
                ascii |= 1 << c.to_ascii_lowercase() as u32;
                ascii |= 1 << c.to_ascii_uppercase() as u32;
            }
        }
        Self { ascii }
    }

    /// Returns whether `c` is a trigger.
    #[inline]
    pub(crate) fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1 << c as u32) != 0
        } else {
            !c.is_whitespace()
        }
    }

    /// Returns whether any character of `text` is a trigger.
    #[inline]
    pub(crate) fn any_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use crate::class::{classify, Class, Triggers};

    #[test]
    fn letters_and_digits_are_token_characters() {
        for c in ['a', 'Z', '0', '9', '$', '@', '|', '+'].iter() {
            assert_eq!(classify(*c), Class::empty(), "{:?}", c);
        }
    }

    #[test]
    fn whitespace_and_punctuation_are_boundaries() {
        for c in [' ', '\t', '\n', ',', '?', '"', '\u{a0}', '\u{2014}', '\u{3002}'].iter() {
            assert!(classify(*c).contains(Class::BOUNDARY), "{:?}", c);
        }
    }

    #[test]
    fn soft_characters() {
        assert_eq!(classify('('), Class::SOFT);
        assert_eq!(classify('!'), Class::SOFT);
        assert_eq!(classify('-'), Class::SOFT | Class::JOINER);
        assert_eq!(classify('.'), Class::SOFT | Class::URL);
        assert_eq!(classify('#'), Class::SOFT | Class::URL);
    }

    #[test]
    fn wildcard() {
        assert_eq!(classify('*'), Class::WILDCARD);
    }

    #[test]
    fn greek_and_cyrillic_are_token_characters() {
        assert_eq!(classify('α'), Class::empty());
        assert_eq!(classify('с'), Class::empty());
    }

    #[test]
    fn triggers_follow_vocabulary() {
        let triggers = Triggers::new(["foo"].iter().copied());

        assert!(triggers.contains('f'));
        assert!(triggers.contains('O'));
        assert!(triggers.contains('$'));
        assert!(triggers.contains('*'));
        assert!(triggers.contains('ö'));
        assert!(!triggers.contains('x'));
        assert!(!triggers.contains(' '));
        assert!(!triggers.contains('\u{3000}'));
    }

    #[test]
    fn triggers_in_text() {
        let triggers = Triggers::new(["foo"].iter().copied());

        assert!(triggers.any_in("a fox"));
        assert!(!triggers.any_in("baby"));
        assert!(!triggers.any_in(""));
    }
}
