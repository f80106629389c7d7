//! Replacement of matched tokens.
//!
//! A [`Censor`] decides what text stands in for a profane token. With length preservation
//! disabled, the replacement is always used verbatim. With it enabled, the replacement is fitted
//! to the token's character count:
//!
//! - a single-character replacement is repeated once per character;
//! - a shorter replacement is repeated and cut off at the token's length;
//! - a longer replacement is cut off at the token's length, unless it is a bracketed placeholder
//!   such as `[CENSORED]`, which is always used in full.
//!
//! # Example
//! ```
//! use profanity_filter::censor::Censor;
//!
//! assert_eq!(Censor::new("#", true).censor("foo"), "###");
//! assert_eq!(Censor::new("-=", true).censor("foobar"), "-=-=-=");
//! assert_eq!(Censor::new("[CENSORED]", true).censor("foo"), "[CENSORED]");
//! assert_eq!(Censor::new("<censored>", false).censor("foo"), "<censored>");
//! ```

use alloc::string::String;
use debug_unreachable::debug_unreachable;

/// Replacement strategy for matched tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Censor {
    replacement: String,
    preserve_length: bool,
    /// Character count of `replacement`.
    replacement_len: usize,
    bracketed: bool,
}

impl Censor {
    pub fn new<S>(replacement: S, preserve_length: bool) -> Self
    where
        S: Into<String>,
    {
        let replacement = replacement.into();
        Self {
            replacement_len: replacement.chars().count(),
            bracketed: replacement.starts_with('[') && replacement.ends_with(']'),
            replacement,
            preserve_length,
        }
    }

    /// Returns the text replacing `token`.
    pub fn censor(&self, token: &str) -> String {
        if !self.preserve_length || self.replacement_len == 0 {
            return self.replacement.clone();
        }

        let token_len = token.chars().count();
        if self.replacement_len == 1 {
            let c = match self.replacement.chars().next() {
                Some(c) => c,
                None => unsafe {
                    // SAFETY: The replacement was counted to contain exactly one character.
                    debug_unreachable!()
                },
            };
            return core::iter::repeat(c).take(token_len).collect();
        }
        if self.replacement_len == token_len || (self.bracketed && self.replacement_len > token_len) {
            return self.replacement.clone();
        }
        self.replacement.chars().cycle().take(token_len).collect()
    }
}

impl Default for Censor {
    fn default() -> Self {
        Self::new("*", true)
    }
}
