//! A fast profanity filter that sees through disguised spellings.
//!
//! Text is split into tokens, and each token is normalized before being looked up in the
//! vocabulary: leetspeak (`$h1t`), lookalike letters from other scripts, masking wildcards
//! (`f**k`), stretched letters (`shiiiit`), and compounds (`bull-shit`, `youAreAnAsshole`) are
//! all detected. Words that merely contain a vocabulary word (`classic`, `Scunthorpe`) are not.
//!
//! The simplest entry points are the free functions, which share a lazily built default filter:
//!
//! ```
//! assert_eq!(profanity_filter::filter("This is shit"), "This is ****");
//! assert!(profanity_filter::contains("You are an ass"));
//! assert!(!profanity_filter::contains("Class assignment"));
//! assert!(profanity_filter::contains("youAreAnAsshole"));
//! ```
//!
//! A [`ProfanityFilter`] can also be built from a [`Config`] or through a
//! [`ProfanityFilterBuilder`] and reused:
//!
//! ```
//! use profanity_filter::ProfanityFilterBuilder;
//!
//! let filter = ProfanityFilterBuilder::new()
//!     .word("badword")
//!     .custom_only(true)
//!     .build();
//!
//! assert!(filter.contains("This is badword"));
//! assert!(!filter.contains("This is shit"));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod censor;
pub mod normalize;
pub mod trie;
pub mod words;

mod bloom;
mod class;
mod config;
mod scanner;

pub use config::Config;

use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
    vec::Vec,
};
use censor::Censor;
use scanner::{Scanner, MIN_WORD_LEN};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use words::{DEFAULT_EXCEPTIONS, DEFAULT_WORDS};

/// The full result of analyzing a text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Analysis {
    /// The filtered text.
    pub clean: String,
    /// Whether any profanity was found.
    pub has_profanity: bool,
    /// The vocabulary words matched, in order of appearance, duplicates included.
    pub found: Vec<String>,
}

/// Lowercases and trims `words`, dropping those too short to be matched.
fn prepare<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_lowercase())
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .collect()
}

/// A reusable profanity filter.
///
/// Building a filter compiles its vocabulary into a trie and a bloom filter. Once built, it is
/// immutable and may be shared freely between threads.
#[derive(Debug)]
pub struct ProfanityFilter {
    scanner: Scanner,
    censor: Censor,
}

impl ProfanityFilter {
    /// Builds a filter from `config`.
    ///
    /// Example usage:
    ///
    /// ```
    /// use profanity_filter::{Config, ProfanityFilter};
    ///
    /// let filter = ProfanityFilter::new(&Config {
    ///     replacement: "[CENSORED]".to_owned(),
    ///     preserve_length: false,
    ///     ..Config::default()
    /// });
    ///
    /// assert_eq!(filter.filter("shit happens"), "[CENSORED] happens");
    /// ```
    pub fn new(config: &Config) -> Self {
        let mut words = if config.custom_only {
            Vec::new()
        } else {
            prepare(DEFAULT_WORDS)
        };
        words.extend(prepare(&config.custom_words));
        let mut exceptions = prepare(DEFAULT_EXCEPTIONS);
        exceptions.extend(prepare(&config.exceptions));

        Self {
            scanner: Scanner::new(&words, &exceptions),
            censor: Censor::new(config.replacement.as_str(), config.preserve_length),
        }
    }

    /// Replaces every profane token within `text`.
    ///
    /// Returns a newly-allocated `String` in which each profane token is replaced according to the
    /// configured replacement. Text without profanity is returned unchanged.
    ///
    /// Example usage:
    ///
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let filter = ProfanityFilter::default();
    ///
    /// assert_eq!(filter.filter("This is shit"), "This is ****");
    /// assert_eq!(filter.filter("$h1t"), "****");
    /// ```
    pub fn filter(&self, text: &str) -> String {
        self.scanner.filter(text, &self.censor)
    }

    /// Check whether `text` contains any profanity.
    ///
    /// Returns `true` as soon as the first profane token is found, and `false` otherwise.
    ///
    /// Example usage:
    ///
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let filter = ProfanityFilter::default();
    ///
    /// assert!(filter.contains("You are an ass"));
    /// assert!(!filter.contains("Class assignment"));
    /// ```
    pub fn contains(&self, text: &str) -> bool {
        self.scanner.contains(text)
    }

    /// Filters `text` and reports what was found.
    ///
    /// When a masked token fits several vocabulary words of the same length, such as `f*ck` fitting
    /// both `feck` and `fuck`, the alphabetically first is reported.
    ///
    /// Example usage:
    ///
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let analysis = ProfanityFilter::default().analyze("This shit is damn good");
    ///
    /// assert_eq!(analysis.clean, "This **** is **** good");
    /// assert!(analysis.has_profanity);
    /// assert_eq!(analysis.found, ["shit", "damn"]);
    /// ```
    pub fn analyze(&self, text: &str) -> Analysis {
        let found = self.scanner.find(text);
        if found.is_empty() {
            return Analysis {
                clean: text.to_owned(),
                has_profanity: false,
                found,
            };
        }
        Analysis {
            clean: self.scanner.filter(text, &self.censor),
            has_profanity: true,
            found,
        }
    }
}

impl Default for ProfanityFilter {
    #[inline]
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Builder for a [`ProfanityFilter`].
///
/// Setters may be chained, and the builder can be reused after [`build()`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct ProfanityFilterBuilder {
    config: Config,
}

impl ProfanityFilterBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn replacement<S>(&mut self, replacement: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.config.replacement = replacement.to_string();
        self
    }

    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.config.custom_words.push(word.to_string());
        self
    }

    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.config
            .custom_words
            .extend(words.into_iter().map(|s| s.to_string()));
        self
    }

    #[inline]
    pub fn custom_only(&mut self, custom_only: bool) -> &mut Self {
        self.config.custom_only = custom_only;
        self
    }

    #[inline]
    pub fn preserve_length(&mut self, preserve_length: bool) -> &mut Self {
        self.config.preserve_length = preserve_length;
        self
    }

    #[inline]
    pub fn exception<S>(&mut self, exception: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.config.exceptions.push(exception.to_string());
        self
    }

    #[inline]
    pub fn exceptions<I, S>(&mut self, exceptions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.config
            .exceptions
            .extend(exceptions.into_iter().map(|s| s.to_string()));
        self
    }

    #[inline]
    #[must_use]
    pub fn build(&self) -> ProfanityFilter {
        ProfanityFilter::new(&self.config)
    }
}

#[cfg(feature = "std")]
fn default_filter() -> &'static ProfanityFilter {
    static DEFAULT: once_cell::sync::Lazy<ProfanityFilter> =
        once_cell::sync::Lazy::new(ProfanityFilter::default);
    &DEFAULT
}

#[cfg(not(feature = "std"))]
fn default_filter() -> &'static ProfanityFilter {
    static DEFAULT: once_cell::race::OnceBox<ProfanityFilter> = once_cell::race::OnceBox::new();
    DEFAULT.get_or_init(|| alloc::boxed::Box::new(ProfanityFilter::default()))
}

/// Runs `f` against the shared filter if `config` is the default, or a freshly built one
/// otherwise.
fn with_filter<F, T>(config: &Config, f: F) -> T
where
    F: FnOnce(&ProfanityFilter) -> T,
{
    if *config == Config::default() {
        f(default_filter())
    } else {
        f(&ProfanityFilter::new(config))
    }
}

/// Filters `text` with the default configuration.
#[inline]
pub fn filter(text: &str) -> String {
    default_filter().filter(text)
}

/// Checks `text` for profanity with the default configuration.
#[inline]
pub fn contains(text: &str) -> bool {
    default_filter().contains(text)
}

/// Analyzes `text` with the default configuration.
#[inline]
pub fn analyze(text: &str) -> Analysis {
    default_filter().analyze(text)
}

/// Filters `text` with `config`.
///
/// Building a filter is far more expensive than running one, so callers filtering many texts
/// with the same non-default configuration should build a [`ProfanityFilter`] once instead.
///
/// ```
/// use profanity_filter::{filter_with, Config};
///
/// let config = Config {
///     replacement: "[CENSORED]".to_owned(),
///     preserve_length: false,
///     ..Config::default()
/// };
///
/// assert_eq!(filter_with("shit", &config), "[CENSORED]");
/// ```
pub fn filter_with(text: &str, config: &Config) -> String {
    with_filter(config, |filter| filter.filter(text))
}

/// Checks `text` for profanity with `config`.
pub fn contains_with(text: &str, config: &Config) -> bool {
    with_filter(config, |filter| filter.contains(text))
}

/// Analyzes `text` with `config`.
pub fn analyze_with(text: &str, config: &Config) -> Analysis {
    with_filter(config, |filter| filter.analyze(text))
}
