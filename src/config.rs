//! Configuration of a [`ProfanityFilter`].
//!
//! [`ProfanityFilter`]: crate::ProfanityFilter

use alloc::{borrow::ToOwned, string::String, vec::Vec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for building a [`ProfanityFilter`].
///
/// All fields are public and have defaults, so only the interesting ones need to be set:
///
/// ```
/// use profanity_filter::{Config, ProfanityFilter};
///
/// let filter = ProfanityFilter::new(&Config {
///     replacement: "#".to_owned(),
///     ..Config::default()
/// });
///
/// assert_eq!(filter.filter("This is shit"), "This is ####");
/// ```
///
/// [`ProfanityFilter`]: crate::ProfanityFilter
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Config {
    /// Text substituted for each profane token. Defaults to `"*"`.
    pub replacement: String,
    /// Words added to the vocabulary.
    pub custom_words: Vec<String>,
    /// Use only `custom_words`, ignoring the built-in vocabulary.
    pub custom_only: bool,
    /// Fit the replacement to the length of each replaced token. Defaults to `true`.
    pub preserve_length: bool,
    /// Clean words added to the built-in exceptions.
    ///
    /// A match lying entirely inside an exception is not reported.
    pub exceptions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replacement: "*".to_owned(),
            custom_words: Vec::new(),
            custom_only: false,
            preserve_length: true,
            exceptions: Vec::new(),
        }
    }
}
