//! Character normalization.
//!
//! Disguised spellings are reduced to plain lowercase Latin letters before being looked up. This
//! happens in three steps: the token is lowercased, multi-character sequences (`|_|`, `|<`, ...)
//! are rewritten, and then every remaining character is mapped through a single-character
//! substitution table in one pass.
//!
//! Some characters stand in for more than one letter (`1` may be an `i` or an `l`). For those, the
//! first mapping is used, and a single alternate variant is produced that uses the second mapping
//! at the first ambiguous position. Tokens needing more than one alternate substitution at once
//! are not explored.

use alloc::{string::String, vec, vec::Vec};

/// The masking character. It is preserved by normalization and matches any letter on lookup.
pub const WILDCARD: char = '*';

/// Multi-character substitutions, longest patterns first.
const SEQUENCES: &[(&str, char)] = &[
    ("|_|", 'u'),
    ("(_)", 'u'),
    ("|-|", 'h'),
    ("|<", 'k'),
    ("|(", 'k'),
    ("|)", 'd'),
    ("|3", 'b'),
    ("()", 'o'),
];

/// Single-character substitutions for ASCII. A zero byte means the character is kept as is.
const fn ascii_table() -> [u8; 128] {
    let mut table = [0; 128];
    table[b'0' as usize] = b'o';
    table[b'1' as usize] = b'i';
    table[b'2' as usize] = b'z';
    table[b'3' as usize] = b'e';
    table[b'4' as usize] = b'a';
    table[b'5' as usize] = b's';
    table[b'6' as usize] = b'g';
    table[b'7' as usize] = b't';
    table[b'8' as usize] = b'b';
    table[b'9' as usize] = b'g';
    table[b'@' as usize] = b'a';
    table[b'$' as usize] = b's';
    table[b'!' as usize] = b'i';
    table[b'|' as usize] = b'i';
    table[b'+' as usize] = b't';
    table[b'(' as usize] = b'c';
    table
}

static ASCII: [u8; 128] = ascii_table();

/// Single-character substitutions outside ASCII, sorted by character.
///
/// Uppercase forms are not listed, since lookup happens after lowercasing.
static UNICODE: &[(char, char)] = &[
    ('¢', 'c'),
    ('£', 'l'),
    ('¥', 'y'),
    ('ß', 'b'),
    ('à', 'a'),
    ('á', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('ä', 'a'),
    ('å', 'a'),
    ('æ', 'a'),
    ('ç', 'c'),
    ('è', 'e'),
    ('é', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('ì', 'i'),
    ('í', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ñ', 'n'),
    ('ò', 'o'),
    ('ó', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ö', 'o'),
    ('ø', 'o'),
    ('ù', 'u'),
    ('ú', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ý', 'y'),
    ('ÿ', 'y'),
    ('ā', 'a'),
    ('ă', 'a'),
    ('ą', 'a'),
    ('ć', 'c'),
    ('č', 'c'),
    ('ď', 'd'),
    ('ē', 'e'),
    ('ę', 'e'),
    ('ě', 'e'),
    ('ğ', 'g'),
    ('ī', 'i'),
    ('ı', 'i'),
    ('ł', 'l'),
    ('ń', 'n'),
    ('ň', 'n'),
    ('ō', 'o'),
    ('ő', 'o'),
    ('œ', 'o'),
    ('ř', 'r'),
    ('ś', 's'),
    ('ş', 's'),
    ('š', 's'),
    ('ţ', 't'),
    ('ť', 't'),
    ('ū', 'u'),
    ('ů', 'u'),
    ('ű', 'u'),
    ('ź', 'z'),
    ('ż', 'z'),
    ('ž', 'z'),
    ('ɡ', 'g'),
    ('ά', 'a'),
    ('έ', 'e'),
    ('ή', 'n'),
    ('ί', 'i'),
    ('α', 'a'),
    ('β', 'b'),
    ('γ', 'y'),
    ('δ', 'd'),
    ('ε', 'e'),
    ('η', 'n'),
    ('θ', 'o'),
    ('ι', 'i'),
    ('κ', 'k'),
    ('μ', 'u'),
    ('ν', 'v'),
    ('ο', 'o'),
    ('π', 'n'),
    ('ρ', 'p'),
    ('ς', 's'),
    ('σ', 's'),
    ('τ', 't'),
    ('υ', 'u'),
    ('φ', 'f'),
    ('χ', 'x'),
    ('ω', 'w'),
    ('ό', 'o'),
    ('ύ', 'u'),
    ('а', 'a'),
    ('б', 'b'),
    ('в', 'b'),
    ('г', 'r'),
    ('д', 'd'),
    ('е', 'e'),
    ('з', 'e'),
    ('и', 'u'),
    ('й', 'u'),
    ('к', 'k'),
    ('л', 'n'),
    ('м', 'm'),
    ('н', 'h'),
    ('о', 'o'),
    ('п', 'n'),
    ('р', 'p'),
    ('с', 'c'),
    ('т', 't'),
    ('у', 'y'),
    ('ф', 'f'),
    ('х', 'x'),
    ('ц', 'u'),
    ('ч', 'a'),
    ('ш', 'w'),
    ('ы', 'b'),
    ('ь', 'b'),
    ('я', 'r'),
    ('ѐ', 'e'),
    ('ё', 'e'),
    ('є', 'e'),
    ('ѕ', 's'),
    ('і', 'i'),
    ('ї', 'i'),
    ('ј', 'j'),
    ('ԁ', 'd'),
    ('ԛ', 'q'),
    ('ԝ', 'w'),
    ('€', 'e'),
];

/// Characters that may stand for more than one letter, with their second mapping.
const AMBIGUOUS: &[(char, char)] = &[('1', 'l'), ('9', 'q'), ('|', 'l'), ('£', 'e')];

/// Maps a single lowercase character to its canonical letter.
#[inline]
fn substitute(c: char) -> char {
    if c.is_ascii() {
        match ASCII[c as usize] {
            0 => c,
            b => b as char,
        }
    } else if let Ok(index) = UNICODE.binary_search_by_key(&c, |&(key, _)| key) {
        UNICODE[index].1
    } else if ('\u{ff41}'..='\u{ff5a}').contains(&c) {
        // Fullwidth Latin.
        (b'a' + (c as u32 - 0xff41) as u8) as char
    } else if ('\u{24d0}'..='\u{24e9}').contains(&c) {
        // Circled Latin.
        (b'a' + (c as u32 - 0x24d0) as u8) as char
    } else {
        c
    }
}

/// Returns the second mapping of `c` if it is ambiguous.
#[inline]
fn alternate(c: char) -> Option<char> {
    AMBIGUOUS
        .iter()
        .find(|&&(key, _)| key == c)
        .map(|&(_, value)| value)
}

/// All ASCII characters that the normalizer maps to something else.
pub(crate) fn substitution_keys() -> impl Iterator<Item = char> {
    (0..128u8)
        .filter(|&b| ASCII[b as usize] != 0)
        .map(char::from)
}

/// Applies the multi-character rules to a lowercased token.
fn apply_sequences(lowercase: String) -> String {
    // Every sequence starts with one of these.
    if !lowercase.contains(|c: char| c == '|' || c == '(') {
        return lowercase;
    }
    let mut result = lowercase;
    for &(pattern, replacement) in SEQUENCES {
        if result.contains(pattern) {
            let mut buffer = [0; 4];
            result = result.replace(pattern, replacement.encode_utf8(&mut buffer));
        }
    }
    result
}

/// Normalizes `token` into its canonical lowercase form.
///
/// The first element is always the primary normalization. If the token contains an ambiguous
/// character, a second element holds the alternate normalization. The returned `Vec` is never
/// empty; an empty token normalizes to a single empty string.
///
/// # Example
/// ```
/// use profanity_filter::normalize::normalize;
///
/// assert_eq!(normalize("$H1T"), vec!["shit", "shlt"]);
/// assert_eq!(normalize("f00"), vec!["foo"]);
/// ```
pub fn normalize(token: &str) -> Vec<String> {
    if token.is_empty() {
        return vec![String::new()];
    }

    let sequenced = apply_sequences(token.to_lowercase());
    let mut primary = String::with_capacity(sequenced.len());
    let mut secondary: Option<String> = None;
    for c in sequenced.chars() {
        if c == WILDCARD {
            primary.push(c);
            if let Some(secondary) = secondary.as_mut() {
                secondary.push(c);
            }
            continue;
        }
        let substituted = substitute(c);
        match secondary.as_mut() {
            Some(secondary) => secondary.push(substituted),
            None => {
                if let Some(other) = alternate(c) {
                    let mut variant = primary.clone();
                    variant.push(other);
                    secondary = Some(variant);
                }
            }
        }
        primary.push(substituted);
    }

    match secondary {
        Some(secondary) => vec![primary, secondary],
        None => vec![primary],
    }
}

#[cfg(test)]
mod tests {
    use crate::normalize::{normalize, substitute, substitution_keys};
    use alloc::{vec, vec::Vec};

    #[test]
    fn empty() {
        assert_eq!(normalize(""), vec![""]);
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("FoO"), vec!["foo"]);
    }

    #[test]
    fn leetspeak() {
        assert_eq!(normalize("$h1t"), vec!["shit", "shlt"]);
        assert_eq!(normalize("@55"), vec!["ass"]);
        assert_eq!(normalize("sh!t"), vec!["shit"]);
        assert_eq!(normalize("fu(k"), vec!["fuck"]);
        assert_eq!(normalize("d4mn"), vec!["damn"]);
    }

    #[test]
    fn only_first_ambiguous_character_alternates() {
        assert_eq!(normalize("1|1"), vec!["iii", "lii"]);
    }

    #[test]
    fn sequences() {
        assert_eq!(normalize("f|_|ck"), vec!["fuck"]);
        assert_eq!(normalize("|<ill"), vec!["kill"]);
        assert_eq!(normalize("|-|ell"), vec!["hell"]);
    }

    #[test]
    fn sequences_before_single_characters() {
        // `|` alone would map to `i`.
        assert_eq!(normalize("|3itch"), vec!["bitch"]);
    }

    #[test]
    fn wildcard_is_preserved() {
        assert_eq!(normalize("F**K"), vec!["f**k"]);
        assert_eq!(normalize("5h*7"), vec!["sh*t"]);
    }

    #[test]
    fn lookalikes() {
        assert_eq!(normalize("ѕhіt"), vec!["shit"]);
        assert_eq!(normalize("ΑΣΣ"), vec!["ass"]);
        assert_eq!(normalize("ｆｕｃｋ"), vec!["fuck"]);
        assert_eq!(normalize("ⓓⓐⓜⓝ"), vec!["damn"]);
        assert_eq!(normalize("dämn"), vec!["damn"]);
        assert_eq!(normalize("сunт"), vec!["cunt"]);
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(substitute('x'), 'x');
        assert_eq!(substitute(')'), ')');
        assert_eq!(substitute('中'), '中');
    }

    #[test]
    fn unicode_table_is_sorted() {
        assert!(super::UNICODE.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn keys() {
        let keys = substitution_keys().collect::<Vec<_>>();

        assert!(keys.contains(&'$'));
        assert!(keys.contains(&'0'));
        assert!(!keys.contains(&'a'));
    }
}
