//! Case and diacritic folding for locale-insensitive matching

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Combining blocks that hold accents (Latin, Greek, Cyrillic and Vietnamese
/// tone marks). Marks outside them, such as kana voicing or Indic vowel signs,
/// change the letter and are kept.
fn is_diacritic(c: char) -> bool {
    is_combining_mark(c)
        && matches!(c,
            '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}')
}

/// Fold `text` to lowercase with diacritics removed.
///
/// `đ`/`Đ` carry a stroke rather than a combining mark, so canonical
/// decomposition leaves them intact; they are mapped to `d` explicitly.
///
/// # Examples
///
/// ```
/// use event_finder::search::normalize;
///
/// assert_eq!(normalize("Đà Lạt"), "da lat");
/// assert_eq!(normalize("Crème Brûlée"), "creme brulee");
/// ```
pub fn normalize(text: &str) -> String {
    let unstroked: String = text
        .chars()
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect();

    unstroked.to_lowercase().nfd().filter(|&c| !is_diacritic(c)).collect()
}

/// [`normalize`] for optional input; absent text folds to an empty string
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
