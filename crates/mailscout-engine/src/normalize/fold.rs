//! Whitespace collapsing and diacritic folding.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Trim and collapse internal whitespace runs to a single space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Letters that NFKD does not decompose into a base Latin letter.
fn fold_special(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ø' | 'Ø' => "o",
        'đ' | 'Đ' | 'ð' | 'Ð' => "d",
        'ł' | 'Ł' => "l",
        'þ' | 'Þ' => "th",
        'ı' => "i",
        _ => return None,
    })
}

/// Lowercase ASCII fold: "José Ñúñez" → "jose nunez".
///
/// Characters with no Latin base become a space so word boundaries survive.
pub fn fold_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii() {
            out.push(c.to_ascii_lowercase());
        } else if let Some(rep) = fold_special(c) {
            out.push_str(rep);
        } else {
            out.push(' ');
        }
    }
    out
}

/// Key used for pattern generation: folded, lowercase, `[a-z0-9]` only.
pub fn name_key(s: &str) -> String {
    fold_ascii(s)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
