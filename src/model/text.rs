//! Text normalization shared by validation, uniqueness checks and lookups.

/// Strips leading and trailing blanks: space and every ASCII control character.
pub fn trim_blanks(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Number of characters that are not the space character.
///
/// Only U+0020 is discounted; tabs and other blanks still count.
pub fn non_space_len(text: &str) -> usize {
    text.chars().filter(|&c| c != ' ').count()
}

/// Comparison key for handles and titles: trimmed, then upper-cased.
pub fn fold(text: &str) -> String {
    trim_blanks(text).to_uppercase()
}
