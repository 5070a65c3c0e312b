// src/core/normalize.rs
use unicode_general_category::{GeneralCategory, get_general_category};

/// True for characters in a Letter (`L*`) or Number (`N*`) general category.
///
/// Combining marks (`Mn`, `Mc`, `Me`) are not letters even where Unicode
/// counts them as `Alphabetic`, so they are rejected.
#[inline]
#[must_use]
pub fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Lowercases `token` and drops every character that is not a letter or digit.
///
/// Tokens made only of punctuation normalize to the empty string.
#[inline]
#[must_use]
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|&c| is_letter_or_digit(c))
        .collect()
}
