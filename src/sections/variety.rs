//! Character variety sections - letter case mix, digits, special characters.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Any Unicode decimal digit (general category Nd).
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("decimal digit pattern is valid"));

/// Special characters that earn the evaluator's special-character point.
///
/// Not the same set the validator accepts, see
/// [`VALIDATOR_SPECIAL_CHARS`](crate::VALIDATOR_SPECIAL_CHARS).
pub const EVALUATOR_SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Checks that the password mixes letter cases.
///
/// Only ASCII letters count.
///
/// # Returns
/// - `Some(message)` if an uppercase or a lowercase letter is missing
/// - `None` if both cases are present
pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("❌ Include both uppercase and lowercase letters.");
    }
    None
}

/// Returns `true` if `pwd` holds a decimal digit in any script.
pub(crate) fn has_decimal_digit(pwd: &str) -> bool {
    DECIMAL_DIGIT.is_match(pwd)
}

/// Checks that the password contains a decimal digit.
///
/// Digits from any script count, e.g. Arabic-Indic `١`.
///
/// # Returns
/// - `Some(message)` if no digit is present
/// - `None` if at least one digit is present
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !has_decimal_digit(password.expose_secret()) {
        return Some("❌ Add at least one number (0-9).");
    }
    None
}

/// Checks for a character from [`EVALUATOR_SPECIAL_CHARS`].
///
/// # Returns
/// - `Some(message)` if no special character is present
/// - `None` if at least one is present
pub fn special_character_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| EVALUATOR_SPECIAL_CHARS.contains(&c)) {
        return Some("❌ Include at least one special character (!@#$%^&*).");
    }
    None
}
