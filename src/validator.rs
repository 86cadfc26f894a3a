//! Strict password validator used before a password enters the history.
//!
//! Accepts exactly what `^(?=.*[A-Za-z])(?=.*\d)(?=.*[@$!%*?&])[A-Za-z\d@$!%*?&]{8,}$`
//! accepts. As in that pattern, `\d` is any Unicode decimal digit and `$`
//! only matches at the very end, so a trailing newline is rejected.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

use crate::sections::{has_decimal_digit, MIN_LENGTH};

/// Special characters the validator requires and permits.
///
/// Deliberately distinct from
/// [`EVALUATOR_SPECIAL_CHARS`](crate::EVALUATOR_SPECIAL_CHARS): `?` is only
/// valid here, `#` and `^` are only scored by the evaluator.
pub const VALIDATOR_SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Letters, decimal digits and [`VALIDATOR_SPECIAL_CHARS`], nothing else.
static ALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\d@$!%*?&]+$").expect("allowed characters pattern is valid")
});

fn is_validator_special(c: char) -> bool {
    VALIDATOR_SPECIAL_CHARS.contains(&c)
}

/// Returns `true` when the password has a letter, a digit and a validator
/// special character, is at least 8 characters long, and contains nothing
/// outside letters, digits and [`VALIDATOR_SPECIAL_CHARS`].
pub fn is_valid_password(password: &SecretString) -> bool {
    let pwd = password.expose_secret();

    if pwd.chars().count() < MIN_LENGTH || !ALLOWED_CHARS.is_match(pwd) {
        return false;
    }

    let has_letter = pwd.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = has_decimal_digit(pwd);
    let has_special = pwd.chars().any(is_validator_special);

    has_letter && has_digit && has_special
}
