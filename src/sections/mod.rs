//! Password evaluation sections
//!
//! Each section checks one strength predicate. A section that fails
//! contributes a feedback message and no point to the score.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::{
    case_mix_section, digit_section, special_character_section, EVALUATOR_SPECIAL_CHARS,
};
pub(crate) use variety::has_decimal_digit;

/// Result type for section evaluation functions.
/// - `Some(message)` - Section failed, message explains what is missing
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;

/// Signature shared by every section.
pub type Section = fn(&secrecy::SecretString) -> SectionResult;

/// Sections in feedback order.
pub const SECTIONS: [(&str, Section); 4] = [
    ("length", length_section),
    ("case_mix", case_mix_section),
    ("digit", digit_section),
    ("special", special_character_section),
];
