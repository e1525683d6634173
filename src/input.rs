//! Input parsing
//!
//! Typed parse helpers for everything the user types at a prompt. Each
//! helper returns `Result<_, InputError>`; the `Display` text of the error
//! is the single line shown back to the user.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

use crate::config::NamePolicy;
use crate::record::MAX_GRADE;

/// A recoverable validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Student name must only contain alphabetic characters. Please try again.")]
    InvalidName,

    #[error("Subject must only contain alphabetic characters. Please try again.")]
    InvalidSubject,

    #[error("Invalid input. Grade must be a whole number. Please try again.")]
    GradeNotANumber,

    #[error("Grade must be between 0 and 100. Please try again.")]
    GradeOutOfRange(i64),

    #[error("Please enter a valid number.")]
    NotANumber,

    #[error("Invalid choice. Please only enter numbers within the list.")]
    ChoiceOutOfRange { max: usize },
}

/// Normalize to title case: the first letter of every run of letters is
/// uppercased, the rest lowercased. Surrounding whitespace is dropped.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Title-case and validate a student name
pub fn parse_name(raw: &str, policy: NamePolicy) -> Result<String, InputError> {
    let name = title_case(raw);
    if is_valid_word_text(&name, policy) {
        Ok(name)
    } else {
        Err(InputError::InvalidName)
    }
}

/// Title-case and validate a subject of study
pub fn parse_subject(raw: &str, policy: NamePolicy) -> Result<String, InputError> {
    let subject = title_case(raw);
    if is_valid_word_text(&subject, policy) {
        Ok(subject)
    } else {
        Err(InputError::InvalidSubject)
    }
}

/// Parse a grade in `0..=100`
///
/// Integers too large for `i64` are out of range, not "not a number".
pub fn parse_grade(raw: &str) -> Result<i64, InputError> {
    let value = parse_integer(raw).ok_or(InputError::GradeNotANumber)?;

    if (0..=MAX_GRADE).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::GradeOutOfRange(value))
    }
}

/// Parse a 1-based choice in `1..=max`
pub fn parse_choice(raw: &str, max: usize) -> Result<usize, InputError> {
    let value = parse_integer(raw).ok_or(InputError::NotANumber)?;

    match usize::try_from(value) {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        _ => Err(InputError::ChoiceOutOfRange { max }),
    }
}

/// Parse a signed integer, saturating on overflow
fn parse_integer(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => saturate_overflow(&e),
    }
}

fn saturate_overflow(error: &ParseIntError) -> Option<i64> {
    match error.kind() {
        IntErrorKind::PosOverflow => Some(i64::MAX),
        IntErrorKind::NegOverflow => Some(i64::MIN),
        _ => None,
    }
}

fn is_valid_word_text(text: &str, policy: NamePolicy) -> bool {
    match policy {
        NamePolicy::Strict => !text.is_empty() && text.chars().all(char::is_alphabetic),
        NamePolicy::AllowSpaces => {
            // Words separated by exactly one space; trimming already removed edge spaces.
            !text.is_empty()
                && text
                    .split(' ')
                    .all(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
        }
    }
}
