//! Password strength policy shared by the login form's live indicator and its
//! submit check, plus the coarser meter shown under the registration password.

use serde::Serialize;

use crate::services::validators::{has_listed_symbol, has_min_password_length, has_uppercase};

pub const STRONG_MESSAGE: &str = "Password is Strong!";
pub const WEAK_MESSAGE: &str =
    "Please use a mix of uppercase, lowercase letters, numbers, and symbols.";

/// Characters counted as symbols by [`StrengthPolicy`].
pub const POLICY_SYMBOLS: &str = "-#!$@£%^&*()_+|~=`{}[]:\";'<>?,./\\ ";

/// Minimum counts per character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthPolicy {
    pub min_length: usize,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_numbers: usize,
    pub min_symbols: usize,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_lowercase: 1,
            min_uppercase: 1,
            min_numbers: 1,
            min_symbols: 1,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ClassCounts {
    length: usize,
    lowercase: usize,
    uppercase: usize,
    numbers: usize,
    symbols: usize,
}

impl ClassCounts {
    fn of(value: &str) -> Self {
        value.chars().fold(Self::default(), |mut counts, c| {
            counts.length += 1;
            if c.is_ascii_lowercase() {
                counts.lowercase += 1;
            } else if c.is_ascii_uppercase() {
                counts.uppercase += 1;
            } else if c.is_ascii_digit() {
                counts.numbers += 1;
            } else if POLICY_SYMBOLS.contains(c) {
                counts.symbols += 1;
            }
            counts
        })
    }
}

impl StrengthPolicy {
    /// Only [`POLICY_SYMBOLS`] count as symbols. Other characters, accented
    /// letters included, add to the length and to no class.
    pub fn is_strong(&self, value: &str) -> bool {
        let counts = ClassCounts::of(value);
        counts.length >= self.min_length
            && counts.lowercase >= self.min_lowercase
            && counts.uppercase >= self.min_uppercase
            && counts.numbers >= self.min_numbers
            && counts.symbols >= self.min_symbols
    }
}

pub fn is_strong(value: &str) -> bool {
    StrengthPolicy::default().is_strong(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorColor {
    Black,
    Green,
    Red,
}

/// Live strength message shown under a password input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthFeedback {
    pub message: &'static str,
    pub color: IndicatorColor,
}

impl Default for StrengthFeedback {
    // Nothing typed yet
    fn default() -> Self {
        Self {
            message: "",
            color: IndicatorColor::Black,
        }
    }
}

impl StrengthFeedback {
    pub fn evaluate(policy: &StrengthPolicy, value: &str) -> Self {
        if policy.is_strong(value) {
            Self {
                message: STRONG_MESSAGE,
                color: IndicatorColor::Green,
            }
        } else {
            Self {
                message: WEAK_MESSAGE,
                color: IndicatorColor::Red,
            }
        }
    }

    pub fn is_strong(&self) -> bool {
        self.color == IndicatorColor::Green
    }
}

/// Three-level meter for the registration password.
///
/// Under the minimum length it is always weak. Past it, an uppercase letter
/// and one of `!@#$%^&*` make it strong and either one alone makes it medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStrength {
    Weak,
    Medium,
    Strong,
}

impl RegistrationStrength {
    pub fn of(value: &str) -> Self {
        if !has_min_password_length(value) {
            return RegistrationStrength::Weak;
        }
        match (has_uppercase(value), has_listed_symbol(value)) {
            (true, true) => RegistrationStrength::Strong,
            (true, false) | (false, true) => RegistrationStrength::Medium,
            (false, false) => RegistrationStrength::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStrength::Weak => "weak",
            RegistrationStrength::Medium => "medium",
            RegistrationStrength::Strong => "strong",
        }
    }
}
