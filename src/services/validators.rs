//! Field validators and the rule tables built from them.
//!
//! Every predicate here is pure. Forms describe their validation as a table of
//! [`FieldRule`]s; [`evaluate`] walks the table and reports the first failing
//! check of each field.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::models::common::{ErrorMap, FieldName};

pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("name pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));
static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("pincode pattern"));
static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern"));
static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("symbol pattern"));
static HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])$").expect("hour pattern"));
static MINUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-5][0-9]$").expect("minute pattern"));

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_letters_and_spaces(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_pincode(value: &str) -> bool {
    PINCODE_RE.is_match(value)
}

pub fn is_valid_description(value: &str) -> bool {
    value.chars().count() <= DESCRIPTION_MAX_CHARS
}

pub fn has_min_password_length(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_CHARS
}

pub fn has_uppercase(value: &str) -> bool {
    UPPERCASE_RE.is_match(value)
}

/// Contains at least one of [`PASSWORD_SYMBOLS`].
pub fn has_listed_symbol(value: &str) -> bool {
    SYMBOL_RE.is_match(value)
}

/// A date is selectable when present and not in the past.
pub fn is_selectable_date(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    matches!(date, Some(d) if d >= today)
}

/// Two-digit hour, `01` through `12`.
pub fn is_valid_hour(value: &str) -> bool {
    HOUR_RE.is_match(value)
}

/// Two-digit minute, `00` through `59`.
pub fn is_valid_minute(value: &str) -> bool {
    MINUTE_RE.is_match(value)
}

pub fn is_valid_period(value: &str) -> bool {
    matches!(value, "AM" | "PM")
}

/// One predicate over a form record with the message shown when it fails.
pub struct Check<R> {
    pub passes: fn(&R) -> bool,
    pub message: &'static str,
}

/// Ordered checks for one field. Only the first failing check is reported.
pub struct FieldRule<F, R: 'static> {
    pub field: F,
    pub checks: &'static [Check<R>],
}

impl<F, R: 'static> FieldRule<F, R> {
    pub fn verdict(&self, record: &R) -> Result<(), &'static str> {
        match self.checks.iter().find(|check| !(check.passes)(record)) {
            Some(check) => Err(check.message),
            None => Ok(()),
        }
    }
}

/// Runs every rule of a table against a record and collects the failures.
pub fn evaluate<F: FieldName, R: 'static>(rules: &[FieldRule<F, R>], record: &R) -> ErrorMap<F> {
    let mut errors = ErrorMap::new();
    for rule in rules {
        if let Err(message) = rule.verdict(record) {
            errors.insert(rule.field, message);
        }
    }
    errors
}
