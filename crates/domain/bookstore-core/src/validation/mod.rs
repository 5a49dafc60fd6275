//! Field and group validation.
//!
//! Rules are pure: they inspect a value (and, for group rules, its siblings)
//! and report zero or one [`FieldError`]. Emptiness is only ever judged by
//! [`Rule::Required`] / [`Rule::RequiredTrue`]; every other rule treats an
//! empty value as valid.

use chrono::NaiveDate;
use serde::Serialize;

pub mod messages;
pub mod rules;

pub use messages::{first_message, format_field_name, group_message, message_for};

/// Current value of a form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Date(Option<NaiveDate>),
    Flag(bool),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Number value; non-finite input counts as no value.
    pub fn number(n: Option<f64>) -> Self {
        Self::Number(n.filter(|v| v.is_finite()))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(n) => !n.is_some_and(f64::is_finite),
            FieldValue::Date(d) => d.is_none(),
            FieldValue::Flag(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => *d,
            _ => None,
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    /// Blank value of the same kind.
    pub fn cleared(&self) -> Self {
        match self {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Number(_) => FieldValue::Number(None),
            FieldValue::Date(_) => FieldValue::Date(None),
            FieldValue::Flag(_) => FieldValue::Flag(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    PasswordComposition,
    FourDigitYear,
}

/// A named failure reason with enough detail to render a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldError {
    Required,
    Email,
    Pattern { pattern: PatternKind },
    MinLength { required: usize, actual: usize },
    MaxLength { required: usize, actual: usize },
    NoDigits { value: String },
    MinimumAge { required: u32, actual: i32 },
    PositiveNumber { value: f64 },
    Min { min: f64, actual: f64 },
    Max { max: f64, actual: f64 },
    WholeNumber { value: f64 },
    InvalidIsbn { value: String },
    InvalidUrl { value: String },
}

impl FieldError {
    /// Stable key used when asking whether a field has a given error.
    pub fn key(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::Email => "email",
            FieldError::Pattern { .. } => "pattern",
            FieldError::MinLength { .. } => "minlength",
            FieldError::MaxLength { .. } => "maxlength",
            FieldError::NoDigits { .. } => "noNumbers",
            FieldError::MinimumAge { .. } => "minimumAge",
            FieldError::PositiveNumber { .. } => "positiveNumber",
            FieldError::Min { .. } => "min",
            FieldError::Max { .. } => "max",
            FieldError::WholeNumber { .. } => "wholeNumber",
            FieldError::InvalidIsbn { .. } => "invalidIsbn",
            FieldError::InvalidUrl { .. } => "invalidUrl",
        }
    }

    /// Message precedence; lower wins.
    /// required > format > length bound > domain-specific.
    pub fn precedence(&self) -> u8 {
        match self {
            FieldError::Required => 0,
            FieldError::Email => 10,
            FieldError::Pattern { .. } => 11,
            FieldError::MinLength { .. } => 20,
            FieldError::MaxLength { .. } => 21,
            FieldError::NoDigits { .. } => 30,
            FieldError::MinimumAge { .. } => 31,
            FieldError::PositiveNumber { .. } => 32,
            FieldError::Min { .. } => 33,
            FieldError::Max { .. } => 34,
            FieldError::WholeNumber { .. } => 35,
            FieldError::InvalidIsbn { .. } => 36,
            FieldError::InvalidUrl { .. } => 37,
        }
    }
}

/// Failure attributed to a group of fields rather than any one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupError {
    PasswordMismatch,
}

impl GroupError {
    pub fn key(&self) -> &'static str {
        match self {
            GroupError::PasswordMismatch => "passwordMismatch",
        }
    }
}

/// Single-field validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    RequiredTrue,
    NoDigits,
    MinLength(usize),
    MaxLength(usize),
    Email,
    PasswordComposition,
    FourDigitYear,
    MinimumAge(u32),
    PositiveNumber,
    Min(f64),
    Max(f64),
    WholeNumber,
    Isbn,
    Url,
}

impl Rule {
    /// Evaluate against `value`. `today` is the reference date for age rules.
    /// Rules that do not apply to the value's kind pass.
    pub fn check(&self, value: &FieldValue, today: NaiveDate) -> Option<FieldError> {
        match self {
            Rule::Required => value.is_empty().then_some(FieldError::Required),
            Rule::RequiredTrue => (!value.as_flag()).then_some(FieldError::Required),
            Rule::NoDigits => {
                let s = non_empty_text(value)?;
                rules::contains_digit(s).then(|| FieldError::NoDigits {
                    value: s.to_string(),
                })
            }
            Rule::MinLength(required) => {
                let actual = non_empty_text(value)?.chars().count();
                (actual < *required).then_some(FieldError::MinLength {
                    required: *required,
                    actual,
                })
            }
            Rule::MaxLength(required) => {
                let actual = non_empty_text(value)?.chars().count();
                (actual > *required).then_some(FieldError::MaxLength {
                    required: *required,
                    actual,
                })
            }
            Rule::Email => {
                let s = non_empty_text(value)?;
                (!rules::is_valid_email(s)).then_some(FieldError::Email)
            }
            Rule::PasswordComposition => {
                let s = non_empty_text(value)?;
                (!rules::has_password_composition(s)).then_some(FieldError::Pattern {
                    pattern: PatternKind::PasswordComposition,
                })
            }
            Rule::FourDigitYear => {
                let s = non_empty_text(value)?;
                (!rules::is_four_digit_year(s)).then_some(FieldError::Pattern {
                    pattern: PatternKind::FourDigitYear,
                })
            }
            Rule::MinimumAge(required) => {
                let birth = value.as_date()?;
                let actual = rules::age_on(birth, today);
                let floor = i32::try_from(*required).unwrap_or(i32::MAX);
                (actual < floor).then_some(FieldError::MinimumAge {
                    required: *required,
                    actual,
                })
            }
            Rule::PositiveNumber => {
                let n = value.as_number()?;
                (!rules::passes_positive_number(n))
                    .then_some(FieldError::PositiveNumber { value: n })
            }
            Rule::Min(min) => {
                let n = value.as_number()?;
                (n < *min).then_some(FieldError::Min {
                    min: *min,
                    actual: n,
                })
            }
            Rule::Max(max) => {
                let n = value.as_number()?;
                (n > *max).then_some(FieldError::Max {
                    max: *max,
                    actual: n,
                })
            }
            Rule::WholeNumber => {
                let n = value.as_number()?;
                (n.fract() != 0.0).then_some(FieldError::WholeNumber { value: n })
            }
            Rule::Isbn => {
                let s = non_empty_text(value)?;
                (!rules::is_valid_isbn(s)).then(|| FieldError::InvalidIsbn {
                    value: s.to_string(),
                })
            }
            Rule::Url => {
                let s = non_empty_text(value)?;
                (!rules::is_valid_url(s)).then(|| FieldError::InvalidUrl {
                    value: s.to_string(),
                })
            }
        }
    }
}

/// Evaluate every rule; errors are returned in rule order.
pub fn validate(value: &FieldValue, checks: &[Rule], today: NaiveDate) -> Vec<FieldError> {
    checks.iter().filter_map(|r| r.check(value, today)).collect()
}

/// Group rule comparing a password with its confirmation.
pub fn password_match(password: &str, confirmation: &str) -> Option<GroupError> {
    (password != confirmation).then_some(GroupError::PasswordMismatch)
}

fn non_empty_text(value: &FieldValue) -> Option<&str> {
    value.as_text().filter(|s| !s.is_empty())
}
