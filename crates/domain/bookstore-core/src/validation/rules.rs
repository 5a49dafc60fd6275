//! Pure predicates behind [`super::Rule`].

use std::sync::LazyLock;

use bookstore_config::{PASSWORD_MIN_LENGTH, PASSWORD_SYMBOLS};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Dot-atom local part, then hostname labels (1-63 chars, no edge hyphens).
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid email regex")
});

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

pub fn contains_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

pub fn is_valid_email(s: &str) -> bool {
    if s.len() > EMAIL_MAX_LEN {
        return false;
    }
    match s.split_once('@') {
        Some((local, _)) if !local.is_empty() && local.len() <= EMAIL_LOCAL_MAX_LEN => {
            EMAIL_REGEX.is_match(s)
        }
        _ => false,
    }
}

/// At least one lowercase, uppercase, digit and symbol, starting with one of
/// those. Length is a separate rule.
pub fn has_password_composition(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || is_password_symbol(c))
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().any(is_password_symbol)
}

pub fn is_password_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(c)
}

pub fn meets_password_length(s: &str) -> bool {
    s.chars().count() >= PASSWORD_MIN_LENGTH
}

pub fn is_four_digit_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Completed years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Zero passes; negative and non-finite values fail.
pub fn passes_positive_number(n: f64) -> bool {
    n.is_finite() && n >= 0.0
}

/// ISBN-10 or ISBN-13 shape after stripping hyphens and whitespace. A trailing
/// `X`/`x` check character is only accepted on the 10-character form.
pub fn is_valid_isbn(s: &str) -> bool {
    let stripped: Vec<char> = s
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    let Some((last, body)) = stripped.split_last() else {
        return false;
    };

    let len = stripped.len();
    if len != 10 && len != 13 {
        return false;
    }

    body.iter().all(|c| c.is_ascii_digit())
        && (last.is_ascii_digit() || (len == 10 && matches!(last, 'X' | 'x')))
}

/// Absolute URL with a scheme and a host.
pub fn is_valid_url(s: &str) -> bool {
    url::Url::parse(s).map(|u| u.has_host()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_decrements_before_birthday() {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let before = NaiveDate::from_ymd_opt(2013, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2013, 6, 15).unwrap();
        assert_eq!(age_on(birth, before), 12);
        assert_eq!(age_on(birth, on), 13);
    }

    #[test]
    fn email_local_part_limit() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{local}@example.com")));
        assert!(is_valid_email(&format!("{}@example.com", "a".repeat(64))));
    }
}
