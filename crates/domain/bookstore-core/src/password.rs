//! Password strength meter shown next to the signup password field.

use serde::Serialize;

use crate::validation::rules::{is_password_symbol, meets_password_length};

const POINTS_PER_CRITERION: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

/// Theme color of the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Warn,
    Accent,
    Primary,
}

impl StrengthColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthColor::Warn => "warn",
            StrengthColor::Accent => "accent",
            StrengthColor::Primary => "primary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
}

impl PasswordStrength {
    /// 20 points each for: minimum length, lowercase, uppercase, digit, symbol.
    pub fn of(password: &str) -> Self {
        let criteria = [
            meets_password_length(password),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(is_password_symbol),
        ];
        let met = criteria.iter().filter(|m| **m).count() as u8;
        Self {
            score: met * POINTS_PER_CRITERION,
        }
    }

    pub fn label(&self) -> StrengthLabel {
        match self.score {
            s if s < 40 => StrengthLabel::Weak,
            s if s < 80 => StrengthLabel::Fair,
            s if s < 100 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn color(&self) -> StrengthColor {
        match self.score {
            s if s < 40 => StrengthColor::Warn,
            s if s < 80 => StrengthColor::Accent,
            _ => StrengthColor::Primary,
        }
    }
}
