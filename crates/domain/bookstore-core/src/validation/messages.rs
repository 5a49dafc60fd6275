use super::{FieldError, GroupError, PatternKind};

/// Human-readable label for a field identifier, e.g. `authorName` -> `Author Name`.
///
/// Nested paths (`passwords.password`) are labelled by their last segment.
pub fn format_field_name(field: &str) -> String {
    let name = field.rsplit('.').next().unwrap_or(field);
    match name {
        "isbn" => return "ISBN".to_string(),
        "coverImageUrl" => return "Cover Image URL".to_string(),
        "pageCount" => return "Page Count".to_string(),
        _ => {}
    }

    let mut out = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    for c in chars {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn message_for(error: &FieldError, field: &str) -> String {
    let label = format_field_name(field);
    match error {
        FieldError::Required => format!("{label} is required"),
        FieldError::Email => "Please enter a valid email address".to_string(),
        FieldError::Pattern {
            pattern: PatternKind::PasswordComposition,
        } => "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character".to_string(),
        FieldError::Pattern {
            pattern: PatternKind::FourDigitYear,
        } => "Please enter a valid 4-digit year".to_string(),
        FieldError::MinLength { required, .. } => {
            format!("{label} must be at least {required} characters")
        }
        FieldError::MaxLength { required, .. } => {
            format!("{label} cannot exceed {required} characters")
        }
        FieldError::NoDigits { .. } => format!("{label} cannot contain numbers"),
        FieldError::MinimumAge { required, .. } => {
            format!("You must be at least {required} years old to register")
        }
        FieldError::PositiveNumber { .. } => format!("{label} must be a positive number"),
        FieldError::Min { min, .. } => format!("{label} must be greater than {min}"),
        FieldError::Max { max, .. } => format!("{label} cannot exceed {max}"),
        FieldError::WholeNumber { .. } => format!("{label} must be a whole number"),
        FieldError::InvalidIsbn { .. } => "Please enter a valid ISBN-10 or ISBN-13".to_string(),
        FieldError::InvalidUrl { .. } => "Please enter a valid URL".to_string(),
    }
}

/// Message for the highest-precedence error, or `""` when there is none.
pub fn first_message(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .min_by_key(|e| e.precedence())
        .map(|e| message_for(e, field))
        .unwrap_or_default()
}

pub fn group_message(error: GroupError) -> String {
    match error {
        GroupError::PasswordMismatch => "Passwords do not match".to_string(),
    }
}
