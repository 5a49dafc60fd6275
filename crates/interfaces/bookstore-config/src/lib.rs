//! Central configuration constants for validation limits and runtime defaults.

use std::time::Duration;

/// Minimum age (in completed years) required to register.
pub const MINIMUM_SIGNUP_AGE: u32 = 13;

/// Minimum password length for login and signup.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols accepted as the "special character" class of a password.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Ceiling for the page count of a book.
pub const MAX_PAGE_COUNT: f64 = 10_000.0;

/// Create form: title length bounds.
pub const CREATE_TITLE_MIN: usize = 2;
pub const CREATE_TITLE_MAX: usize = 200;

/// Create form: author name length bounds.
pub const CREATE_AUTHOR_MIN: usize = 2;
pub const CREATE_AUTHOR_MAX: usize = 100;

/// Create form: description ceiling.
pub const DESCRIPTION_MAX: usize = 1_000;

/// Edit form: title/author minimum length.
pub const EDIT_TEXT_MIN: usize = 3;

/// Edit form: minimum ISBN length (before shape checks).
pub const EDIT_ISBN_MIN: usize = 10;

/// Signup form: minimum length of a favorite genre entry.
pub const FAVORITE_GENRE_MIN: usize = 2;

/// Capacity of the kernel's follow-up event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Artificial latency of the in-memory book service, per operation.
pub const MOCK_LIST_LATENCY: Duration = Duration::from_millis(500);
pub const MOCK_GET_LATENCY: Duration = Duration::from_millis(300);
pub const MOCK_WRITE_LATENCY: Duration = Duration::from_millis(400);
pub const MOCK_DELETE_LATENCY: Duration = Duration::from_millis(300);
