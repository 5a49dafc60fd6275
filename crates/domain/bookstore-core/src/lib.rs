pub mod book;
pub mod forms;
pub mod money;
pub mod password;
pub mod service;
pub mod validation;

pub use book::{Book, BookId, BookPatch, NewBook};
pub use money::format_price;
pub use password::{PasswordStrength, StrengthColor, StrengthLabel};
pub use service::{BookService, ServiceError};
pub use validation::{FieldError, FieldValue, GroupError, PatternKind, Rule};
