use bookstore_config::PASSWORD_MIN_LENGTH;
use serde::{Deserialize, Serialize};

use super::{Form, FormError, MessageGate};
use crate::validation::{FieldValue, Rule};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSubmission {
    #[serde(flatten)]
    pub credentials: LoginCredentials,
    pub remember_me: bool,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    form: Form,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        let form = Form::new(MessageGate::Touched)
            .field(
                "email",
                FieldValue::text(""),
                vec![Rule::Required, Rule::Email],
            )
            .field(
                "password",
                FieldValue::text(""),
                vec![Rule::Required, Rule::MinLength(PASSWORD_MIN_LENGTH)],
            )
            .field("rememberMe", FieldValue::Flag(false), vec![]);
        Self { form }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Credentials when valid; otherwise every field is marked touched so
    /// its message becomes visible.
    pub fn submit(&mut self) -> Result<LoginSubmission, FormError> {
        if !self.form.is_valid() {
            self.form.mark_all_touched();
            return Err(FormError::Invalid);
        }

        Ok(LoginSubmission {
            credentials: LoginCredentials {
                email: self.form.text("email").to_string(),
                password: self.form.text("password").to_string(),
            },
            remember_me: self.form.flag("rememberMe"),
        })
    }

    /// Email to prefill the reset flow with: the entered address when it is
    /// present and valid, otherwise empty.
    pub fn forgot_password_email(&self) -> String {
        let email = self.form.text("email");
        if !email.is_empty() && self.form.errors("email").is_empty() {
            email.to_string()
        } else {
            String::new()
        }
    }
}
