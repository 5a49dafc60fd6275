use bookstore_config::{FAVORITE_GENRE_MIN, MINIMUM_SIGNUP_AGE, PASSWORD_MIN_LENGTH};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Form, FormError, MessageGate};
use crate::password::PasswordStrength;
use crate::validation::{FieldValue, Rule};

pub const FAVORITE_GENRES: &str = "favoriteGenres";
pub const PASSWORDS: &str = "passwords";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub address: Address,
    pub favorite_genres: Vec<String>,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    form: Form,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        let name_rules = || vec![Rule::Required, Rule::NoDigits];
        let form = Form::new(MessageGate::Touched)
            .field("firstName", FieldValue::text(""), name_rules())
            .field("lastName", FieldValue::text(""), name_rules())
            .field(
                "email",
                FieldValue::text(""),
                vec![Rule::Required, Rule::Email],
            )
            .field(
                "dateOfBirth",
                FieldValue::Date(None),
                vec![Rule::Required, Rule::MinimumAge(MINIMUM_SIGNUP_AGE)],
            )
            .field(
                "passwords.password",
                FieldValue::text(""),
                vec![
                    Rule::Required,
                    Rule::MinLength(PASSWORD_MIN_LENGTH),
                    Rule::PasswordComposition,
                ],
            )
            .field(
                "passwords.confirmPassword",
                FieldValue::text(""),
                vec![Rule::Required],
            )
            .password_group(PASSWORDS, "passwords.password", "passwords.confirmPassword")
            .field("address.street", FieldValue::text(""), vec![Rule::Required])
            .field("address.city", FieldValue::text(""), name_rules())
            .field("address.country", FieldValue::text(""), name_rules())
            .field("agreeToTerms", FieldValue::Flag(false), vec![Rule::RequiredTrue]);
        Self { form }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn genre_count(&self) -> usize {
        self.form.array_len(FAVORITE_GENRES)
    }

    /// Append an empty favorite-genre entry and return its path.
    pub fn add_genre(&mut self) -> String {
        let index = self.genre_count();
        self.form.push_array_item(
            FAVORITE_GENRES,
            FieldValue::text(""),
            vec![Rule::Required, Rule::MinLength(FAVORITE_GENRE_MIN)],
        );
        format!("{FAVORITE_GENRES}.{index}")
    }

    pub fn remove_genre(&mut self, index: usize) -> bool {
        self.form.remove_array_item(FAVORITE_GENRES, index)
    }

    pub fn favorite_genres(&self) -> Vec<String> {
        self.form
            .array_values(FAVORITE_GENRES)
            .into_iter()
            .filter_map(FieldValue::as_text)
            .map(str::to_string)
            .collect()
    }

    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::of(self.form.text("passwords.password"))
    }

    pub fn submit(&self) -> Result<SignupData, FormError> {
        if !self.form.is_valid() {
            return Err(FormError::Invalid);
        }
        let date_of_birth = self
            .form
            .date("dateOfBirth")
            .ok_or_else(|| FormError::UnknownField("dateOfBirth".to_string()))?;

        let f = &self.form;
        Ok(SignupData {
            email: f.text("email").to_string(),
            password: f.text("passwords.password").to_string(),
            confirm_password: f.text("passwords.confirmPassword").to_string(),
            first_name: f.text("firstName").to_string(),
            last_name: f.text("lastName").to_string(),
            date_of_birth,
            address: Address {
                street: f.text("address.street").to_string(),
                city: f.text("address.city").to_string(),
                country: f.text("address.country").to_string(),
            },
            favorite_genres: self.favorite_genres(),
            agree_to_terms: f.flag("agreeToTerms"),
        })
    }
}
