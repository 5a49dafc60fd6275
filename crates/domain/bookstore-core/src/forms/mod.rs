//! Form schemas: fields with their rules, touch tracking and message lookup.
//!
//! A [`Form`] is a flat list of fields addressed by dotted paths
//! (`passwords.password`, `favoriteGenres.0`). A path prefix such as
//! `passwords` names a group; a group is touched when any of its fields is.

use chrono::NaiveDate;

use crate::validation::{self, FieldError, FieldValue, GroupError, Rule};

pub mod book;
pub mod login;
pub mod signup;

pub use book::{BookCreateForm, BookEditForm, BookSubmission};
pub use login::{LoginCredentials, LoginForm, LoginSubmission};
pub use signup::{Address, SignupData, SignupForm};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("value kind does not match field '{0}'")]
    KindMismatch(String),
    #[error("form has validation errors")]
    Invalid,
}

/// When field messages are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageGate {
    /// Only after the user has interacted with the field.
    Touched,
    /// Regardless of interaction.
    Always,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub path: String,
    pub value: FieldValue,
    pub rules: Vec<Rule>,
    pub touched: bool,
}

impl Field {
    pub fn new(path: impl Into<String>, value: FieldValue, rules: Vec<Rule>) -> Self {
        Self {
            path: path.into(),
            value,
            rules,
            touched: false,
        }
    }
}

#[derive(Debug, Clone)]
struct PasswordGroup {
    group: String,
    password: String,
    confirmation: String,
}

#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    password_groups: Vec<PasswordGroup>,
    gate: MessageGate,
    today: NaiveDate,
}

impl Form {
    pub fn new(gate: MessageGate) -> Self {
        Self {
            fields: Vec::new(),
            password_groups: Vec::new(),
            gate,
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn field(mut self, path: &str, initial: FieldValue, rules: Vec<Rule>) -> Self {
        self.fields.push(Field::new(path, initial, rules));
        self
    }

    /// Attach the password-match rule to `group`.
    pub fn password_group(mut self, group: &str, password: &str, confirmation: &str) -> Self {
        self.password_groups.push(PasswordGroup {
            group: group.to_string(),
            password: password.to_string(),
            confirmation: confirmation.to_string(),
        });
        self
    }

    /// Reference date for age rules.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn gate(&self) -> MessageGate {
        self.gate
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn get(&self, path: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.path == path)
    }

    fn get_mut(&mut self, path: &str) -> Result<&mut Field, FormError> {
        self.fields
            .iter_mut()
            .find(|f| f.path == path)
            .ok_or_else(|| FormError::UnknownField(path.to_string()))
    }

    pub fn value(&self, path: &str) -> Option<&FieldValue> {
        self.get(path).map(|f| &f.value)
    }

    /// Text value of `path`, or `""` for unknown or non-text fields.
    pub fn text(&self, path: &str) -> &str {
        self.value(path).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        self.value(path).and_then(FieldValue::as_number)
    }

    pub fn date(&self, path: &str) -> Option<NaiveDate> {
        self.value(path).and_then(FieldValue::as_date)
    }

    pub fn flag(&self, path: &str) -> bool {
        self.value(path).is_some_and(FieldValue::as_flag)
    }

    /// Replace a field's value. The new value must be of the same kind.
    pub fn set_value(&mut self, path: &str, value: FieldValue) -> Result<(), FormError> {
        let field = self.get_mut(path)?;
        if std::mem::discriminant(&field.value) != std::mem::discriminant(&value) {
            return Err(FormError::KindMismatch(path.to_string()));
        }
        field.value = value;
        Ok(())
    }

    pub fn set_text(&mut self, path: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.set_value(path, FieldValue::Text(value.into()))
    }

    pub fn set_number(&mut self, path: &str, value: Option<f64>) -> Result<(), FormError> {
        self.set_value(path, FieldValue::number(value))
    }

    pub fn set_date(&mut self, path: &str, value: Option<NaiveDate>) -> Result<(), FormError> {
        self.set_value(path, FieldValue::Date(value))
    }

    pub fn set_flag(&mut self, path: &str, value: bool) -> Result<(), FormError> {
        self.set_value(path, FieldValue::Flag(value))
    }

    pub fn touch(&mut self, path: &str) -> Result<(), FormError> {
        self.get_mut(path)?.touched = true;
        Ok(())
    }

    pub fn mark_all_touched(&mut self) {
        for f in &mut self.fields {
            f.touched = true;
        }
    }

    /// A field is touched directly; a group is touched through any member.
    pub fn is_touched(&self, path: &str) -> bool {
        self.fields
            .iter()
            .any(|f| f.touched && (f.path == path || in_group(&f.path, path)))
    }

    pub fn is_form_touched(&self) -> bool {
        self.fields.iter().any(|f| f.touched)
    }

    /// Clear every value and forget all interaction.
    pub fn reset(&mut self) {
        for f in &mut self.fields {
            f.value = f.value.cleared();
            f.touched = false;
        }
    }

    pub fn errors(&self, path: &str) -> Vec<FieldError> {
        self.get(path)
            .map(|f| validation::validate(&f.value, &f.rules, self.today))
            .unwrap_or_default()
    }

    pub fn has_error(&self, path: &str, key: &str) -> bool {
        self.errors(path).iter().any(|e| e.key() == key)
    }

    pub fn group_errors(&self, group: &str) -> Vec<GroupError> {
        self.password_groups
            .iter()
            .filter(|g| g.group == group)
            .filter_map(|g| validation::password_match(self.text(&g.password), self.text(&g.confirmation)))
            .collect()
    }

    pub fn has_group_error(&self, group: &str, key: &str) -> bool {
        self.group_errors(group).iter().any(|e| e.key() == key)
    }

    /// True when `path` and every field inside it (if it is a group) pass,
    /// including group rules attached to it.
    pub fn is_path_valid(&self, path: &str) -> bool {
        self.fields
            .iter()
            .filter(|f| f.path == path || in_group(&f.path, path))
            .all(|f| validation::validate(&f.value, &f.rules, self.today).is_empty())
            && self.group_errors(path).is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|f| validation::validate(&f.value, &f.rules, self.today).is_empty())
            && self.password_groups.iter().all(|g| {
                validation::password_match(self.text(&g.password), self.text(&g.confirmation))
                    .is_none()
            })
    }

    /// First applicable message for `path`, or `""`.
    pub fn error_message(&self, path: &str) -> String {
        let Some(field) = self.get(path) else {
            return String::new();
        };
        if self.gate == MessageGate::Touched && !field.touched {
            return String::new();
        }
        validation::first_message(&self.errors(path), path)
    }

    /// Group-level message; shown once any member of the group is touched.
    pub fn group_error_message(&self, group: &str) -> String {
        if !self.is_touched(group) {
            return String::new();
        }
        self.group_errors(group)
            .first()
            .map(|e| validation::group_message(*e))
            .unwrap_or_default()
    }

    pub fn array_len(&self, array: &str) -> usize {
        self.fields
            .iter()
            .filter(|f| array_index(&f.path, array).is_some())
            .count()
    }

    /// Append an item to the `array` list; it becomes `array.<len>`.
    pub fn push_array_item(&mut self, array: &str, initial: FieldValue, rules: Vec<Rule>) {
        let path = format!("{array}.{}", self.array_len(array));
        self.fields.push(Field::new(path, initial, rules));
    }

    /// Remove `array.<index>` and renumber later items. Out-of-range is a no-op.
    pub fn remove_array_item(&mut self, array: &str, index: usize) -> bool {
        let Some(pos) = self
            .fields
            .iter()
            .position(|f| array_index(&f.path, array) == Some(index))
        else {
            return false;
        };
        self.fields.remove(pos);

        for f in &mut self.fields {
            if let Some(i) = array_index(&f.path, array) {
                if i > index {
                    f.path = format!("{array}.{}", i - 1);
                }
            }
        }
        true
    }

    /// Values of the `array` list in index order.
    pub fn array_values(&self, array: &str) -> Vec<&FieldValue> {
        let mut items: Vec<(usize, &FieldValue)> = self
            .fields
            .iter()
            .filter_map(|f| array_index(&f.path, array).map(|i| (i, &f.value)))
            .collect();
        items.sort_by_key(|(i, _)| *i);
        items.into_iter().map(|(_, v)| v).collect()
    }
}

fn in_group(path: &str, group: &str) -> bool {
    path.strip_prefix(group)
        .is_some_and(|rest| rest.starts_with('.'))
}

fn array_index(path: &str, array: &str) -> Option<usize> {
    path.strip_prefix(array)?.strip_prefix('.')?.parse().ok()
}
