use bookstore_config::{
    CREATE_AUTHOR_MAX, CREATE_AUTHOR_MIN, CREATE_TITLE_MAX, CREATE_TITLE_MIN, DESCRIPTION_MAX,
    EDIT_ISBN_MIN, EDIT_TEXT_MIN, MAX_PAGE_COUNT,
};

use super::{Form, FormError, MessageGate};
use crate::book::{Book, BookId, NewBook};
use crate::validation::{FieldValue, Rule};

/// Genres offered by the create dialog.
pub const CREATE_GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Fantasy",
    "Biography",
    "History",
    "Self-Help",
    "Business",
    "Technology",
    "Health",
    "Travel",
    "Cooking",
    "Art",
    "Poetry",
];

/// Genres offered by the edit page.
pub const EDIT_GENRES: &[&str] = &[
    "Programming",
    "Fiction",
    "Fantasy",
    "Science Fiction",
    "Software Engineering",
    "Mystery",
    "History",
    "Biography",
];

/// Book creation dialog: required basics plus optional details.
#[derive(Debug, Clone)]
pub struct BookCreateForm {
    form: Form,
}

impl Default for BookCreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookCreateForm {
    pub fn new() -> Self {
        let form = Form::new(MessageGate::Touched)
            .field(
                "basicInfo.title",
                FieldValue::text(""),
                vec![
                    Rule::Required,
                    Rule::MinLength(CREATE_TITLE_MIN),
                    Rule::MaxLength(CREATE_TITLE_MAX),
                ],
            )
            .field(
                "basicInfo.authorName",
                FieldValue::text(""),
                vec![
                    Rule::Required,
                    Rule::MinLength(CREATE_AUTHOR_MIN),
                    Rule::MaxLength(CREATE_AUTHOR_MAX),
                ],
            )
            .field("basicInfo.genre", FieldValue::text(""), vec![Rule::Required])
            .field(
                "basicInfo.price",
                FieldValue::Number(None),
                vec![Rule::Required, Rule::PositiveNumber],
            )
            .field(
                "basicInfo.published",
                FieldValue::text(""),
                vec![Rule::Required, Rule::FourDigitYear],
            )
            .field(
                "additionalInfo.description",
                FieldValue::text(""),
                vec![Rule::MaxLength(DESCRIPTION_MAX)],
            )
            .field(
                "additionalInfo.isbn",
                FieldValue::text(""),
                vec![Rule::Required, Rule::Isbn],
            )
            .field(
                "additionalInfo.pageCount",
                FieldValue::Number(None),
                vec![
                    Rule::PositiveNumber,
                    Rule::WholeNumber,
                    Rule::Max(MAX_PAGE_COUNT),
                ],
            )
            .field(
                "additionalInfo.coverImageUrl",
                FieldValue::text(""),
                vec![Rule::Url],
            );
        Self { form }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Current price, zero while unset.
    pub fn price_value(&self) -> f64 {
        self.form.number("basicInfo.price").unwrap_or(0.0)
    }

    /// Build the new book and reset the dialog. Empty optional text and a
    /// zero or unset page count are submitted as absent.
    pub fn submit(&mut self) -> Result<NewBook, FormError> {
        if !self.form.is_valid() {
            return Err(FormError::Invalid);
        }

        let f = &self.form;
        let book = NewBook {
            title: f.text("basicInfo.title").to_string(),
            author_name: f.text("basicInfo.authorName").to_string(),
            genre: f.text("basicInfo.genre").to_string(),
            price: f.number("basicInfo.price").unwrap_or_default(),
            published: f.text("basicInfo.published").to_string(),
            isbn: f.text("additionalInfo.isbn").to_string(),
            description: non_empty(f.text("additionalInfo.description")),
            page_count: f
                .number("additionalInfo.pageCount")
                .map(|n| n as u32)
                .filter(|n| *n > 0),
            cover_image_url: non_empty(f.text("additionalInfo.coverImageUrl")),
        };

        self.form.reset();
        Ok(book)
    }
}

/// What the edit page submits: an update for an existing id, or a creation.
#[derive(Debug, Clone, PartialEq)]
pub enum BookSubmission {
    Create(NewBook),
    Update(Book),
}

/// Combined create/edit page form. Its messages are not gated by touch.
#[derive(Debug, Clone)]
pub struct BookEditForm {
    form: Form,
}

impl Default for BookEditForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookEditForm {
    pub fn new() -> Self {
        let form = Form::new(MessageGate::Always)
            .field(
                "title",
                FieldValue::text(""),
                vec![Rule::Required, Rule::MinLength(EDIT_TEXT_MIN)],
            )
            .field(
                "authorName",
                FieldValue::text(""),
                vec![Rule::Required, Rule::MinLength(EDIT_TEXT_MIN)],
            )
            .field("genre", FieldValue::text(""), vec![Rule::Required])
            .field(
                "price",
                FieldValue::Number(None),
                vec![Rule::Required, Rule::Min(0.0)],
            )
            .field("published", FieldValue::text(""), vec![Rule::Required])
            .field(
                "isbn",
                FieldValue::text(""),
                vec![Rule::Required, Rule::MinLength(EDIT_ISBN_MIN)],
            );
        Self { form }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Prefill from an existing book.
    pub fn load(&mut self, book: &Book) -> Result<(), FormError> {
        self.form.set_text("title", book.title.clone())?;
        self.form.set_text("authorName", book.author_name.clone())?;
        self.form.set_text("genre", book.genre.clone())?;
        self.form.set_number("price", Some(book.price))?;
        self.form.set_text("published", book.published.clone())?;
        self.form.set_text("isbn", book.isbn.clone())?;
        Ok(())
    }

    /// Update `editing` when set, otherwise create. Invalid input marks every
    /// field touched.
    pub fn submit(&mut self, editing: Option<&str>) -> Result<BookSubmission, FormError> {
        if !self.form.is_valid() {
            self.form.mark_all_touched();
            return Err(FormError::Invalid);
        }

        let f = &self.form;
        let new = NewBook {
            title: f.text("title").to_string(),
            author_name: f.text("authorName").to_string(),
            genre: f.text("genre").to_string(),
            price: f.number("price").unwrap_or_default(),
            published: f.text("published").to_string(),
            isbn: f.text("isbn").to_string(),
            description: None,
            page_count: None,
            cover_image_url: None,
        };

        Ok(match editing.filter(|id| !id.is_empty()) {
            Some(id) => BookSubmission::Update(Book::from_new(BookId::from(id), new)),
            None => BookSubmission::Create(new),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
