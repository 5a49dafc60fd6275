use anyhow::{bail, Result};
use bookstore_app_core::{BookKernel, BookPageEvent, BookStore, SortOrder};
use bookstore_core::forms::BookCreateForm;
use bookstore_core::validation::{first_message, validate, FieldValue, Rule};
use bookstore_core::{format_price, Book, BookService, NewBook, PasswordStrength};
use tracing::debug;

/// Listing options for `books`.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub order: SortOrder,
}

/// Raw `add` arguments, validated through the create form.
#[derive(Debug, Clone, Default)]
pub struct AddBookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: Option<f64>,
    pub published: String,
    pub isbn: String,
    pub description: Option<String>,
    pub pages: Option<f64>,
    pub cover_url: Option<String>,
}

/// Kernel with the catalog already loaded.
async fn loaded_kernel<S: BookService>(service: S) -> Result<BookKernel<S>> {
    let mut kernel = BookKernel::new(BookStore::default(), service)?;
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;
    if let Some(err) = kernel.store.error() {
        bail!("Failed to load books: {err}");
    }
    Ok(kernel)
}

pub async fn cmd_books<S: BookService>(service: S, query: BookQuery) -> Result<Vec<Book>> {
    let mut kernel = loaded_kernel(service).await?;

    if let Some(term) = query.search {
        kernel.dispatch(BookPageEvent::SearchTermChanged { term });
    }
    if query.genre.is_some() {
        kernel.dispatch(BookPageEvent::GenreFilterChanged { genre: query.genre });
    }
    kernel.dispatch(BookPageEvent::SortOrderChanged { order: query.order });

    let books = kernel.store.sorted_books();
    debug!(shown = books.len(), total = kernel.store.books().len(), "books");
    Ok(books)
}

/// Validate `input` the way the create dialog does and build the new book.
pub fn build_new_book(input: AddBookInput) -> Result<NewBook> {
    let mut form = BookCreateForm::new();
    let f = form.form_mut();
    f.set_text("basicInfo.title", input.title)?;
    f.set_text("basicInfo.authorName", input.author)?;
    f.set_text("basicInfo.genre", input.genre)?;
    f.set_number("basicInfo.price", input.price)?;
    f.set_text("basicInfo.published", input.published)?;
    f.set_text("additionalInfo.isbn", input.isbn)?;
    f.set_text("additionalInfo.description", input.description.unwrap_or_default())?;
    f.set_number("additionalInfo.pageCount", input.pages)?;
    f.set_text("additionalInfo.coverImageUrl", input.cover_url.unwrap_or_default())?;
    f.mark_all_touched();

    let problems: Vec<String> = f
        .fields()
        .iter()
        .map(|field| f.error_message(&field.path))
        .filter(|m| !m.is_empty())
        .collect();
    if !problems.is_empty() {
        bail!("Invalid book:\n  - {}", problems.join("\n  - "));
    }

    Ok(form.submit()?)
}

pub async fn cmd_add<S: BookService>(service: S, input: AddBookInput) -> Result<Book> {
    let new_book = build_new_book(input)?;
    let mut kernel = loaded_kernel(service).await?;
    let before = kernel.store.books().len();

    kernel.add_book(new_book);
    kernel.settle().await;

    let books = kernel.store.books();
    match books.last() {
        Some(book) if books.len() > before => Ok(book.clone()),
        _ => bail!("Book was not created"),
    }
}

/// Delete `id`; returns the books that remain.
pub async fn cmd_delete<S: BookService>(service: S, id: String) -> Result<Vec<Book>> {
    let mut kernel = loaded_kernel(service).await?;
    if !kernel
        .store
        .books()
        .iter()
        .any(|b| b.id.as_deref() == Some(id.as_str()))
    {
        bail!("Book not found: {id}");
    }

    kernel.dispatch(BookPageEvent::DeleteRequested { id: id.clone() });
    kernel.settle().await;

    let books = kernel.store.books();
    if books.iter().any(|b| b.id.as_deref() == Some(id.as_str())) {
        bail!("Failed to delete book {id}");
    }
    Ok(books)
}

/// `None` when `value` is a well-formed ISBN, otherwise the message.
pub fn check_isbn(value: &str) -> Option<String> {
    let errors = validate(
        &FieldValue::text(value),
        &[Rule::Required, Rule::Isbn],
        chrono::Local::now().date_naive(),
    );
    (!errors.is_empty()).then(|| first_message(&errors, "isbn"))
}

pub fn password_strength(value: &str) -> PasswordStrength {
    PasswordStrength::of(value)
}

pub fn render_books(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }
    books
        .iter()
        .map(|b| {
            format!(
                "{:>3}  {}  by {}  [{}]  {}",
                b.id.as_deref().unwrap_or("-"),
                b.title,
                b.author_name,
                b.genre,
                format_price(b.price)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
