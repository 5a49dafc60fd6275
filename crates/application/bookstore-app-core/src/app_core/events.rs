use std::fmt;

use bookstore_core::{Book, BookId};

use crate::domain::SortOrder;

pub const PAGE_SOURCE: &str = "Books Page";
pub const API_SOURCE: &str = "Books API";

/// User intents raised by the catalog page.
#[derive(Debug, Clone, PartialEq)]
pub enum BookPageEvent {
    Opened,
    BookSelected { id: Option<BookId> },
    SearchTermChanged { term: String },
    GenreFilterChanged { genre: Option<String> },
    SortOrderChanged { order: SortOrder },
    DeleteRequested { id: BookId },
}

/// Load requests and collaborator outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum BookApiEvent {
    LoadRequested,
    LoadSuccess { books: Vec<Book> },
    LoadFailure { error: String },
    AddSuccess { book: Book },
    UpdateSuccess { book: Book },
    DeleteSuccess { id: BookId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookEvent {
    Page(BookPageEvent),
    Api(BookApiEvent),
}

impl BookEvent {
    pub fn source(&self) -> &'static str {
        match self {
            BookEvent::Page(_) => PAGE_SOURCE,
            BookEvent::Api(_) => API_SOURCE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BookEvent::Page(ev) => match ev {
                BookPageEvent::Opened => "opened",
                BookPageEvent::BookSelected { .. } => "bookSelected",
                BookPageEvent::SearchTermChanged { .. } => "searchTermChanged",
                BookPageEvent::GenreFilterChanged { .. } => "genreFilterChanged",
                BookPageEvent::SortOrderChanged { .. } => "sortOrderChanged",
                BookPageEvent::DeleteRequested { .. } => "deleteRequested",
            },
            BookEvent::Api(ev) => match ev {
                BookApiEvent::LoadRequested => "loadRequested",
                BookApiEvent::LoadSuccess { .. } => "loadSuccess",
                BookApiEvent::LoadFailure { .. } => "loadFailure",
                BookApiEvent::AddSuccess { .. } => "addSuccess",
                BookApiEvent::UpdateSuccess { .. } => "updateSuccess",
                BookApiEvent::DeleteSuccess { .. } => "deleteSuccess",
            },
        }
    }
}

impl fmt::Display for BookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.source(), self.name())
    }
}

impl From<BookPageEvent> for BookEvent {
    fn from(ev: BookPageEvent) -> Self {
        BookEvent::Page(ev)
    }
}

impl From<BookApiEvent> for BookEvent {
    fn from(ev: BookApiEvent) -> Self {
        BookEvent::Api(ev)
    }
}
