//! Views derived from a [`CatalogState`] on every read. Nothing here writes.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use bookstore_core::Book;

use crate::domain::{CatalogState, SortOrder};

/// Books matching the search term (title or author, case-insensitive) and the
/// genre filter, in list order. An empty genre filter matches everything.
pub fn filtered_books(state: &CatalogState) -> Vec<&Book> {
    let term = state.search_term.to_lowercase();
    let genre = state.genre_filter.as_deref().filter(|g| !g.is_empty());

    state
        .books
        .iter()
        .filter(|b| term.is_empty() || matches_term(b, &term))
        .filter(|b| genre.is_none_or(|g| b.genre == g))
        .collect()
}

fn matches_term(book: &Book, lowered_term: &str) -> bool {
    book.title.to_lowercase().contains(lowered_term)
        || book.author_name.to_lowercase().contains(lowered_term)
}

/// Filtered books ordered by title. Sorts a copy; the stored list is untouched.
pub fn sorted_books(state: &CatalogState) -> Vec<&Book> {
    let mut books = filtered_books(state);
    match state.sort_order {
        SortOrder::Asc => books.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::Desc => books.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
    books
}

/// Case-insensitive first, exact text as tiebreak.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The selected book, if the selection names one that exists.
pub fn selected_book(state: &CatalogState) -> Option<&Book> {
    let id = state.selected_book_id.as_deref()?;
    state.books.iter().find(|b| b.id.as_deref() == Some(id))
}

pub fn has_books(state: &CatalogState) -> bool {
    !state.books.is_empty()
}

pub fn has_active_filters(state: &CatalogState) -> bool {
    !state.search_term.is_empty() || state.genre_filter.is_some()
}

/// Distinct genres, sorted.
pub fn available_genres(state: &CatalogState) -> Vec<String> {
    state
        .books
        .iter()
        .map(|b| b.genre.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
