use crate::domain::CatalogState;

use super::events::{BookApiEvent, BookEvent, BookPageEvent};

pub fn reduce(mut state: CatalogState, ev: BookEvent) -> CatalogState {
    match ev {
        BookEvent::Page(ev) => apply_page_event(&mut state, ev),
        BookEvent::Api(ev) => apply_api_event(&mut state, ev),
    }
    state
}

fn apply_page_event(state: &mut CatalogState, ev: BookPageEvent) {
    match ev {
        BookPageEvent::Opened => {
            state.loading = true;
            state.error = None;
        }

        BookPageEvent::BookSelected { id } => state.selected_book_id = id,
        BookPageEvent::SearchTermChanged { term } => state.search_term = term,
        BookPageEvent::GenreFilterChanged { genre } => state.genre_filter = genre,
        BookPageEvent::SortOrderChanged { order } => state.sort_order = order,

        // Handled by the delete effect.
        BookPageEvent::DeleteRequested { .. } => {}
    }
}

fn apply_api_event(state: &mut CatalogState, ev: BookApiEvent) {
    match ev {
        BookApiEvent::LoadRequested => {
            state.loading = true;
            state.error = None;
        }

        BookApiEvent::LoadSuccess { books } => {
            state.books = books;
            state.loading = false;
            state.error = None;
        }

        BookApiEvent::LoadFailure { error } => {
            state.error = Some(error);
            state.loading = false;
        }

        BookApiEvent::AddSuccess { book } => state.books.push(book),

        BookApiEvent::UpdateSuccess { book } => {
            if let Some(ix) = state
                .books
                .iter()
                .position(|b| b.id.is_some() && b.id == book.id)
            {
                state.books[ix] = book;
            }
        }

        BookApiEvent::DeleteSuccess { id } => {
            state.books.retain(|b| b.id.as_deref() != Some(id.as_str()));
            if state.selected_book_id.as_deref() == Some(id.as_str()) {
                state.selected_book_id = None;
            }
        }
    }
}
