use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bookstore_core::Book;

use crate::computed;
use crate::domain::CatalogState;

use super::{events::BookEvent, reducer::reduce};

/// Shared handle to the catalog state. Clones observe the same state.
#[derive(Clone, Default)]
pub struct BookStore {
    inner: Arc<Mutex<CatalogState>>,
}

impl BookStore {
    pub fn new(state: CatalogState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> CatalogState {
        self.lock().clone()
    }

    pub fn apply(&self, ev: BookEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    /// Read the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&self.lock())
    }

    pub fn books(&self) -> Vec<Book> {
        self.with_state(|s| s.books.clone())
    }

    pub fn selected_book_id(&self) -> Option<String> {
        self.with_state(|s| s.selected_book_id.clone())
    }

    pub fn loading(&self) -> bool {
        self.with_state(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.with_state(|s| s.error.clone())
    }

    pub fn filtered_books(&self) -> Vec<Book> {
        self.with_state(|s| computed::filtered_books(s).into_iter().cloned().collect())
    }

    pub fn sorted_books(&self) -> Vec<Book> {
        self.with_state(|s| computed::sorted_books(s).into_iter().cloned().collect())
    }

    pub fn selected_book(&self) -> Option<Book> {
        self.with_state(|s| computed::selected_book(s).cloned())
    }

    pub fn has_books(&self) -> bool {
        self.with_state(computed::has_books)
    }

    pub fn has_active_filters(&self) -> bool {
        self.with_state(computed::has_active_filters)
    }

    pub fn available_genres(&self) -> Vec<String> {
        self.with_state(computed::available_genres)
    }
}
