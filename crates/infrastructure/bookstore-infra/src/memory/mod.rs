//! Process-local book collaborator with artificial latency.
//!
//! Stands in for a remote catalog API. Mutations take effect as soon as the
//! call starts; the reply is then held back for the configured latency.
//! Unknown ids fail immediately.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use bookstore_config::{
    MOCK_DELETE_LATENCY, MOCK_GET_LATENCY, MOCK_LIST_LATENCY, MOCK_WRITE_LATENCY,
};
use bookstore_core::{Book, BookPatch, BookService, NewBook, ServiceError};
use tracing::debug;

mod seed;

pub use seed::seed_books;

/// Per-operation reply delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    pub list: Duration,
    pub get: Duration,
    /// Create and update.
    pub write: Duration,
    pub delete: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            list: MOCK_LIST_LATENCY,
            get: MOCK_GET_LATENCY,
            write: MOCK_WRITE_LATENCY,
            delete: MOCK_DELETE_LATENCY,
        }
    }
}

impl MockLatency {
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            write: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

pub struct InMemoryBookService {
    books: Mutex<Vec<Book>>,
    latency: MockLatency,
}

impl Default for InMemoryBookService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookService {
    /// Seeded catalog with the default latencies.
    pub fn new() -> Self {
        Self::with_books(seed_books())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
            latency: MockLatency::default(),
        }
    }

    pub fn with_latency(mut self, latency: MockLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> MockLatency {
        self.latency
    }

    fn books(&self) -> MutexGuard<'_, Vec<Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn delay(d: Duration) {
    if !d.is_zero() {
        tokio::time::sleep(d).await;
    }
}

#[async_trait]
impl BookService for InMemoryBookService {
    async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        let books = self.books().clone();
        debug!(count = books.len(), "list");
        delay(self.latency.list).await;
        Ok(books)
    }

    async fn get_by_id(&self, id: &str) -> Result<Book, ServiceError> {
        let found = self
            .books()
            .iter()
            .find(|b| b.id.as_deref() == Some(id))
            .cloned();
        let book = found.ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        delay(self.latency.get).await;
        Ok(book)
    }

    /// Ids are `count + 1`, so an id freed by a delete can be handed out again.
    async fn create(&self, book: NewBook) -> Result<Book, ServiceError> {
        let created = {
            let mut books = self.books();
            let created = Book::from_new((books.len() + 1).to_string(), book);
            books.push(created.clone());
            created
        };
        debug!(id = ?created.id, "create");
        delay(self.latency.write).await;
        Ok(created)
    }

    async fn update(&self, id: &str, patch: BookPatch) -> Result<Book, ServiceError> {
        let updated = {
            let mut books = self.books();
            let stored = books
                .iter_mut()
                .find(|b| b.id.as_deref() == Some(id))
                .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
            stored.apply_patch(patch);
            stored.clone()
        };
        debug!(%id, "update");
        delay(self.latency.write).await;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        {
            let mut books = self.books();
            let ix = books
                .iter()
                .position(|b| b.id.as_deref() == Some(id))
                .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
            books.remove(ix);
        }
        debug!(%id, "delete");
        delay(self.latency.delete).await;
        Ok(())
    }
}
