use crate::book::{Book, BookId, BookPatch, NewBook};

/// Failure reported by a book data-access collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("Book not found")]
    NotFound(BookId),
    #[error("{0}")]
    Unavailable(String),
}

/// Book data-access collaborator. Every call resolves to a single value or a
/// failure; none of them stream.
#[async_trait::async_trait]
pub trait BookService: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Book>, ServiceError>;

    async fn get_by_id(&self, id: &str) -> Result<Book, ServiceError>;

    /// Persist `book` and return it with its newly assigned id.
    async fn create(&self, book: NewBook) -> Result<Book, ServiceError>;

    /// Merge `patch` onto the stored book and return the merged result.
    async fn update(&self, id: &str, patch: BookPatch) -> Result<Book, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
