pub mod memory;

// Re-exports for convenience
pub use memory::{seed_books, InMemoryBookService, MockLatency};
