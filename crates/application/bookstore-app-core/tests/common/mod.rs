#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bookstore_core::{Book, BookPatch, BookService, NewBook, ServiceError};
use tokio::sync::Notify;

pub fn book(id: &str, title: &str, author: &str, genre: &str) -> Book {
    Book {
        id: Some(id.to_string()),
        title: title.to_string(),
        author_name: author.to_string(),
        genre: genre.to_string(),
        price: 10.0,
        published: "2000".to_string(),
        isbn: "0306406152".to_string(),
        description: None,
        page_count: None,
        cover_image_url: None,
    }
}

pub fn catalog() -> Vec<Book> {
    vec![
        book("1", "Clean Code", "Robert C. Martin", "Programming"),
        book("2", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
        book("3", "Dune", "Frank Herbert", "Science Fiction"),
    ]
}

#[derive(Default)]
struct FakeState {
    books: Mutex<Vec<Book>>,
    list_calls: AtomicUsize,
    update_calls: AtomicUsize,
    deletes: Mutex<Vec<String>>,
    list_error: Mutex<Option<String>>,
    list_gate: Mutex<Option<Arc<Notify>>>,
    delete_gates: Mutex<HashMap<String, Arc<Notify>>>,
}

/// Scriptable in-test collaborator. Clones share state so the test can keep
/// one handle while the kernel owns another.
#[derive(Clone, Default)]
pub struct FakeBookService {
    state: Arc<FakeState>,
}

impl FakeBookService {
    pub fn with_books(books: Vec<Book>) -> Self {
        let fake = Self::default();
        *fake.state.books.lock().unwrap() = books;
        fake
    }

    pub fn fail_list_with(&self, message: &str) {
        *self.state.list_error.lock().unwrap() = Some(message.to_string());
    }

    /// Make `list` wait for a permit on the returned gate.
    pub fn gate_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.state.list_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Make `delete(id)` wait for a permit on the returned gate.
    pub fn gate_delete(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state
            .delete_gates
            .lock()
            .unwrap()
            .insert(id.to_string(), gate.clone());
        gate
    }

    pub fn list_calls(&self) -> usize {
        self.state.list_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.state.update_calls.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> Vec<String> {
        self.state.deletes.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<Book> {
        self.state.books.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BookService for FakeBookService {
    async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        self.state.list_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.state.list_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(message) = self.state.list_error.lock().unwrap().clone() {
            return Err(ServiceError::Unavailable(message));
        }
        Ok(self.state.books.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Book, ServiceError> {
        self.state
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    async fn create(&self, book: NewBook) -> Result<Book, ServiceError> {
        let mut books = self.state.books.lock().unwrap();
        let created = Book::from_new((books.len() + 1).to_string(), book);
        books.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: BookPatch) -> Result<Book, ServiceError> {
        self.state.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut books = self.state.books.lock().unwrap();
        let stored = books
            .iter_mut()
            .find(|b| b.id.as_deref() == Some(id))
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        stored.apply_patch(patch);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.state.deletes.lock().unwrap().push(id.to_string());
        let gate = self.state.delete_gates.lock().unwrap().get(id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let mut books = self.state.books.lock().unwrap();
        let before = books.len();
        books.retain(|b| b.id.as_deref() != Some(id));
        if books.len() == before {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
