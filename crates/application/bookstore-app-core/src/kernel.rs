use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use bookstore_config::EVENT_CHANNEL_CAPACITY;
use bookstore_core::{Book, BookPatch, BookService, NewBook};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::app_core::{BookApiEvent, BookEvent, BookPageEvent, BookStore};

/// Drives the catalog: folds events into the store and runs the effects they
/// trigger. Effects run as tasks and report back over the event channel;
/// call [`BookKernel::tick`] (or await [`BookKernel::settle`]) to apply them.
pub struct BookKernel<S> {
    pub store: BookStore,
    service: Arc<S>,
    runtime: Handle,
    tasks: JoinSet<()>,

    /// Exhaust guard for the load effect.
    load_in_flight: Arc<AtomicBool>,
    /// Switch counter for the delete effect; only the latest request reports.
    delete_generation: Arc<AtomicU64>,

    tx: mpsc::Sender<BookEvent>,
    rx: mpsc::Receiver<BookEvent>,
}

impl<S> BookKernel<S>
where
    S: BookService,
{
    pub fn new(store: BookStore, service: S) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            store,
            service: Arc::new(service),
            runtime: crate::async_runtime::handle()?,
            tasks: JoinSet::new(),
            load_in_flight: Arc::new(AtomicBool::new(false)),
            delete_generation: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        })
    }

    /// Reduce `ev` into the store, then start whatever effect it triggers.
    pub fn dispatch(&mut self, ev: impl Into<BookEvent>) {
        let ev = ev.into();
        debug!(event = %ev, "dispatch");
        self.store.apply(ev.clone());

        match ev {
            BookEvent::Page(BookPageEvent::Opened) | BookEvent::Api(BookApiEvent::LoadRequested) => {
                self.spawn_load()
            }
            BookEvent::Page(BookPageEvent::DeleteRequested { id }) => self.spawn_delete(id),
            BookEvent::Api(BookApiEvent::LoadFailure { error }) => {
                error!(%error, "Failed to load books");
            }
            _ => {}
        }
    }

    fn spawn_load(&mut self) {
        if self.load_in_flight.swap(true, Ordering::AcqRel) {
            debug!("Load already in flight; trigger ignored");
            return;
        }

        let service = self.service.clone();
        let tx = self.tx.clone();
        let guard = InFlight(self.load_in_flight.clone());
        self.tasks.spawn_on(
            async move {
                let _guard = guard;
                let ev = match service.list().await {
                    Ok(books) => BookApiEvent::LoadSuccess { books },
                    Err(e) => BookApiEvent::LoadFailure {
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(ev.into()).await;
            },
            &self.runtime,
        );
    }

    fn spawn_delete(&mut self, id: String) {
        let generation = self.delete_generation.fetch_add(1, Ordering::AcqRel) + 1;
        let latest = self.delete_generation.clone();
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.tasks.spawn_on(
            async move {
                let res = service.delete(&id).await;
                if latest.load(Ordering::Acquire) != generation {
                    debug!(%id, "Delete superseded by a newer request");
                    return;
                }
                match res {
                    Ok(()) => {
                        let _ = tx.send(BookApiEvent::DeleteSuccess { id }.into()).await;
                    }
                    Err(e) => error!(%id, error = %e, "Failed to delete book"),
                }
            },
            &self.runtime,
        );
    }

    /// Create a book; on success the new entry is appended.
    pub fn add_book(&mut self, book: NewBook) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.tasks.spawn_on(
            async move {
                match service.create(book).await {
                    Ok(book) => {
                        info!(id = ?book.id, title = %book.title, "Book created");
                        let _ = tx.send(BookApiEvent::AddSuccess { book }.into()).await;
                    }
                    Err(e) => error!(error = %e, "Failed to create book"),
                }
            },
            &self.runtime,
        );
    }

    /// Update a persisted book; books without an id are rejected here.
    pub fn update_book(&mut self, book: Book) {
        let Some(id) = book.persisted_id().map(str::to_string) else {
            error!(title = %book.title, "Cannot update a book without an id");
            return;
        };

        let patch = BookPatch::from(&book);
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.tasks.spawn_on(
            async move {
                match service.update(&id, patch).await {
                    Ok(book) => {
                        info!(%id, "Book updated");
                        let _ = tx.send(BookApiEvent::UpdateSuccess { book }.into()).await;
                    }
                    Err(e) => error!(%id, error = %e, "Failed to update book"),
                }
            },
            &self.runtime,
        );
    }

    /// Apply every follow-up event that has arrived so far. Never blocks.
    /// Finished tasks are reaped first so their events are already queued.
    pub fn tick(&mut self) {
        while let Some(res) = self.tasks.try_join_next() {
            log_join_error(res);
        }
        while let Ok(ev) = self.rx.try_recv() {
            self.dispatch(ev);
        }
    }

    /// Wait until no effect is outstanding and every follow-up is applied.
    pub async fn settle(&mut self) {
        loop {
            self.tick();
            if self.tasks.is_empty() {
                return;
            }

            let ev = tokio::select! {
                ev = self.rx.recv() => ev,
                joined = self.tasks.join_next() => {
                    if let Some(res) = joined {
                        log_join_error(res);
                    }
                    None
                }
            };
            if let Some(ev) = ev {
                self.dispatch(ev);
            }
        }
    }

    /// Number of effect tasks not yet reaped.
    pub fn pending_effects(&self) -> usize {
        self.tasks.len()
    }

    pub fn sender(&self) -> mpsc::Sender<BookEvent> {
        self.tx.clone()
    }
}

/// Clears the exhaust flag when the load task ends, however it ends.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn log_join_error(res: Result<(), tokio::task::JoinError>) {
    if let Err(e) = res {
        warn!(error = %e, "Effect task did not complete");
    }
}
