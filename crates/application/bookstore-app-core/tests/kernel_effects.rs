mod common;

use bookstore_app_core::app_core::{BookApiEvent, BookPageEvent, BookStore};
use bookstore_app_core::kernel::BookKernel;
use bookstore_core::NewBook;
use common::{book, catalog, FakeBookService};

fn kernel_with(service: FakeBookService) -> (BookKernel<FakeBookService>, BookStore) {
    let store = BookStore::default();
    let kernel = BookKernel::new(store.clone(), service).unwrap();
    (kernel, store)
}

async fn yield_a_few() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn opened_loads_books() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service.clone());

    kernel.dispatch(BookPageEvent::Opened);
    assert!(store.loading());

    kernel.settle().await;
    assert!(!store.loading());
    assert_eq!(store.books(), catalog());
    assert_eq!(store.error(), None);
    assert_eq!(service.list_calls(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn settle_applies_loads_finished_on_other_workers() {
    for _ in 0..200 {
        let service = FakeBookService::with_books(catalog());
        let (mut kernel, store) = kernel_with(service);

        kernel.dispatch(BookPageEvent::Opened);
        kernel.settle().await;
        assert!(!store.loading());
        assert_eq!(store.books().len(), 3);
        assert_eq!(kernel.pending_effects(), 0);
    }
}

#[tokio::test]
async fn load_triggers_are_ignored_while_one_is_in_flight() {
    let service = FakeBookService::with_books(catalog());
    let gate = service.gate_list();
    let (mut kernel, store) = kernel_with(service.clone());

    kernel.dispatch(BookPageEvent::Opened);
    kernel.dispatch(BookApiEvent::LoadRequested);
    yield_a_few().await;
    kernel.dispatch(BookPageEvent::Opened);
    kernel.tick();

    assert_eq!(service.list_calls(), 1);
    assert!(store.loading());

    gate.notify_one();
    kernel.settle().await;
    assert_eq!(service.list_calls(), 1);
    assert_eq!(store.books().len(), 3);
    assert!(!store.loading());
}

#[tokio::test]
async fn load_can_run_again_after_completion() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, _store) = kernel_with(service.clone());

    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;
    kernel.dispatch(BookApiEvent::LoadRequested);
    kernel.settle().await;

    assert_eq!(service.list_calls(), 2);
}

#[tokio::test]
async fn load_failure_lands_in_state() {
    let service = FakeBookService::with_books(catalog());
    service.fail_list_with("Server unavailable");
    let (mut kernel, store) = kernel_with(service);

    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;

    assert_eq!(store.error().as_deref(), Some("Server unavailable"));
    assert!(!store.loading());
    assert!(!store.has_books());
}

#[tokio::test]
async fn delete_removes_book_and_clears_selection() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service.clone());
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;

    kernel.dispatch(BookPageEvent::BookSelected {
        id: Some("2".into()),
    });
    kernel.dispatch(BookPageEvent::DeleteRequested { id: "2".into() });
    kernel.settle().await;

    assert_eq!(store.books().len(), 2);
    assert_eq!(store.selected_book_id(), None);
    assert_eq!(service.deletes(), vec!["2"]);
}

#[tokio::test]
async fn newer_delete_supersedes_older_one() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service.clone());
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;

    let slow = service.gate_delete("1");
    kernel.dispatch(BookPageEvent::DeleteRequested { id: "1".into() });
    kernel.dispatch(BookPageEvent::DeleteRequested { id: "3".into() });
    yield_a_few().await;
    slow.notify_one();
    kernel.settle().await;

    // Both calls reached the collaborator, only the newest result was applied.
    let mut deletes = service.deletes();
    deletes.sort();
    assert_eq!(deletes, vec!["1", "3"]);

    let ids: Vec<_> = store.books().into_iter().filter_map(|b| b.id).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn failed_delete_leaves_state_alone() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service);
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;
    let before = store.state();

    kernel.dispatch(BookPageEvent::DeleteRequested { id: "404".into() });
    kernel.settle().await;

    assert_eq!(store.state(), before);
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn add_book_appends_created_book() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service);
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;

    kernel.add_book(NewBook {
        title: "Refactoring".into(),
        author_name: "Martin Fowler".into(),
        genre: "Programming".into(),
        price: 47.5,
        published: "1999".into(),
        isbn: "9780134757599".into(),
        description: None,
        page_count: Some(448),
        cover_image_url: None,
    });
    kernel.settle().await;

    let books = store.books();
    assert_eq!(books.len(), 4);
    let last = books.last().unwrap();
    assert_eq!(last.id.as_deref(), Some("4"));
    assert_eq!(last.title, "Refactoring");
}

#[tokio::test]
async fn update_book_replaces_entry() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service.clone());
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;

    let mut dune = book("3", "Dune", "Frank Herbert", "Science Fiction");
    dune.price = 12.25;
    kernel.update_book(dune);
    kernel.settle().await;

    assert_eq!(service.update_calls(), 1);
    assert_eq!(store.books()[2].price, 12.25);
    assert_eq!(service.stored()[2].price, 12.25);
}

#[tokio::test]
async fn update_without_id_never_reaches_the_service() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service.clone());
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;
    let before = store.state();

    let mut orphan = book("", "Orphan", "Nobody", "None");
    kernel.update_book(orphan.clone());
    orphan.id = None;
    kernel.update_book(orphan);
    kernel.settle().await;

    assert_eq!(service.update_calls(), 0);
    assert_eq!(kernel.pending_effects(), 0);
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn failed_update_leaves_state_alone() {
    let service = FakeBookService::with_books(catalog());
    let (mut kernel, store) = kernel_with(service.clone());
    kernel.dispatch(BookPageEvent::Opened);
    kernel.settle().await;
    let before = store.state();

    kernel.update_book(book("77", "Ghost", "Nobody", "None"));
    kernel.settle().await;

    assert_eq!(service.update_calls(), 1);
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn externally_sent_events_are_applied_on_tick() {
    let (mut kernel, store) = kernel_with(FakeBookService::default());

    kernel
        .sender()
        .send(BookApiEvent::LoadSuccess { books: catalog() }.into())
        .await
        .unwrap();
    assert!(!store.has_books());

    kernel.tick();
    assert_eq!(store.books().len(), 3);
}
