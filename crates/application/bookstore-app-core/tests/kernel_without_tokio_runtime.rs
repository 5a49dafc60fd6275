mod common;

use std::time::{Duration, Instant};

use bookstore_app_core::app_core::{BookPageEvent, BookStore};
use bookstore_app_core::kernel::BookKernel;
use common::{catalog, FakeBookService};

#[test]
fn load_completes_without_tokio_runtime() {
    let store = BookStore::default();
    let mut kernel = BookKernel::new(store.clone(), FakeBookService::with_books(catalog()))
        .expect("kernel should fall back to its own runtime");

    kernel.dispatch(BookPageEvent::Opened);

    let deadline = Instant::now() + Duration::from_secs(3);
    while Instant::now() < deadline {
        kernel.tick();
        if !store.loading() {
            assert_eq!(store.books(), catalog());
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    panic!("Did not observe loadSuccess");
}
