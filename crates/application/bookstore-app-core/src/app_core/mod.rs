pub mod events;
pub mod reducer;
pub mod store;

pub use events::{BookApiEvent, BookEvent, BookPageEvent};
pub use reducer::reduce;
pub use store::BookStore;
