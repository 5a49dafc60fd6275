pub mod app_core;
mod async_runtime;
pub mod computed;
pub mod domain;
pub mod kernel;

pub use app_core::*;
pub use domain::{CatalogState, SortOrder};
pub use kernel::BookKernel;
