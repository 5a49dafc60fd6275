pub mod commands;

use bookstore_app_core::SortOrder;
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum CliSortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<CliSortOrder> for SortOrder {
    fn from(o: CliSortOrder) -> Self {
        match o {
            CliSortOrder::Asc => SortOrder::Asc,
            CliSortOrder::Desc => SortOrder::Desc,
        }
    }
}
