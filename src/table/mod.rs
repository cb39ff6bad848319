pub mod controller;
pub mod dialog;
pub mod filter;
pub mod loading;
pub mod pagination;

pub use controller::TableController;
pub use dialog::{CreateDialog, UpdateDialog};
pub use filter::{filter_records, matches};
pub use loading::{Activity, LoadingPolicy, Operation};
pub use pagination::{page_from_query, total_pages, Pagination};
