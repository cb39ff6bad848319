pub mod app;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod notifications;
pub mod panels;
pub mod popups;
pub mod table_view;
pub mod ui;

pub use app::{InteractiveApp, PendingAction, Popup, TableFactory};
pub use handlers::run_interactive_mode;
pub use table_view::{FormField, Row, TableView};
