// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod nav;
pub mod session;
pub mod table;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::{ApiClient, EntityApi, MockEntityApi};
pub use config::{load_config, save_config, Config};
pub use error::{AdminError, AdminResult};
pub use models::*;
pub use session::{Role, Session};
pub use table::TableController;
