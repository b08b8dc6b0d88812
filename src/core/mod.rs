//! Core types - pure abstractions shared across the codebase.

mod env;
mod error;
mod state;

pub use env::Environment;
pub use error::CatalogError;
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
