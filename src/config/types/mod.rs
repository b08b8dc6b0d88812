//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | `ConfigError` and validation diagnostics     |
//! | `field`  | Config field paths used in diagnostics       |
//! | `handle` | Global configuration handle (thread-safe)    |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
