//! Command-line interface module.

mod args;
mod common;
pub mod hydrate;
pub mod render;
pub mod serve;

pub use args::{Cli, Commands};
