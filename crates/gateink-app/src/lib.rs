//! GateInk Application
//!
//! Command-line front end: parses an expression, renders its schematic to SVG,
//! and prints truth tables, parse trees and wire paths.

mod cli;
pub mod commands;
mod config;
mod error;

pub use cli::{Cli, Command, execute, run};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
