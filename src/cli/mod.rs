//! CLI command handlers

pub mod commands;

pub use commands::{convert, parse_sheet_index};
