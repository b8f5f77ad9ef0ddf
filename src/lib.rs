//! Lexp - spreadsheet locale exporter
//!
//! This library reads localization sheets from a spreadsheet workbook (rows
//! of translation keys, one column per language) and pivots them into either
//! a language-keyed JSON document or a key-keyed XML document.
//!
//! # Features
//!
//! - Reads .xlsx, .xls and .ods workbooks, any subset of sheets
//! - JSON output: language → key → value, 4-space indent, encounter order
//! - XML output: one element per key under a single `<Root>`
//! - Tag sanitization for XML (invalid characters become underscores)
//!
//! # Example
//!
//! ```no_run
//! use lexp::writer::{self, OutputFormat};
//!
//! let output = writer::export("locales.xlsx", OutputFormat::Json, &[1, 2])?;
//! println!("wrote {}", output.display());
//! # Ok::<(), lexp::LexpError>(())
//! ```

pub mod cli;
pub mod error;
pub mod reader;
pub mod transform;
pub mod writer;

// Re-export commonly used types
pub use error::{LexpError, LexpResult};
pub use reader::Sheet;
pub use transform::{Cell, LocaleTable, LocaleTree};
pub use writer::OutputFormat;
