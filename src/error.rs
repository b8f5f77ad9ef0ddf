use thiserror::Error;

pub type LexpResult<T> = Result<T, LexpError>;

#[derive(Error, Debug)]
pub enum LexpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Sheet {index} not found: workbook has {count} sheet(s)")]
    SheetNotFound { index: usize, count: usize },

    #[error("Invalid sheet index '{0}': expected a positive integer (1-based)")]
    InvalidSheetIndex(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Serialized output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
