// errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvertError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Value of key '{key}' is {kind}, which cannot be used as a grouping key")]
    UnsupportedValue { key: String, kind: &'static str },

    #[error("CSV row at line {line} needs a key column and a value column")]
    MalformedRow { line: u64 },

    #[error("Unknown format '{0}' (expected 'json' or 'csv')")]
    UnknownFormat(String),
}

// Define a convenient Result type
pub type Result<T> = std::result::Result<T, InvertError>;
