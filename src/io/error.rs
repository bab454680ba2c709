use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// IO-level errors for loading and persisting payment sheets
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV async parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Payment file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Payment file is not valid UTF-8: {}", .0.display())]
    NotUtf8(PathBuf),

    #[error("Payment file has no header row: {}", .0.display())]
    MissingHeader(PathBuf),

    #[error("Duplicate column in header: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
