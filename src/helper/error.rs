use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SubsampleError>;

#[derive(Error, Debug)]
pub enum SubsampleError {
    #[error("No input files supplied for group: {0}")]
    EmptyGroup(String),
    #[error(
        "Malformed record at {}:{line}: found {columns} columns, need at least {needed}",
        .path.display()
    )]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        columns: usize,
        needed: usize,
    },
    #[error("Invalid read count at {}:{line}: {value}", .path.display())]
    InvalidCount {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("No minimum stored for key '{key}' in {namespace}, run the scan step first")]
    MissingMinimum { namespace: String, key: String },
    #[error("Failed to access the param file from the given path: {0}")]
    ParamFileAccessError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
