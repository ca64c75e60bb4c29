use crate::core::models::graph::GraphError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error("Invalid TOML graph: {0}")]
    Toml(#[from] ::toml::de::Error),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
    #[error("CONECT record on line {line} references unknown atom serial {serial}")]
    UnknownSerial { line: usize, serial: usize },
    #[error("Unsupported connectivity file '{path}' (expected .bgf or .toml)")]
    UnsupportedFormat { path: String },
    #[error("Invalid connectivity: {0}")]
    Graph(#[from] GraphError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Duplicate atom serial {serial}")]
    DuplicateSerial { serial: usize },
    #[error("Invalid atom serial '{value}' in CONECT record")]
    InvalidConectSerial { value: String },
}
