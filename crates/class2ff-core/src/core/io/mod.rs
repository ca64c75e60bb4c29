//! Readers for molecular connectivity files.
//!
//! Each format implements [`traits::GraphFile`] and yields a validated
//! [`ConnectivityGraph`]. Coordinates, charges and residue bookkeeping are not read;
//! only force-field types and bonds matter for topology synthesis.

pub mod bgf;
pub mod error;
pub mod toml_graph;
pub mod traits;

use crate::core::models::graph::ConnectivityGraph;
use error::GraphFileError;
use std::path::Path;
use traits::GraphFile;

/// Reads a connectivity graph, choosing the reader by file extension
/// (`.bgf` or `.toml`, case-insensitive).
pub fn read_graph_from_path(path: &Path) -> Result<ConnectivityGraph, GraphFileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("bgf") => bgf::BgfFile::read_from_path(path),
        Some("toml") => toml_graph::TomlGraphFile::read_from_path(path),
        _ => Err(GraphFileError::UnsupportedFormat {
            path: path.to_string_lossy().to_string(),
        }),
    }
}
