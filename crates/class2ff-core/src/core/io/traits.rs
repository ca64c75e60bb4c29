use crate::core::models::graph::ConnectivityGraph;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Common reading interface for connectivity file formats.
pub trait GraphFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a connectivity graph from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, the adjacency it describes is invalid, or the
    /// reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<ConnectivityGraph, Self::Error>;

    /// Reads a connectivity graph from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ConnectivityGraph, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
