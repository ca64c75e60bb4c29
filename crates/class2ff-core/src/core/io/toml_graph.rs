use super::error::GraphFileError;
use super::traits::GraphFile;
use crate::core::models::graph::{ConnectivityGraph, GraphAtom};
use serde::Deserialize;
use std::io::{BufRead, Read};

/// Connectivity as an array of `[[atoms]]` tables:
///
/// ```toml
/// [[atoms]]
/// type = "c4"
/// neighbors = [1, 2, 3, 4]
/// ```
///
/// Neighbor indices are zero-based positions in the array.
pub struct TomlGraphFile;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    #[serde(default)]
    atoms: Vec<GraphAtom>,
}

impl GraphFile for TomlGraphFile {
    type Error = GraphFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<ConnectivityGraph, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let document: GraphDocument = ::toml::from_str(&text)?;
        Ok(ConnectivityGraph::new(document.atoms)?)
    }
}
