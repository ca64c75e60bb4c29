use crate::core::forcefield::library::LibraryError;
use crate::core::io::error::GraphFileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to load parameter library: {source}")]
    Library {
        #[from]
        source: LibraryError,
    },

    #[error("Failed to load connectivity graph: {source}")]
    Graph {
        #[from]
        source: GraphFileError,
    },
}
