use thiserror::Error;

use crate::graph::GraphError;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed graph #{index} in '{path}': {source}")]
    MalformedGraph {
        path: String,
        index: usize,
        #[source]
        source: GraphError,
    },
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
