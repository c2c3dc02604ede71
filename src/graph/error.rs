use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for building graphs from matrices or textual descriptions.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The description does not form a valid undirected multigraph
    /// (negative vertex count, negative edge count, non-square or
    /// asymmetric matrix).
    #[error("Invalid graph topology: {0}")]
    InvalidTopology(String),

    /// A token in the description is not an integer.
    #[error("Invalid token '{0}' in graph description, expected an integer")]
    InvalidToken(String),

    /// The input ended in the middle of a graph description.
    #[error("Graph description ended early: {missing} more integer(s) expected")]
    UnexpectedEof { missing: usize },

    /// Extra tokens were found after a single graph description.
    #[error("Unexpected trailing input after graph description: '{0}'")]
    TrailingInput(String),

    /// Error when reading the underlying input.
    #[error("Failed to read graph description: {0}")]
    Io(#[from] std::io::Error),
}
