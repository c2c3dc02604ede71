use thiserror::Error;

// Reasons a walk fails to be an Eulerian circuit of a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// The walk does not end where it started.
    #[error("This walk is not a circuit")]
    NotClosed,

    /// The walk is shorter than the number of edges in the graph.
    #[error("Some edges have not been visited: walk has {found} edge(s), graph has {expected}")]
    TooFewEdges { expected: usize, found: usize },

    /// The walk is longer than the number of edges in the graph.
    #[error("Some edges have been visited more than once: walk has {found} edge(s), graph has {expected}")]
    TooManyEdges { expected: usize, found: usize },

    /// The highest vertex in the walk is not the last vertex of the graph.
    #[error("The circuit does not cover the graph's vertices: highest vertex is {found}, expected {expected}")]
    VertexCountMismatch { expected: usize, found: usize },

    /// Two consecutive vertices of the walk are not adjacent.
    #[error("The graph has no edge between {from} and {to}")]
    MissingEdge { from: usize, to: usize },

    /// An edge was traversed more often than its multiplicity allows.
    #[error("Same edge visited twice between {from} and {to}")]
    EdgeReused { from: usize, to: usize },
}
