use super::error::CircuitError;
use crate::graph::Graph;
use crate::walk::Walk;

/// Checks that `walk` is an Eulerian circuit of `graph`.
///
/// The checks run in order: the walk is closed, it has exactly as many
/// edges as the graph, its highest vertex is the graph's last vertex, and
/// replaying it uses every edge of the graph exactly once. The empty walk is
/// accepted for the graph with no vertices.
///
/// # Errors
/// Returns the first `CircuitError` found.
pub fn validate_circuit(graph: &Graph, walk: &Walk) -> Result<(), CircuitError> {
    if graph.is_empty() && walk.is_empty() {
        return Ok(());
    }
    if !walk.is_closed() {
        return Err(CircuitError::NotClosed);
    }

    let expected = graph.total_edges();
    let found = walk.edge_count();
    if found < expected {
        return Err(CircuitError::TooFewEdges { expected, found });
    }
    if found > expected {
        return Err(CircuitError::TooManyEdges { expected, found });
    }

    let highest = walk.iter().max().unwrap_or(0);
    let last_vertex = graph.total_vertices().saturating_sub(1);
    if graph.is_empty() || highest != last_vertex {
        return Err(CircuitError::VertexCountMismatch {
            expected: last_vertex,
            found: highest,
        });
    }

    // Same number of edges on both sides, so any edge missed by the walk
    // shows up as another edge used too often.
    let mut visitation = graph.visitation();
    for (from, to) in walk.steps() {
        if graph.edge_count_between(from, to) == 0 {
            return Err(CircuitError::MissingEdge { from, to });
        }
        visitation.visit_edge(from, to);
        if visitation.unvisited_edges_between(from, to) < 0 {
            return Err(CircuitError::EdgeReused { from, to });
        }
    }
    Ok(())
}
