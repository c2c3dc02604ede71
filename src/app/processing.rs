//! Runs the circuit search on a single graph and turns the result into a
//! report.
//!
//! For each graph this checks the degree parity, searches for a circuit,
//! validates whatever the search returns against the graph, and optionally
//! tests connectivity.

use super::verbose_println;
use crate::euler::{self, CircuitError, SearchStats};
use crate::graph::Graph;
use crate::walk::Walk;

/// Everything learned about one graph.
#[derive(Debug, Clone)]
pub struct GraphOutcome {
    /// Where the graph came from, e.g. `small#3` or `random#0`.
    pub label: String,
    pub vertices: usize,
    pub edges: usize,
    /// Vertices with odd degree; non-empty means no circuit can exist.
    pub odd_vertices: Vec<usize>,
    /// Only filled in when connectivity was requested.
    pub connected: Option<bool>,
    pub circuit: Option<Walk>,
    /// Validation of `circuit`; `None` when no circuit was found.
    pub verdict: Option<Result<(), CircuitError>>,
    pub stats: SearchStats,
}

impl GraphOutcome {
    /// `true` if a circuit was found and it passed validation.
    pub fn has_valid_circuit(&self) -> bool {
        matches!(self.verdict, Some(Ok(())))
    }
}

/// Searches `graph` for an Eulerian circuit and validates the result.
///
/// # Arguments
/// * `graph` - The graph to search.
/// * `label` - Name used in logs and reports.
/// * `check_connectivity` - Also run the connectivity test.
/// * `quiet_mode` - Suppresses verbose logging if true.
pub fn process_graph(
    graph: &Graph,
    label: &str,
    check_connectivity: bool,
    quiet_mode: bool,
) -> GraphOutcome {
    verbose_println!(
        quiet_mode,
        "\n------------------------------------------------------------"
    );
    verbose_println!(
        quiet_mode,
        "Graph: {} ({} vertices, {} edges)",
        label,
        graph.total_vertices(),
        graph.total_edges()
    );
    verbose_println!(
        quiet_mode,
        "------------------------------------------------------------"
    );

    verbose_println!(quiet_mode, "[STEP 1] Checking degree parity...");
    let odd_vertices = graph.odd_degree_vertices();
    if odd_vertices.is_empty() {
        verbose_println!(quiet_mode, "   => All degrees are even.");
    } else {
        verbose_println!(
            quiet_mode,
            "   => {} odd-degree vertex(es), first is {}.",
            odd_vertices.len(),
            odd_vertices[0]
        );
    }

    let connected = if check_connectivity {
        let connected = graph.is_connected();
        verbose_println!(quiet_mode, "   => Connected: {}", connected);
        Some(connected)
    } else {
        None
    };

    verbose_println!(quiet_mode, "[STEP 2] Searching for an Eulerian circuit...");
    let (circuit, stats) = euler::find_eulerian_circuit_with_stats(graph);
    verbose_println!(
        quiet_mode,
        "   => {} edge traversal(s) tried, {} undone.",
        stats.edges_tried,
        stats.backtracks
    );

    let verdict = circuit.as_ref().map(|walk| {
        verbose_println!(quiet_mode, "[STEP 3] Validating circuit of length {}...", walk.edge_count());
        let verdict = euler::validate_circuit(graph, walk);
        match &verdict {
            Ok(()) => verbose_println!(quiet_mode, "   => Valid."),
            Err(e) => verbose_println!(quiet_mode, "   => Invalid: {}", e),
        }
        verdict
    });
    if circuit.is_none() {
        verbose_println!(quiet_mode, "   => No Eulerian circuit.");
    }

    GraphOutcome {
        label: label.to_string(),
        vertices: graph.total_vertices(),
        edges: graph.total_edges(),
        odd_vertices,
        connected,
        circuit,
        verdict,
        stats,
    }
}

/// Renders the console report for one graph.
pub fn render_outcome(outcome: &GraphOutcome, show_circuit: bool) -> String {
    let mut report = format!(
        "Graph has {} vertices, and {} edges.\n",
        outcome.vertices, outcome.edges
    );
    if let Some(connected) = outcome.connected {
        let state = if connected { "connected" } else { "not connected" };
        report.push_str(&format!("Graph is {}\n", state));
    }
    match (&outcome.circuit, &outcome.verdict) {
        (Some(circuit), Some(verdict)) => {
            if show_circuit {
                report.push_str(&format!("The following circuit was found:\n{}\n", circuit));
            }
            match verdict {
                Ok(()) => report.push_str("Valid Eulerian Circuit\n"),
                Err(e) => report.push_str(&format!("Invalid Eulerian Circuit: {}\n", e)),
            }
        }
        _ => report.push_str("Graph has no Eulerian circuit\n"),
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_outcome() {
        let graph: Graph = "3 0 1 1 1 0 1 1 1 0".parse().unwrap();
        let outcome = process_graph(&graph, "triangle", true, true);
        assert!(outcome.has_valid_circuit());
        assert_eq!(outcome.connected, Some(true));
        assert!(outcome.odd_vertices.is_empty());

        let report = render_outcome(&outcome, true);
        assert_eq!(
            report,
            "Graph has 3 vertices, and 3 edges.\nGraph is connected\nThe following circuit was found:\n0 1 2 0\nValid Eulerian Circuit\n"
        );
    }

    #[test]
    fn path_outcome() {
        let graph: Graph = "3 0 1 0 1 0 1 0 1 0".parse().unwrap();
        let outcome = process_graph(&graph, "path", false, true);
        assert!(!outcome.has_valid_circuit());
        assert_eq!(outcome.odd_vertices, vec![0, 2]);
        assert_eq!(outcome.connected, None);
        assert_eq!(
            render_outcome(&outcome, true),
            "Graph has 3 vertices, and 2 edges.\nGraph has no Eulerian circuit\n"
        );
    }

    #[test]
    fn invalid_circuit_and_disconnected_graph_are_reported() {
        let graph: Graph = "2 0 0 0 0".parse().unwrap();
        let mut outcome = process_graph(&graph, "pair", true, true);
        outcome.circuit = Some(Walk::with_capacity(0));
        outcome.verdict = Some(Err(CircuitError::NotClosed));
        assert_eq!(
            render_outcome(&outcome, false),
            "Graph has 2 vertices, and 0 edges.\nGraph is not connected\nInvalid Eulerian Circuit: This walk is not a circuit\n"
        );
    }

    #[test]
    fn hidden_circuit() {
        let graph: Graph = "2 0 2 2 0".parse().unwrap();
        let outcome = process_graph(&graph, "double", false, true);
        let report = render_outcome(&outcome, false);
        assert!(!report.contains("circuit was found"));
        assert!(report.ends_with("Valid Eulerian Circuit\n"));
    }
}
