// finder.rs
// ──────────────────────────────────────────────────────────────────────────────
// Backtracking search for an Eulerian circuit.
//
// Starting from vertex 0 the search extends a walk one edge at a time, always
// trying the lowest-numbered neighbour that still has an unused edge.  When a
// vertex has no way forward the last step is undone and the next candidate of
// the previous vertex is tried.  The search succeeds once every edge is used
// and the walk is back at vertex 0.
//
// The call stack of the textbook recursive formulation is replaced by a
// stack of candidate cursors kept alongside the walk, so very large graphs do
// not overflow the thread stack.  Exploration order is unchanged.
// ──────────────────────────────────────────────────────────────────────────────
use crate::graph::{EdgeMatrix, Graph};
use crate::walk::Walk;

/// Vertex every search starts (and must end) at.
const START_VERTEX: usize = 0;

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of times an edge was tentatively traversed.
    pub edges_tried: u64,
    /// Number of traversals that were undone.
    pub backtracks: u64,
}

/// `true` when every vertex has even degree, the parity condition for an
/// Eulerian circuit.
pub fn has_even_degrees(graph: &Graph) -> bool {
    graph.degrees().iter().all(|degree| degree % 2 == 0)
}

/// Finds an Eulerian circuit of `graph`, or `None` if it has none.
///
/// The returned walk starts and ends at vertex 0. For the graph with no
/// vertices the result is an empty walk.
pub fn find_eulerian_circuit(graph: &Graph) -> Option<Walk> {
    find_eulerian_circuit_with_stats(graph).0
}

/// Like [`find_eulerian_circuit`], also reporting how much work the search did.
pub fn find_eulerian_circuit_with_stats(graph: &Graph) -> (Option<Walk>, SearchStats) {
    if !has_even_degrees(graph) {
        return (None, SearchStats::default());
    }
    if graph.is_empty() {
        return (Some(Walk::with_capacity(1)), SearchStats::default());
    }
    EulerSearch::new(graph).run(START_VERTEX)
}

/// State of one search. Owns its copy of the edge counts, so the graph can
/// be shared freely while the search runs.
struct EulerSearch<'g> {
    graph: &'g Graph,
    /// Edges not yet used by the walk.
    unused: EdgeMatrix,
    walk: Walk,
    /// For each vertex on the walk, the next neighbour to try.
    cursors: Vec<usize>,
    edges_used: usize,
    stats: SearchStats,
}

impl<'g> EulerSearch<'g> {
    fn new(graph: &'g Graph) -> Self {
        let capacity = graph.total_edges() + 1;
        Self {
            graph,
            unused: graph.all_edges().clone(),
            walk: Walk::with_capacity(capacity),
            cursors: Vec::with_capacity(capacity),
            edges_used: 0,
            stats: SearchStats::default(),
        }
    }

    fn run(mut self, start: usize) -> (Option<Walk>, SearchStats) {
        if !self.enter(start) {
            return (None, self.stats);
        }
        if self.is_complete(start) {
            return (Some(self.walk), self.stats);
        }

        while let Some(&cursor) = self.cursors.last() {
            let Some(vertex) = self.walk.last() else {
                break;
            };
            match self.next_candidate(vertex, cursor) {
                Some(next) => {
                    if let Some(top) = self.cursors.last_mut() {
                        *top = next + 1;
                    }
                    self.take_edge(vertex, next);
                    if !self.enter(next) {
                        // Walk full; only possible if capacity was sized wrong.
                        self.return_edge(vertex, next);
                        continue;
                    }
                    if self.is_complete(next) {
                        return (Some(self.walk), self.stats);
                    }
                }
                None => self.leave(),
            }
        }
        (None, self.stats)
    }

    /// Lowest vertex at or after `from` still joined to `vertex` by an unused edge.
    fn next_candidate(&self, vertex: usize, from: usize) -> Option<usize> {
        (from..self.graph.total_vertices()).find(|&next| self.unused.get(vertex, next) > 0)
    }

    fn enter(&mut self, vertex: usize) -> bool {
        if !self.walk.append(vertex) {
            return false;
        }
        self.cursors.push(0);
        true
    }

    /// Drops the last vertex and gives back the edge that led to it.
    fn leave(&mut self) {
        self.cursors.pop();
        let Some(vertex) = self.walk.last() else {
            return;
        };
        self.walk.remove_last();
        if let Some(previous) = self.walk.last() {
            self.return_edge(previous, vertex);
            self.stats.backtracks += 1;
        }
    }

    fn is_complete(&self, vertex: usize) -> bool {
        self.edges_used == self.graph.total_edges() && self.walk.first() == Some(vertex)
    }

    fn take_edge(&mut self, a: usize, b: usize) {
        self.unused.decrement(a, b);
        if a != b {
            self.unused.decrement(b, a);
        }
        self.edges_used += 1;
        self.stats.edges_tried += 1;
    }

    fn return_edge(&mut self, a: usize, b: usize) {
        self.unused.increment(a, b);
        if a != b {
            self.unused.increment(b, a);
        }
        self.edges_used -= 1;
    }
}
