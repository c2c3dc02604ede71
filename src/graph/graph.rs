// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Undirected multigraph over vertices 0..n, stored as a dense symmetric
// matrix of edge multiplicities.  A self-loop sits on the diagonal and adds
// two to the degree of its vertex.
//
// The topology never changes once built.  Traversal bookkeeping lives in a
// separate `Visitation` borrowed from the graph (see visitation.rs).
// ──────────────────────────────────────────────────────────────────────────────
use std::fmt;

use super::error::GraphError;
use super::matrix::EdgeMatrix;
use super::visitation::Visitation;
use crate::walk::Walk;

/// An immutable undirected multigraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    edges: EdgeMatrix,
    degrees: Vec<usize>,
    total_edges: usize,
}

impl Graph {
    /// A graph with no vertices.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a graph from rows of edge multiplicities.
    ///
    /// The whole matrix is inspected before anything is reported, so the
    /// error describes the first problem in this order: shape, negative
    /// entries, symmetry.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidTopology` if the matrix is not square,
    /// holds a negative (or oversized) entry, or is not symmetric.
    pub fn from_matrix(rows: Vec<Vec<i64>>) -> Result<Self, GraphError> {
        let order = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != order) {
            return Err(GraphError::InvalidTopology(format!(
                "Adjacency matrix is not square: row {} has {} entries, expected {}",
                i,
                row.len(),
                order
            )));
        }

        let mut negative = None;
        let mut oversized = None;
        let mut edges = EdgeMatrix::new(order);
        for (i, row) in rows.iter().enumerate() {
            for (j, &count) in row.iter().enumerate() {
                match u32::try_from(count) {
                    Ok(count) => edges.set(i, j, count),
                    Err(_) if count < 0 => {
                        negative.get_or_insert((i, j, count));
                    }
                    Err(_) => {
                        oversized.get_or_insert((i, j, count));
                    }
                }
            }
        }
        if let Some((i, j, count)) = negative {
            return Err(GraphError::InvalidTopology(format!(
                "Number of edges cannot be negative: entry ({}, {}) is {}",
                i, j, count
            )));
        }
        if let Some((i, j, count)) = oversized {
            return Err(GraphError::InvalidTopology(format!(
                "Number of edges is too large: entry ({}, {}) is {}",
                i, j, count
            )));
        }

        Self::from_edge_matrix(edges)
    }

    /// Builds a graph from an already non-negative matrix.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidTopology` if the matrix is not symmetric.
    pub fn from_edge_matrix(edges: EdgeMatrix) -> Result<Self, GraphError> {
        if let Some((i, j)) = edges.first_asymmetry() {
            return Err(GraphError::InvalidTopology(format!(
                "Adjacency matrix is not symmetric: entry ({}, {}) is {} but ({}, {}) is {}",
                i,
                j,
                edges.get(i, j),
                j,
                i,
                edges.get(j, i)
            )));
        }
        Ok(Self::from_symmetric(edges))
    }

    /// Computes degrees and edge total for a matrix known to be symmetric.
    pub(crate) fn from_symmetric(edges: EdgeMatrix) -> Self {
        let degrees: Vec<usize> = (0..edges.order())
            .map(|i| {
                let row_sum: usize = edges.row(i).iter().map(|&c| c as usize).sum();
                // loops count twice
                row_sum + edges.get(i, i) as usize
            })
            .collect();
        let total_edges = degrees.iter().sum::<usize>() / 2;
        Self {
            edges,
            degrees,
            total_edges,
        }
    }

    pub fn total_vertices(&self) -> usize {
        self.edges.order()
    }

    pub fn total_edges(&self) -> usize {
        self.total_edges
    }

    /// `true` for the graph with no vertices.
    pub fn is_empty(&self) -> bool {
        self.total_vertices() == 0
    }

    /// Degree of `vertex`, or `None` if the vertex does not exist.
    pub fn degree_of(&self, vertex: usize) -> Option<usize> {
        self.degrees.get(vertex).copied()
    }

    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Number of parallel edges between `a` and `b`; 0 for unknown vertices.
    pub fn edge_count_between(&self, a: usize, b: usize) -> u32 {
        self.edges.try_get(a, b).unwrap_or(0)
    }

    /// Read-only view of the adjacency matrix.
    pub fn all_edges(&self) -> &EdgeMatrix {
        &self.edges
    }

    /// Vertices joined to `vertex` by at least one edge, in ascending order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let row: &[u32] = if vertex < self.total_vertices() {
            self.edges.row(vertex)
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(neighbor, _)| neighbor)
    }

    /// Vertices whose degree is odd, in ascending order.
    pub fn odd_degree_vertices(&self) -> Vec<usize> {
        self.degrees
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree % 2 == 1)
            .map(|(vertex, _)| vertex)
            .collect()
    }

    /// Starts a fresh visitation of this graph.
    pub fn visitation(&self) -> Visitation<'_> {
        Visitation::new(self)
    }

    /// Vertices reachable from `start` in depth-first preorder, ties broken
    /// by ascending vertex index. Empty if `start` does not exist.
    pub fn depth_first_order(&self, start: usize) -> Walk {
        let mut order = Walk::with_capacity(self.total_vertices());
        self.visitation().depth_first_visit(start, Some(&mut order));
        order
    }

    /// Checks whether every vertex is reachable from vertex 0.
    ///
    /// The empty graph is connected. Isolated vertices make a graph with two
    /// or more vertices disconnected.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let mut visitation = self.visitation();
        visitation.depth_first_visit(0, None);
        visitation.all_visited()
    }
}

impl fmt::Display for Graph {
    /// The adjacency matrix, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.edges, f)
    }
}
