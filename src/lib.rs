//! Eulerian circuits in undirected multigraphs.
//!
//! Graphs are dense matrices of edge multiplicities ([`graph::Graph`]).
//! [`euler::find_eulerian_circuit`] runs a backtracking search from vertex 0
//! and returns the circuit as a [`walk::Walk`]. The [`app`] module holds the
//! command-line driver.

pub mod app;
pub mod euler;
pub mod graph;
pub mod walk;

pub use euler::{find_eulerian_circuit, validate_circuit, CircuitError};
pub use graph::{Graph, GraphError};
pub use walk::Walk;
