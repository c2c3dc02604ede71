// error module
mod error;
// graph module
mod graph;
// matrix module
mod matrix;
// visitation module
mod visitation;

// textual descriptions
pub mod reader;
// random generation
pub mod random;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use graph::Graph;
pub use matrix::EdgeMatrix;
pub use random::{RandomGraphConfig, DEFAULT_SEED};
pub use reader::GraphReader;
pub use visitation::Visitation;
