// error module
mod error;
// finder module
mod finder;
// validate module
mod validate;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the euler module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::CircuitError;
pub use finder::{
    find_eulerian_circuit, find_eulerian_circuit_with_stats, has_even_degrees, SearchStats,
};
pub use validate::validate_circuit;
