// walk module
mod walk;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the walk module.
//─────────────────────────────────────────────────────────────────────────────
pub use walk::Walk;
