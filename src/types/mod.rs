// Shared domain types — used by both the engine layer and the board state.
// Neither layer depends on the other; both import from this module.

pub mod opportunity;
pub mod outcome;

pub use opportunity::*;
pub use outcome::*;
