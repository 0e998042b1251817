pub mod elements;
pub mod orbital;

pub use elements::{derive, derive_with};
pub use orbital::{KeplerSolution, KeplerSolver, OrbitalMechanics};
