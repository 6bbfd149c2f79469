pub use board::*;
pub use errors::*;
pub use placement::*;
pub use solver::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod placement;
mod solver;
mod visualization;
