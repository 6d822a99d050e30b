//! Exhaustive payoff tensor and simultaneous best responses.
//!
//! - [`Odometer`] — Iterative Cartesian-product enumeration of position tuples
//! - [`Tensor`] — Payoff vector for every one of the M^N position tuples
//! - [`MatrixSolver`] — Builds the tensor and extracts pure Nash equilibria

mod odometer;
mod solver;
mod tensor;

pub use odometer::*;
pub use solver::*;
pub use tensor::*;
