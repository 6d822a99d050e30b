//! Randomized best-response dynamics.
//!
//! Each [`Trial`] drops the players on random positions and keeps moving
//! whoever can strictly improve until a full round passes without a move.
//! [`IterativeSolver`] runs many independent trials and keeps one
//! [`Assignment`](crate::Assignment) per distinct converged occupancy.
//!
//! - [`PlayerOrder`] — Who gets to move within a round
//! - [`Trial`] — One seeded run owning its private [`Lineup`](crate::Lineup)
//! - [`IterativeSolver`] — Fans trials out and merges their outcomes
//! - [`Equilibria`] — Distinct equilibria plus a run [`Summary`]

mod equilibria;
mod order;
mod solver;
mod trial;

pub use equilibria::*;
pub use order::*;
pub use solver::*;
pub use trial::*;
