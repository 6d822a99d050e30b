//! Who stands where.
//!
//! - [`Assignment`] — Player → position
//! - [`Occupancy`] — Position → number of players standing there
//! - [`Lineup`] — Both, kept consistent and owned by one trial or cell

mod assignment;
mod lineup;
mod occupancy;

pub use assignment::*;
pub use lineup::*;
pub use occupancy::*;
