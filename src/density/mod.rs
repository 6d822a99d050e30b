//! Voter mass along the line.
//!
//! - [`Density`] — Shape of the electorate (uniform or truncated normal)
//! - [`Weights`] — Per-position voter mass derived from a density
//! - [`gaussian`] — Standard normal CDF used by the truncated profile

mod density;
pub mod gaussian;
mod weights;

pub use density::*;
pub use weights::*;
