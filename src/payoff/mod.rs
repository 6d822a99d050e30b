//! Payoff rules.
//!
//! Two related but distinct ways of turning positions into votes:
//! - [`Frontier`] — Gap-splitting with the nearest occupied neighbor on each
//!   side; drives the best-response dynamics.
//! - [`Proximity`] — Every vote-position goes to its nearest occupied
//!   positions; fills the exhaustive payoff tensor.
//!
//! Both snap their results onto the payoff grid (see [`crate::round`]).

mod frontier;
mod proximity;
mod rule;

pub use frontier::*;
pub use proximity::*;
pub use rule::*;
