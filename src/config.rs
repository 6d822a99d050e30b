//! Run parameters.
//!
//! Both parameter sets deserialize from JSON with every field optional, so a
//! config file only needs to name what differs from the defaults.
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Parameters of a best-response run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Iterative {
    /// Number of players.
    pub n: usize,
    /// Number of positions.
    pub m: usize,
    /// Independent trials to run.
    pub trials: usize,
    pub density: Density,
    /// Voter mass per position (uniform) or in total (normal).
    pub points: Weight,
    pub order: PlayerOrder,
    pub seed: u64,
}

impl Default for Iterative {
    fn default() -> Self {
        Self {
            n: 2,
            m: 10,
            trials: DEFAULT_TRIALS,
            density: Density::default(),
            points: POINTS_PER_POSITION,
            order: PlayerOrder::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl Iterative {
    pub fn validate(&self) -> Result<(), Error> {
        at_least_one("n", self.n)?;
        at_least_one("m", self.m)?;
        at_least_one("trials", self.trials)?;
        if !(self.points.is_finite() && self.points > 0.0) {
            return Err(Error::invalid("points", format!("must be positive, got {}", self.points)));
        }
        Ok(())
    }

    pub fn weights(&self) -> Weights {
        Weights::build(self.m, self.density, self.points)
    }
}

/// Parameters of an exhaustive search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exhaustive {
    /// Number of players.
    pub n: usize,
    /// Number of positions.
    pub m: usize,
    pub density: Density,
}

impl Default for Exhaustive {
    fn default() -> Self {
        Self {
            n: 2,
            m: 10,
            density: Density::default(),
        }
    }
}

impl Exhaustive {
    pub fn validate(&self) -> Result<(), Error> {
        at_least_one("n", self.n)?;
        at_least_one("m", self.m)?;
        Ok(())
    }

    pub fn weights(&self) -> Weights {
        Weights::exhaustive(self.m, self.density)
    }
}

fn at_least_one(name: &'static str, value: usize) -> Result<(), Error> {
    match value {
        0 => Err(Error::invalid(name, "must be at least 1")),
        _ => Ok(()),
    }
}
