use crate::*;
use std::collections::BTreeSet;

/// Exhaustive search for pure Nash equilibria over all M^N assignments.
#[derive(Debug, Clone)]
pub struct MatrixSolver {
    rule: Proximity,
    n: usize,
}

impl MatrixSolver {
    pub fn new(n: usize, weights: Weights) -> Self {
        Self {
            rule: Proximity::new(weights),
            n,
        }
    }

    pub fn rule(&self) -> &Proximity {
        &self.rule
    }

    pub fn tensor(&self) -> Result<Tensor, Error> {
        Tensor::build(self.n, &self.rule)
    }

    /// Unique equilibria as ascending position tuples.
    pub fn solve(&self) -> Result<BTreeSet<Vec<Position>>, Error> {
        log::info!(
            "building payoff tensor for {} players over {} positions",
            self.n,
            self.rule.m(),
        );
        let tensor = self.tensor()?;
        let equilibria = tensor.equilibria();
        log::info!(
            "{} cells searched, {} distinct equilibria",
            tensor.cells(),
            equilibria.len()
        );
        Ok(equilibria)
    }
}
