use crate::*;
#[cfg(feature = "server")]
use rayon::prelude::*;

/// Runs many independent best-response trials and merges what they reach.
///
/// Trial `i` draws from its own stream derived from `(seed, i)`, and outcomes
/// are merged in trial order, so a run is reproducible whether the trials
/// execute serially or across threads.
#[derive(Debug, Clone)]
pub struct IterativeSolver {
    rule: Frontier,
    n: usize,
    trials: usize,
    order: PlayerOrder,
    seed: u64,
    cap: Option<usize>,
}

impl IterativeSolver {
    /// Refuses runs without players, positions or trials.
    pub fn new(
        n: usize,
        weights: Weights,
        trials: usize,
        order: PlayerOrder,
        seed: u64,
    ) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::invalid("n", "must be at least 1"));
        }
        if weights.is_empty() {
            return Err(Error::invalid("m", "must be at least 1"));
        }
        if trials == 0 {
            return Err(Error::invalid("trials", "must be at least 1"));
        }
        Ok(Self {
            rule: Frontier::new(weights),
            n,
            trials,
            order,
            seed,
            cap: None,
        })
    }

    /// Per-trial evaluation cap to use instead of M * 100.
    pub fn with_cap(self, cap: usize) -> Self {
        Self {
            cap: Some(cap),
            ..self
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.rule.weights().len()
    }

    pub fn rule(&self) -> &Frontier {
        &self.rule
    }

    /// Trial `index` of this run, ready to go.
    pub fn trial(&self, index: usize) -> Trial<'_> {
        let trial = Trial::new(&self.rule, self.n, self.order, Trial::rng(self.seed, index));
        match self.cap {
            Some(cap) => trial.with_cap(cap),
            None => trial,
        }
    }

    /// Outcome of every trial, in trial order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        #[cfg(feature = "server")]
        let indices = (0..self.trials).into_par_iter();
        #[cfg(not(feature = "server"))]
        let indices = (0..self.trials).into_iter();
        indices
            .map(|index| (index, self.trial(index).run()))
            .inspect(|(index, outcome)| {
                if let Outcome::Abandoned { evaluations } = outcome {
                    log::debug!("trial {} abandoned after {} evaluations", index, evaluations);
                }
            })
            .map(|(_, outcome)| outcome)
            .collect()
    }

    pub fn solve(&self) -> Equilibria {
        log::info!(
            "running {} {} trials with {} players over {} positions",
            self.trials,
            self.order,
            self.n,
            self.m(),
        );
        let equilibria = Equilibria::merge(self.m(), self.outcomes());
        log::info!("{}", equilibria.summary());
        equilibria
    }
}
