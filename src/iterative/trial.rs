use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// How a single trial ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A full round passed without anyone moving.
    Converged(Assignment),
    /// The evaluation cap was exceeded while players were still moving.
    Abandoned { evaluations: usize },
}

/// One run of best-response dynamics from a random start.
///
/// Owns its lineup and random stream outright, so trials never observe each
/// other no matter how they are scheduled.
pub struct Trial<'rule> {
    rule: &'rule Frontier,
    order: PlayerOrder,
    lineup: Lineup,
    rng: SmallRng,
    evaluations: usize,
    cap: usize,
}

impl<'rule> Trial<'rule> {
    /// Random start for `n` players. Callers guarantee `n` and M are positive.
    pub(crate) fn new(rule: &'rule Frontier, n: usize, order: PlayerOrder, mut rng: SmallRng) -> Self {
        let m = rule.weights().len();
        let lineup = Lineup::new(Assignment::random(n, m, &mut rng), m);
        Self {
            rule,
            order,
            lineup,
            rng,
            evaluations: 0,
            cap: m * EVALUATION_CAP_PER_POSITION,
        }
    }

    /// Abandon after more than `cap` evaluations instead of M * 100.
    pub fn with_cap(self, cap: usize) -> Self {
        Self { cap, ..self }
    }

    /// Independent random stream for trial `index` of a run seeded by `seed`.
    pub fn rng(seed: u64, index: usize) -> SmallRng {
        let ref mut hasher = DefaultHasher::default();
        (seed, index).hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Play rounds until nobody moves or the evaluation cap is exceeded.
    pub fn run(mut self) -> Outcome {
        loop {
            if !self.round() {
                return Outcome::Converged(self.lineup.into_inner().0);
            }
            if self.evaluations > self.cap {
                return Outcome::Abandoned {
                    evaluations: self.evaluations,
                };
            }
        }
    }

    /// One round over the configured player order. True if anyone moved.
    pub fn round(&mut self) -> bool {
        let n = self.lineup.n();
        let mut moved = false;
        for player in self.order.visits(n, &mut self.rng) {
            moved |= self.step(player);
        }
        moved
    }

    /// Move `player` to a best response if it strictly beats staying put.
    pub fn step(&mut self, player: Player) -> bool {
        self.evaluations += 1;
        let payoffs = self.responses(player);
        let current = payoffs[self.lineup.position(player)];
        let best = argmax(&payoffs, &mut self.rng);
        if payoffs[best] > current {
            self.lineup.relocate(player, best);
            true
        } else {
            false
        }
    }

    /// Payoff `player` would get at every position, others held fixed.
    pub fn responses(&mut self, player: Player) -> Vec<Utility> {
        let home = self.lineup.position(player);
        let mut payoffs = Vec::with_capacity(self.lineup.m());
        for position in 0..self.lineup.m() {
            self.lineup.relocate(player, position);
            payoffs.push(self.rule.payoff(player, &self.lineup));
        }
        self.lineup.relocate(player, home);
        payoffs
    }
}

/// Index of a maximal payoff, tied maxima broken uniformly at random.
pub fn argmax<R: Rng>(payoffs: &[Utility], rng: &mut R) -> Position {
    let best = payoffs.iter().copied().fold(Utility::MIN, Utility::max);
    payoffs
        .iter()
        .enumerate()
        .filter(|(_, u)| **u == best)
        .map(|(p, _)| p)
        .collect::<Vec<_>>()
        .choose(rng)
        .copied()
        .expect("at least one position")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(m: usize) -> Frontier {
        Frontier::new(Weights::uniform(m, POINTS_PER_POSITION))
    }

    #[test]
    fn argmax_unique() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(argmax(&[1.0, 3.0, 2.0], rng), 1);
    }

    #[test]
    fn argmax_breaks_ties_among_maxima_only() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let payoffs = [5.0, 1.0, 5.0, 4.99999, 5.0];
        let picks = (0..200)
            .map(|_| argmax(&payoffs, rng))
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(picks.into_iter().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn argmax_on_rounded_ties_is_stable() {
        let noisy = [round(0.1 + 0.2), round(0.3), round(0.29999)];
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(argmax(&noisy, rng) < 2);
        }
    }

    #[test]
    fn responses_restore_the_lineup() {
        let ref rule = uniform(6);
        let mut trial = Trial::new(rule, 3, PlayerOrder::Sequential, Trial::rng(1, 0));
        let before = trial.lineup().clone();
        let responses = trial.responses(1);
        assert_eq!(responses.len(), 6);
        assert_eq!(trial.lineup(), &before);
    }

    #[test]
    fn occupancy_sums_to_n_throughout() {
        let ref rule = uniform(7);
        for index in 0..20 {
            let mut trial = Trial::new(rule, 4, PlayerOrder::Multiset, Trial::rng(5, index));
            for _ in 0..10 {
                for player in 0..4 {
                    trial.step(player);
                    assert_eq!(trial.lineup().occupancy().total(), 4);
                    assert_eq!(
                        trial.lineup().occupancy(),
                        &trial.lineup().assignment().occupancy(7)
                    );
                }
            }
        }
    }

    #[test]
    fn two_players_meet_at_the_median() {
        let ref rule = uniform(5);
        for index in 0..50 {
            let trial = Trial::new(rule, 2, PlayerOrder::Sequential, Trial::rng(9, index));
            match trial.run() {
                Outcome::Converged(assignment) => assert_eq!(assignment.positions(), &[2, 2]),
                Outcome::Abandoned { .. } => panic!("two players always settle"),
            }
        }
    }

    #[test]
    fn converged_lineups_are_equilibria() {
        let ref rule = uniform(6);
        for index in 0..50 {
            let trial = Trial::new(rule, 3, PlayerOrder::Sequential, Trial::rng(2, index));
            if let Outcome::Converged(assignment) = trial.run() {
                assert!(rule.is_equilibrium(&assignment), "{}", assignment);
            }
        }
    }

    #[test]
    fn same_seed_same_outcome() {
        let ref rule = uniform(8);
        let a = Trial::new(rule, 3, PlayerOrder::Multiset, Trial::rng(42, 7)).run();
        let b = Trial::new(rule, 3, PlayerOrder::Multiset, Trial::rng(42, 7)).run();
        assert_eq!(a, b);
    }

    #[test]
    fn default_cap_scales_with_positions() {
        let ref rule = uniform(7);
        let trial = Trial::new(rule, 3, PlayerOrder::Sequential, Trial::rng(0, 0));
        assert_eq!(trial.cap(), 7 * EVALUATION_CAP_PER_POSITION);
    }

    #[test]
    fn exhausted_cap_abandons_moving_trials() {
        let ref rule = uniform(5);
        let mut abandoned = 0;
        for index in 0..50 {
            let trial = Trial::new(rule, 2, PlayerOrder::Sequential, Trial::rng(4, index)).with_cap(0);
            let start = trial.lineup().assignment().clone();
            match trial.run() {
                Outcome::Converged(assignment) => {
                    assert_eq!(start.positions(), &[2, 2]);
                    assert_eq!(assignment, start);
                }
                Outcome::Abandoned { evaluations } => {
                    assert_eq!(evaluations, 2);
                    abandoned += 1;
                }
            }
        }
        assert!(abandoned > 0);
    }
}
