use crate::*;

/// Gap-splitting payoff rule.
///
/// A player keeps its own position's weight (shared with anyone standing on
/// the same spot) and claims the nearer half of the empty stretch towards the
/// nearest occupied neighbor on each side. With no neighbor on a side, the
/// whole side is theirs. An odd stretch has its midpoint split in two.
#[derive(Debug, Clone)]
pub struct Frontier {
    weights: Weights,
}

impl Frontier {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Payoff of `player` under the lineup, rounded onto the payoff grid.
    pub fn payoff(&self, player: Player, lineup: &Lineup) -> Utility {
        let m = self.weights.len();
        let occupancy = lineup.occupancy();
        let position = lineup.position(player);
        let crowd = occupancy.count(position) as Utility;
        let own = self.weights[position];
        let left = match occupancy.left_of(position) {
            None => self.weights.span(0..position),
            Some(neighbor) => self.claim(position - neighbor - 1, |k| position - 1 - k),
        };
        let right = match occupancy.right_of(position) {
            None => self.weights.span(position + 1..m),
            Some(neighbor) => self.claim(neighbor - position - 1, |k| position + 1 + k),
        };
        round((own + left + right) / crowd)
    }

    /// Weight claimed from an empty stretch of `gap` positions, where
    /// `step(k)` is the k-th empty position counting outward from the player.
    fn claim<F>(&self, gap: usize, step: F) -> Weight
    where
        F: Fn(usize) -> Position,
    {
        let near = (0..gap / 2).map(&step).map(|p| self.weights[p]).sum::<Weight>();
        match gap % 2 {
            0 => near,
            _ => near + self.weights[step(gap / 2)] / 2.0,
        }
    }
}

impl Rule for Frontier {
    fn m(&self) -> usize {
        self.weights.len()
    }
    fn payoffs(&self, assignment: &Assignment) -> Vec<Utility> {
        let ref lineup = Lineup::new(assignment.clone(), self.m());
        (0..assignment.n())
            .map(|player| self.payoff(player, lineup))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(m: usize) -> Frontier {
        Frontier::new(Weights::uniform(m, POINTS_PER_POSITION))
    }

    fn payoffs(rule: &Frontier, positions: &[Position]) -> Vec<Utility> {
        rule.payoffs(&Assignment::from(positions.to_vec()))
    }

    #[test]
    fn alone_takes_everything() {
        let rule = uniform(5);
        for p in 0..5 {
            assert_eq!(payoffs(&rule, &[p]), vec![50.0]);
        }
    }

    #[test]
    fn shared_position_splits_evenly() {
        let rule = uniform(5);
        assert_eq!(payoffs(&rule, &[2, 2]), vec![25.0, 25.0]);
        assert_eq!(payoffs(&rule, &[0, 0, 0]), vec![50.0 / 3.0, 50.0 / 3.0, 50.0 / 3.0].into_iter().map(round).collect::<Vec<_>>());
    }

    #[test]
    fn even_gap() {
        // 0 . . 3 : each claims one of the two empty positions
        let rule = uniform(4);
        assert_eq!(payoffs(&rule, &[0, 3]), vec![20.0, 20.0]);
    }

    #[test]
    fn odd_gap_splits_midpoint() {
        // 0 . . . 4 : one full position each plus half the midpoint
        let rule = uniform(5);
        assert_eq!(payoffs(&rule, &[0, 4]), vec![25.0, 25.0]);
        // 1 . 3 : midpoint halved, outer sides claimed whole
        assert_eq!(payoffs(&rule, &[1, 3]), vec![25.0, 25.0]);
    }

    #[test]
    fn adjacent_players_claim_nothing_between() {
        let rule = uniform(5);
        assert_eq!(payoffs(&rule, &[1, 2]), vec![20.0, 30.0]);
    }

    #[test]
    fn crowd_divides_side_claims() {
        // two players on 1 share {0, 1, half of 2}; lone player on 3 takes {half of 2, 3, 4}
        let rule = uniform(5);
        assert_eq!(payoffs(&rule, &[1, 1, 3]), vec![12.5, 12.5, 25.0]);
    }

    #[test]
    fn weighted_claims_follow_positions() {
        let rule = Frontier::new(Weights::from(vec![1.0, 2.0, 4.0, 8.0, 16.0]));
        // 0 | 1 2 3 | 4 : gap of three, midpoint 2 is split
        assert_eq!(payoffs(&rule, &[0, 4]), vec![1.0 + 2.0 + 2.0, 16.0 + 8.0 + 2.0]);
        // 1 | 2 3 | 4 : even gap, each side takes its nearer one
        assert_eq!(payoffs(&rule, &[1, 4]), vec![1.0 + 2.0 + 4.0, 8.0 + 16.0]);
    }

    #[test]
    fn total_is_conserved() {
        let rule = Frontier::new(Weights::normal(9, POINTS_PER_POSITION));
        for positions in [vec![0, 8], vec![2, 2, 7], vec![1, 4, 5, 8], vec![3, 3, 3]] {
            let total = payoffs(&rule, &positions).iter().sum::<Utility>();
            assert!((total - rule.weights().total()).abs() < 1e-4);
        }
    }

    #[test]
    fn median_is_equilibrium() {
        let rule = uniform(5);
        assert!(rule.is_equilibrium(&Assignment::from(vec![2, 2])));
        assert!(!rule.is_equilibrium(&Assignment::from(vec![1, 2])));
        assert!(!rule.is_equilibrium(&Assignment::from(vec![0, 4])));
    }
}
