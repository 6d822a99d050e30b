use crate::*;

/// Nearest-position payoff rule.
///
/// Every vote-position goes to the occupied positions at minimum distance,
/// split evenly between them; each position's share is then split evenly
/// among the players standing there.
#[derive(Debug, Clone)]
pub struct Proximity {
    weights: Weights,
}

impl Proximity {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Voter mass captured by each position under the given occupancy.
    ///
    /// Each position's shares are summed smallest first, so positions that
    /// mirror each other on a symmetric profile add the same terms in the
    /// same order and land on bit-identical totals.
    fn captured(&self, occupancy: &Occupancy) -> Vec<Weight> {
        let occupied = occupancy.occupied().collect::<Vec<_>>();
        let mut shares = vec![Vec::new(); self.weights.len()];
        for voter in 0..self.weights.len() {
            let Some(nearest) = occupied.iter().map(|&p| p.abs_diff(voter)).min() else {
                break;
            };
            let winners = occupied
                .iter()
                .filter(|&&p| p.abs_diff(voter) == nearest)
                .collect::<Vec<_>>();
            let share = self.weights[voter] / winners.len() as Weight;
            winners.into_iter().for_each(|&p| shares[p].push(share));
        }
        shares
            .into_iter()
            .map(|mut terms| {
                terms.sort_by(Weight::total_cmp);
                terms.into_iter().sum()
            })
            .collect()
    }
}

impl Rule for Proximity {
    fn m(&self) -> usize {
        self.weights.len()
    }
    fn payoffs(&self, assignment: &Assignment) -> Vec<Utility> {
        let ref occupancy = assignment.occupancy(self.m());
        let ref captured = self.captured(occupancy);
        assignment
            .positions()
            .iter()
            .map(|&p| captured[p] / occupancy.count(p) as Utility)
            .map(round)
            .collect()
    }
}
