use crate::*;

/// Maps a full assignment to every player's payoff.
pub trait Rule: Sync {
    /// Number of positions on the line.
    fn m(&self) -> usize;
    /// Payoff of each player, indexed by player, already rounded.
    fn payoffs(&self, assignment: &Assignment) -> Vec<Utility>;
    /// Whether no player can strictly gain by moving alone.
    fn is_equilibrium(&self, assignment: &Assignment) -> bool {
        let current = self.payoffs(assignment);
        (0..assignment.n()).all(|player| {
            (0..self.m()).all(|position| {
                let mut deviation = assignment.clone();
                deviation.set(player, position);
                self.payoffs(&deviation)[player] <= current[player]
            })
        })
    }
}
