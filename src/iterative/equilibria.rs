use crate::*;
use serde::Serialize;
use std::collections::HashSet;

/// Bookkeeping for one iterative run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub trials: usize,
    pub converged: usize,
    pub abandoned: usize,
    pub distinct: usize,
}

/// Distinct equilibria reached by best-response dynamics, in discovery order.
///
/// Two assignments with the same occupancy count as the same equilibrium;
/// the first one discovered is the one kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibria {
    m: usize,
    found: Vec<Assignment>,
    summary: Summary,
}

impl Equilibria {
    /// Merge trial outcomes, in trial order, into distinct equilibria.
    pub fn merge<I>(m: usize, outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        let mut seen = HashSet::<Occupancy>::new();
        let mut found = Vec::new();
        let mut summary = Summary::default();
        for outcome in outcomes {
            summary.trials += 1;
            match outcome {
                Outcome::Abandoned { .. } => summary.abandoned += 1,
                Outcome::Converged(assignment) => {
                    summary.converged += 1;
                    if seen.insert(assignment.occupancy(m)) {
                        found.push(assignment);
                    }
                }
            }
        }
        summary.distinct = found.len();
        Self { m, found, summary }
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.found.iter()
    }

    pub fn occupancies(&self) -> impl Iterator<Item = Occupancy> + '_ {
        self.found.iter().map(|a| a.occupancy(self.m))
    }

    /// How many players stand on each position, summed over all equilibria.
    pub fn frequencies(&self) -> Vec<usize> {
        self.found
            .iter()
            .flat_map(|a| a.positions().iter())
            .fold(vec![0; self.m], |mut counts, &p| {
                counts[p] += 1;
                counts
            })
    }
}

impl IntoIterator for Equilibria {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Assignment>;
    fn into_iter(self) -> Self::IntoIter {
        self.found.into_iter()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<16}{:<16}{:<16}",
            format!("trials {}", self.trials),
            format!("converged {}", self.converged),
            format!("abandoned {}", self.abandoned),
            format!("distinct {}", self.distinct),
        )
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Equilibria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f, "┌──────┬──────────────────────────────┬──────────────────────────────┐")?;
        writeln!(f, "│    # │ Assignment                   │ Occupancy                    │")?;
        writeln!(f, "├──────┼──────────────────────────────┼──────────────────────────────┤")?;
        for (i, assignment) in self.found.iter().enumerate() {
            writeln!(
                f,
                "│ {:>4} │ {:<28} │ {:<28} │",
                i + 1,
                assignment.to_string(),
                assignment.occupancy(self.m).to_string(),
            )?;
        }
        writeln!(f, "└──────┴──────────────────────────────┴──────────────────────────────┘")?;
        Ok(())
    }
}
