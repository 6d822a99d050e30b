//! Entry points.
use crate::*;
use std::collections::BTreeSet;

/// Distinct equilibria reached by best-response dynamics.
///
/// `Ok(None)` means no trial converged; that is a legitimate answer rather
/// than a failure, and is logged as such.
pub fn solve_iterative(params: &Iterative) -> Result<Option<Equilibria>, Error> {
    params.validate()?;
    let solver = IterativeSolver::new(
        params.n,
        params.weights(),
        params.trials,
        params.order,
        params.seed,
    )?;
    let equilibria = solver.solve();
    if equilibria.is_empty() {
        log::warn!(
            "no equilibria found: all {} trials exceeded {} evaluations",
            params.trials,
            params.m * EVALUATION_CAP_PER_POSITION
        );
        Ok(None)
    } else {
        Ok(Some(equilibria))
    }
}

/// Every pure Nash equilibrium, as unique ascending position tuples.
pub fn solve_exhaustive(params: &Exhaustive) -> Result<BTreeSet<Vec<Position>>, Error> {
    params.validate()?;
    let equilibria = MatrixSolver::new(params.n, params.weights()).solve()?;
    if equilibria.is_empty() {
        log::warn!(
            "no pure equilibria exist for {} players over {} positions",
            params.n,
            params.m
        );
    }
    Ok(equilibria)
}

/// Occupancies reached by best-response dynamics under the uniform profile
/// that the exhaustive search does not list. Empty when the two agree.
pub fn crosscheck(n: usize, m: usize, trials: usize, seed: u64) -> Result<Vec<Occupancy>, Error> {
    let iterative = Iterative {
        n,
        m,
        trials,
        seed,
        ..Iterative::default()
    };
    let exhaustive = Exhaustive {
        n,
        m,
        density: Density::Uniform,
    };
    let ref known = solve_exhaustive(&exhaustive)?;
    Ok(solve_iterative(&iterative)?
        .into_iter()
        .flat_map(|equilibria| equilibria.occupancies().collect::<Vec<_>>())
        .filter(|occupancy| !known.contains(&occupancy.expand()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_players_three_positions_meet_at_the_median() {
        let params = Exhaustive { n: 2, m: 3, density: Density::Uniform };
        assert_eq!(solve_exhaustive(&params), Ok(BTreeSet::from([vec![1, 1]])));
    }

    #[test]
    fn lone_player_may_stand_anywhere() {
        let params = Exhaustive { n: 1, m: 5, density: Density::Uniform };
        let expected = (0..5).map(|p| vec![p]).collect::<BTreeSet<_>>();
        assert_eq!(solve_exhaustive(&params), Ok(expected));
    }

    #[test]
    fn iterative_equilibria_are_exhaustive_equilibria() {
        assert_eq!(crosscheck(2, 5, 1000, 17), Ok(vec![]));
        assert_eq!(crosscheck(3, 6, 1000, 17), Ok(vec![]));
    }

    #[test]
    fn iterative_finds_the_median() {
        let params = Iterative { n: 2, m: 5, trials: 1000, ..Iterative::default() };
        let equilibria = solve_iterative(&params).expect("valid").expect("converges");
        assert_eq!(
            equilibria.occupancies().collect::<Vec<_>>(),
            vec![Occupancy::from(vec![0, 0, 2, 0, 0])]
        );
    }

    #[test]
    fn normal_weights_sum_and_mirror() {
        let params = Iterative { m: 10, density: Density::Normal, points: 10.0, ..Iterative::default() };
        let weights = params.weights();
        assert!((weights.total() - 9.545).abs() / 9.545 < 0.01);
        for i in 0..10 {
            assert!((weights[i] - weights[9 - i]).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_parameters_are_refused() {
        let no_players = Iterative { n: 0, ..Iterative::default() };
        let no_trials = Iterative { trials: 0, ..Iterative::default() };
        let no_positions = Exhaustive { m: 0, ..Exhaustive::default() };
        assert!(matches!(solve_iterative(&no_players), Err(Error::InvalidParameter { name: "n", .. })));
        assert!(matches!(solve_iterative(&no_trials), Err(Error::InvalidParameter { name: "trials", .. })));
        assert!(matches!(solve_exhaustive(&no_positions), Err(Error::InvalidParameter { name: "m", .. })));
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let params = Iterative { n: 4, m: 9, trials: 300, order: PlayerOrder::Multiset, seed: 99, ..Iterative::default() };
        assert_eq!(solve_iterative(&params), solve_iterative(&params));
    }

    #[test]
    fn different_seeds_start_differently() {
        let a = IterativeSolver::new(3, Weights::uniform(12, 10.0), 1, PlayerOrder::Sequential, 1).expect("valid");
        let b = IterativeSolver::new(3, Weights::uniform(12, 10.0), 1, PlayerOrder::Sequential, 2).expect("valid");
        let starts = (0..20)
            .filter(|&i| a.trial(i).lineup() != b.trial(i).lineup())
            .count();
        assert!(starts > 0);
    }
}
