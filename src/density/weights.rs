use super::*;
use crate::*;

/// Voter mass nearest each of the M positions.
///
/// Uniform mass scales with M (each position holds `points`), while normal
/// mass is bounded by `points` no matter how finely the line is cut.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Weights(Vec<Weight>);

impl Weights {
    pub fn build(m: usize, density: Density, points: Weight) -> Self {
        match density {
            Density::Uniform => Self::uniform(m, points),
            Density::Normal => Self::normal(m, points),
        }
    }

    pub fn uniform(m: usize, points: Weight) -> Self {
        Self(vec![points; m])
    }

    /// Bin the standard normal over [-2, 2] into M equal intervals and
    /// scale each interval's probability mass by `points`.
    pub fn normal(m: usize, points: Weight) -> Self {
        let width = 2.0 * NORMAL_BOUND / m as f64;
        let bounds = (0..=m)
            .map(|i| -NORMAL_BOUND + width * i as f64)
            .map(gaussian::cdf)
            .collect::<Vec<_>>();
        Self(
            bounds
                .windows(2)
                .map(|w| points * (w[1] - w[0]))
                .collect(),
        )
    }

    /// Weights as consumed by the exhaustive method, which keeps its own
    /// scale: unit mass per uniform position, or the unscaled normal profile
    /// snapped to the payoff grid.
    pub fn exhaustive(m: usize, density: Density) -> Self {
        match density {
            Density::Uniform => Self::uniform(m, EXHAUSTIVE_UNIFORM_WEIGHT),
            Density::Normal => Self::normal(m, EXHAUSTIVE_NORMAL_POINTS).rounded(),
        }
    }

    pub fn rounded(self) -> Self {
        Self(self.0.into_iter().map(round).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> Weight {
        self.0.iter().sum()
    }

    /// Total mass over a half-open range of positions.
    pub fn span(&self, range: std::ops::Range<Position>) -> Weight {
        self.0[range].iter().sum()
    }

    pub fn as_slice(&self) -> &[Weight] {
        &self.0
    }
}

impl std::ops::Index<Position> for Weights {
    type Output = Weight;
    fn index(&self, position: Position) -> &Self::Output {
        &self.0[position]
    }
}

impl From<Vec<Weight>> for Weights {
    fn from(weights: Vec<Weight>) -> Self {
        Self(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn uniform_is_constant() {
        let weights = Weights::build(7, Density::Uniform, POINTS_PER_POSITION);
        assert_eq!(weights.len(), 7);
        assert!(weights.as_slice().iter().all(|&w| w == POINTS_PER_POSITION));
        assert_eq!(weights.total(), 70.0);
    }

    #[test]
    fn normal_mass_is_bounded() {
        for points in [1.0, 10.0, 25.0] {
            let weights = Weights::build(10, Density::Normal, points);
            let expected = 9.545 * points / 10.0;
            assert!(
                (weights.total() - expected).abs() / expected < 0.01,
                "total {} not near {}",
                weights.total(),
                expected
            );
        }
    }

    #[test]
    fn normal_mass_independent_of_resolution() {
        let coarse = Weights::normal(4, POINTS_PER_POSITION).total();
        let fine = Weights::normal(40, POINTS_PER_POSITION).total();
        assert!((coarse - fine).abs() < TOLERANCE);
    }

    #[test]
    fn normal_is_symmetric() {
        for m in [2, 5, 10, 11] {
            let weights = Weights::normal(m, POINTS_PER_POSITION);
            for i in 0..m {
                assert!((weights[i] - weights[m - 1 - i]).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn normal_peaks_in_the_middle() {
        let weights = Weights::normal(10, POINTS_PER_POSITION);
        assert!(weights[4] > weights[3]);
        assert!(weights[0] < weights[1]);
        assert!(weights.as_slice().iter().all(|&w| w > 0.0));
    }

    #[test]
    fn exhaustive_uniform_ignores_points() {
        let weights = Weights::exhaustive(5, Density::Uniform);
        assert_eq!(weights.total(), 5.0);
    }

    #[test]
    fn exhaustive_normal_is_on_the_grid() {
        let weights = Weights::exhaustive(6, Density::Normal);
        assert!(weights.as_slice().iter().all(|&w| w == round(w)));
        assert!((weights.total() - 0.9545).abs() < 1e-3);
    }

    #[test]
    fn span() {
        let weights = Weights::from(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(weights.span(0..0), 0.0);
        assert_eq!(weights.span(1..3), 5.0);
        assert_eq!(weights.span(0..4), 10.0);
    }
}
