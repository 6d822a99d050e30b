use crate::*;
use std::collections::BTreeSet;
#[cfg(feature = "server")]
use rayon::prelude::*;

/// Position tuples handed to one worker while filling the tensor.
const CHUNK: usize = 1 << 12;

/// Payoff vector of every position tuple.
///
/// Axis `i` is player `i`'s position; cells are laid out row-major with
/// player 0 most significant, and each cell stores N payoffs contiguously.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    n: usize,
    m: usize,
    payoffs: Vec<Utility>,
}

impl Tensor {
    /// Evaluate `rule` on all M^N tuples.
    ///
    /// Refuses empty games, and any tensor whose M^N · N payoffs would
    /// exceed `MAX_TENSOR_ENTRIES`, before allocating.
    pub fn build<R: Rule>(n: usize, rule: &R) -> Result<Self, Error> {
        let m = rule.m();
        if n == 0 {
            return Err(Error::invalid("n", "must be at least 1"));
        }
        if m == 0 {
            return Err(Error::invalid("m", "must be at least 1"));
        }
        let cells = u32::try_from(n)
            .ok()
            .and_then(|exp| m.checked_pow(exp))
            .filter(|cells| cells.checked_mul(n).is_some_and(|e| e <= MAX_TENSOR_ENTRIES))
            .ok_or(Error::TensorTooLarge { n, m })?;
        let chunks = cells.div_ceil(CHUNK);
        #[cfg(feature = "server")]
        let payoffs = (0..chunks)
            .into_par_iter()
            .flat_map_iter(|k| Self::chunk(n, rule, k))
            .collect::<Vec<_>>();
        #[cfg(not(feature = "server"))]
        let payoffs = (0..chunks)
            .flat_map(|k| Self::chunk(n, rule, k))
            .collect::<Vec<_>>();
        Ok(Self { n, m, payoffs })
    }

    /// Payoffs of the `k`th run of `CHUNK` tuples, in row-major order.
    fn chunk<R: Rule>(n: usize, rule: &R, k: usize) -> impl Iterator<Item = Utility> + '_ {
        Odometer::starting_at(n, rule.m(), k * CHUNK)
            .take(CHUNK)
            .flat_map(move |tuple| rule.payoffs(&Assignment::from(tuple)))
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn cells(&self) -> usize {
        self.payoffs.len() / self.n
    }

    /// Payoff vector stored at a flat cell index.
    pub fn at(&self, cell: usize) -> &[Utility] {
        &self.payoffs[cell * self.n..(cell + 1) * self.n]
    }

    /// Payoff vector stored at a position tuple.
    pub fn get(&self, positions: &[Position]) -> &[Utility] {
        self.at(Odometer::index(self.m, positions))
    }

    /// Distance in flat cells between neighbors along `player`'s axis.
    pub fn stride(&self, player: Player) -> usize {
        self.m.pow((self.n - 1 - player) as u32)
    }

    /// Ordinal of the other players' positions in `cell`, i.e. the cell
    /// index with `player`'s axis collapsed.
    fn others(&self, cell: usize, player: Player) -> usize {
        let stride = self.stride(player);
        cell / (stride * self.m) * stride + cell % stride
    }

    /// Best payoff `player` can reach against every fixed combination of
    /// the other players' positions, indexed by that combination's ordinal.
    pub fn maxima(&self, player: Player) -> Vec<Utility> {
        let stride = self.stride(player);
        (0..self.cells() / self.m)
            .map(|others| others / stride * stride * self.m + others % stride)
            .map(|base| {
                (0..self.m)
                    .map(|k| self.at(base + k * stride)[player])
                    .fold(Utility::MIN, Utility::max)
            })
            .collect()
    }

    /// Cells where `player` is already playing a best response.
    pub fn best_responses(&self, player: Player) -> Vec<bool> {
        let ref maxima = self.maxima(player);
        (0..self.cells())
            .map(|cell| self.at(cell)[player] == maxima[self.others(cell, player)])
            .collect()
    }

    /// Pure Nash equilibria: cells where every player best-responds,
    /// each reported as its sorted position tuple.
    pub fn equilibria(&self) -> BTreeSet<Vec<Position>> {
        let mask = (0..self.n)
            .map(|player| self.best_responses(player))
            .reduce(|a, b| a.into_iter().zip(b).map(|(x, y)| x && y).collect())
            .unwrap_or_default();
        mask.into_iter()
            .enumerate()
            .filter(|(_, stable)| *stable)
            .map(|(cell, _)| Odometer::digits(self.n, self.m, cell))
            .map(|tuple| Assignment::from(tuple).sorted())
            .collect()
    }
}
