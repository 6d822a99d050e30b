use crate::*;

/// Enumerates every tuple in `[0, m)^n`, last digit turning fastest.
///
/// Tuple order matches row-major flat indexing with player 0 as the most
/// significant axis, so the k-th tuple yielded is [`Odometer::digits`]`(k)`.
#[derive(Debug, Clone)]
pub struct Odometer {
    m: usize,
    digits: Vec<Position>,
    remaining: usize,
}

impl Odometer {
    pub fn new(n: usize, m: usize) -> Self {
        Self::starting_at(n, m, 0)
    }

    /// Odometer whose first reading is the tuple at flat index `start`.
    pub fn starting_at(n: usize, m: usize, start: usize) -> Self {
        let total = m.pow(n as u32);
        Self {
            m,
            digits: Self::digits(n, m, start.min(total)),
            remaining: total.saturating_sub(start),
        }
    }

    /// Tuple at flat index `index`.
    pub fn digits(n: usize, m: usize, mut index: usize) -> Vec<Position> {
        let mut digits = vec![0; n];
        for digit in digits.iter_mut().rev() {
            *digit = index % m;
            index /= m;
        }
        digits
    }

    /// Flat index of a tuple.
    pub fn index(m: usize, digits: &[Position]) -> usize {
        digits.iter().fold(0, |index, &d| index * m + d)
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.m {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for Odometer {
    type Item = Vec<Position>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let reading = self.digits.clone();
        self.remaining -= 1;
        self.advance();
        Some(reading)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Odometer {}
