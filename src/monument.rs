use std::{collections::HashSet, convert::TryFrom, fmt};

use log::{debug, trace};
use num_bigint::BigInt;

use crate::{Coin, Error, Permutations};

/*
You stand in the massive central hall of these ruins. [...] There is a strange
monument in the center of the hall with circular slots and unusual symbols. It
reads:

_ + _ * _^2 + _^3 - _ = 399
*/

pub const COINS: [i64; 5] = [2, 3, 5, 7, 9];
pub const TARGET: i64 = 399;

/// The five slots of the monument, filled left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arrangement(pub [i64; 5]);

impl Arrangement {
    pub fn coins(&self) -> Result<[Coin; 5], Error> {
        let [a, b, c, d, e] = self.0;
        Ok([
            Coin::try_from(a)?,
            Coin::try_from(b)?,
            Coin::try_from(c)?,
            Coin::try_from(d)?,
            Coin::try_from(e)?,
        ])
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{} {} {} {} {}", a, b, c, d, e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monument {
    values: [i64; 5],
    target: i64,
}

impl Monument {
    /// Rejects repeated values, since every slot must take a different one.
    pub fn new(values: [i64; 5], target: i64) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        for &value in values.iter() {
            if !seen.insert(value) {
                return Err(Error::DuplicateValue(value));
            }
        }

        Ok(Self { values, target })
    }

    pub fn ruins() -> Self {
        Self {
            values: COINS,
            target: TARGET,
        }
    }

    pub fn values(&self) -> [i64; 5] {
        self.values
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// `a + b * c^2 + d^3 - e`, or `None` if the result does not fit in an `i64`.
    ///
    /// Terms are evaluated exactly, so intermediate values may exceed `i64`
    /// as long as the final score does not.
    pub fn score(&[a, b, c, d, e]: &[i64; 5]) -> Option<i64> {
        let big = |x: i64| BigInt::from(x);
        let score = big(a) + big(b) * big(c).pow(2) + big(d).pow(3) - big(e);
        i64::try_from(&score).ok()
    }

    pub fn solve(&self) -> Option<Arrangement> {
        self.solve_inspecting(|_| {})
    }

    /// Like [`Monument::solve`], calling `inspect` on every arrangement before
    /// it is scored. Enumeration stops at the first match.
    pub fn solve_inspecting(&self, mut inspect: impl FnMut(&[i64; 5])) -> Option<Arrangement> {
        debug!(
            "searching orderings of {:?} for a score of {}",
            self.values, self.target
        );

        let mut examined = 0usize;
        let found = Permutations::new(self.values).find(|perm| {
            examined += 1;
            inspect(perm);

            let score = Self::score(perm);
            trace!("{:?} => {:?}", perm, score);
            score == Some(self.target)
        });

        match found {
            Some(perm) => debug!("found {:?} after {} orderings", perm, examined),
            None => debug!("exhausted all {} orderings", examined),
        }

        found.map(Arrangement)
    }
}

impl Default for Monument {
    fn default() -> Self {
        Self::ruins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruins_solution() {
        let solution = Monument::ruins().solve();
        assert_eq!(solution, Some(Arrangement([9, 2, 5, 7, 3])));
        assert_eq!(Monument::score(&[9, 2, 5, 7, 3]), Some(399));
    }

    #[test]
    fn solution_is_unique() {
        let matches = Permutations::new(COINS)
            .filter(|perm| Monument::score(perm) == Some(TARGET))
            .collect::<Vec<_>>();
        assert_eq!(matches, vec![[9, 2, 5, 7, 3]]);
    }

    #[test]
    fn solving_is_deterministic() {
        let monument = Monument::default();
        let first = monument.solve();
        for _ in 0..10 {
            assert_eq!(monument.solve(), first);
        }
    }

    #[test]
    fn stops_at_first_match() {
        let mut seen = Vec::new();
        let solution = Monument::ruins().solve_inspecting(|perm| seen.push(*perm));

        let position = Permutations::new(COINS)
            .position(|perm| perm == [9, 2, 5, 7, 3])
            .map(|idx| idx + 1);

        assert_eq!(solution, Some(Arrangement([9, 2, 5, 7, 3])));
        assert_eq!(Some(seen.len()), position);
        assert_eq!(seen.len(), 33);
        assert_eq!(seen.last(), Some(&[9, 2, 5, 7, 3]));
    }

    #[test]
    fn unreachable_target() {
        let monument = Monument::new(COINS, 10_000).unwrap();

        let mut examined = 0;
        assert_eq!(monument.solve_inspecting(|_| examined += 1), None);
        assert_eq!(examined, 120);
    }

    #[test]
    fn other_targets() {
        // 2 + 3 * 5^2 + 7^3 - 9
        let monument = Monument::new(COINS, 411).unwrap();
        let solution = monument.solve().unwrap();
        assert_eq!(Monument::score(&solution.0), Some(411));
    }

    #[test]
    fn duplicates_are_rejected() {
        assert_eq!(
            Monument::new([2, 3, 3, 7, 9], TARGET),
            Err(Error::DuplicateValue(3))
        );
    }

    #[test]
    fn overflow_is_not_a_match() {
        assert_eq!(Monument::score(&[0, 0, 0, i64::MAX, 0]), None);

        let monument = Monument::new([i64::MAX, i64::MIN, 1, 2, 3], 0).unwrap();
        assert_eq!(monument.solve(), None);
    }

    #[test]
    fn intermediate_overflow_still_scores() {
        assert_eq!(Monument::score(&[i64::MAX, 2, 1, 0, 3]), Some(i64::MAX - 1));

        // -2^63 * (2^60)^2 cancels (2^61)^3
        let cancelling = [5, i64::MIN, 1 << 60, 1 << 61, 3];
        assert_eq!(Monument::score(&cancelling), Some(2));

        let monument = Monument::new([i64::MAX, 2, 1, 0, 3], i64::MAX - 1).unwrap();
        let solution = monument.solve().unwrap();
        assert_eq!(Monument::score(&solution.0), Some(i64::MAX - 1));

        let monument = Monument::new(cancelling, 2).unwrap();
        assert!(monument.solve().is_some());
    }

    #[test]
    fn solution_coins() {
        let coins = Monument::ruins().solve().unwrap().coins().unwrap();
        assert_eq!(
            coins,
            [
                Coin::Blue,
                Coin::Red,
                Coin::Shiny,
                Coin::Concave,
                Coin::Corroded
            ]
        );

        assert_eq!(
            Arrangement([9, 2, 5, 7, 4]).coins(),
            Err(Error::UnknownCoin(4))
        );
    }

    #[test]
    fn displays_slots() {
        assert_eq!(Arrangement([9, 2, 5, 7, 3]).to_string(), "9 2 5 7 3");
    }
}
