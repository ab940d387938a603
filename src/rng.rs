use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::maze::Direction;

/// Seedable uniform random source owned by a single maze instance.
///
/// Nothing here is global: two instances never share state, and two instances
/// built from the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Get a random source, optionally seeded for reproducibility.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self {
                rng: StdRng::from_os_rng(),
            },
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[0, n)`.
    ///
    /// # Panics
    /// If `n` is 0.
    pub fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "Cannot draw from an empty range");
        self.rng.random_range(0..n)
    }

    /// Uniform `u64`, used to derive seeds for independent instances.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Pick one of the neighbor candidates (indexed by [`Direction::index`]) that exists
    /// and satisfies `filter`, uniformly over the filtered set.
    ///
    /// Returns `None` if no candidate passes the filter.
    pub fn choose_direction(
        &mut self,
        candidates: [Option<usize>; 4],
        mut filter: impl FnMut(usize) -> bool,
    ) -> Option<(Direction, usize)> {
        let mut valid = [(Direction::Left, 0); 4];
        let mut count = 0;
        for direction in Direction::ALL {
            if let Some(neighbor) = candidates[direction.index()] {
                if filter(neighbor) {
                    valid[count] = (direction, neighbor);
                    count += 1;
                }
            }
        }
        match count {
            0 => None,
            _ => Some(valid[self.below(count)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomSource::seeded(7);
        let mut b = RandomSource::seeded(7);
        let xs = (0..32).map(|_| a.below(1000)).collect::<Vec<_>>();
        let ys = (0..32).map(|_| b.below(1000)).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_choose_direction_none() {
        let mut rng = RandomSource::seeded(1);
        assert_eq!(rng.choose_direction([None; 4], |_| true), None);
        assert_eq!(
            rng.choose_direction([Some(1), Some(2), None, None], |_| false),
            None
        );
    }

    #[test]
    fn test_choose_direction_respects_filter() {
        let mut rng = RandomSource::seeded(3);
        let candidates = [Some(10), Some(11), Some(12), None];
        for _ in 0..100 {
            let (direction, neighbor) = rng
                .choose_direction(candidates, |n| n != 11)
                .expect("two candidates pass the filter");
            assert_ne!(neighbor, 11);
            assert_eq!(candidates[direction.index()], Some(neighbor));
        }
    }

    #[test]
    fn test_choose_direction_is_uniform() {
        let mut rng = RandomSource::seeded(42);
        let candidates = [Some(0), Some(1), Some(2), Some(3)];
        let mut counts = [0usize; 4];
        for _ in 0..8000 {
            let (_, neighbor) = rng.choose_direction(candidates, |n| n != 0).unwrap();
            counts[neighbor] += 1;
        }
        assert_eq!(counts[0], 0);
        // Each of the three remaining candidates is expected ~2667 times
        for &count in &counts[1..] {
            assert!((2300..3050).contains(&count), "counts: {:?}", counts);
        }
    }
}
