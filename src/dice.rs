//! Seedable random helper for the demo programs.
//!
//! [`Dice`] wraps a deterministic RNG behind an explicit initialization
//! step: [`Dice::init`] seeds it (picking and returning a fresh seed when
//! none is given, so a run can always be reproduced), and every draw before
//! initialization fails with
//! [`Error::UninitializedGenerator`][crate::error::Error::UninitializedGenerator].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct Dice {
    rng: Option<StdRng>,
}

impl Dice {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Seeds the generator and returns the seed actually used.
    pub fn init(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        self.rng = Some(StdRng::seed_from_u64(seed));
        seed
    }

    /// Uniform draw from the inclusive range `[min, max]`.
    pub fn roll(&mut self, min: i64, max: i64) -> Result<i64> {
        assert!(min <= max, "Roll bounds must satisfy min <= max");
        let rng = self.rng.as_mut().ok_or(Error::UninitializedGenerator)?;
        Ok(rng.gen_range(min..=max))
    }

    /// Shuffles a sequence in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) -> Result<()> {
        let rng = self.rng.as_mut().ok_or(Error::UninitializedGenerator)?;
        values.shuffle(rng);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_before_init_fails() {
        let mut dice = Dice::new();
        assert_eq!(dice.roll(1, 6), Err(Error::UninitializedGenerator));
        let mut v = [1, 2, 3];
        assert_eq!(dice.shuffle(&mut v), Err(Error::UninitializedGenerator));
    }

    #[test]
    fn test_rolls_stay_in_bounds() {
        let mut dice = Dice::new();
        dice.init(Some(12345));
        for _ in 0..1000 {
            let v = dice.roll(1, 6).unwrap();
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let mut a = Dice::new();
        let mut b = Dice::new();
        assert_eq!(a.init(Some(99)), 99);
        b.init(Some(99));

        let draws_a: Vec<i64> = (0..10).map(|_| a.roll(0, 100).unwrap()).collect();
        let draws_b: Vec<i64> = (0..10).map(|_| b.roll(0, 100).unwrap()).collect();
        assert_eq!(draws_a, draws_b);

        let mut va = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut vb = va.clone();
        a.shuffle(&mut va).unwrap();
        b.shuffle(&mut vb).unwrap();
        assert_eq!(va, vb);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut dice = Dice::new();
        dice.init(Some(7));
        let mut v: Vec<i64> = (1..=20).collect();
        dice.shuffle(&mut v).unwrap();
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (1..=20).collect::<Vec<i64>>());
    }
}
