//! Random number generation for room generation
//!
//! Uses a seeded ChaCha RNG so that a supplied seed reproduces a room exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source
///
/// Wraps ChaCha8Rng. Two instances built from the same seed yield the same
/// sequence, and therefore the same rooms.
#[derive(Debug, Clone)]
pub struct RoomRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RoomRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Derive an independent generator, e.g. one per room of a level
    pub fn split(&mut self) -> Self {
        Self::new(self.rng.r#gen())
    }
}

impl Default for RoomRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_extremes() {
        let mut rng = RoomRng::new(7);
        for _ in 0..200 {
            assert!(!rng.percent(0));
            assert!(rng.percent(100));
        }
        assert_eq!(rng.rn2(0), 0);
    }

    #[test]
    fn test_percent_follows_fill_rate() {
        let mut rng = RoomRng::new(3);
        let hits = (0..10_000).filter(|_| rng.percent(39)).count();
        assert!((3_500..4_300).contains(&hits), "{} hits", hits);
    }

    #[test]
    fn test_same_seed_same_fill_pattern() {
        let mut a = RoomRng::new(42);
        let mut b = RoomRng::new(42);
        let fill_a: Vec<bool> = (0..300).map(|_| a.percent(45)).collect();
        let fill_b: Vec<bool> = (0..300).map(|_| b.percent(45)).collect();
        assert_eq!(fill_a, fill_b);
    }

    #[test]
    fn test_split_is_deterministic() {
        let mut a = RoomRng::new(9);
        let mut b = RoomRng::new(9);
        let mut child_a = a.split();
        let mut child_b = b.split();
        assert_eq!(child_a.seed(), child_b.seed());
        assert_eq!(child_a.rn2(1000), child_b.rn2(1000));
    }

    #[test]
    fn test_split_gives_each_room_its_own_stream() {
        let mut level = RoomRng::new(11);
        let mut first = level.split();
        let mut second = level.split();
        assert_ne!(first.seed(), second.seed());
        let a: Vec<bool> = (0..64).map(|_| first.percent(50)).collect();
        let b: Vec<bool> = (0..64).map(|_| second.percent(50)).collect();
        assert_ne!(a, b);
    }
}
