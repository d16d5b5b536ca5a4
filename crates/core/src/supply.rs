//! Supply module - random piece generation
//!
//! A round is played with a fixed, pre-generated list of pieces. Each piece
//! kind is drawn uniformly at random; there is no bag, so repeats are allowed.
//!
//! Uses a simple LCG so that the same seed always yields the same round.

use crate::piece::PieceSpec;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max); always 0 when `max` is 0
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // The low bits of an LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Pick one element of a non-empty slice
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_range(items.len() as u32) as usize;
        items.get(idx).copied()
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// `count` piece kinds drawn uniformly from all five kinds
pub fn random_kinds(seed: u32, count: usize) -> Vec<PieceKind> {
    let mut rng = SimpleRng::new(seed);
    (0..count)
        .filter_map(|_| rng.choose(&PieceKind::ALL))
        .collect()
}

/// Random supply where each piece is paired with a handle built from its kind
pub fn random_supply<H>(
    seed: u32,
    count: usize,
    mut handle_for: impl FnMut(PieceKind) -> H,
) -> Vec<PieceSpec<H>> {
    random_kinds(seed, count)
        .into_iter()
        .map(|kind| PieceSpec::new(kind, handle_for(kind)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn test_next_range_zero_is_zero() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.next_range(1), 0);
    }

    #[test]
    fn test_random_kinds_len_and_determinism() {
        let a = random_kinds(42, 10);
        let b = random_kinds(42, 10);
        assert_eq!(a.len(), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_kinds_cover_all_kinds_eventually() {
        let kinds = random_kinds(1, 500);
        for kind in PieceKind::ALL {
            assert!(kinds.contains(&kind), "Missing piece: {:?}", kind);
        }
    }

    #[test]
    fn test_random_supply_attaches_handles() {
        let supply = random_supply(3, 4, |kind| kind.as_str());
        assert_eq!(supply.len(), 4);
        for spec in supply {
            assert_eq!(spec.handle, spec.kind.as_str());
        }
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(rng.choose::<u8>(&[]), None);
    }
}
