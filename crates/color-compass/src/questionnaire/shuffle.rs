//! Presentation-order shuffling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Uniformly permute `items` in place with the supplied generator.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Generator for presenting the question at `index`.
///
/// A configured seed makes every presentation reproducible; without one each
/// presentation draws fresh entropy.
pub fn presentation_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut presentation_rng(Some(7), 0));
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn seeded_presentations_are_reproducible() {
        let order = |index| {
            let mut items: Vec<u32> = (0..16).collect();
            shuffle(&mut items, &mut presentation_rng(Some(42), index));
            items
        };
        assert_eq!(order(3), order(3));
    }

    #[test]
    fn empty_and_single_slices_are_untouched() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut presentation_rng(None, 0));
        let mut single = [9];
        shuffle(&mut single, &mut presentation_rng(None, 0));
        assert_eq!(single, [9]);
    }
}
