use rand_chacha::rand_core::Rng;

use crate::rng::uniform_index;

/// In-place Fisher-Yates.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for n in (1..items.len()).rev() {
        let k = uniform_index(rng, n + 1);
        items.swap(k, n);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn empty_and_single_element_inputs_are_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [42]);
    }

    #[test]
    fn output_is_a_permutation_of_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let original: Vec<u32> = vec![1, 1, 2, 3, 5, 8, 13, 21];
        for _ in 0..100 {
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);
            let mut sorted = shuffled.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, original);
        }
    }

    #[test]
    fn every_permutation_of_four_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut seen = HashMap::new();
        for _ in 0..5_000 {
            let mut items = [0, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *seen.entry(items).or_insert(0u32) += 1;
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn permutations_of_three_pass_chi_square() {
        const TRIALS: u32 = 60_000;
        // 5 degrees of freedom, p = 0.001.
        const CRITICAL: f64 = 20.515;

        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
        for _ in 0..TRIALS {
            let mut items = [b'a', b'b', b'c'];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = f64::from(TRIALS) / 6.0;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| {
                let diff = f64::from(observed) - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < CRITICAL, "chi-square {chi_square} exceeds {CRITICAL}");
    }
}
