//! Draw helpers over an injected random source.

use rand_chacha::rand_core::Rng;

/// Uniform in `[0, 1)` from the top 53 bits of one draw.
pub fn unit_f64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform in `[0, bound)` without modulo bias. `bound` must be non-zero.
pub fn uniform_index<R: Rng + ?Sized>(rng: &mut R, bound: usize) -> usize {
    debug_assert!(bound > 0);
    let bound = bound as u64;
    // 2^64 mod bound; draws below it would over-represent the low residues.
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let draw = rng.next_u64();
        if draw >= threshold {
            return (draw % bound) as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn unit_f64_stays_in_half_open_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let value = unit_f64(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn uniform_index_stays_inside_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for bound in 1..20 {
            for _ in 0..200 {
                assert!(uniform_index(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn uniform_index_of_one_is_always_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!((0..50).all(|_| uniform_index(&mut rng, 1) == 0));
    }
}
