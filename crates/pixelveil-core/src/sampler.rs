//! Deterministic selection of embedding slots.
//!
//! Embedding and extraction never talk to each other; they only share the
//! stego image and a seed. Both sides must therefore walk the very same
//! cover coordinates in the very same order. The generator is a
//! self-contained SplitMix64 seed expansion feeding an xorshift64* stream,
//! never a platform RNG, so the sequence is reproducible on any target for
//! a given `(seed, domain size, count)`.
//!
//! The sequence is not compatible with stego images produced by other
//! samplers over the same domain.

use crate::error::StegoError;
use crate::result::Result;

/// The first two cover rows carry the dimension header and are never
/// sampled.
pub const RESERVED_ROWS: u32 = 2;

/// xorshift64* stream with a SplitMix64-scrambled seed.
pub(crate) struct SlotRng {
    state: u64,
}

impl SlotRng {
    pub(crate) fn new(seed: u64) -> Self {
        // SplitMix64 finalizer; decorrelates adjacent seeds and lifts
        // almost every input away from the xorshift fixed point at zero
        let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        let state = z ^ (z >> 31);

        Self {
            // xorshift state must never be zero
            state: if state == 0 { 0x9E37_79B9_7F4A_7C15 } else { state },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Draw from `0..bound` by modulo reduction. The slight bias does not
    /// matter here, identical sequences on every platform do.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Selects `count` distinct cover coordinates without replacement from the
/// row-major domain `[(x, y) for y in RESERVED_ROWS..cover_h, x in 0..cover_w]`,
/// via a partial Fisher-Yates shuffle.
///
/// The returned order is a pure function of `(seed, domain size, count)`.
pub fn sample_slots(cover_w: u32, cover_h: u32, count: usize, seed: u64) -> Result<Vec<(u32, u32)>> {
    let mut slots: Vec<(u32, u32)> = (RESERVED_ROWS..cover_h)
        .flat_map(|y| (0..cover_w).map(move |x| (x, y)))
        .collect();

    if count > slots.len() {
        return Err(StegoError::InsufficientSlots {
            requested: count,
            available: slots.len(),
        });
    }

    let mut rng = SlotRng::new(seed);
    for i in 0..count {
        let j = i + rng.below((slots.len() - i) as u64) as usize;
        slots.swap(i, j);
    }
    slots.truncate(count);

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_produce_identical_sequences_for_identical_inputs() {
        let a = sample_slots(64, 48, 1000, 42).unwrap();
        let b = sample_slots(64, 48, 1000, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn should_produce_different_sequences_for_different_seeds() {
        let a = sample_slots(64, 48, 1000, 42).unwrap();
        let b = sample_slots(64, 48, 1000, 43).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn should_select_distinct_slots_inside_the_eligible_domain() {
        let (w, h, count) = (32, 32, 500);
        let slots = sample_slots(w, h, count, 7).unwrap();

        assert_eq!(slots.len(), count);
        let distinct: HashSet<_> = slots.iter().collect();
        assert_eq!(distinct.len(), count, "slots must be drawn without replacement");
        for &(x, y) in &slots {
            assert!(x < w, "x={x} escaped the domain");
            assert!((RESERVED_ROWS..h).contains(&y), "y={y} hit a reserved row");
        }
    }

    #[test]
    fn should_permute_the_whole_domain_when_everything_is_requested() {
        let (w, h) = (8, 6);
        let full = (w * (h - RESERVED_ROWS)) as usize;
        let slots = sample_slots(w, h, full, 1).unwrap();

        let distinct: HashSet<_> = slots.iter().collect();
        assert_eq!(distinct.len(), full);
    }

    #[test]
    fn should_accept_an_empty_request() {
        assert_eq!(sample_slots(8, 8, 0, 42).unwrap(), vec![]);
        // even on a cover with no eligible rows at all
        assert_eq!(sample_slots(8, RESERVED_ROWS, 0, 42).unwrap(), vec![]);
    }

    #[test]
    fn should_fail_when_more_slots_are_requested_than_eligible() {
        // 8x4 cover has 8*2=16 eligible slots below the header rows
        match sample_slots(8, 4, 17, 42) {
            Err(StegoError::InsufficientSlots {
                requested: 17,
                available: 16,
            }) => (),
            other => panic!("expected InsufficientSlots, got {other:?}"),
        }
    }

    #[test]
    fn should_not_collapse_for_the_all_zero_seed() {
        let a = sample_slots(16, 16, 100, 0).unwrap();
        let b = sample_slots(16, 16, 100, 0).unwrap();
        assert_eq!(a, b);

        let c = sample_slots(16, 16, 100, 1).unwrap();
        assert_ne!(a, c);
    }
}
