use crate::cuckoo::BUCKET_SIZE;
use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

const SLOT_BITS: u32 = BUCKET_SIZE.trailing_zeros();

/// Which of the two candidate buckets an eviction walk starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvictionStart {
    /// Pick either candidate bucket with equal probability.
    Random,
    /// Always start from the bucket the item hashes to.
    Primary,
    /// Always start from the alternate bucket.
    Alternate,
}

impl Default for EvictionStart {
    fn default() -> Self {
        EvictionStart::Random
    }
}

/// Source of random bits for eviction walks. Each 64-bit draw from the generator is consumed a
/// few bits at a time.
#[derive(Clone, Debug)]
pub(crate) struct EvictionRng {
    rng: XorShiftRng,
    cache: u64,
    remaining: u32,
}

impl EvictionRng {
    pub fn from_seed(seed: u64) -> Self {
        EvictionRng {
            rng: XorShiftRng::seed_from_u64(seed),
            cache: 0,
            remaining: 0,
        }
    }

    fn next_bits(&mut self, count: u32) -> u64 {
        debug_assert!(count > 0 && count < 64);
        if self.remaining < count {
            self.cache = self.rng.next_u64();
            self.remaining = 64;
        }
        let bits = self.cache & ((1 << count) - 1);
        self.cache >>= count;
        self.remaining -= count;
        bits
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_bits(1) == 1
    }

    /// Returns a slot index drawn uniformly from `0..BUCKET_SIZE`.
    pub fn next_slot(&mut self) -> usize {
        self.next_bits(SLOT_BITS) as usize
    }

    /// Chooses the bucket an eviction walk starts from.
    pub fn start_index(&mut self, start: EvictionStart, index_1: usize, index_2: usize) -> usize {
        match start {
            EvictionStart::Random => {
                if self.next_bool() {
                    index_2
                } else {
                    index_1
                }
            }
            EvictionStart::Primary => index_1,
            EvictionStart::Alternate => index_2,
        }
    }
}
