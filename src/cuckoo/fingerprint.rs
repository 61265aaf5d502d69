//! Derivation of bucket indexes and fingerprints from hash digests.

use crate::hash::Hash64;

/// Number of distinct non-empty fingerprints.
pub(crate) const FINGERPRINT_COUNT: u64 = 255;

/// Maps a digest onto `[1, 255]`, leaving `0` free as the empty-slot marker.
#[inline]
pub(crate) fn fingerprint(digest: u64) -> u8 {
    (digest % FINGERPRINT_COUNT) as u8 + 1
}

#[inline]
pub(crate) fn index(digest: u64, bucket_mask: usize) -> usize {
    digest as usize & bucket_mask
}

/// Returns the other candidate bucket of `fingerprint` given one of its buckets. Applying this
/// twice with the same fingerprint yields `index` again, so an evicted fingerprint can be moved
/// without knowing the original item.
#[inline]
pub(crate) fn alt_index<H>(
    hasher: &H,
    seed: u64,
    fingerprint: u8,
    index: usize,
    bucket_mask: usize,
) -> usize
where
    H: Hash64 + ?Sized,
{
    index ^ (hasher.hash64(&[fingerprint], seed) as usize & bucket_mask)
}

#[cfg(test)]
mod tests {
    use super::{alt_index, fingerprint, index};
    use crate::hash::{SipHash64, XxHash64};
    use proptest::prelude::*;

    #[test]
    fn test_fingerprint_bounds() {
        assert_eq!(fingerprint(0), 1);
        assert_eq!(fingerprint(254), 255);
        assert_eq!(fingerprint(255), 1);
        assert_eq!(fingerprint(u64::MAX), (u64::MAX % 255) as u8 + 1);
    }

    #[test]
    fn test_index_masks_digest() {
        assert_eq!(index(0xFFFF_FFFF_FFFF_FFFF, 0x0F), 0x0F);
        assert_eq!(index(0x1234, 0), 0);
    }

    #[test]
    fn test_alt_index_single_bucket() {
        assert_eq!(alt_index(&SipHash64, 1337, 42, 0, 0), 0);
    }

    proptest! {
        #[test]
        fn prop_fingerprint_is_never_empty(digest in any::<u64>()) {
            prop_assert!(fingerprint(digest) >= 1);
        }

        #[test]
        fn prop_alt_index_is_symmetric(
            fp in 1u8..=255,
            bits in 0u32..20,
            raw_index in any::<usize>(),
            seed in any::<u64>(),
        ) {
            let bucket_mask = (1usize << bits) - 1;
            let i = raw_index & bucket_mask;
            for hasher in &[&SipHash64 as &dyn crate::hash::Hash64, &XxHash64] {
                let j = alt_index(*hasher, seed, fp, i, bucket_mask);
                prop_assert!(j <= bucket_mask);
                prop_assert_eq!(alt_index(*hasher, seed, fp, j, bucket_mask), i);
            }
        }
    }
}
