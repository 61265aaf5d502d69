//! Keyed 64-bit hash providers used to derive bucket indexes and fingerprints.

use siphasher::sip::SipHasher;
use std::hash::Hasher;
use xxhash_rust::xxh64::xxh64;

/// A keyed 64-bit hash over a byte sequence.
///
/// Implementations must be deterministic: the same `data` and `seed` always produce the same
/// digest. Any well-distributed keyed hash satisfies the contract, and swapping one provider for
/// another only changes how fingerprints and indexes are distributed.
///
/// Plain functions and closures with the signature `Fn(&[u8], u64) -> u64` are providers too.
///
/// # Examples
///
/// ```
/// use cuckoo_filter::hash::{Hash64, SipHash64};
///
/// let hasher = SipHash64;
/// assert_eq!(hasher.hash64(b"foo", 1337), hasher.hash64(b"foo", 1337));
/// assert_ne!(hasher.hash64(b"foo", 1337), hasher.hash64(b"foo", 7));
/// ```
pub trait Hash64 {
    /// Returns the 64-bit digest of `data` under `seed`.
    fn hash64(&self, data: &[u8], seed: u64) -> u64;
}

impl<F> Hash64 for F
where
    F: Fn(&[u8], u64) -> u64,
{
    #[inline]
    fn hash64(&self, data: &[u8], seed: u64) -> u64 {
        self(data, seed)
    }
}

/// The default hash provider: SipHash-2-4 keyed with `(seed, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipHash64;

impl Hash64 for SipHash64 {
    #[inline]
    fn hash64(&self, data: &[u8], seed: u64) -> u64 {
        let mut hasher = SipHasher::new_with_keys(seed, 0);
        hasher.write(data);
        hasher.finish()
    }
}

/// A faster, non-cryptographic hash provider backed by xxHash64.
///
/// # Examples
///
/// ```
/// use cuckoo_filter::cuckoo::CuckooFilter;
/// use cuckoo_filter::hash::XxHash64;
///
/// let mut filter = CuckooFilter::with_hasher(100, XxHash64);
/// filter.add("foo");
/// assert!(filter.contains("foo"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XxHash64;

impl Hash64 for XxHash64 {
    #[inline]
    fn hash64(&self, data: &[u8], seed: u64) -> u64 {
        xxh64(data, seed)
    }
}
