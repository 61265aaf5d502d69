use crate::cuckoo::bucket::Bucket;
use crate::cuckoo::eviction::EvictionRng;
use crate::cuckoo::fingerprint::{self, FINGERPRINT_COUNT};
use crate::cuckoo::{FilterConfig, BUCKET_SIZE, MAX_LOAD_FACTOR};
use crate::error::{Error, Result};
use crate::hash::{Hash64, SipHash64};
use log::{debug, trace};

/// A space-efficient probabilistic data structure to test for membership in a set. Cuckoo filters
/// also provide the flexibility to remove items.
///
/// A cuckoo filter is a cuckoo hash table storing an 8-bit fingerprint of each item instead of
/// the item itself. Every item has two candidate buckets of four slots each; the second bucket
/// can be recomputed from the first bucket and the fingerprint alone, which lets an insertion
/// displace ("kick out") existing fingerprints into their other bucket when both candidates are
/// full. Lookups never report false negatives, but may report false positives when two items
/// share a fingerprint and a bucket.
///
/// The filter does not synchronize access itself. Use [`SyncCuckooFilter`] to share one between
/// threads.
///
/// [`SyncCuckooFilter`]: crate::cuckoo::SyncCuckooFilter
///
/// # Examples
///
/// ```
/// use cuckoo_filter::cuckoo::CuckooFilter;
///
/// let mut filter = CuckooFilter::new(100);
///
/// assert!(!filter.contains("foo"));
/// assert!(filter.add("foo"));
/// assert!(filter.contains("foo"));
///
/// assert!(filter.delete("foo"));
/// assert!(!filter.contains("foo"));
///
/// assert_eq!(filter.len(), 0);
/// assert_eq!(filter.capacity(), 128);
/// assert_eq!(filter.bucket_len(), 32);
/// ```
#[derive(Clone, Debug)]
pub struct CuckooFilter<H = SipHash64> {
    buckets: Vec<Bucket>,
    bucket_mask: usize,
    len: usize,
    hasher: H,
    config: FilterConfig,
    rng: EvictionRng,
}

impl CuckooFilter {
    /// Constructs a new, empty `CuckooFilter` sized for roughly `max_num_keys` items, using the
    /// default [`FilterConfig`] and SipHash.
    ///
    /// The number of buckets is the smallest power of two holding `max_num_keys / 4` buckets,
    /// doubled once if `max_num_keys` would fill more than 96% of the slots. A capacity of 0
    /// yields a single bucket.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(4);
    /// assert_eq!(filter.bucket_len(), 2);
    /// ```
    pub fn new(max_num_keys: usize) -> Self {
        Self::with_config_and_hasher(max_num_keys, FilterConfig::default(), SipHash64)
    }

    /// Constructs a new, empty `CuckooFilter` sized for roughly `max_num_keys` items with the
    /// given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    pub fn with_config(max_num_keys: usize, config: FilterConfig) -> Self {
        Self::with_config_and_hasher(max_num_keys, config, SipHash64)
    }
}

impl<H> CuckooFilter<H>
where
    H: Hash64,
{
    /// Constructs a new, empty `CuckooFilter` sized for roughly `max_num_keys` items that hashes
    /// with `hasher`.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    /// use cuckoo_filter::hash::XxHash64;
    ///
    /// let filter = CuckooFilter::with_hasher(100, XxHash64);
    /// assert!(filter.is_empty());
    /// ```
    pub fn with_hasher(max_num_keys: usize, hasher: H) -> Self {
        Self::with_config_and_hasher(max_num_keys, FilterConfig::default(), hasher)
    }

    /// Constructs a new, empty `CuckooFilter` sized for roughly `max_num_keys` items with the
    /// given configuration and hasher.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    pub fn with_config_and_hasher(max_num_keys: usize, config: FilterConfig, hasher: H) -> Self {
        match Self::try_with_config_and_hasher(max_num_keys, config, hasher) {
            Ok(filter) => filter,
            Err(error) => panic!("{}", error),
        }
    }

    /// Fallible version of [`with_config_and_hasher`](Self::with_config_and_hasher).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if the number of buckets overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::{CuckooFilter, FilterConfig};
    /// use cuckoo_filter::error::Error;
    /// use cuckoo_filter::hash::SipHash64;
    ///
    /// let result = CuckooFilter::try_with_config_and_hasher(
    ///     usize::MAX,
    ///     FilterConfig::default(),
    ///     SipHash64,
    /// );
    /// assert_eq!(
    ///     result.err(),
    ///     Some(Error::CapacityOverflow { max_num_keys: usize::MAX }),
    /// );
    /// ```
    pub fn try_with_config_and_hasher(
        max_num_keys: usize,
        config: FilterConfig,
        hasher: H,
    ) -> Result<Self> {
        let bucket_len =
            Self::bucket_len_for(max_num_keys).ok_or(Error::CapacityOverflow { max_num_keys })?;
        debug!(
            "allocating cuckoo filter for {} keys: {} buckets, {} slots",
            max_num_keys,
            bucket_len,
            bucket_len * BUCKET_SIZE,
        );
        Ok(CuckooFilter {
            buckets: vec![Bucket::default(); bucket_len],
            bucket_mask: bucket_len - 1,
            len: 0,
            hasher,
            rng: EvictionRng::from_seed(config.eviction_seed),
            config,
        })
    }

    fn bucket_len_for(max_num_keys: usize) -> Option<usize> {
        let mut bucket_len = (max_num_keys / BUCKET_SIZE).checked_next_power_of_two()?;
        if max_num_keys as f64 / (bucket_len as f64 * BUCKET_SIZE as f64) > MAX_LOAD_FACTOR {
            bucket_len = bucket_len.checked_mul(2)?;
        }
        bucket_len.checked_mul(BUCKET_SIZE)?;
        Some(bucket_len)
    }

    fn get_fingerprint_and_indexes(&self, data: &[u8]) -> (u8, usize, usize) {
        let digest = self.hasher.hash64(data, self.config.seed);
        let fingerprint = fingerprint::fingerprint(digest);
        let index_1 = fingerprint::index(digest, self.bucket_mask);
        let index_2 = self.get_alt_index(fingerprint, index_1);
        (fingerprint, index_1, index_2)
    }

    #[inline]
    fn get_alt_index(&self, fingerprint: u8, index: usize) -> usize {
        fingerprint::alt_index(
            &self.hasher,
            self.config.seed,
            fingerprint,
            index,
            self.bucket_mask,
        )
    }

    fn insert_fingerprint(&mut self, fingerprint: u8, index: usize) -> bool {
        if self.buckets[index].insert(fingerprint) {
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Inserts an item into the cuckoo filter. Returns `false` if no slot could be freed within
    /// the kickout budget, in which case the filter holds exactly the fingerprints it held
    /// before the call.
    ///
    /// Adding the same item twice stores two copies of its fingerprint.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let mut filter = CuckooFilter::new(100);
    /// assert!(filter.add("foo"));
    /// assert!(filter.add(&[1u8, 2, 3]));
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn add<D>(&mut self, data: &D) -> bool
    where
        D: AsRef<[u8]> + ?Sized,
    {
        let (fingerprint, index_1, index_2) = self.get_fingerprint_and_indexes(data.as_ref());
        if self.insert_fingerprint(fingerprint, index_1)
            || self.insert_fingerprint(fingerprint, index_2)
        {
            return true;
        }
        self.kick_out(fingerprint, index_1, index_2)
    }

    /// Inserts an item into the cuckoo filter, reporting a full filter as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughSpace`] if the item could not be placed within the kickout
    /// budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let mut filter = CuckooFilter::new(100);
    /// assert!(filter.try_add("foo").is_ok());
    /// ```
    pub fn try_add<D>(&mut self, data: &D) -> Result<()>
    where
        D: AsRef<[u8]> + ?Sized,
    {
        if self.add(data) {
            Ok(())
        } else {
            Err(Error::NotEnoughSpace)
        }
    }

    fn kick_out(&mut self, mut fingerprint: u8, index_1: usize, index_2: usize) -> bool {
        let max_kickouts = self.config.max_kickouts;
        let mut index = self
            .rng
            .start_index(self.config.eviction_start, index_1, index_2);
        let mut path = Vec::new();

        for kicks in 1..=max_kickouts {
            let slot = self.rng.next_slot();
            fingerprint = self.buckets[index].swap(slot, fingerprint);
            path.push((index, slot));
            index = self.get_alt_index(fingerprint, index);
            if self.insert_fingerprint(fingerprint, index) {
                trace!("placed displaced fingerprint after {} kickouts", kicks);
                return true;
            }
        }

        // put every displaced fingerprint back where it was
        for (index, slot) in path.into_iter().rev() {
            fingerprint = self.buckets[index].swap(slot, fingerprint);
        }
        debug!(
            "insertion failed after {} kickouts at load factor {:.3}",
            max_kickouts,
            self.load_factor(),
        );
        false
    }

    /// Removes one copy of an item's fingerprint from the cuckoo filter. Returns `false` and
    /// leaves the filter untouched if the fingerprint is in neither candidate bucket.
    ///
    /// Removing an item that was never added may remove a colliding item instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let mut filter = CuckooFilter::new(100);
    ///
    /// filter.add("foo");
    /// assert!(filter.delete("foo"));
    /// assert!(!filter.delete("foo"));
    /// ```
    pub fn delete<D>(&mut self, data: &D) -> bool
    where
        D: AsRef<[u8]> + ?Sized,
    {
        let (fingerprint, index_1, index_2) = self.get_fingerprint_and_indexes(data.as_ref());
        if self.buckets[index_1].delete(fingerprint) || self.buckets[index_2].delete(fingerprint)
        {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Checks if an item is possibly in the cuckoo filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let mut filter = CuckooFilter::new(100);
    ///
    /// filter.add("foo");
    /// assert!(filter.contains("foo"));
    /// ```
    pub fn contains<D>(&self, data: &D) -> bool
    where
        D: AsRef<[u8]> + ?Sized,
    {
        let (fingerprint, index_1, index_2) = self.get_fingerprint_and_indexes(data.as_ref());
        self.buckets[index_1].contains(fingerprint) || self.buckets[index_2].contains(fingerprint)
    }
}

impl<H> CuckooFilter<H> {
    /// Clears the cuckoo filter, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let mut filter = CuckooFilter::new(100);
    ///
    /// filter.add("foo");
    /// filter.clear();
    ///
    /// assert!(!filter.contains("foo"));
    /// ```
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
        self.len = 0;
    }

    /// Returns the number of occupied slots in the cuckoo filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    ///
    /// assert_eq!(filter.len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no occupied slots in the cuckoo filter.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of slots in the cuckoo filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    ///
    /// assert_eq!(filter.capacity(), 128);
    /// ```
    pub fn capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// Returns the number of buckets in the cuckoo filter.
    pub fn bucket_len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the fraction of slots that are occupied, in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let mut filter = CuckooFilter::new(100);
    /// filter.add("foo");
    ///
    /// assert_eq!(filter.load_factor(), 1.0 / 128.0);
    /// ```
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the estimated false positive probability of the cuckoo filter. This value will
    /// increase as more items are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::CuckooFilter;
    ///
    /// let mut filter = CuckooFilter::new(100);
    /// assert!(filter.estimated_fpp() < std::f64::EPSILON);
    ///
    /// filter.add("foo");
    /// assert!(filter.estimated_fpp() > std::f64::EPSILON);
    /// assert!(filter.estimated_fpp() < 0.01);
    /// ```
    pub fn estimated_fpp(&self) -> f64 {
        let fingerprints_count = FINGERPRINT_COUNT as f64;
        let single_fpp = (fingerprints_count - 1.0) / fingerprints_count;
        1.0 - single_fpp.powf(2.0 * BUCKET_SIZE as f64 * self.load_factor())
    }

    /// Returns the maximum number of displacements attempted by a single insertion.
    pub fn max_kickouts(&self) -> usize {
        self.config.max_kickouts
    }

    /// Returns the seed of the filter's hash family.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Returns the configuration the filter was built with.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Returns a reference to the cuckoo filter's hash provider.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    #[cfg(test)]
    fn occupied_len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::CuckooFilter;
    use crate::cuckoo::{EvictionStart, FilterConfig};
    use crate::error::Error;
    use crate::hash::{SipHash64, XxHash64};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn words(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("word-{:07}", i)).collect()
    }

    #[test]
    fn test_new() {
        let filter = CuckooFilter::new(100);
        assert_eq!(filter.len(), 0);
        assert!(filter.is_empty());
        assert_eq!(filter.capacity(), 128);
        assert_eq!(filter.bucket_len(), 32);
        assert_eq!(filter.max_kickouts(), 500);
        assert_eq!(filter.seed(), 1337);
        assert_eq!(filter.load_factor(), 0.0);
    }

    #[test]
    fn test_new_bucket_len() {
        assert_eq!(CuckooFilter::new(0).bucket_len(), 1);
        assert_eq!(CuckooFilter::new(3).bucket_len(), 1);
        assert_eq!(CuckooFilter::new(4).bucket_len(), 2);
        assert_eq!(CuckooFilter::new(120).bucket_len(), 32);
        // 123 keys would fill 96.1% of 32 buckets
        assert_eq!(CuckooFilter::new(123).bucket_len(), 64);
        assert_eq!(CuckooFilter::new(1_000_000).bucket_len(), 262_144);
    }

    #[test]
    fn test_capacity_overflow() {
        let result = CuckooFilter::try_with_config_and_hasher(
            usize::MAX,
            FilterConfig::default(),
            SipHash64,
        );
        assert_eq!(
            result.err(),
            Some(Error::CapacityOverflow {
                max_num_keys: usize::MAX
            }),
        );
    }

    #[test]
    fn test_alt_index_is_symmetric() {
        let filter = CuckooFilter::new(1 << 16);
        for fingerprint in 1..=255u8 {
            for &index in &[0usize, 1, 77, 4095, filter.bucket_len() - 1] {
                let alt_index = filter.get_alt_index(fingerprint, index);
                assert!(alt_index < filter.bucket_len());
                assert_eq!(filter.get_alt_index(fingerprint, alt_index), index);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let mut filter = CuckooFilter::new(4);
        filter.add("one");
        filter.add("two");
        filter.add("three");

        assert!(filter.contains("one"));
        assert!(filter.contains("two"));
        assert!(filter.contains("three"));
        assert!(!filter.contains("four"));
        assert!(!filter.contains("five"));
    }

    #[test]
    fn test_delete() {
        let mut filter = CuckooFilter::new(8);
        filter.add("one");
        filter.add("two");
        filter.add("three");

        assert!(!filter.delete("four"));
        assert!(!filter.delete("five"));
        assert_eq!(filter.len(), 3);

        assert!(filter.delete("one"));
        assert!(filter.delete("two"));
        assert!(filter.delete("three"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_delete_multiple_same() {
        let mut filter = CuckooFilter::new(4);
        let added = (0..5).filter(|_| filter.add("some_item")).count();
        assert!(added >= 4);
        assert_eq!(filter.len(), added);

        assert!(!filter.delete("missing"));
        assert!(!filter.delete("missing2"));
        assert_eq!(filter.len(), added);

        for remaining in (0..added).rev() {
            assert!(filter.delete("some_item"));
            assert_eq!(filter.len(), remaining);
        }
        assert!(!filter.delete("some_item"));
        assert_eq!(filter.len(), 0);
    }

    #[test]
    fn test_insert_random() {
        let mut rng = XorShiftRng::seed_from_u64(0);
        let mut filter = CuckooFilter::new(10_000);
        for _ in 0..100 {
            let item: [u8; 32] = rng.gen();
            assert!(filter.add(&item));
        }
        assert_eq!(filter.len(), 100);
    }

    #[test]
    fn test_insert_and_delete_word_list() {
        let mut filter = CuckooFilter::new(1_000_000);
        let values = words(250_000);

        let added: Vec<_> = values.iter().filter(|value| filter.add(*value)).collect();
        assert_eq!(filter.len(), added.len());
        assert_eq!(filter.occupied_len(), added.len());
        assert!(added.iter().all(|value| filter.contains(*value)));

        for value in &added {
            assert!(filter.delete(*value));
        }
        assert_eq!(filter.len(), 0);
        assert_eq!(filter.load_factor(), 0.0);
        assert_eq!(filter.occupied_len(), 0);
        assert!(values.iter().step_by(997).all(|value| !filter.contains(value)));
    }

    #[test]
    fn test_large_max_kickouts() {
        let config = FilterConfig {
            max_kickouts: 1 << 60,
            ..FilterConfig::default()
        };
        let mut filter = CuckooFilter::with_config(1000, config);

        // well past the first collision that needs an eviction walk
        for key in 0..1500u32 {
            assert!(filter.add(&key.to_le_bytes()));
        }
        assert_eq!(filter.len(), 1500);
        assert_eq!(filter.occupied_len(), 1500);
        assert!((0..1500u32).all(|key| filter.contains(&key.to_le_bytes())));
    }

    #[test]
    fn test_failed_add_keeps_committed_items() {
        let mut filter = CuckooFilter::new(4);
        let values = words(100);

        let mut added = Vec::new();
        let mut failures = 0;
        for value in &values {
            if filter.add(value) {
                added.push(value);
            } else {
                failures += 1;
                assert_eq!(filter.len(), added.len());
                assert_eq!(filter.occupied_len(), added.len());
            }
        }

        assert!(failures > 0);
        assert!(added.len() <= filter.capacity());
        assert!(filter.load_factor() <= 1.0);
        assert!(added.iter().all(|value| filter.contains(value)));

        for value in &added {
            assert!(filter.delete(value));
        }
        assert!(filter.is_empty());
    }

    #[test]
    fn test_try_add_full() {
        let config = FilterConfig {
            max_kickouts: 0,
            ..FilterConfig::default()
        };
        let mut filter = CuckooFilter::with_config(0, config);

        // a single bucket holds four copies
        for _ in 0..4 {
            assert_eq!(filter.try_add("foo"), Ok(()));
        }
        assert_eq!(filter.try_add("foo"), Err(Error::NotEnoughSpace));
        assert_eq!(filter.len(), 4);
        assert_eq!(filter.load_factor(), 1.0);
    }

    #[test]
    fn test_eviction_start_policies() {
        for &eviction_start in &[
            EvictionStart::Random,
            EvictionStart::Primary,
            EvictionStart::Alternate,
        ] {
            let config = FilterConfig {
                eviction_start,
                ..FilterConfig::default()
            };
            let mut filter = CuckooFilter::with_config(1000, config);
            let values = words(1000);
            let added: Vec<_> = values.iter().filter(|value| filter.add(*value)).collect();

            assert_eq!(filter.len(), added.len());
            assert!(added.len() > 900);
            assert!(added.iter().all(|value| filter.contains(*value)));
        }
    }

    #[test]
    fn test_same_seeds_build_same_filter() {
        let mut filter_1 = CuckooFilter::new(64);
        let mut filter_2 = CuckooFilter::new(64);
        for value in &words(120) {
            assert_eq!(filter_1.add(value), filter_2.add(value));
        }
        assert_eq!(filter_1.buckets, filter_2.buckets);
    }

    #[test]
    fn test_xx_hash_provider() {
        let mut filter = CuckooFilter::with_hasher(100, XxHash64);
        filter.add("foo");
        assert!(filter.contains("foo"));
        assert!(!filter.contains("bar"));
    }

    #[test]
    fn test_closure_provider() {
        let mut filter = CuckooFilter::with_hasher(100, |data: &[u8], seed: u64| {
            data.iter()
                .fold(seed, |hash, byte| hash.rotate_left(5) ^ u64::from(*byte))
                .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        });
        filter.add("foo");
        assert!(filter.contains("foo"));
        assert!(filter.delete("foo"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut filter = CuckooFilter::new(100);
        filter.add("foobar");
        filter.add("barfoo");

        filter.clear();

        assert!(filter.is_empty());
        assert!(!filter.contains("foobar"));
        assert!(!filter.contains("barfoo"));
    }

    #[test]
    fn test_estimated_fpp() {
        let mut filter = CuckooFilter::new(100);
        assert!(filter.estimated_fpp() < std::f64::EPSILON);

        filter.add("foo");

        let expected_fpp = 1.0 - (254.0f64 / 255.0).powf(8.0 / 128.0);
        assert!((filter.estimated_fpp() - expected_fpp).abs() < std::f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_no_false_negatives(
            values in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 0..300),
        ) {
            let mut filter = CuckooFilter::new(256);
            let mut added = 0;
            for value in &values {
                if filter.add(value) {
                    added += 1;
                    prop_assert!(filter.contains(value));
                }
            }
            prop_assert_eq!(filter.len(), added);
        }

        #[test]
        fn prop_size_accounting(ops in prop::collection::vec((any::<bool>(), 0u8..32), 0..400)) {
            let mut filter = CuckooFilter::new(16);
            let mut expected = 0usize;
            for (is_add, key) in ops {
                if is_add {
                    if filter.add(&[key]) {
                        expected += 1;
                    }
                } else if filter.delete(&[key]) {
                    expected -= 1;
                }
                prop_assert_eq!(filter.len(), expected);
                prop_assert_eq!(filter.occupied_len(), expected);
                let load_factor = filter.load_factor();
                prop_assert!((0.0..=1.0).contains(&load_factor));
                prop_assert_eq!(load_factor == 0.0, filter.is_empty());
            }
        }
    }
}
