use crate::cuckoo::{CuckooFilter, FilterConfig};
use crate::hash::{Hash64, SipHash64};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A [`CuckooFilter`] behind a single reader-writer lock, for sharing between threads.
///
/// Insertions and removals hold the lock exclusively; lookups and accessors share it. Lock
/// acquisition blocks until the lock is available.
///
/// # Examples
///
/// ```
/// use cuckoo_filter::cuckoo::SyncCuckooFilter;
/// use std::sync::Arc;
/// use std::thread;
///
/// let filter = Arc::new(SyncCuckooFilter::new(100));
///
/// let handles: Vec<_> = (0..4u8)
///     .map(|item| {
///         let filter = Arc::clone(&filter);
///         thread::spawn(move || filter.add(&[item]))
///     })
///     .collect();
/// for handle in handles {
///     assert!(handle.join().unwrap());
/// }
///
/// assert_eq!(filter.len(), 4);
/// assert!(filter.contains(&[3u8]));
/// ```
#[derive(Debug)]
pub struct SyncCuckooFilter<H = SipHash64> {
    inner: RwLock<CuckooFilter<H>>,
}

impl SyncCuckooFilter {
    /// Constructs a new, empty `SyncCuckooFilter` sized for roughly `max_num_keys` items.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    pub fn new(max_num_keys: usize) -> Self {
        Self::from(CuckooFilter::new(max_num_keys))
    }

    /// Constructs a new, empty `SyncCuckooFilter` with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    pub fn with_config(max_num_keys: usize, config: FilterConfig) -> Self {
        Self::from(CuckooFilter::with_config(max_num_keys, config))
    }
}

impl<H> From<CuckooFilter<H>> for SyncCuckooFilter<H> {
    fn from(filter: CuckooFilter<H>) -> Self {
        SyncCuckooFilter {
            inner: RwLock::new(filter),
        }
    }
}

impl<H> SyncCuckooFilter<H>
where
    H: Hash64,
{
    /// Constructs a new, empty `SyncCuckooFilter` sized for roughly `max_num_keys` items that
    /// hashes with `hasher`.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::SyncCuckooFilter;
    /// use cuckoo_filter::hash::XxHash64;
    ///
    /// let filter = SyncCuckooFilter::with_hasher(100, XxHash64);
    /// assert!(filter.add("foo"));
    /// assert!(filter.contains("foo"));
    /// ```
    pub fn with_hasher(max_num_keys: usize, hasher: H) -> Self {
        Self::from(CuckooFilter::with_hasher(max_num_keys, hasher))
    }

    /// Constructs a new, empty `SyncCuckooFilter` with the given configuration and hasher.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets overflows `usize`.
    pub fn with_config_and_hasher(max_num_keys: usize, config: FilterConfig, hasher: H) -> Self {
        Self::from(CuckooFilter::with_config_and_hasher(
            max_num_keys,
            config,
            hasher,
        ))
    }

    /// Inserts an item under the exclusive lock. See [`CuckooFilter::add`].
    pub fn add<D>(&self, data: &D) -> bool
    where
        D: AsRef<[u8]> + ?Sized,
    {
        self.inner.write().add(data)
    }

    /// Removes an item under the exclusive lock. See [`CuckooFilter::delete`].
    pub fn delete<D>(&self, data: &D) -> bool
    where
        D: AsRef<[u8]> + ?Sized,
    {
        self.inner.write().delete(data)
    }

    /// Checks for an item under the shared lock. See [`CuckooFilter::contains`].
    pub fn contains<D>(&self, data: &D) -> bool
    where
        D: AsRef<[u8]> + ?Sized,
    {
        self.inner.read().contains(data)
    }
}

impl<H> SyncCuckooFilter<H> {
    /// Returns the number of occupied slots in the filter.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if there are no occupied slots in the filter.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the fraction of slots that are occupied.
    pub fn load_factor(&self) -> f64 {
        self.inner.read().load_factor()
    }

    /// Locks the filter for shared access, so several lookups observe the same state.
    pub fn read(&self) -> RwLockReadGuard<'_, CuckooFilter<H>> {
        self.inner.read()
    }

    /// Locks the filter for exclusive access, so several updates are applied atomically.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoo_filter::cuckoo::SyncCuckooFilter;
    ///
    /// let filter = SyncCuckooFilter::new(100);
    /// {
    ///     let mut guard = filter.write();
    ///     guard.add("foo");
    ///     guard.add("bar");
    /// }
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn write(&self) -> RwLockWriteGuard<'_, CuckooFilter<H>> {
        self.inner.write()
    }

    /// Consumes the wrapper, returning the unsynchronized filter.
    pub fn into_inner(self) -> CuckooFilter<H> {
        self.inner.into_inner()
    }
}
