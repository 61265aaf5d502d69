//! Space-efficient probabilistic data structure to test for membership in a set with the ability
//! to remove items.

mod bucket;
mod cuckoo_filter;
mod eviction;
mod fingerprint;
mod sync_cuckoo_filter;

pub(crate) const BUCKET_SIZE: usize = 4;
pub(crate) const EMPTY_FINGERPRINT: u8 = 0;
pub(crate) const MAX_LOAD_FACTOR: f64 = 0.96;

const DEFAULT_MAX_KICKOUTS: usize = 500;
const DEFAULT_SEED: u64 = 1337;
const DEFAULT_EVICTION_SEED: u64 = 1;

pub use self::cuckoo_filter::CuckooFilter;
pub use self::eviction::EvictionStart;
pub use self::sync_cuckoo_filter::SyncCuckooFilter;

/// Tuning parameters for a [`CuckooFilter`].
///
/// # Examples
///
/// ```
/// use cuckoo_filter::cuckoo::{CuckooFilter, EvictionStart, FilterConfig};
///
/// let config = FilterConfig {
///     max_kickouts: 100,
///     eviction_start: EvictionStart::Primary,
///     ..FilterConfig::default()
/// };
/// let filter = CuckooFilter::with_config(1000, config);
/// assert_eq!(filter.max_kickouts(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    /// Maximum number of fingerprint displacements before an insertion gives up. Defaults to
    /// 500.
    pub max_kickouts: usize,
    /// Seed of the hash family shared by every operation on the filter. Defaults to 1337.
    pub seed: u64,
    /// Seed of the random source that picks eviction victims. Defaults to 1.
    pub eviction_seed: u64,
    /// Which candidate bucket an eviction walk starts from. Defaults to a coin flip.
    pub eviction_start: EvictionStart,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            max_kickouts: DEFAULT_MAX_KICKOUTS,
            seed: DEFAULT_SEED,
            eviction_seed: DEFAULT_EVICTION_SEED,
            eviction_start: EvictionStart::default(),
        }
    }
}
