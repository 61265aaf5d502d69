//! Error types for fallible filter construction and insertion.

/// Errors reported by the fallible variants of the filter API.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The eviction budget was exhausted before a free slot was found. The filter is still
    /// consistent, but should be rebuilt with a larger capacity if this keeps happening.
    #[error("Not enough space to store this item.")]
    NotEnoughSpace,

    /// The requested capacity needs more buckets than can be addressed.
    #[error("Cannot allocate a filter for {max_num_keys} keys.")]
    CapacityOverflow {
        /// The capacity that was requested.
        max_num_keys: usize,
    },
}

/// A specialized `Result` type for filter operations.
pub type Result<T> = std::result::Result<T, Error>;
