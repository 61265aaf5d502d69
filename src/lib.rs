//! # cuckoo-filter
//!
//! `cuckoo-filter` is an approximate set membership structure. It answers "might this key be in
//! the set?" with a bounded false positive rate and no false negatives, stores an 8-bit
//! fingerprint per key instead of the key itself, and, unlike a Bloom filter, supports removing
//! keys.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! cuckoo-filter = "*"
//! ```
//!
//! ```rust
//! use cuckoo_filter::cuckoo::CuckooFilter;
//!
//! let mut filter = CuckooFilter::new(1000);
//! assert!(filter.add("foo"));
//! assert!(filter.contains("foo"));
//! assert!(!filter.contains("bar"));
//! assert!(filter.delete("foo"));
//! ```
//!
//! [`cuckoo::SyncCuckooFilter`] wraps a filter in a reader-writer lock for use from several
//! threads. Hashing is pluggable through [`hash::Hash64`].
//!
//! ## References
//!
//!  - [Cuckoo Filter: Practically Better Than Bloom](https://dl.acm.org/citation.cfm?id=2674994)
//!  > Fan, Bin, Dave G. Andersen, Michael Kaminsky, and Michael D. Mitzenmacher. 2014. “Cuckoo Filter: Practically Better Than Bloom.” In *Proceedings of the 10th Acm International on Conference on Emerging Networking Experiments and Technologies*, 75–88. CoNEXT ’14. New York, NY, USA: ACM. doi:[10.1145/2674005.2674994](https://doi.org/10.1145/2674005.2674994).

#![warn(missing_docs)]

pub mod cuckoo;
pub mod error;
pub mod hash;
