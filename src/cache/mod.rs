//! Response caching subsystem.
//!
//! - [`response::ResponseCache`] — bounded, TTL-aware store mapping an
//!   intent/context fingerprint to a previously computed response.
//!   Expiry is always re-checked at lookup time; capacity overruns evict
//!   the least-recently-accessed tenth of entries in one batch.
//!
//! - [`sweeper::Sweeper`] — owned periodic task that deletes fully
//!   expired entries independent of capacity. Best-effort: its absence
//!   never causes an expired entry to be served, since lookups re-check.

pub mod response;
pub(crate) mod sweeper;

pub use response::{CacheEntryMeta, CacheStats, ResponseCache, fingerprint};
