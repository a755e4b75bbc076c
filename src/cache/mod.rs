//! Cache Module
//!
//! Provides in-memory caching with FIFO capacity eviction, lazy TTL
//! expiration and string admission control.

mod clock;
mod entry;
mod fifo;
mod shared;
mod stats;
mod store;
mod value;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use fifo::FifoTracker;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::BoundedCache;
pub use value::CacheValue;
