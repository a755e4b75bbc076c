//! Memo Cache - A bounded in-process key/value cache
//!
//! Memoizes expensive tooling results with FIFO capacity eviction, lazy TTL
//! expiration and optional admission control for oversized strings.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use cache::{
    BoundedCache, CacheStats, CacheValue, Clock, ManualClock, SharedCache, SystemClock,
};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use session::Session;
