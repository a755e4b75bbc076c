//! Session Module
//!
//! Line-oriented console over a single in-process cache.
//!
//! # Commands
//! - `set <key> <value>` - Store a value (JSON, or raw text)
//! - `get <key>` / `has <key>` - Read with freshness check
//! - `del <key>` - Delete a key
//! - `ttl <key>` - Remaining freshness in milliseconds
//! - `clear` / `prune` - Bulk removal
//! - `size` / `keys` / `stats` - Inspection

pub mod handlers;

pub use handlers::Session;
