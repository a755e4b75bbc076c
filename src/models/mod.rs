//! Command and Response models for the cache console
//!
//! This module defines the line commands accepted on input and the JSON
//! objects written back for each of them.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::Command;
pub use responses::Response;
