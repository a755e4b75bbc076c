//! Console responses
//!
//! Defines the JSON object written for each executed command.

use serde::Serialize;
use serde_json::{json, Value};

use crate::cache::CacheStats;

/// Outcome of one console command, written as a single JSON line.
///
/// A `get` miss omits `value` entirely, while a stored null is written as
/// `"value": null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Response {
    Set {
        key: String,
        stored: bool,
    },
    Get {
        key: String,
        found: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },
    Has {
        key: String,
        present: bool,
    },
    Delete {
        key: String,
        removed: bool,
    },
    Ttl {
        key: String,
        remaining_ms: Option<u64>,
    },
    Clear,
    Prune {
        removed: usize,
    },
    Size {
        size: usize,
    },
    Keys {
        keys: Vec<String>,
    },
    Stats(CacheStats),
    Error {
        error: String,
    },
}

impl Response {
    /// Builds the response for a `get`, hit or miss.
    pub fn get(key: impl Into<String>, value: Option<Value>) -> Self {
        Response::Get {
            key: key.into(),
            found: value.is_some(),
            value,
        }
    }

    /// Builds an error response.
    pub fn error(error: impl ToString) -> Self {
        Response::Error {
            error: error.to_string(),
        }
    }

    /// Serializes to one line of JSON.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            json!({"op": "error", "error": err.to_string()}).to_string()
        })
    }
}
