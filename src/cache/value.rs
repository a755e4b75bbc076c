//! Value Measurement Module
//!
//! Decides which stored payloads are subject to the string length limit.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

// == Cache Value Trait ==
/// A payload the cache can store.
///
/// Admission control only looks at string-shaped values. Implement with an
/// empty body for types that should never be measured.
pub trait CacheValue {
    /// Length in characters when the value is a string, `None` otherwise.
    fn string_len(&self) -> Option<usize> {
        None
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

impl CacheValue for String {
    fn string_len(&self) -> Option<usize> {
        Some(char_len(self))
    }
}

impl CacheValue for &str {
    fn string_len(&self) -> Option<usize> {
        Some(char_len(self))
    }
}

impl CacheValue for Box<str> {
    fn string_len(&self) -> Option<usize> {
        Some(char_len(self))
    }
}

impl CacheValue for Arc<str> {
    fn string_len(&self) -> Option<usize> {
        Some(char_len(self))
    }
}

impl CacheValue for Rc<str> {
    fn string_len(&self) -> Option<usize> {
        Some(char_len(self))
    }
}

impl CacheValue for Cow<'_, str> {
    fn string_len(&self) -> Option<usize> {
        Some(char_len(self))
    }
}

impl CacheValue for Value {
    fn string_len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(char_len(s)),
            _ => None,
        }
    }
}

impl<T: CacheValue> CacheValue for Option<T> {
    fn string_len(&self) -> Option<usize> {
        self.as_ref().and_then(CacheValue::string_len)
    }
}

impl<T> CacheValue for Vec<T> {}

macro_rules! unmeasured {
    ($($ty:ty),* $(,)?) => {
        $(impl CacheValue for $ty {})*
    };
}

unmeasured!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
