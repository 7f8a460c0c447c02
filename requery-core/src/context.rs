//! Request context types for tracking cache lookup results.

use serde::{Deserialize, Serialize};

/// Whether a request was served from the shared cache or went to the fetch
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStatus {
    /// Cache hit - a previously resolved result was found and returned.
    Hit,
    /// Cache miss - the fetch service was invoked.
    #[default]
    Miss,
}

impl CacheStatus {
    /// Returns the status as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "hit",
            CacheStatus::Miss => "miss",
        }
    }
}
