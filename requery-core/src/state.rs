//! Query lifecycle phases.
//!
//! [`QueryState`] is the observable phase of one logical slot of
//! asynchronous work. The union is exhaustive and exclusive: a consumer
//! always sees exactly one of the four variants, never a mix of `data` and
//! `error`. Within one identity the phases are strictly ordered
//! `Pending → Resolved | Rejected`; a new identity may re-enter `Pending`
//! from any terminal phase.
//!
//! Consumers are expected to `match` on the state exhaustively — there is no
//! "impossible state" fallback to handle at runtime.

use serde::{Deserialize, Serialize};

use crate::key::QueryKey;

/// The phase of a single asynchronous operation.
///
/// `T` is the value produced on success, `E` the failure description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryState<T, E> {
    /// No operation has been requested yet.
    Idle,
    /// An operation is in flight. The key is kept for display and
    /// completion matching.
    Pending {
        /// Identity of the in-flight operation.
        key: QueryKey,
    },
    /// The operation completed successfully.
    Resolved {
        /// The produced value.
        data: T,
    },
    /// The operation completed with a failure.
    Rejected {
        /// Description of the cause.
        error: E,
    },
}

impl<T, E> Default for QueryState<T, E> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T, E> QueryState<T, E> {
    /// Whether no operation has been requested.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    /// Whether an operation is in flight.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending { .. })
    }

    /// Whether the operation resolved successfully.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, QueryState::Resolved { .. })
    }

    /// Whether the operation failed.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, QueryState::Rejected { .. })
    }

    /// The resolved value, if this is the `Resolved` phase.
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Resolved { data } => Some(data),
            _ => None,
        }
    }

    /// The failure, if this is the `Rejected` phase.
    pub fn error(&self) -> Option<&E> {
        match self {
            QueryState::Rejected { error } => Some(error),
            _ => None,
        }
    }

    /// The key of the in-flight operation, if this is the `Pending` phase.
    pub fn pending_key(&self) -> Option<&QueryKey> {
        match self {
            QueryState::Pending { key } => Some(key),
            _ => None,
        }
    }

    /// Returns the phase name as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            QueryState::Idle => "idle",
            QueryState::Pending { .. } => "pending",
            QueryState::Resolved { .. } => "resolved",
            QueryState::Rejected { .. } => "rejected",
        }
    }
}
