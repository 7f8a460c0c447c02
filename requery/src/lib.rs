#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Shared keyed result cache.
///
/// [`QueryCache`] remembers previously resolved results by [`QueryKey`] so
/// repeated requests for the same key skip the machine entirely. Handles are
/// cheap to clone and share the same underlying entries.
pub mod cache;

/// Consumer-level orchestration of machine, cache, and fetch service.
///
/// [`QueryClient`] implements the lookup-before-fetch contract: cache first,
/// fetch service only on a miss, cache population on observing a resolution.
pub mod client;

/// Error types for fetch operations.
///
/// Defines [`FetchError`], the single failure kind at this layer: a message
/// plus an optional underlying cause.
pub mod error;

/// Operation execution for the query machine.
///
/// The fsm module splits one submitted operation into its internal state and
/// the [`Operation`](fsm::Operation) future that drives it to a
/// [`Completion`](fsm::Completion).
pub mod fsm;

/// The asynchronous query state machine.
///
/// [`QueryMachine`] drives one operation's lifecycle and exposes the
/// [`QueryState`] phase union to its owner.
pub mod machine;

/// Completion policies for superseded operations.
pub mod policy;

pub use cache::QueryCache;
pub use client::{QueryClient, QueryClientBuilder};
pub use error::FetchError;
pub use fsm::{Completion, Operation};
pub use machine::QueryMachine;
pub use policy::CompletionPolicy;

pub use requery_core::{CacheStatus, Fetch, QueryKey, QueryState};

/// The `requery` prelude.
///
/// Provides convenient access to the most commonly used types:
///
/// ```rust
/// use requery::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Fetch, FetchError, QueryClient, QueryKey, QueryState};
}
