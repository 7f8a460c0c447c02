#![warn(missing_docs)]
//! # requery-core
//!
//! Core traits and types for the requery asynchronous query framework.
//!
//! This crate provides the foundational abstractions shared by the machine
//! and orchestration layers in `requery`:
//!
//! - **Identify** a unit of asynchronous work ([`QueryKey`])
//! - **Observe** its lifecycle phase ([`QueryState`])
//! - **Call** the external fetch service ([`Fetch`])
//! - **Report** whether a request was served from cache ([`CacheStatus`])
//!
//! Everything here is presentation- and transport-agnostic: how a phase is
//! rendered and how a fetch service obtains its data are concerns of the
//! embedding application.

pub mod context;
pub mod fetch;
pub mod key;
pub mod state;

pub use context::CacheStatus;
pub use fetch::Fetch;
pub use key::QueryKey;
pub use state::QueryState;
