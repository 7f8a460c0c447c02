use std::{
    future::Future,
    pin::Pin,
    task::{self, Poll},
};

use futures::ready;
use pin_project::pin_project;
use requery_core::QueryKey;
use tracing::debug;

use super::states::{State, StateProj};

const POLL_AFTER_READY_ERROR: &str = "Operation can't be polled after finishing";

/// Outcome of one finished operation.
///
/// Tagged with the generation and key the operation was issued under so the
/// machine can recognize completions from superseded operations.
#[derive(Debug)]
pub struct Completion<T, E> {
    generation: u64,
    key: QueryKey,
    outcome: Result<T, E>,
}

impl<T, E> Completion<T, E> {
    /// The key the operation was issued for.
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// The generation the operation was issued under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The produced outcome.
    pub fn outcome(&self) -> &Result<T, E> {
        &self.outcome
    }

    /// Consumes the completion and returns the outcome.
    pub fn into_outcome(self) -> Result<T, E> {
        self.outcome
    }
}

/// A single in-flight operation produced by
/// [`QueryMachine::submit`](crate::QueryMachine::submit).
///
/// Wraps the factory-produced fetch future together with its generation tag.
/// The operation is never aborted once issued; a superseded outcome is
/// recognized and handled when its [`Completion`] reaches the machine.
#[pin_project]
pub struct Operation<F> {
    generation: u64,
    key: QueryKey,
    #[pin]
    state: State<F>,
}

impl<F> Operation<F> {
    pub(crate) fn new(generation: u64, key: QueryKey, fetch_future: F) -> Self {
        Operation {
            generation,
            key,
            state: State::PollFetch { fetch_future },
        }
    }

    /// The key this operation was issued for.
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

impl<F> std::fmt::Debug for Operation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("generation", &self.generation)
            .field("key", &self.key)
            .field("state", &self.state)
            .finish()
    }
}

impl<F, T, E> Future for Operation<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Completion<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        let outcome = match this.state.as_mut().project() {
            StateProj::PollFetch { fetch_future } => ready!(fetch_future.poll(cx)),
            StateProj::Complete => panic!("{}", POLL_AFTER_READY_ERROR),
        };
        this.state.set(State::Complete);
        debug!(
            key = this.key.as_str(),
            generation = *this.generation,
            success = outcome.is_ok(),
            "operation finished"
        );
        Poll::Ready(Completion {
            generation: *this.generation,
            key: this.key.clone(),
            outcome,
        })
    }
}
