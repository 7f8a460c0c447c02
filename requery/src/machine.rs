use requery_core::{QueryKey, QueryState};
use tracing::debug;

use crate::fsm::{Completion, Operation};
use crate::policy::CompletionPolicy;

/// Drives the lifecycle of a single outstanding asynchronous operation.
///
/// One machine owns one logical slot of asynchronous work. It watches an
/// identity (a [`QueryKey`]); whenever the watched identity changes,
/// [`submit`](QueryMachine::submit) invokes the supplied operation factory
/// and transitions to `Pending`. The caller awaits the returned
/// [`Operation`] and feeds the [`Completion`] back through
/// [`complete`](QueryMachine::complete). The machine performs no I/O of its
/// own.
///
/// Within one identity the phases are strictly ordered
/// `Pending → Resolved | Rejected`. Completions from superseded identities
/// are handled according to the configured [`CompletionPolicy`].
#[derive(Debug)]
pub struct QueryMachine<T, E> {
    state: QueryState<T, E>,
    watched: Option<QueryKey>,
    generation: u64,
    policy: CompletionPolicy,
}

impl<T, E> Default for QueryMachine<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> QueryMachine<T, E> {
    /// Creates a machine with the default completion policy.
    pub fn new() -> Self {
        Self::with_policy(CompletionPolicy::default())
    }

    /// Creates a machine with the given completion policy.
    pub fn with_policy(policy: CompletionPolicy) -> Self {
        QueryMachine {
            state: QueryState::Idle,
            watched: None,
            generation: 0,
            policy,
        }
    }

    /// The current phase. Always exactly one of the four variants.
    pub fn state(&self) -> &QueryState<T, E> {
        &self.state
    }

    /// The configured completion policy.
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// Whether the machine is already watching this identity.
    pub fn watches(&self, identity: &QueryKey) -> bool {
        self.watched.as_ref() == Some(identity)
    }

    /// Re-run entry point.
    ///
    /// If `identity` equals the previously watched identity, nothing is
    /// re-run and `None` is returned. Otherwise the factory is invoked:
    /// returning no operation settles the machine in `Idle`, while returning
    /// a fetch future transitions it to `Pending` and hands back the
    /// [`Operation`] for the caller to await.
    pub fn submit<F>(
        &mut self,
        identity: QueryKey,
        factory: impl FnOnce() -> Option<F>,
    ) -> Option<Operation<F>> {
        if self.watches(&identity) {
            return None;
        }
        self.generation += 1;
        self.watched = Some(identity.clone());
        let Some(fetch_future) = factory() else {
            debug!(key = identity.as_str(), "no operation for identity");
            self.state = QueryState::Idle;
            return None;
        };
        debug!(
            key = identity.as_str(),
            generation = self.generation,
            "operation pending"
        );
        self.state = QueryState::Pending {
            key: identity.clone(),
        };
        Some(Operation::new(self.generation, identity, fetch_future))
    }

    /// Applies a finished operation's outcome.
    ///
    /// Under [`CompletionPolicy::DiscardStale`] a completion issued under an
    /// older generation leaves the state untouched; under
    /// [`CompletionPolicy::LastWriteWins`] every completion is applied as it
    /// arrives.
    pub fn complete(&mut self, completion: Completion<T, E>) -> &QueryState<T, E> {
        if self.policy == CompletionPolicy::DiscardStale
            && completion.generation() != self.generation
        {
            debug!(
                key = completion.key().as_str(),
                generation = completion.generation(),
                current = self.generation,
                "discarding superseded completion"
            );
            return &self.state;
        }
        self.state = match completion.into_outcome() {
            Ok(data) => QueryState::Resolved { data },
            Err(error) => QueryState::Rejected { error },
        };
        debug!(phase = self.state.as_str(), "operation applied");
        &self.state
    }

    /// Short-circuits to `Resolved` without running an operation.
    ///
    /// This is the cache-hit path: the composition layer already holds the
    /// value for `identity` and hands it over directly. Any in-flight
    /// operation is superseded.
    pub fn resolve_direct(&mut self, identity: QueryKey, data: T) -> &QueryState<T, E> {
        self.generation += 1;
        self.watched = Some(identity);
        self.state = QueryState::Resolved { data };
        &self.state
    }

    /// Clears back to `Idle` and forgets the watched identity.
    ///
    /// The hook for an error-boundary collaborator's reset action: after a
    /// reset the same key may be submitted again and will re-run.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.watched = None;
        self.state = QueryState::Idle;
    }
}
