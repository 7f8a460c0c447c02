use requery_core::{CacheStatus, Fetch, QueryKey, QueryState};
use tracing::debug;

use crate::cache::QueryCache;
use crate::machine::QueryMachine;
use crate::policy::CompletionPolicy;

/// Integrates a [`QueryMachine`] with a shared [`QueryCache`] and a fetch
/// service.
///
/// The client implements the lookup-before-fetch contract: the cache is
/// consulted first, and a hit short-circuits straight to `Resolved` without
/// invoking the fetch service. Only on a miss does the machine run the
/// service, and the client writes the resolved value back into the cache on
/// observing the resolution — cache population lives here, keeping the
/// machine cache-agnostic.
pub struct QueryClient<S: Fetch> {
    fetcher: S,
    cache: QueryCache<S::Data>,
    machine: QueryMachine<S::Data, S::Error>,
}

impl<S: Fetch> std::fmt::Debug for QueryClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("fetcher", &std::any::type_name::<S>())
            .field("cached_results", &self.cache.len())
            .field("phase", &self.machine.state().as_str())
            .finish()
    }
}

impl<S> QueryClient<S>
where
    S: Fetch,
    S::Data: Clone,
{
    /// Creates a client with a private cache and the default policy.
    pub fn new(fetcher: S) -> Self {
        Self::builder(fetcher).build()
    }

    /// Starts building a client around the given fetch service.
    pub fn builder(fetcher: S) -> QueryClientBuilder<S> {
        QueryClientBuilder {
            fetcher,
            cache: None,
            policy: CompletionPolicy::default(),
        }
    }

    /// Requests the value for `key`, driving the machine to a settled phase.
    ///
    /// An empty key settles in `Idle`; a key equal to the one already
    /// watched returns the current phase without re-running anything.
    pub async fn request(&mut self, key: impl Into<QueryKey>) -> &QueryState<S::Data, S::Error> {
        let key = key.into();
        if self.machine.watches(&key) {
            return self.machine.state();
        }
        if !key.is_empty()
            && let Some(data) = self.cache.lookup(&key)
        {
            debug!(
                key = key.as_str(),
                status = CacheStatus::Hit.as_str(),
                "serving cached result"
            );
            return self.machine.resolve_direct(key, data);
        }
        let Some(operation) = self.machine.submit(key.clone(), || {
            if key.is_empty() {
                None
            } else {
                debug!(
                    key = key.as_str(),
                    status = CacheStatus::Miss.as_str(),
                    "calling fetch service"
                );
                Some(self.fetcher.fetch(&key))
            }
        }) else {
            return self.machine.state();
        };

        let completion = operation.await;
        if let Ok(data) = completion.outcome() {
            self.cache.insert(completion.key().clone(), data.clone());
        }
        self.machine.complete(completion)
    }

    /// The current phase.
    pub fn state(&self) -> &QueryState<S::Data, S::Error> {
        self.machine.state()
    }

    /// Clears the machine back to `Idle`, allowing the failed key to be
    /// requested again. Cached results are untouched.
    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// The shared cache handle.
    pub fn cache(&self) -> &QueryCache<S::Data> {
        &self.cache
    }
}

/// Builder for [`QueryClient`].
#[derive(Debug)]
pub struct QueryClientBuilder<S: Fetch> {
    fetcher: S,
    cache: Option<QueryCache<S::Data>>,
    policy: CompletionPolicy,
}

impl<S> QueryClientBuilder<S>
where
    S: Fetch,
    S::Data: Clone,
{
    /// Injects a shared cache handle.
    ///
    /// Clients built from clones of the same handle observe each other's
    /// resolved results. Without this, the client gets a private cache.
    pub fn cache(mut self, cache: QueryCache<S::Data>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Sets the completion policy for superseded operations.
    pub fn completion_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the client.
    pub fn build(self) -> QueryClient<S> {
        QueryClient {
            fetcher: self.fetcher,
            cache: self.cache.unwrap_or_default(),
            machine: QueryMachine::with_policy(self.policy),
        }
    }
}
