use std::future::Future;

use crate::key::QueryKey;

/// Trait for the external fetch service producing query results.
/// This trait is framework-agnostic and can be implemented for any async
/// data source; the machine has no knowledge of its transport, retry, or
/// caching behavior.
///
/// # Examples
///
/// ```rust,ignore
/// use requery_core::{Fetch, QueryKey};
/// use std::future::Ready;
///
/// struct MockFetch {
///     response: MyData,
/// }
///
/// impl Fetch for MockFetch {
///     type Data = MyData;
///     type Error = MyError;
///     type Future = Ready<Result<MyData, MyError>>;
///
///     fn fetch(&mut self, _key: &QueryKey) -> Self::Future {
///         std::future::ready(Ok(self.response.clone()))
///     }
/// }
/// ```
pub trait Fetch {
    /// The value produced on success.
    type Data;

    /// The failure description produced on error.
    type Error;

    /// The future that resolves to the outcome.
    type Future: Future<Output = Result<Self::Data, Self::Error>> + Send;

    /// Start fetching the value identified by `key`.
    fn fetch(&mut self, key: &QueryKey) -> Self::Future;
}
