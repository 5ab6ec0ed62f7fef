use crate::endpoint::Endpoint;
use crate::error::{RemoteInvocationError, Result};
use crate::invoke::Invoke;
use crate::schema::{RequestFlag, SortDescriptor};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Namespace the host registers the search plugin under.
pub const DEFAULT_NAMESPACE: &str = "everything";

#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct RequestFlagsArgs<'a> {
    flags: &'a [RequestFlag],
}

#[derive(Serialize)]
struct SortArgs<'a> {
    sort: &'a SortDescriptor,
}

#[derive(Serialize)]
struct OffsetArgs {
    offset: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaxResultsArgs {
    max_results: u32,
}

#[derive(Serialize)]
struct IndexArgs {
    index: u32,
}

/// Typed front to the host's file-search plugin.
///
/// Holds no query state of its own: setters replace one field of the
/// plugin's configuration, accessors read the plugin's current result set.
/// Each method is exactly one host call.
#[derive(Debug, Clone)]
pub struct SearchClient<I> {
    invoker: I,
    namespace: String,
}

impl<I: Invoke> SearchClient<I> {
    pub fn new(invoker: I) -> Self {
        Self::with_namespace(invoker, DEFAULT_NAMESPACE)
    }

    /// Address a plugin registered under a different name.
    pub fn with_namespace(invoker: I, namespace: impl Into<String>) -> Self {
        Self {
            invoker,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    async fn call<A, R>(&self, endpoint: Endpoint, args: A) -> Result<R>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let command = endpoint.command(&self.namespace);
        let args = serde_json::to_value(args)
            .map_err(|e| RemoteInvocationError::payload(&command, e))?;

        debug!(%command, "invoking host");
        let reply = self
            .invoker
            .invoke(&command, args)
            .await
            .inspect_err(|e| warn!(%command, error = %e, "host call failed"))?;

        serde_json::from_value(reply).map_err(|e| RemoteInvocationError::payload(command, e))
    }

    /// Replace the search text. Empty text is allowed.
    pub async fn set_search(&self, query: &str) -> Result<()> {
        self.call(Endpoint::SetSearch, SearchArgs { query }).await
    }

    /// Replace the request flags. The list is forwarded as given.
    pub async fn set_request_flags(&self, flags: &[RequestFlag]) -> Result<()> {
        self.call(Endpoint::SetRequestFlags, RequestFlagsArgs { flags })
            .await
    }

    pub async fn set_sort(&self, sort: &SortDescriptor) -> Result<()> {
        self.call(Endpoint::SetSort, SortArgs { sort }).await
    }

    pub async fn set_result_offset(&self, offset: u32) -> Result<()> {
        self.call(Endpoint::SetResultOffset, OffsetArgs { offset })
            .await
    }

    pub async fn set_max_results(&self, max_results: u32) -> Result<()> {
        self.call(Endpoint::SetMaxResults, MaxResultsArgs { max_results })
            .await
    }

    /// Recompute the result set from the current configuration.
    pub async fn query(&self) -> Result<()> {
        self.call(Endpoint::Query, NoArgs {}).await
    }

    pub async fn num_results(&self) -> Result<u32> {
        self.call(Endpoint::GetNumResults, NoArgs {}).await
    }

    pub async fn full_path_results(&self) -> Result<Vec<String>> {
        self.call(Endpoint::GetFullPathResults, NoArgs {}).await
    }

    /// Full path of the result at `index`. Out-of-range indices fail on the
    /// host side.
    pub async fn result_full_path(&self, index: u32) -> Result<String> {
        self.call(Endpoint::GetResultFullPath, IndexArgs { index })
            .await
    }

    pub async fn file_name_results(&self) -> Result<Vec<String>> {
        self.call(Endpoint::GetFileNameResults, NoArgs {}).await
    }

    pub async fn result_file_name(&self, index: u32) -> Result<String> {
        self.call(Endpoint::GetResultFileName, IndexArgs { index })
            .await
    }
}
