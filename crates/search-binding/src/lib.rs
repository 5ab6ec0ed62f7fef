//! Typed async bindings for the host's file-search plugin.
//!
//! The plugin keeps the query configuration and the result set; this crate
//! only forwards typed requests to it through an [`Invoke`] implementation
//! and decodes the replies.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use search_binding::{SearchClient, TarpcInvoker};
//!
//! let client = SearchClient::new(TarpcInvoker::connect("/run/user/1000/everything-bridge/host.sock").await?);
//! client.set_search("report.pdf").await?;
//! client.set_max_results(10).await?;
//! client.query().await?;
//! for path in client.full_path_results().await? {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod invoke;
pub mod schema;

pub use client::{DEFAULT_NAMESPACE, SearchClient};
pub use endpoint::Endpoint;
pub use error::{RemoteInvocationError, Result};
pub use invoke::{Invoke, TarpcInvoker};
pub use schema::{RequestFlag, SortDescriptor};
