use super::Command;
use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_binding::{Invoke, RequestFlag, SearchClient, SortDescriptor};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub text: String,
    /// Not sent when empty.
    pub flags: Vec<RequestFlag>,
    pub sort: Option<SortDescriptor>,
    pub offset: u32,
    pub max_results: u32,
    pub names: bool,
}

impl SearchOptions {
    /// Command-line values win; flags and page size fall back to the config.
    pub fn from_cli(args: SearchArgs, cfg: &Config) -> Self {
        let flags = if args.flags.is_empty() {
            cfg.request_flags.clone()
        } else {
            args.flags
        };

        Self {
            text: args.text,
            flags,
            sort: args.sort,
            offset: args.offset,
            max_results: args.max_results.unwrap_or(cfg.max_results),
            names: args.names,
        }
    }
}

/// Sets every query field on the plugin, runs the query and reads the
/// whole result set back.
pub struct SearchCommand<I> {
    client: SearchClient<I>,
    options: SearchOptions,
}

impl<I: Invoke> SearchCommand<I> {
    pub fn new(client: SearchClient<I>, options: SearchOptions) -> Self {
        Self { client, options }
    }
}

#[async_trait::async_trait]
impl<I: Invoke + 'static> Command for SearchCommand<I> {
    async fn run(&self) -> Result<Vec<String>> {
        let opts = &self.options;
        let client = &self.client;

        client
            .set_search(&opts.text)
            .await
            .wrap_err("Set search text error")?;
        if !opts.flags.is_empty() {
            client
                .set_request_flags(&opts.flags)
                .await
                .wrap_err("Set request flags error")?;
        }
        if let Some(sort) = &opts.sort {
            client.set_sort(sort).await.wrap_err("Set sort error")?;
        }
        client
            .set_result_offset(opts.offset)
            .await
            .wrap_err("Set result offset error")?;
        client
            .set_max_results(opts.max_results)
            .await
            .wrap_err("Set max results error")?;

        client.query().await.wrap_err("Query error")?;

        let count = client.num_results().await.wrap_err("Get result count error")?;
        info!("Query {:?} finished with {} results", opts.text, count);

        let lines = if opts.names {
            client.file_name_results().await
        } else {
            client.full_path_results().await
        };
        lines.wrap_err("Get results error")
    }
}
