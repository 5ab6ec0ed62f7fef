use super::Command;
use crate::error::{Result, WrapErr};
use search_binding::{Invoke, SearchClient};

/// What to read from the plugin's current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultQuery {
    Count,
    Paths,
    Names,
    Path(u32),
    Name(u32),
}

/// Reads the result set left by the last query without touching the
/// query configuration.
pub struct ResultsCommand<I> {
    client: SearchClient<I>,
    query: ResultQuery,
}

impl<I: Invoke> ResultsCommand<I> {
    pub fn new(client: SearchClient<I>, query: ResultQuery) -> Self {
        Self { client, query }
    }
}

#[async_trait::async_trait]
impl<I: Invoke + 'static> Command for ResultsCommand<I> {
    async fn run(&self) -> Result<Vec<String>> {
        let client = &self.client;
        match self.query {
            ResultQuery::Count => {
                let count = client.num_results().await.wrap_err("Get result count error")?;
                Ok(vec![count.to_string()])
            }
            ResultQuery::Paths => client
                .full_path_results()
                .await
                .wrap_err("Get full paths error"),
            ResultQuery::Names => client
                .file_name_results()
                .await
                .wrap_err("Get file names error"),
            ResultQuery::Path(index) => {
                let path = client
                    .result_full_path(index)
                    .await
                    .wrap_err_with(|| format!("Get full path of result {index} error"))?;
                Ok(vec![path])
            }
            ResultQuery::Name(index) => {
                let name = client
                    .result_file_name(index)
                    .await
                    .wrap_err_with(|| format!("Get file name of result {index} error"))?;
                Ok(vec![name])
            }
        }
    }
}
