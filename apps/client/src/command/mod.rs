pub mod results;
pub mod search;

use crate::error::Result;

pub use results::{ResultQuery, ResultsCommand};
pub use search::{SearchCommand, SearchOptions};

#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Lines to print on success.
    async fn run(&self) -> Result<Vec<String>>;

    async fn execute(&self) -> Result<()> {
        for line in self.run().await? {
            println!("{line}");
        }
        Ok(())
    }
}
