use clap::{ArgAction, Args, Parser, Subcommand};
use search_binding::{RequestFlag, SortDescriptor};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the plugin's query, run it and print the results
    Search(SearchArgs),
    /// Print the number of results in the current result set
    Count,
    /// Print every full path in the current result set
    Paths,
    /// Print every file name in the current result set
    Names,
    /// Print the full path of one result
    Path {
        index: u32,
    },
    /// Print the file name of one result
    Name {
        index: u32,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to search for
    pub text: String,

    /// Request flag to enable; repeat for several (e.g. --flag FileName --flag Path)
    #[arg(long = "flag", value_name = "FLAG")]
    pub flags: Vec<RequestFlag>,

    /// Sort order, as JSON understood by the plugin. A bare word is sent as a JSON string.
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortDescriptor>,

    /// Skip this many results
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Return at most this many results (defaults to the configured value)
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Print file names instead of full paths
    #[arg(long)]
    pub names: bool,
}

fn parse_sort(s: &str) -> Result<SortDescriptor, String> {
    match s.parse::<SortDescriptor>() {
        Ok(sort) => Ok(sort),
        Err(_) if !s.trim().is_empty() && !s.trim_start().starts_with(['{', '[', '"']) => {
            Ok(SortDescriptor::from_value(s.into()))
        }
        Err(e) => Err(format!("invalid sort descriptor: {e}")),
    }
}
