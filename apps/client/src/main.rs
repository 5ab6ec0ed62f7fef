mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use search_binding::{SearchClient, TarpcInvoker};
use tracing::{Level, debug};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let Some(command) = command_line.command else {
        cli::Cli::command().print_help()?;
        return Ok(());
    };

    let cfg = config::Config::load().wrap_err("Load configuration error")?;
    debug!("Configuration: {:?}", cfg.config_path);

    let invoker = TarpcInvoker::connect(&cfg.socket_path)
        .await
        .wrap_err_with(|| format!("Could not connect to host at {:?}", cfg.socket_path))?;
    let client = SearchClient::with_namespace(invoker, cfg.namespace.clone());

    let cmd: Box<dyn command::Command> = match command {
        cli::Commands::Search(args) => Box::new(command::SearchCommand::new(
            client,
            command::SearchOptions::from_cli(args, &cfg),
        )),
        cli::Commands::Count => Box::new(command::ResultsCommand::new(client, command::ResultQuery::Count)),
        cli::Commands::Paths => Box::new(command::ResultsCommand::new(client, command::ResultQuery::Paths)),
        cli::Commands::Names => Box::new(command::ResultsCommand::new(client, command::ResultQuery::Names)),
        cli::Commands::Path { index } => {
            Box::new(command::ResultsCommand::new(client, command::ResultQuery::Path(index)))
        }
        cli::Commands::Name { index } => {
            Box::new(command::ResultsCommand::new(client, command::ResultQuery::Name(index)))
        }
    };
    cmd.execute().await?;

    Ok(())
}
