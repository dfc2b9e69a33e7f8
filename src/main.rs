//! issue-graph CLI entry point.

use clap::Parser;

use issue_graph::cli::{self, commands, Cli, Commands};
use issue_graph::infrastructure::config::ConfigLoader;
use issue_graph::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Export(args) => commands::export::execute(args, config, cli.json).await,
        Commands::Relations(args) => commands::relations::execute(args, config, cli.json).await,
        Commands::Refs(args) => commands::refs::execute(args, config, cli.json).await,
    };

    if let Err(err) = result {
        cli::handle_error(err, cli.json);
    }
}
