//! Lunch Voting - Application entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lunch_voting::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Environment is read once; commands receive an owned Config
    let config = Config::from_env();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Set up the tracing subscriber. `--verbose` wins over RUST_LOG.
fn init_tracing(verbose: bool) {
    let filter = match (verbose, std::env::var("RUST_LOG")) {
        (true, _) => "debug".to_string(),
        (false, Ok(spec)) => spec,
        (false, Err(_)) => "info".to_string(),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
