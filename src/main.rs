use std::path::Path;

use clap::Parser;
use plagcheck::{cli, config, errors::PlagcheckError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Config is read before logging so its debug toggle can set the level.
    let config = match cli.command.config_path() {
        Some(path) => config::parse_config(Path::new(path)).await.map(Some),
        None => Ok(None),
    };
    let debug = matches!(&config, Ok(Some(c)) if c.debug_enabled());

    let log_level = cli.log_level(debug);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    let result = match config {
        Ok(config) => run(cli.command, config.unwrap_or_default()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(command: cli::Commands, config: config::PlagcheckConfig) -> Result<(), PlagcheckError> {
    match command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args, config).await,
        cli::Commands::Compare(args) => cli::compare::handle_compare(args).await,
        cli::Commands::Validate(args) => cli::validate::handle_validate(args).await,
    }
}
