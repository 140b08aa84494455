//! # wikirand
//!
//! Thin entrypoint: sets up logging, parses arguments and hands over to
//! [`wikirand_cli::run`].

use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};
use wikirand_cli::{run, Cli, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only ever carries the page.
    let level = if cli.verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wikirand={level},wikirand_cli={level}")));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_cli(cli, io::stdout().is_terminal());
    let code = run(&config, &mut io::stdout().lock(), &mut io::stderr()).await;

    Ok(ExitCode::from(code))
}
