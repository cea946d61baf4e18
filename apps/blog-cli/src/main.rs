//! # Blog CLI
//!
//! Terminal front end for the blog API: list, read, write, edit and delete posts.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod commands;
mod views;

use cli::{Cli, Command};
use client::PostsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    let client = PostsClient::new(&cli.api_url);
    let output = commands::run(&client, cli.command.unwrap_or(Command::List)).await?;
    println!("{output}");

    Ok(())
}

/// `--debug` directive; events are logged under the binary's crate name.
const DEBUG_FILTER: &str = concat!(env!("CARGO_CRATE_NAME"), "=debug");

/// Logs go to stderr so they never mix with rendered views.
fn init_tracing(debug: bool) {
    let default = if debug { DEBUG_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
