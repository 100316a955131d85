//! Binary crate for the `weatherdash` server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Installing the tracing subscriber
//! - Serving the dashboard until Ctrl-C

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
