//! Binary crate for the weather page server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Startup wiring (configuration, logging, listener)
//! - The HTTP surface and page rendering

use clap::Parser;

mod cli;
mod page;
mod template;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
