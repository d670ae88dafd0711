//! blogctx - Entry Point

// Force-link blogctx-providers so its linkme registrations are included
extern crate blogctx_providers;

use blogctx::cli::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
