use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod export;

use cli::Args;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pesticides=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    export::run(&args)?;

    Ok(())
}
