mod cli;
mod application;
mod domain;
mod data;
mod engine;
mod render;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Logs go to stderr so a sheet on stdout can be piped or redirected
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gd_practice=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
