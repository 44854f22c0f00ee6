use clap::Parser;
use nr_ldpc_encoder::cli::{Args, Run};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[termination::display]
fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Args::parse().run()
}
