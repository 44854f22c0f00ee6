//! `nr-ldpc-encoder` CLI application
//!
//! The CLI application is organized in several subcommands. The
//! supported subcommands can be seen by running `nr-ldpc-encoder`.
//! See the modules below for examples and more information about
//! how to use each subcommand.

use clap::Parser;
use std::error::Error;

pub mod bench;
pub mod encode;
pub mod nr5g;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(author, version, name = "nr-ldpc-encoder", about = "5G NR LDPC encoder")]
pub enum Args {
    /// bench subcommand
    Bench(bench::Args),
    /// encode subcommand
    Encode(encode::Args),
    /// 5g subcommand
    #[command(name = "5g")]
    NR5G(nr5g::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Bench(x) => x.run(),
            Args::Encode(x) => x.run(),
            Args::NR5G(x) => x.run(),
        }
    }
}
