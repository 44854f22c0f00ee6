//! 5G NR CLI subcommand.
//!
//! This subcommand prints the parity check matrix of a 5G NR LDPC code to
//! `stdout`. By default the lifted matrix is printed in alist format. With
//! `--compact` the table of circulant shifts of the base graph is printed
//! instead, with `-1` marking zero entries. See [`crate::codes::nr5g`] for
//! more information about the 5G NR LPDC codes.
//!
//! # Examples
//! The base graph 1 with lifting size 32 can be generated with
//! ```shell
//! $ nr-ldpc-encoder 5g --base-graph 1 --lifting-size 32
//! ```
//! Its table of shifts is printed with
//! ```shell
//! $ nr-ldpc-encoder 5g --base-graph 1 --lifting-size 32 --compact
//! ```

use crate::cli::*;
use crate::{
    codes::nr5g::{BaseGraph, LiftingSize},
    encoder::EncoderConfig,
};
use clap::Parser;

/// 5G NR arguments.
#[derive(Debug, Parser)]
#[command(about = "Prints a 5G NR LDPC parity check matrix")]
pub struct Args {
    /// Base graph
    #[arg(long)]
    base_graph: BaseGraph,
    /// Lifting size
    #[arg(long)]
    lifting_size: LiftingSize,
    /// Prints the table of circulant shifts instead of the alist
    #[arg(long)]
    compact: bool,
}

impl Run for Args {
    fn run(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        if self.compact {
            let config = EncoderConfig::new(self.base_graph, usize::from(self.lifting_size))?;
            let pcm = config.pcm();
            for row in pcm.to_dense().chunks(pcm.num_cols()) {
                let row = row
                    .iter()
                    .map(|s| format!("{s:3}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{row}");
            }
        } else {
            print!("{}", self.base_graph.h(self.lifting_size).alist());
        }
        Ok(())
    }
}
