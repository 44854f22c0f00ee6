//! Encode CLI subcommand.
//!
//! This command can be used to encode messages with a 5G NR LDPC code. The
//! input file contains messages of `liftK` unpacked bits (one bit per byte),
//! and the output file receives the codewords, also as unpacked bits. Bytes
//! with the value 254 in the input mark filler bits.
//!
//! # Examples
//! Messages for base graph 2 with lifting size 52 are encoded into
//! rate-matched codewords of 1500 bits with
//! ```shell
//! $ nr-ldpc-encoder encode --base-graph 2 --lifting-size 52 \
//!       --rate-matched-length 1500 messages.u8 codewords.u8
//! ```

use crate::{
    cli::Run,
    codes::nr5g::{BaseGraph, LiftingSize},
    encoder::{Encoder, EncoderImplementation},
};
use clap::Parser;
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, ErrorKind, Read, Write},
    path::PathBuf,
};

/// Encode CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Performs LDPC encoding")]
pub struct Args {
    /// input file (messages as unpacked bits)
    pub input: PathBuf,
    /// output file (codewords as unpacked bits)
    pub output: PathBuf,
    /// Base graph
    #[arg(long)]
    pub base_graph: BaseGraph,
    /// Lifting size
    #[arg(long)]
    pub lifting_size: LiftingSize,
    /// Encoder implementation
    #[arg(long, default_value_t = EncoderImplementation::widest_available())]
    pub implementation: EncoderImplementation,
    /// Rate-matched codeword length
    #[arg(long)]
    pub rate_matched_length: Option<usize>,
    /// Checks that each full codeword satisfies the parity checks
    #[arg(long, conflicts_with = "rate_matched_length")]
    pub check: bool,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let mut encoder = Encoder::new(
            self.base_graph,
            usize::from(self.lifting_size),
            self.implementation,
        )?;
        let h = self.check.then(|| self.base_graph.h(self.lifting_size));
        let mut input = File::open(&self.input)?;
        let mut output = BufWriter::new(File::create(&self.output)?);
        let mut message = vec![0; encoder.config().lift_k()];
        let mut codeword = vec![0; self.rate_matched_length.unwrap_or(encoder.config().lift_n())];
        let mut num_words = 0;
        loop {
            match input.read_exact(&mut message[..]) {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                ret => ret?,
            };
            if self.rate_matched_length.is_some() {
                encoder.encode_rm_into(&message, &mut codeword)?;
            } else {
                encoder.encode_into(&message, &mut codeword)?;
            }
            if let Some(h) = &h {
                if !h.syndrome_is_zero(&codeword) {
                    return Err(format!("codeword {num_words} fails the parity checks").into());
                }
            }
            output.write_all(&codeword)?;
            num_words += 1;
        }
        output.flush()?;
        tracing::info!(num_words, "encoding finished");
        encoder.release();
        Ok(())
    }
}
