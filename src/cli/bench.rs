//! Bench CLI subcommand.
//!
//! This subcommand measures the throughput of the encoder implementations.
//! A set of random messages is encoded by each implementation on a pool of
//! worker threads, each worker using its own encoder. The codewords produced
//! by all the implementations are compared bit by bit, and the command fails
//! if they differ.
//!
//! # Examples
//! All the implementations are benchmarked for base graph 1 with lifting size
//! 384 with
//! ```shell
//! $ nr-ldpc-encoder bench --base-graph 1 --lifting-size 384
//! ```
//! Rate-matched encoding with the packed implementation on 4 threads is
//! benchmarked with
//! ```shell
//! $ nr-ldpc-encoder bench --base-graph 2 --lifting-size 208 --threads 4 \
//!       --implementation Packed --rate-matched-length 6000
//! ```

use crate::{
    cli::Run,
    codes::nr5g::{BaseGraph, LiftingSize},
    encoder::{self, Encoder, EncoderConfig, EncoderImplementation},
    rand::{random_message, Rng, SeedableRng},
};
use clap::Parser;
use console::Term;
use rayon::prelude::*;
use std::{
    error::Error,
    time::{Duration, Instant},
};

/// Bench CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Measures the encoder throughput")]
pub struct Args {
    /// Base graph
    #[arg(long)]
    base_graph: BaseGraph,
    /// Lifting size
    #[arg(long)]
    lifting_size: LiftingSize,
    /// Encoder implementations (all by default)
    #[arg(long)]
    implementation: Vec<EncoderImplementation>,
    /// Rate-matched codeword length
    #[arg(long)]
    rate_matched_length: Option<usize>,
    /// Number of messages to encode
    #[arg(long, default_value = "10000")]
    messages: usize,
    /// Number of worker threads
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,
    /// Seed for the random messages
    #[arg(long, default_value = "0")]
    seed: u64,
}

/// Results of benchmarking an encoder implementation.
#[derive(Debug, Clone, PartialEq)]
struct Measurement {
    implementation: EncoderImplementation,
    elapsed: Duration,
    throughput_mbps: f64,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let implementations = if self.implementation.is_empty() {
            enum_iterator::all::<EncoderImplementation>().collect()
        } else {
            self.implementation.clone()
        };
        let lifting_size = usize::from(self.lifting_size);
        let config = EncoderConfig::new(self.base_graph, lifting_size)?;
        let mut rng = Rng::seed_from_u64(self.seed);
        let messages = (0..self.messages)
            .map(|_| random_message(&mut rng, config.lift_k()))
            .collect::<Vec<_>>();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;

        let term = Term::stdout();
        ctrlc::set_handler({
            let term = term.clone();
            move || {
                let _ = term.write_line("");
                let _ = term.show_cursor();
                std::process::exit(0);
            }
        })?;
        term.set_title("nr-ldpc-encoder bench");
        term.write_line(&format!(
            "{} Zc = {}, {} messages, {} threads",
            self.base_graph, self.lifting_size, self.messages, self.threads
        ))?;
        term.write_line(Self::format_header())?;
        term.hide_cursor()?;
        let ret = self.work(&term, &pool, &implementations, &messages);
        term.show_cursor()?;
        ret
    }
}

impl Args {
    fn work(
        &self,
        term: &Term,
        pool: &rayon::ThreadPool,
        implementations: &[EncoderImplementation],
        messages: &[Vec<u8>],
    ) -> Result<(), Box<dyn Error>> {
        let mut reference: Option<(EncoderImplementation, Vec<Vec<u8>>)> = None;
        for &implementation in implementations {
            term.write_line(&format!("{:>8} | running", implementation.to_string()))?;
            let start = Instant::now();
            let codewords = pool.install(|| self.encode_all(implementation, messages))?;
            let elapsed = start.elapsed();
            let bits = messages.len() * messages.first().map_or(0, Vec::len);
            let measurement = Measurement {
                implementation,
                elapsed,
                throughput_mbps: 1e-6 * bits as f64 / elapsed.as_secs_f64(),
            };
            term.move_cursor_up(1)?;
            term.clear_line()?;
            term.write_line(&Self::format_measurement(&measurement))?;
            match &reference {
                Some((first, expected)) => {
                    if let Some(k) = codewords.iter().zip(expected).position(|(a, b)| a != b) {
                        return Err(format!(
                            "{implementation} and {first} produce different codewords for message {k}"
                        )
                        .into());
                    }
                }
                None => reference = Some((implementation, codewords)),
            }
        }
        Ok(())
    }

    fn encode_all(
        &self,
        implementation: EncoderImplementation,
        messages: &[Vec<u8>],
    ) -> Result<Vec<Vec<u8>>, encoder::Error> {
        let lifting_size = usize::from(self.lifting_size);
        messages
            .par_iter()
            .map_init(
                || Encoder::new(self.base_graph, lifting_size, implementation),
                |encoder, message| {
                    let encoder = encoder.as_mut().map_err(|e| *e)?;
                    match self.rate_matched_length {
                        Some(len) => encoder.encode_rm(message, len),
                        None => encoder.encode(message),
                    }
                },
            )
            .collect()
    }

    fn format_header() -> &'static str {
        "    Impl |  Elapsed | Throughput (Mbps)\n\
         ---------|----------|------------------"
    }

    fn format_measurement(measurement: &Measurement) -> String {
        format!(
            "{:>8} | {:>8} | {:17.1}",
            measurement.implementation.to_string(),
            humantime::format_duration(Duration::from_millis(
                measurement.elapsed.as_millis() as u64
            ))
            .to_string(),
            measurement.throughput_mbps
        )
    }
}
