//! LDPC encoder engine.
//!
//! The engine implements the two-phase 5G NR encoding algorithm once,
//! generically over a [`BlockArithmetic`]:
//!
//! 1. Each block row accumulates the rotated message blocks. The first four
//!    parity blocks are then solved in closed form from the accumulators of
//!    the first four block rows, following the core schedule of the
//!    [`EncoderConfig`].
//! 2. Each remaining block row adds the rotated core parity blocks to its
//!    accumulator, which gives its own parity block directly.

use super::{
    arithmetic::BlockArithmetic,
    config::{EncoderConfig, CORE_COLS},
    factory::LdpcEncoder,
    rate_matching, Error,
};
use std::collections::TryReserveError;
use tracing::trace;

/// LDPC encoder engine.
///
/// Owns an [`EncoderConfig`] and the scratch blocks used by the arithmetic.
#[derive(Debug)]
pub struct Engine<A: BlockArithmetic> {
    config: EncoderConfig,
    arithmetic: A,
    message: Vec<A::Block>,
    accumulators: Vec<A::Block>,
    parity: Vec<A::Block>,
    scratch: A::Block,
    codeword: Vec<u8>,
}

fn alloc_blocks<A: BlockArithmetic>(
    arithmetic: &A,
    count: usize,
    ls: usize,
) -> Result<Vec<A::Block>, TryReserveError> {
    let mut blocks = Vec::new();
    blocks.try_reserve_exact(count)?;
    for _ in 0..count {
        blocks.push(arithmetic.zero_block(ls)?);
    }
    Ok(blocks)
}

impl<A: BlockArithmetic> Engine<A> {
    /// Creates a new encoder engine.
    ///
    /// Returns [`Error::AllocationFailure`] if the scratch memory cannot be
    /// allocated.
    pub fn new(config: EncoderConfig, arithmetic: A) -> Result<Engine<A>, Error> {
        let ls = config.ls();
        let alloc = || -> Result<_, TryReserveError> {
            let message = alloc_blocks(&arithmetic, config.bg_k(), ls)?;
            let accumulators = alloc_blocks(&arithmetic, config.bg_m(), ls)?;
            let parity = alloc_blocks(&arithmetic, config.bg_m(), ls)?;
            let scratch = arithmetic.zero_block(ls)?;
            let mut codeword = Vec::new();
            codeword.try_reserve_exact(config.lift_n())?;
            codeword.resize(config.lift_n(), 0);
            Ok((message, accumulators, parity, scratch, codeword))
        };
        let (message, accumulators, parity, scratch, codeword) =
            alloc().map_err(|_| Error::AllocationFailure)?;
        Ok(Engine {
            config,
            arithmetic,
            message,
            accumulators,
            parity,
            scratch,
            codeword,
        })
    }

    /// Returns the number of parity block rows that must be encoded to read
    /// `len` rate-matched bits.
    fn required_rows(&self, len: usize) -> usize {
        let config = &self.config;
        let ls = config.ls();
        let end = rate_matching::start_position(config) + len;
        if end >= config.lift_n() {
            return config.bg_m();
        }
        end.div_ceil(ls)
            .saturating_sub(config.bg_k())
            .clamp(CORE_COLS, config.bg_m())
    }

    // Computes the parity blocks of the first `num_rows` block rows.
    fn encode_rows(&mut self, input: &[u8], num_rows: usize) {
        let Engine {
            config,
            arithmetic,
            message,
            accumulators,
            parity,
            scratch,
            ..
        } = self;
        let ls = config.ls();

        for (block, bits) in message.iter_mut().zip(input.chunks_exact(ls)) {
            arithmetic.load(bits, block);
        }

        for (row, acc) in accumulators.iter_mut().enumerate().take(num_rows) {
            arithmetic.clear(acc);
            for e in config.message_edges(row) {
                arithmetic.xor_rotated(acc, &message[e.col], e.shift);
            }
        }

        // core parity
        let core = config.core();
        arithmetic.copy_rotated(scratch, &accumulators[0], 0);
        for acc in &accumulators[1..CORE_COLS] {
            arithmetic.xor_rotated(scratch, acc, 0);
        }
        arithmetic.copy_rotated(&mut parity[0], scratch, core.seed_rotation);
        for step in core.steps.iter() {
            arithmetic.copy_rotated(scratch, &accumulators[step.row], 0);
            for e in step.known.iter() {
                arithmetic.xor_rotated(scratch, &parity[e.col], e.shift);
            }
            arithmetic.copy_rotated(&mut parity[step.target], scratch, step.rotation);
        }

        // extension parity
        let (core_parity, extension_parity) = parity.split_at_mut(CORE_COLS);
        for ((row, acc), p) in config
            .extension()
            .iter()
            .zip(&mut accumulators[CORE_COLS..num_rows])
            .zip(extension_parity.iter_mut())
        {
            for e in row.core.iter() {
                arithmetic.xor_rotated(acc, &core_parity[e.col], e.shift);
            }
            arithmetic.copy_rotated(p, acc, row.rotation);
        }
    }

    // Writes the systematic bits and the first `num_rows` parity blocks.
    fn write_codeword(&self, input: &[u8], output: &mut [u8], num_rows: usize) {
        let ls = self.config.ls();
        let (systematic, parity_bits) = output.split_at_mut(self.config.lift_k());
        systematic.copy_from_slice(input);
        for (block, bits) in self
            .parity
            .iter()
            .zip(parity_bits.chunks_exact_mut(ls))
            .take(num_rows)
        {
            self.arithmetic.store(block, bits);
        }
    }

    fn check_input(&self, input: &[u8]) -> Result<(), Error> {
        let expected = self.config.lift_k();
        if input.len() != expected {
            return Err(Error::InvalidInputLength {
                expected,
                actual: input.len(),
            });
        }
        Ok(())
    }
}

impl<A: BlockArithmetic> LdpcEncoder for Engine<A> {
    fn config(&self) -> &EncoderConfig {
        &self.config
    }

    fn encode(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        self.check_input(input)?;
        let expected = self.config.lift_n();
        if output.len() != expected {
            return Err(Error::InvalidOutputLength {
                expected,
                actual: output.len(),
            });
        }
        let num_rows = self.config.bg_m();
        trace!(num_rows, "encoding codeword");
        self.encode_rows(input, num_rows);
        self.write_codeword(input, output, num_rows);
        Ok(())
    }

    fn encode_rm(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        self.check_input(input)?;
        let len = output.len();
        if len == 0 || len > rate_matching::max_length(&self.config) {
            return Err(Error::InvalidRateMatchLength(len));
        }
        let num_rows = self.required_rows(len);
        trace!(num_rows, len, "encoding rate-matched codeword");
        self.encode_rows(input, num_rows);
        let mut codeword = std::mem::take(&mut self.codeword);
        self.write_codeword(input, &mut codeword, num_rows);
        rate_matching::circular_read(&codeword, rate_matching::start_position(&self.config), output);
        self.codeword = codeword;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        codes::nr5g::BaseGraph,
        encoder::arithmetic::{Packed, Scalar},
    };

    #[test]
    fn required_rows() {
        // BG2, Zc = 2: liftK = 20, liftN = 104, start = 4
        let config = EncoderConfig::new(BaseGraph::BG2, 2).unwrap();
        let engine = Engine::new(config, Scalar::new()).unwrap();
        // the core is always encoded
        assert_eq!(engine.required_rows(1), CORE_COLS);
        // bits 4..28 need the first 4 parity blocks
        assert_eq!(engine.required_rows(24), 4);
        assert_eq!(engine.required_rows(25), 5);
        assert_eq!(engine.required_rows(99), 42);
        assert_eq!(engine.required_rows(100), 42);
        assert_eq!(engine.required_rows(1000), 42);
    }

    #[test]
    fn partial_rows_match_full_codeword() {
        let config = EncoderConfig::new(BaseGraph::BG1, 10).unwrap();
        let mut engine = Engine::new(config, Packed::new()).unwrap();
        let input = (0..220).map(|j| ((j * 7 + 3) % 5 == 0) as u8).collect::<Vec<_>>();
        let mut full = vec![0; 680];
        engine.encode(&input, &mut full).unwrap();
        for len in [1, 150, 221, 300, 659, 660, 661, 1500] {
            let mut rm = vec![0; len];
            engine.encode_rm(&input, &mut rm).unwrap();
            for (k, &x) in rm.iter().enumerate() {
                assert_eq!(x, full[(20 + k) % 680], "len = {len}, k = {k}");
            }
        }
    }
}
