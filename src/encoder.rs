//! 5G NR LDPC encoder.
//!
//! This module implements a systematic encoder for the 5G NR LDPC codes
//! defined by the two base graphs of TS 38.212. The parity part of the
//! lifted parity check matrix of these codes is formed by a dual-diagonal
//! core of 4 block columns followed by an identity extension. The encoder
//! exploits this structure to avoid any matrix inversion: the core parity
//! blocks are solved in closed form from the block row accumulators of the
//! message, and each extension parity block is a direct sparse product of
//! the message and the core parity.
//!
//! Messages and codewords hold one bit per byte. The codeword is formed by
//! the message bits followed by the parity bits. Bytes equal to
//! [`FILLER_BIT`] in the message mark filler bits. They count as zeros in the
//! parity computation and are copied unchanged to the codeword.
//!
//! The encoding algorithm is implemented once, generically over the
//! [`BlockArithmetic`](arithmetic::BlockArithmetic) trait. The
//! [`EncoderImplementation`] enum selects one of its implementations at
//! construction time.
//!
//! # Examples
//! ```
//! # use nr_ldpc_encoder::codes::nr5g::BaseGraph;
//! # use nr_ldpc_encoder::encoder::{Encoder, EncoderImplementation};
//! let mut encoder = Encoder::new(BaseGraph::BG2, 2, EncoderImplementation::Scalar)?;
//! let codeword = encoder.encode(&[0; 20])?;
//! assert_eq!(codeword, vec![0; 104]);
//! let rate_matched = encoder.encode_rm(&[0; 20], 60)?;
//! assert_eq!(rate_matched.len(), 60);
//! encoder.release();
//! # Ok::<(), nr_ldpc_encoder::encoder::Error>(())
//! ```

use crate::codes::nr5g::BaseGraph;
use thiserror::Error;
use tracing::debug;

pub mod arithmetic;
mod config;
mod engine;
mod factory;
pub mod rate_matching;

pub use config::{CompactPcm, Edge, EncoderConfig, CORE_COLS};
pub use engine::Engine;
pub use factory::{EncoderImplementation, LdpcEncoder};

/// Marker value for filler bits in a message.
pub const FILLER_BIT: u8 = 254;

/// LDPC encoder error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The lifting size is not one of the values of TS 38.212 Table 5.3.2-1.
    #[error("unsupported lifting size {0}")]
    UnsupportedLiftingSize(usize),
    /// The scratch memory of the encoder could not be allocated.
    #[error("failed to allocate the encoder memory")]
    AllocationFailure,
    /// The length of the message is not the number of message bits of the
    /// code.
    #[error("invalid input length {actual} (expected {expected})")]
    InvalidInputLength {
        /// Expected length.
        expected: usize,
        /// Length given by the caller.
        actual: usize,
    },
    /// The rate-matched length is zero or larger than the supported maximum.
    #[error("invalid rate-matched length {0}")]
    InvalidRateMatchLength(usize),
    /// The length of the codeword buffer is not the codeword length of the
    /// code.
    #[error("invalid output length {actual} (expected {expected})")]
    InvalidOutputLength {
        /// Expected length.
        expected: usize,
        /// Length given by the caller.
        actual: usize,
    },
    /// The parity part of the base graph does not have a dual-diagonal core
    /// followed by an identity extension, so the encoder cannot be
    /// constructed.
    #[error("the parity part of the base graph is not dual-diagonal")]
    NotDualDiagonal,
}

/// Encoder builder.
///
/// This struct contains all the parameters needed to create an [`Encoder`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct EncoderBuilder {
    /// Encoder implementation.
    pub implementation: EncoderImplementation,
    /// Base graph.
    pub base_graph: BaseGraph,
    /// Lifting size.
    pub lifting_size: usize,
}

impl EncoderBuilder {
    /// Creates an encoder.
    pub fn build(self) -> Result<Encoder, Error> {
        Encoder::new(self.base_graph, self.lifting_size, self.implementation)
    }
}

/// 5G NR LDPC encoder.
///
/// The encoder is bound to one base graph and lifting size and owns the
/// scratch memory of one [`EncoderImplementation`]. Encoding takes `&mut
/// self`, so each thread needs its own encoder. Independent encoders share
/// no state.
#[derive(Debug)]
pub struct Encoder {
    implementation: EncoderImplementation,
    inner: Box<dyn LdpcEncoder>,
}

impl Encoder {
    /// Creates an encoder.
    ///
    /// Fails with [`Error::UnsupportedLiftingSize`] if `lifting_size` is not
    /// a standardized lifting size, and with [`Error::AllocationFailure`] if
    /// the scratch memory cannot be allocated.
    pub fn new(
        base_graph: BaseGraph,
        lifting_size: usize,
        implementation: EncoderImplementation,
    ) -> Result<Encoder, Error> {
        let config = EncoderConfig::new(base_graph, lifting_size)?;
        debug!(
            k = config.lift_k(),
            m = config.lift_m(),
            n = config.lift_n(),
            edges = config.pcm().num_edges(),
            "lifted base graph"
        );
        let inner = implementation.build_encoder(config)?;
        Ok(Encoder {
            implementation,
            inner,
        })
    }

    /// Returns the configuration of the encoder.
    pub fn config(&self) -> &EncoderConfig {
        self.inner.config()
    }

    /// Returns the implementation used by the encoder.
    pub fn implementation(&self) -> EncoderImplementation {
        self.implementation
    }

    /// Encodes a message.
    ///
    /// The message must have `liftK` bits. The returned codeword has `liftN`
    /// bits.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>, Error> {
        let mut codeword = vec![0; self.config().lift_n()];
        self.encode_into(input, &mut codeword)?;
        Ok(codeword)
    }

    /// Encodes a message into a caller-provided buffer.
    ///
    /// The length of `output` must be `liftN`. The buffer is left untouched
    /// if an error is returned.
    pub fn encode_into(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        self.inner.encode(input, output)
    }

    /// Encodes a message into a rate-matched codeword of `len` bits.
    ///
    /// The rate-matched codeword is read circularly from the full codeword,
    /// starting at bit `2*Zc`. The length must be between 1 and
    /// [`rate_matching::max_length`].
    pub fn encode_rm(&mut self, input: &[u8], len: usize) -> Result<Vec<u8>, Error> {
        let expected = self.config().lift_k();
        if input.len() != expected {
            return Err(Error::InvalidInputLength {
                expected,
                actual: input.len(),
            });
        }
        if len > rate_matching::max_length(self.config()) {
            return Err(Error::InvalidRateMatchLength(len));
        }
        let mut output = vec![0; len];
        self.encode_rm_into(input, &mut output)?;
        Ok(output)
    }

    /// Encodes a message into a caller-provided rate-matched buffer.
    ///
    /// The rate-matched length is the length of `output`.
    pub fn encode_rm_into(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        self.inner.encode_rm(input, output)
    }

    /// Releases the encoder and its scratch memory.
    pub fn release(self) {
        debug!(
            implementation = %self.implementation,
            base_graph = %self.config().base_graph(),
            lifting_size = self.config().ls(),
            "releasing encoder"
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        codes::nr5g::LiftingSize,
        rand::{random_message, Rng, SeedableRng},
    };
    use proptest::prelude::*;

    fn bits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    fn unit_message(len: usize, bit: usize) -> Vec<u8> {
        let mut message = vec![0; len];
        message[bit] = 1;
        message
    }

    fn all_implementations() -> impl Iterator<Item = EncoderImplementation> + Clone {
        enum_iterator::all::<EncoderImplementation>()
    }

    #[test]
    fn all_zero() {
        for implementation in all_implementations() {
            let mut encoder = Encoder::new(BaseGraph::BG2, 2, implementation).unwrap();
            assert_eq!(encoder.encode(&[0; 20]).unwrap(), vec![0; 104]);
        }
    }

    #[test]
    fn reference_codewords() {
        let cases = [
            (
                BaseGraph::BG2,
                20,
                0,
                "10000000000000000000101110101010100100100111111101110101100011000001001000100010000100011011100011111111",
            ),
            (
                BaseGraph::BG2,
                20,
                7,
                "00000001000000000000101110101111110110100010011001100101000111100010000000000000000110011111000011101111",
            ),
            (
                BaseGraph::BG1,
                44,
                0,
                "1000000000000000000000000000000000000000000011010010011001100101001110001011110100101000100001000100101010100100011101010100010001011000",
            ),
        ];
        for (base_graph, k, bit, codeword) in cases {
            for implementation in all_implementations() {
                let mut encoder = Encoder::new(base_graph, 2, implementation).unwrap();
                let message = unit_message(k, bit);
                assert_eq!(
                    encoder.encode(&message).unwrap(),
                    bits(codeword),
                    "{base_graph}, bit {bit}, {implementation}"
                );
            }
        }
    }

    #[test]
    fn parity_checks_all_lifting_sizes() {
        let mut rng = Rng::seed_from_u64(0);
        for base_graph in enum_iterator::all::<BaseGraph>() {
            for zc in LiftingSize::iter() {
                let h = base_graph.h(zc);
                let mut encoder =
                    Encoder::new(base_graph, usize::from(zc), EncoderImplementation::Packed)
                        .unwrap();
                let message = random_message(&mut rng, encoder.config().lift_k());
                let codeword = encoder.encode(&message).unwrap();
                assert_eq!(&codeword[..message.len()], &message[..]);
                assert!(h.syndrome_is_zero(&codeword), "{base_graph}, Zc = {zc}");
            }
        }
    }

    #[test]
    fn filler_bits() {
        let mut rng = Rng::seed_from_u64(1);
        let h = BaseGraph::BG1.h(LiftingSize::new(24).unwrap());
        for implementation in all_implementations() {
            let mut encoder = Encoder::new(BaseGraph::BG1, 24, implementation).unwrap();
            let mut message = random_message(&mut rng, 528);
            let mut zeroed = message.clone();
            for j in 500..528 {
                message[j] = FILLER_BIT;
                zeroed[j] = 0;
            }
            let codeword = encoder.encode(&message).unwrap();
            assert_eq!(&codeword[..528], &message[..]);
            assert_eq!(&codeword[528..], &encoder.encode(&zeroed).unwrap()[528..]);
            assert!(h.syndrome_is_zero(&codeword));
        }
    }

    #[test]
    fn invalid_lengths() {
        let mut encoder = Encoder::new(BaseGraph::BG2, 2, EncoderImplementation::Scalar).unwrap();
        assert_eq!(
            encoder.encode(&[0; 19]),
            Err(Error::InvalidInputLength {
                expected: 20,
                actual: 19
            })
        );
        assert_eq!(
            encoder.encode_rm(&[0; 21], 10),
            Err(Error::InvalidInputLength {
                expected: 20,
                actual: 21
            })
        );
        assert_eq!(
            encoder.encode_rm(&[0; 20], 0),
            Err(Error::InvalidRateMatchLength(0))
        );
        assert_eq!(
            encoder.encode_rm(&[0; 20], 801),
            Err(Error::InvalidRateMatchLength(801))
        );
        assert_eq!(encoder.encode_rm(&[0; 20], 800).map(|c| c.len()), Ok(800));

        let mut output = vec![7; 103];
        assert_eq!(
            encoder.encode_into(&[1; 20], &mut output),
            Err(Error::InvalidOutputLength {
                expected: 104,
                actual: 103
            })
        );
        assert!(output.iter().all(|&x| x == 7));
        let mut output = vec![7; 104];
        assert!(encoder.encode_into(&[1; 19], &mut output).is_err());
        assert!(output.iter().all(|&x| x == 7));
    }

    #[test]
    fn rate_matched_errors() {
        let mut encoder = Encoder::new(BaseGraph::BG2, 2, EncoderImplementation::Packed).unwrap();
        // the input length is reported first by both entry points
        let input_error = Error::InvalidInputLength {
            expected: 20,
            actual: 19,
        };
        assert_eq!(encoder.encode_rm(&[1; 19], 801), Err(input_error));
        let mut output = vec![7; 801];
        assert_eq!(encoder.encode_rm_into(&[1; 19], &mut output), Err(input_error));
        assert!(output.iter().all(|&x| x == 7));

        let mut output = vec![7; 60];
        assert!(encoder.encode_rm_into(&[1; 19], &mut output).is_err());
        assert!(output.iter().all(|&x| x == 7));
        assert_eq!(
            encoder.encode_rm_into(&[1; 20], &mut []),
            Err(Error::InvalidRateMatchLength(0))
        );
    }

    #[test]
    fn rate_matched_filler_bits() {
        let mut rng = Rng::seed_from_u64(3);
        for implementation in all_implementations() {
            let mut encoder = Encoder::new(BaseGraph::BG2, 16, implementation).unwrap();
            let mut message = random_message(&mut rng, 160);
            for x in message[140..].iter_mut() {
                *x = FILLER_BIT;
            }
            let codeword = encoder.encode(&message).unwrap();
            let len = 900;
            let rm = encoder.encode_rm(&message, len).unwrap();
            for (k, &x) in rm.iter().enumerate() {
                assert_eq!(x, codeword[(32 + k) % 832], "{implementation}, k = {k}");
            }
            // filler bits are read out unchanged
            assert_eq!(&rm[108..128], &[FILLER_BIT; 20]);
        }
    }

    #[test]
    fn unsupported_lifting_size() {
        let builder = EncoderBuilder {
            implementation: EncoderImplementation::Scalar,
            base_graph: BaseGraph::BG1,
            lifting_size: 17,
        };
        assert_eq!(builder.build().unwrap_err(), Error::UnsupportedLiftingSize(17));
    }

    #[test]
    fn builder() {
        let builder = EncoderBuilder {
            implementation: EncoderImplementation::widest_available(),
            base_graph: BaseGraph::BG1,
            lifting_size: 384,
        };
        let encoder = builder.build().unwrap();
        assert_eq!(encoder.implementation(), builder.implementation);
        assert_eq!(encoder.config().lift_k(), 8448);
        assert_eq!(encoder.config().lift_n(), 26112);
        encoder.release();
    }

    #[test]
    fn independent_encoders_in_threads() {
        let mut rng = Rng::seed_from_u64(2);
        let message = random_message(&mut rng, 22 * 96);
        let mut reference = Encoder::new(BaseGraph::BG1, 96, EncoderImplementation::Scalar).unwrap();
        let expected = reference.encode(&message).unwrap();
        std::thread::scope(|s| {
            let handles = all_implementations()
                .cycle()
                .take(6)
                .map(|implementation| {
                    let message = &message;
                    s.spawn(move || {
                        let mut encoder = Encoder::new(BaseGraph::BG1, 96, implementation).unwrap();
                        (0..4)
                            .map(|_| encoder.encode(message).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();
            for handle in handles {
                for codeword in handle.join().unwrap() {
                    assert_eq!(codeword, expected);
                }
            }
        });
    }

    fn configuration() -> impl Strategy<Value = (BaseGraph, usize)> {
        let sizes = LiftingSize::iter().map(usize::from).collect::<Vec<_>>();
        (
            prop_oneof![Just(BaseGraph::BG1), Just(BaseGraph::BG2)],
            proptest::sample::select(sizes),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn systematic_and_parity_checks((base_graph, ls) in configuration(), seed in any::<u64>()) {
            let mut encoder = Encoder::new(base_graph, ls, EncoderImplementation::widest_available()).unwrap();
            let message = random_message(&mut Rng::seed_from_u64(seed), encoder.config().lift_k());
            let codeword = encoder.encode(&message).unwrap();
            prop_assert_eq!(&codeword[..message.len()], &message[..]);
            let h = base_graph.h(encoder.config().lifting_size());
            prop_assert!(h.syndrome_is_zero(&codeword));
        }

        #[test]
        fn implementations_agree((base_graph, ls) in configuration(), seed in any::<u64>()) {
            let mut encoders = all_implementations()
                .map(|implementation| Encoder::new(base_graph, ls, implementation).unwrap())
                .collect::<Vec<_>>();
            let message = random_message(&mut Rng::seed_from_u64(seed), encoders[0].config().lift_k());
            let rm_len = encoders[0].config().lift_n() / 3;
            let expected = encoders[0].encode(&message).unwrap();
            let expected_rm = encoders[0].encode_rm(&message, rm_len).unwrap();
            for encoder in encoders[1..].iter_mut() {
                prop_assert_eq!(&encoder.encode(&message).unwrap(), &expected);
                prop_assert_eq!(&encoder.encode_rm(&message, rm_len).unwrap(), &expected_rm);
            }
        }

        #[test]
        fn rate_matched_prefix(
            (base_graph, ls) in configuration(),
            seed in any::<u64>(),
            a in 0.0..1.0f64,
            b in 0.0..1.0f64,
        ) {
            let mut encoder = Encoder::new(base_graph, ls, EncoderImplementation::Packed).unwrap();
            let message = random_message(&mut Rng::seed_from_u64(seed), encoder.config().lift_k());
            let transmitted = encoder.config().lift_n() - 2 * ls;
            let len1 = 1 + (a.min(b) * (transmitted - 1) as f64) as usize;
            let len2 = 1 + (a.max(b) * (transmitted - 1) as f64) as usize;
            let short = encoder.encode_rm(&message, len1).unwrap();
            let long = encoder.encode_rm(&message, len2).unwrap();
            prop_assert_eq!(&short[..], &long[..len1]);
        }

        #[test]
        fn rate_matched_wrap(
            (base_graph, ls) in configuration(),
            seed in any::<u64>(),
            extra in 1usize..700,
        ) {
            let mut encoder = Encoder::new(base_graph, ls, EncoderImplementation::Avx2).unwrap();
            let message = random_message(&mut Rng::seed_from_u64(seed), encoder.config().lift_k());
            let n = encoder.config().lift_n();
            let codeword = encoder.encode(&message).unwrap();
            let len = n - 2 * ls + extra;
            let rm = encoder.encode_rm(&message, len).unwrap();
            for (k, &x) in rm.iter().enumerate() {
                prop_assert_eq!(x, codeword[(2 * ls + k) % n]);
            }
        }
    }
}
