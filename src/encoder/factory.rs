//! LDPC encoder factory.
//!
//! This module contains routines to build an LDPC encoder generically over the
//! arithmetic implementation. Such encoders are represented by `Box<dyn
//! LdpcEncoder>`, using the trait [`LdpcEncoder`].

use super::{
    arithmetic::{avx2_available, Avx2, Packed, Scalar},
    engine::Engine,
    EncoderConfig, Error,
};
use tracing::debug;

/// Generic LDPC encoder.
///
/// This trait is used to form LDPC encoder trait objects, abstracting over the
/// implementation of the encoder arithmetic.
pub trait LdpcEncoder: std::fmt::Debug + Send {
    /// Returns the configuration of the encoder.
    fn config(&self) -> &EncoderConfig;

    /// Encodes a message into a full codeword.
    ///
    /// The message and the codeword use one bit per byte. The length of
    /// `input` must be `liftK` and the length of `output` must be `liftN`.
    /// Nothing is written to `output` if an error is returned.
    fn encode(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error>;

    /// Encodes a message into a rate-matched codeword.
    ///
    /// The rate-matched length is the length of `output`. Only the parity
    /// blocks needed to fill `output` are computed.
    fn encode_rm(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error>;
}

/// LDPC encoder implementation.
///
/// This enum lists the LDPC encoder implementations corresponding to different
/// arithmetic rules. They all produce the same codewords.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, clap::ValueEnum, enum_iterator::Sequence,
)]
#[clap(rename_all = "PascalCase")]
pub enum EncoderImplementation {
    /// The [`Scalar`] implementation, processing one bit at a time.
    Scalar,
    /// The [`Avx2`] implementation, using 256-bit vectors on one bit per byte.
    Avx2,
    /// The [`Packed`] implementation, storing 64 bits per machine word.
    Packed,
}

impl EncoderImplementation {
    /// Builds an LDPC encoder.
    ///
    /// Given an encoder configuration, this function builds an LDPC encoder
    /// corresponding to this encoder implementation.
    pub fn build_encoder(&self, config: EncoderConfig) -> Result<Box<dyn LdpcEncoder>, Error> {
        debug!(
            implementation = %self,
            base_graph = %config.base_graph(),
            lifting_size = config.ls(),
            "building encoder"
        );
        Ok(match self {
            EncoderImplementation::Scalar => Box::new(Engine::new(config, Scalar::new())?),
            EncoderImplementation::Avx2 => Box::new(Engine::new(config, Avx2::new())?),
            EncoderImplementation::Packed => Box::new(Engine::new(config, Packed::new())?),
        })
    }

    /// Returns the widest implementation supported by the CPU.
    ///
    /// This is [`EncoderImplementation::Avx2`] if the CPU supports AVX2, and
    /// [`EncoderImplementation::Packed`] otherwise.
    pub fn widest_available() -> EncoderImplementation {
        if avx2_available() {
            EncoderImplementation::Avx2
        } else {
            EncoderImplementation::Packed
        }
    }
}

impl Default for EncoderImplementation {
    fn default() -> EncoderImplementation {
        EncoderImplementation::widest_available()
    }
}

impl std::str::FromStr for EncoderImplementation {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Scalar" => EncoderImplementation::Scalar,
            "Avx2" => EncoderImplementation::Avx2,
            "Packed" => EncoderImplementation::Packed,
            _ => return Err("invalid encoder implementation"),
        })
    }
}

impl std::fmt::Display for EncoderImplementation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EncoderImplementation::Scalar => "Scalar",
                EncoderImplementation::Avx2 => "Avx2",
                EncoderImplementation::Packed => "Packed",
            }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codes::nr5g::BaseGraph;

    #[test]
    fn names() {
        for implementation in enum_iterator::all::<EncoderImplementation>() {
            let name = implementation.to_string();
            assert_eq!(name.parse::<EncoderImplementation>(), Ok(implementation));
        }
        assert!("Neon".parse::<EncoderImplementation>().is_err());
    }

    #[test]
    fn widest() {
        let widest = EncoderImplementation::widest_available();
        assert_eq!(widest == EncoderImplementation::Avx2, avx2_available());
        assert_eq!(EncoderImplementation::default(), widest);
    }

    #[test]
    fn build() {
        for implementation in enum_iterator::all::<EncoderImplementation>() {
            let config = EncoderConfig::new(BaseGraph::BG1, 64).unwrap();
            let encoder = implementation.build_encoder(config.clone()).unwrap();
            assert_eq!(encoder.config(), &config);
        }
    }
}
