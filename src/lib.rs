//! # 5G NR LDPC encoder
//!
//! `nr_ldpc_encoder` implements the systematic encoder of the 5G NR LDPC
//! codes defined in TS 38.212, including rate-matched read-out of the
//! codeword. The encoding algorithm runs on several arithmetic
//! implementations (bit-serial, AVX2 and bit-packed) that produce identical
//! codewords.
//!
//! It can be used as a Rust library, through a C ABI, or as a CLI tool. See
//! [`encoder`] for the library entry points and [`cli`] for documentation
//! about the usage of the CLI tool.

#![warn(missing_docs)]

mod c_api;
pub mod cli;
pub mod codes;
pub mod encoder;
pub mod rand;
pub mod sparse;
