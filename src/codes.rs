//! LDPC code definitions.
//!
//! This module contains the definitions of the 5G NR LDPC base graphs.

pub mod nr5g;
