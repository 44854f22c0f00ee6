//! Rate-matched read-out.
//!
//! A rate-matched codeword is read circularly from the full codeword,
//! starting after the first `2*Zc` systematic bits, which are never
//! transmitted. The read wraps to bit 0 after the last bit of the codeword,
//! so outputs longer than `N - 2*Zc` repeat bits from the wrap point.

use super::EncoderConfig;

/// Factor bounding the rate-matched length.
///
/// The rate-matched length cannot exceed this factor times the number of
/// transmittable bits, `N - 2*Zc`.
pub const MAX_REPETITION: usize = 8;

/// Returns the position of the first rate-matched bit in the codeword.
pub fn start_position(config: &EncoderConfig) -> usize {
    2 * config.ls()
}

/// Returns the maximum supported rate-matched length.
///
/// # Examples
/// ```
/// # use nr_ldpc_encoder::codes::nr5g::BaseGraph;
/// # use nr_ldpc_encoder::encoder::{rate_matching, EncoderConfig};
/// let config = EncoderConfig::new(BaseGraph::BG2, 2).unwrap();
/// assert_eq!(rate_matching::max_length(&config), 8 * 100);
/// ```
pub fn max_length(config: &EncoderConfig) -> usize {
    MAX_REPETITION * (config.lift_n() - start_position(config))
}

/// Fills `output` by reading `codeword` circularly from `start`.
///
/// # Panics
/// This function panics if `codeword` is empty or `start` is larger than
/// the length of `codeword`.
pub fn circular_read(codeword: &[u8], start: usize, output: &mut [u8]) {
    assert!(!codeword.is_empty());
    let mut pos = start;
    let mut out = output;
    while !out.is_empty() {
        let run = &codeword[pos..];
        let n = run.len().min(out.len());
        let (head, tail) = out.split_at_mut(n);
        head.copy_from_slice(&run[..n]);
        out = tail;
        pos = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_wraps() {
        let codeword = (0..10).collect::<Vec<u8>>();
        let mut output = [0; 4];
        circular_read(&codeword, 4, &mut output);
        assert_eq!(output, [4, 5, 6, 7]);
        let mut output = [0; 15];
        circular_read(&codeword, 4, &mut output);
        assert_eq!(output, [4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let mut output = [0; 25];
        circular_read(&codeword, 8, &mut output);
        for (k, &x) in output.iter().enumerate() {
            assert_eq!(usize::from(x), (8 + k) % 10);
        }
    }

    #[test]
    fn read_from_end() {
        let codeword = [1, 2, 3];
        let mut output = [0; 4];
        circular_read(&codeword, 3, &mut output);
        assert_eq!(output, [1, 2, 3, 1]);
    }
}
