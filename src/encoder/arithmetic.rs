//! LDPC encoder arithmetic.
//!
//! This module contains the trait [`BlockArithmetic`], which defines how the
//! encoder stores blocks of `Zc` bits and how it accumulates cyclically
//! shifted blocks, and the implementors of that trait. The encoder engine is
//! generic over `BlockArithmetic`, so each implementation gives a
//! monomorphized encoder with its own data layout:
//!
//! - [`Scalar`] stores one bit per byte and processes one bit at a time.
//! - [`Avx2`] stores one bit per byte and XORs contiguous runs of bytes 32 at
//!   a time, using AVX2 when the CPU supports it.
//! - [`Packed`] stores 64 bits per `u64` word and performs the cyclic shifts
//!   with word-wide shifts.
//!
//! All the implementations produce the same bits.

use super::FILLER_BIT;
use std::{collections::TryReserveError, sync::OnceLock};
use tracing::debug;

/// LDPC encoder arithmetic.
///
/// A block holds `Zc` bits. Rotating a block `x` by `r` gives the block `y`
/// with `y[k] = x[(k + r) mod Zc]`, which is the contribution of `x` to a
/// check block row through a circulant of shift `r`.
///
/// Rotations passed to the methods of this trait are always in `[0, Zc)`.
pub trait BlockArithmetic: std::fmt::Debug + Send {
    /// Block of `Zc` bits.
    type Block: std::fmt::Debug + Send;

    /// Allocates a block of `ls` zero bits.
    fn zero_block(&self, ls: usize) -> Result<Self::Block, TryReserveError>;

    /// Loads a block from one bit per byte.
    ///
    /// Bytes equal to [`FILLER_BIT`] are loaded as zeros. Other bytes are
    /// loaded as their least significant bit.
    fn load(&self, bits: &[u8], block: &mut Self::Block);

    /// Stores a block as one bit per byte.
    fn store(&self, block: &Self::Block, bits: &mut [u8]);

    /// Sets all the bits of a block to zero.
    fn clear(&self, block: &mut Self::Block);

    /// Writes `src` rotated by `rotation` into `dst`.
    fn copy_rotated(&self, dst: &mut Self::Block, src: &Self::Block, rotation: usize);

    /// Adds (XORs) `src` rotated by `rotation` to `dst`.
    fn xor_rotated(&self, dst: &mut Self::Block, src: &Self::Block, rotation: usize);
}

fn bit_value(byte: u8) -> u8 {
    match byte {
        FILLER_BIT => 0,
        b => b & 1,
    }
}

fn try_zeroed<T: Clone + Default>(len: usize) -> Result<Box<[T]>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, T::default());
    Ok(v.into_boxed_slice())
}

/// Returns `true` if the CPU supports AVX2.
///
/// The detection runs once and the result is cached for the lifetime of the
/// process.
pub fn avx2_available() -> bool {
    static AVX2: OnceLock<bool> = OnceLock::new();
    *AVX2.get_or_init(|| {
        let detected = detect_avx2();
        debug!(avx2 = detected, "detected CPU vector capabilities");
        detected
    })
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_avx2() -> bool {
    std::is_x86_feature_detected!("avx2")
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn detect_avx2() -> bool {
    false
}

/// Bit-serial arithmetic with one bit per byte.
#[derive(Debug, Clone, Default)]
pub struct Scalar {}

impl Scalar {
    /// Creates a new [`Scalar`] encoder arithmetic object.
    pub fn new() -> Scalar {
        Scalar::default()
    }
}

impl BlockArithmetic for Scalar {
    type Block = Box<[u8]>;

    fn zero_block(&self, ls: usize) -> Result<Box<[u8]>, TryReserveError> {
        try_zeroed(ls)
    }

    fn load(&self, bits: &[u8], block: &mut Box<[u8]>) {
        for (x, &b) in block.iter_mut().zip(bits.iter()) {
            *x = bit_value(b);
        }
    }

    fn store(&self, block: &Box<[u8]>, bits: &mut [u8]) {
        bits.copy_from_slice(block);
    }

    fn clear(&self, block: &mut Box<[u8]>) {
        block.fill(0);
    }

    fn copy_rotated(&self, dst: &mut Box<[u8]>, src: &Box<[u8]>, rotation: usize) {
        let ls = src.len();
        for (k, x) in dst.iter_mut().enumerate() {
            *x = src[(k + rotation) % ls];
        }
    }

    fn xor_rotated(&self, dst: &mut Box<[u8]>, src: &Box<[u8]>, rotation: usize) {
        let ls = src.len();
        for (k, x) in dst.iter_mut().enumerate() {
            *x ^= src[(k + rotation) % ls];
        }
    }
}

/// Vectorized arithmetic with one bit per byte.
///
/// A rotation splits a block into two contiguous runs of bytes, which are
/// XORed with 256-bit AVX2 instructions if the CPU supports them, or 64 bits
/// at a time otherwise.
#[derive(Debug, Clone)]
pub struct Avx2 {
    accelerated: bool,
}

impl Avx2 {
    /// Creates a new [`Avx2`] encoder arithmetic object.
    ///
    /// AVX2 instructions are used only if the CPU supports them.
    pub fn new() -> Avx2 {
        Avx2 {
            accelerated: avx2_available(),
        }
    }

    /// Returns `true` if this object uses AVX2 instructions.
    pub fn is_accelerated(&self) -> bool {
        self.accelerated
    }

    fn xor(&self, dst: &mut [u8], src: &[u8]) {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if self.accelerated {
            // Safety: the CPU supports AVX2.
            unsafe { xor_avx2(dst, src) };
            return;
        }
        xor_words(dst, src);
    }
}

impl Default for Avx2 {
    fn default() -> Avx2 {
        Avx2::new()
    }
}

impl BlockArithmetic for Avx2 {
    type Block = Box<[u8]>;

    fn zero_block(&self, ls: usize) -> Result<Box<[u8]>, TryReserveError> {
        try_zeroed(ls)
    }

    fn load(&self, bits: &[u8], block: &mut Box<[u8]>) {
        for (x, &b) in block.iter_mut().zip(bits.iter()) {
            *x = bit_value(b);
        }
    }

    fn store(&self, block: &Box<[u8]>, bits: &mut [u8]) {
        bits.copy_from_slice(block);
    }

    fn clear(&self, block: &mut Box<[u8]>) {
        block.fill(0);
    }

    fn copy_rotated(&self, dst: &mut Box<[u8]>, src: &Box<[u8]>, rotation: usize) {
        let split = src.len() - rotation;
        dst[..split].copy_from_slice(&src[rotation..]);
        dst[split..].copy_from_slice(&src[..rotation]);
    }

    fn xor_rotated(&self, dst: &mut Box<[u8]>, src: &Box<[u8]>, rotation: usize) {
        let split = src.len() - rotation;
        self.xor(&mut dst[..split], &src[rotation..]);
        self.xor(&mut dst[split..], &src[..rotation]);
    }
}

fn xor_words(dst: &mut [u8], src: &[u8]) {
    const W: usize = std::mem::size_of::<u64>();
    let mut dst_words = dst.chunks_exact_mut(W);
    let mut src_words = src.chunks_exact(W);
    for (d, s) in (&mut dst_words).zip(&mut src_words) {
        let (mut x, mut y) = ([0; W], [0; W]);
        x.copy_from_slice(d);
        y.copy_from_slice(s);
        let z = u64::from_ne_bytes(x) ^ u64::from_ne_bytes(y);
        d.copy_from_slice(&z.to_ne_bytes());
    }
    for (d, s) in dst_words
        .into_remainder()
        .iter_mut()
        .zip(src_words.remainder())
    {
        *d ^= s;
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
unsafe fn xor_avx2(dst: &mut [u8], src: &[u8]) {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::{__m256i, _mm256_loadu_si256, _mm256_storeu_si256, _mm256_xor_si256};
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::{__m256i, _mm256_loadu_si256, _mm256_storeu_si256, _mm256_xor_si256};

    const LANES: usize = 32;
    let len = dst.len().min(src.len());
    let mut i = 0;
    while i + LANES <= len {
        // Safety: i + LANES <= len, and unaligned loads and stores are used.
        let d = _mm256_loadu_si256(dst.as_ptr().add(i).cast::<__m256i>());
        let s = _mm256_loadu_si256(src.as_ptr().add(i).cast::<__m256i>());
        _mm256_storeu_si256(
            dst.as_mut_ptr().add(i).cast::<__m256i>(),
            _mm256_xor_si256(d, s),
        );
        i += LANES;
    }
    xor_words(&mut dst[i..len], &src[i..len]);
}

/// Bit-packed arithmetic with 64 bits per word.
///
/// Each [`PackedBlock`] stores its `Zc` bits twice in a row, so that any
/// rotation of the block can be read as a contiguous run of `Zc` bits.
#[derive(Debug, Clone, Default)]
pub struct Packed {}

impl Packed {
    /// Creates a new [`Packed`] encoder arithmetic object.
    pub fn new() -> Packed {
        Packed::default()
    }
}

/// Block of bits used by the [`Packed`] arithmetic.
///
/// Bit `i` is stored in bit `i % 64` of word `i / 64`. Bits `Zc..2*Zc`
/// repeat bits `0..Zc`, and the remaining bits of the last word are zero.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PackedBlock {
    ls: usize,
    words: Box<[u64]>,
}

impl PackedBlock {
    fn bit(&self, i: usize) -> u8 {
        ((self.words[i / 64] >> (i % 64)) & 1) as u8
    }

    // Reads 64 bits starting at bit `pos`.
    fn read(&self, pos: usize) -> u64 {
        let (w, sh) = (pos / 64, pos % 64);
        let low = self.words[w] >> sh;
        if sh == 0 {
            low
        } else {
            low | self.words.get(w + 1).map_or(0, |&x| x << (64 - sh))
        }
    }

    // XORs a word into the bits starting at bit `pos`.
    fn xor_at(&mut self, pos: usize, value: u64) {
        let (w, sh) = (pos / 64, pos % 64);
        self.words[w] ^= value << sh;
        if sh != 0 {
            if let Some(x) = self.words.get_mut(w + 1) {
                *x ^= value >> (64 - sh);
            }
        }
    }
}

impl BlockArithmetic for Packed {
    type Block = PackedBlock;

    fn zero_block(&self, ls: usize) -> Result<PackedBlock, TryReserveError> {
        Ok(PackedBlock {
            ls,
            words: try_zeroed((2 * ls).div_ceil(64))?,
        })
    }

    fn load(&self, bits: &[u8], block: &mut PackedBlock) {
        self.clear(block);
        let ls = block.ls;
        for (i, &b) in bits.iter().enumerate().take(ls) {
            let x = u64::from(bit_value(b));
            block.words[i / 64] |= x << (i % 64);
            block.words[(i + ls) / 64] |= x << ((i + ls) % 64);
        }
    }

    fn store(&self, block: &PackedBlock, bits: &mut [u8]) {
        for (i, x) in bits.iter_mut().enumerate() {
            *x = block.bit(i);
        }
    }

    fn clear(&self, block: &mut PackedBlock) {
        block.words.fill(0);
    }

    fn copy_rotated(&self, dst: &mut PackedBlock, src: &PackedBlock, rotation: usize) {
        self.clear(dst);
        self.xor_rotated(dst, src, rotation);
    }

    fn xor_rotated(&self, dst: &mut PackedBlock, src: &PackedBlock, rotation: usize) {
        if rotation == 0 {
            for (d, s) in dst.words.iter_mut().zip(src.words.iter()) {
                *d ^= s;
            }
            return;
        }
        let ls = src.ls;
        for start in (0..ls).step_by(64) {
            let n = (ls - start).min(64);
            let mask = if n == 64 { u64::MAX } else { (1 << n) - 1 };
            let value = src.read(rotation + start) & mask;
            dst.xor_at(start, value);
            dst.xor_at(ls + start, value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rand::{Rng, SeedableRng};
    use rand::Rng as _;

    fn random_bits(rng: &mut Rng, len: usize) -> Vec<u8> {
        (0..len).map(|_| rng.gen_range(0..2)).collect()
    }

    fn reference_rotation(bits: &[u8], rotation: usize) -> Vec<u8> {
        (0..bits.len())
            .map(|k| bits[(k + rotation) % bits.len()])
            .collect()
    }

    fn check_arithmetic<A: BlockArithmetic>(arithmetic: A) {
        let mut rng = Rng::seed_from_u64(0);
        for ls in [2, 3, 7, 15, 63, 64, 65, 104, 128, 208, 384] {
            let a_bits = random_bits(&mut rng, ls);
            let b_bits = random_bits(&mut rng, ls);
            let mut a = arithmetic.zero_block(ls).unwrap();
            let mut b = arithmetic.zero_block(ls).unwrap();
            let mut out = arithmetic.zero_block(ls).unwrap();
            arithmetic.load(&a_bits, &mut a);
            arithmetic.load(&b_bits, &mut b);
            let mut stored = vec![0; ls];
            arithmetic.store(&a, &mut stored);
            assert_eq!(stored, a_bits);
            for rotation in [0, 1, ls / 2, ls - 1] {
                arithmetic.copy_rotated(&mut out, &a, rotation);
                arithmetic.store(&out, &mut stored);
                assert_eq!(stored, reference_rotation(&a_bits, rotation));

                arithmetic.xor_rotated(&mut out, &b, rotation);
                arithmetic.store(&out, &mut stored);
                let expected = reference_rotation(&a_bits, rotation)
                    .iter()
                    .zip(reference_rotation(&b_bits, rotation))
                    .map(|(x, y)| x ^ y)
                    .collect::<Vec<_>>();
                assert_eq!(stored, expected, "ls = {ls}, rotation = {rotation}");
            }
            arithmetic.clear(&mut out);
            arithmetic.store(&out, &mut stored);
            assert!(stored.iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn scalar() {
        check_arithmetic(Scalar::new());
    }

    #[test]
    fn avx2() {
        check_arithmetic(Avx2::new());
        check_arithmetic(Avx2 { accelerated: false });
    }

    #[test]
    fn packed() {
        check_arithmetic(Packed::new());
    }

    #[test]
    fn filler_bits_load_as_zero() {
        let bits = [1, FILLER_BIT, 0, 3, FILLER_BIT];
        let expected = [1, 0, 0, 1, 0];
        let mut stored = [0; 5];
        let scalar = Scalar::new();
        let mut block = scalar.zero_block(5).unwrap();
        scalar.load(&bits, &mut block);
        scalar.store(&block, &mut stored);
        assert_eq!(stored, expected);
        let packed = Packed::new();
        let mut block = packed.zero_block(5).unwrap();
        packed.load(&bits, &mut block);
        packed.store(&block, &mut stored);
        assert_eq!(stored, expected);
    }

    #[test]
    fn packed_block_is_doubled() {
        let packed = Packed::new();
        let bits = [1, 0, 1, 1, 0, 0, 1];
        let mut block = packed.zero_block(7).unwrap();
        packed.load(&bits, &mut block);
        let mut other = packed.zero_block(7).unwrap();
        packed.copy_rotated(&mut other, &block, 3);
        for i in 0..7 {
            assert_eq!(other.bit(i), other.bit(i + 7));
        }
        assert_eq!(other.words[0] >> 14, 0);
    }
}
