//! Bit-level packing between byte-aligned buffers and narrow unsigned fields.
//!
//! Everything is most-significant-bit first, so a byte sequence reads as one
//! big-endian bit stream.

use bitvec::{field::BitField, order::Msb0, slice::BitSlice, vec::BitVec, view::BitView};

use crate::error::{Bip39Error, Result};

pub type Bits = BitSlice<u8, Msb0>;

/// Width in bits of a single word index.
pub const WORD_BITS: usize = 11;

/// A growable MSB-first bit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: BitVec<u8, Msb0>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bits(&self) -> &Bits {
        &self.bits
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bits.extend_from_bitslice(bytes.view_bits::<Msb0>());
    }

    /// Appends the low `width` bits of `value`, high bit first.
    pub fn push_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32);
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Splits into the first `mid` bits and the rest.
    pub fn split_at(&self, mid: usize) -> (&Bits, &Bits) {
        self.bits.split_at(mid)
    }

    /// See [`chunk`].
    pub fn chunk(&self, width: usize) -> Vec<u32> {
        chunk(&self.bits, width)
    }
}

/// Splits `bits` into `width`-bit unsigned integers, left to right.
///
/// A short final chunk is still decoded via [`decode_unsigned`]; callers keep
/// the total length a multiple of `width` when that matters.
pub fn chunk(bits: &Bits, width: usize) -> Vec<u32> {
    bits.chunks(width).map(decode_unsigned).collect()
}

/// Reads `bits` as one big-endian unsigned integer.
///
/// Input whose length is not a multiple of 8 is left-padded with zero bits to
/// the next byte boundary first, which leaves the value unchanged.
pub fn decode_unsigned(bits: &Bits) -> u32 {
    debug_assert!(bits.len() <= 32);
    let pad = (8 - bits.len() % 8) % 8;
    let mut padded: BitVec<u8, Msb0> = BitVec::repeat(false, pad);
    padded.extend_from_bitslice(bits);

    padded
        .chunks(8)
        .map(|byte| byte.load_be::<u8>())
        .fold(0u32, |acc, byte| (acc << 8) | byte as u32)
}

/// Packs a byte-aligned bit sequence back into bytes.
pub fn to_bytes(bits: &Bits) -> Vec<u8> {
    debug_assert!(bits.len() % 8 == 0);
    bits.chunks(8).map(|b| b.load_be::<u8>()).collect()
}

/// The first `ent_bits / 32` bits of `digest`, and that bit count.
///
/// Fails when the fragment would be wider than the digest or than 32 bits.
pub fn checksum_fragment(digest: &[u8], ent_bits: usize) -> Result<(u32, usize)> {
    let size = ent_bits / 32;
    if size > 32 || size > digest.len() * 8 {
        return Err(Bip39Error::InvalidEntropyLength { bits: ent_bits });
    }
    let value = decode_unsigned(&digest.view_bits::<Msb0>()[..size]);
    Ok((value, size))
}
