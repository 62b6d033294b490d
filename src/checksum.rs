use sha2::Digest;

use crate::bits::checksum_fragment;
use crate::entropy::EntropySize;
use crate::error::Result;

/// The checksum fragment appended to entropy before it is split into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    pub value: u32,
    /// Bit length, `entropy bits / 32`.
    pub bits: usize,
}

/// SHA-256 of `entropy`, truncated to its first `len(entropy) * 8 / 32` bits.
///
/// `entropy` must be one of the five BIP39 strengths.
pub fn checksum(entropy: &[u8]) -> Result<Checksum> {
    let size = EntropySize::from_bytes(entropy.len())?;
    let digest = sha2::Sha256::digest(entropy);
    let (value, bits) = checksum_fragment(&digest, size.bits())?;
    Ok(Checksum { value, bits })
}
