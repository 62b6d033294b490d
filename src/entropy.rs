use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::bits::WORD_BITS;
use crate::error::{Bip39Error, Result};

/// The five entropy strengths BIP39 allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum EntropySize {
    #[default]
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl EntropySize {
    pub const ALL: [EntropySize; 5] = [
        EntropySize::Bits128,
        EntropySize::Bits160,
        EntropySize::Bits192,
        EntropySize::Bits224,
        EntropySize::Bits256,
    ];

    pub const fn bits(self) -> usize {
        match self {
            EntropySize::Bits128 => 128,
            EntropySize::Bits160 => 160,
            EntropySize::Bits192 => 192,
            EntropySize::Bits224 => 224,
            EntropySize::Bits256 => 256,
        }
    }

    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    pub const fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    pub const fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / WORD_BITS
    }

    pub fn from_bits(bits: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.bits() == bits)
            .ok_or(Bip39Error::InvalidEntropyLength { bits })
    }

    pub fn from_bytes(len: usize) -> Result<Self> {
        Self::from_bits(len * 8)
    }

    pub fn from_word_count(words: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.word_count() == words)
            .ok_or(Bip39Error::InvalidWordCount(words))
    }
}

/// Fresh entropy from the operating system's CSPRNG.
pub fn generate_entropy(size: EntropySize) -> Result<Zeroizing<Vec<u8>>> {
    generate_entropy_with(&mut OsRng, size)
}

pub fn generate_entropy_with<R>(rng: &mut R, size: EntropySize) -> Result<Zeroizing<Vec<u8>>>
where
    R: RngCore + CryptoRng,
{
    let mut entropy = Zeroizing::new(vec![0u8; size.bytes()]);
    rng.try_fill_bytes(&mut entropy)
        .map_err(|e| Bip39Error::Rng(e.to_string()))?;
    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_size_table() {
        let table: Vec<_> = EntropySize::ALL
            .iter()
            .map(|s| (s.bits(), s.bytes(), s.checksum_bits(), s.word_count()))
            .collect();
        assert_eq!(
            table,
            vec![
                (128, 16, 4, 12),
                (160, 20, 5, 15),
                (192, 24, 6, 18),
                (224, 28, 7, 21),
                (256, 32, 8, 24),
            ]
        );
    }

    #[test]
    fn test_from_bits_rejects_other_lengths() {
        assert_eq!(EntropySize::from_bits(192).unwrap(), EntropySize::Bits192);
        assert_eq!(
            EntropySize::from_bits(120),
            Err(Bip39Error::InvalidEntropyLength { bits: 120 })
        );
        assert_eq!(
            EntropySize::from_bytes(33),
            Err(Bip39Error::InvalidEntropyLength { bits: 264 })
        );
    }

    #[test]
    fn test_from_word_count() {
        assert_eq!(EntropySize::from_word_count(24).unwrap(), EntropySize::Bits256);
        assert_eq!(
            EntropySize::from_word_count(13),
            Err(Bip39Error::InvalidWordCount(13))
        );
        assert!(EntropySize::from_word_count(0).is_err());
    }

    #[test]
    fn test_generate_entropy_length() {
        for size in EntropySize::ALL {
            assert_eq!(generate_entropy(size).unwrap().len(), size.bytes());
        }
    }

    #[test]
    fn test_generate_entropy_with_seeded_rng_is_reproducible() {
        let a = generate_entropy_with(&mut StdRng::seed_from_u64(7), EntropySize::Bits256).unwrap();
        let b = generate_entropy_with(&mut StdRng::seed_from_u64(7), EntropySize::Bits256).unwrap();
        assert_eq!(*a, *b);
    }
}
