use std::fmt;

use log::{debug, warn};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::bits::{self, BitBuffer, WORD_BITS};
use crate::checksum::checksum;
use crate::entropy::{generate_entropy_with, EntropySize};
use crate::error::{Bip39Error, Result};
use crate::language::Language;
use crate::seed::{seed, Seed};
use crate::wordlist::Wordlist;

/// How [`decode`] hands back the recovered entropy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Return lowercase hex text instead of raw bytes.
    pub hex: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Bytes(Vec<u8>),
    Hex(String),
}

/// Encodes raw entropy bytes as a space-separated phrase.
pub fn encode(wordlist: &Wordlist, entropy: &[u8]) -> Result<String> {
    let words = entropy_to_indices(entropy)?
        .into_iter()
        .map(|index| wordlist.word_at(index as usize))
        .collect::<Result<Vec<_>>>()?;

    debug!("encoded {} bits of entropy as {} words", entropy.len() * 8, words.len());
    Ok(words.join(" "))
}

/// Encodes hex-encoded entropy (either case) as a phrase.
pub fn encode_hex(wordlist: &Wordlist, entropy_hex: &str) -> Result<String> {
    let entropy = Zeroizing::new(hex::decode(entropy_hex.trim())?);
    encode(wordlist, &entropy)
}

/// Recovers the entropy behind `phrase`, verifying its checksum.
pub fn decode(wordlist: &Wordlist, phrase: &str, options: DecodeOptions) -> Result<Decoded> {
    let entropy = mnemonic_to_entropy(wordlist, phrase)?;
    Ok(if options.hex {
        Decoded::Hex(hex::encode(&*entropy))
    } else {
        Decoded::Bytes(entropy.to_vec())
    })
}

/// Checks word count, vocabulary and checksum without returning the entropy.
pub fn validate(wordlist: &Wordlist, phrase: &str) -> Result<()> {
    mnemonic_to_entropy(wordlist, phrase).map(|_| ())
}

// entropy || checksum, cut into 11-bit word indices
fn entropy_to_indices(entropy: &[u8]) -> Result<Vec<u32>> {
    let size = EntropySize::from_bytes(entropy.len())?;
    let cs = checksum(entropy)?;

    let mut bits = BitBuffer::with_capacity(size.bits() + cs.bits);
    bits.push_bytes(entropy);
    bits.push_bits(cs.value, cs.bits);
    debug_assert_eq!(bits.len() % WORD_BITS, 0);

    Ok(bits.chunk(WORD_BITS))
}

fn mnemonic_to_entropy(wordlist: &Wordlist, phrase: &str) -> Result<Zeroizing<Vec<u8>>> {
    let words: Vec<_> = phrase.split_whitespace().collect();
    let size = EntropySize::from_word_count(words.len())?;

    let mut bits = BitBuffer::with_capacity(words.len() * WORD_BITS);
    for w in &words {
        let index = wordlist.index_of(w)?;
        bits.push_bits(index as u32, WORD_BITS);
    }

    let divider = bits.len() / 33 * 32;
    debug_assert_eq!(divider, size.bits());
    let (ent_bits, cs_bits) = bits.split_at(divider);

    let entropy = Zeroizing::new(bits::to_bytes(ent_bits));
    let actual = bits::decode_unsigned(cs_bits);
    let expected = checksum(&entropy)?.value;
    if expected != actual {
        warn!("checksum mismatch in {}-word mnemonic", words.len());
        return Err(Bip39Error::ChecksumMismatch { expected, actual });
    }

    debug!("decoded {}-word mnemonic", words.len());
    Ok(entropy)
}

/// A checksum-valid phrase together with the entropy it encodes.
///
/// Phrase and entropy are wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    language: Language,
    phrase: Zeroizing<String>,
    entropy: Zeroizing<Vec<u8>>,
}

impl Mnemonic {
    pub fn from_entropy(wordlist: &Wordlist, entropy: &[u8]) -> Result<Self> {
        let phrase = Zeroizing::new(encode(wordlist, entropy)?);
        Ok(Self {
            language: wordlist.language(),
            phrase,
            entropy: Zeroizing::new(entropy.to_vec()),
        })
    }

    /// Like [`Mnemonic::from_entropy`], for hex-encoded entropy.
    pub fn from_hex(wordlist: &Wordlist, entropy_hex: &str) -> Result<Self> {
        let entropy = Zeroizing::new(hex::decode(entropy_hex.trim())?);
        Self::from_entropy(wordlist, &entropy)
    }

    /// Parses and validates a phrase. Any run of whitespace separates words;
    /// the stored phrase uses single spaces.
    pub fn parse(wordlist: &Wordlist, phrase: &str) -> Result<Self> {
        let entropy = mnemonic_to_entropy(wordlist, phrase)?;
        let phrase = Zeroizing::new(phrase.split_whitespace().collect::<Vec<_>>().join(" "));
        Ok(Self {
            language: wordlist.language(),
            phrase,
            entropy,
        })
    }

    /// A new mnemonic from OS randomness.
    pub fn generate(wordlist: &Wordlist, size: EntropySize) -> Result<Self> {
        Self::generate_with_rng(wordlist, size, &mut OsRng)
    }

    pub fn generate_with_rng<R>(wordlist: &Wordlist, size: EntropySize, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let entropy = generate_entropy_with(rng, size)?;
        Self::from_entropy(wordlist, &entropy)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    pub fn entropy_size(&self) -> EntropySize {
        // length was checked on construction
        EntropySize::from_bytes(self.entropy.len()).unwrap_or_default()
    }

    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    pub fn entropy_hex(&self) -> String {
        hex::encode(&*self.entropy)
    }

    pub fn to_seed(&self, passphrase: &str) -> Seed {
        seed(&self.phrase, passphrase)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language)
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}
