use thiserror::Error;

pub type Result<T> = std::result::Result<T, Bip39Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Bip39Error {
    #[error("invalid entropy length: {bits} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidEntropyLength { bits: usize },

    #[error("invalid word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),

    #[error("invalid word: {0}")]
    UnknownWord(String),

    #[error("checksum mismatch: expected {expected:#x}, found {actual:#x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("word index {0} out of range (0..2048)")]
    OutOfRange(usize),

    #[error("invalid hex entropy: {0}")]
    InvalidHex(String),

    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    #[error("random source failed: {0}")]
    Rng(String),
}

impl From<hex::FromHexError> for Bip39Error {
    fn from(err: hex::FromHexError) -> Self {
        Bip39Error::InvalidHex(err.to_string())
    }
}
