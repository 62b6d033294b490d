//! BIP39 mnemonic phrases: entropy to words and back, with checksum
//! verification, and PBKDF2 seed derivation.
//!
//! ```
//! use bip39_codec::{decode, encode, DecodeOptions, Decoded, Language};
//!
//! let english = Language::English.wordlist().unwrap();
//! let phrase = encode(english, &[0u8; 16]).unwrap();
//! assert!(phrase.ends_with("abandon about"));
//! assert_eq!(
//!     decode(english, &phrase, DecodeOptions::default()).unwrap(),
//!     Decoded::Bytes(vec![0u8; 16]),
//! );
//! ```

pub mod bip39;
pub mod bits;
pub mod checksum;
pub mod entropy;
pub mod error;
pub mod language;
pub mod seed;
pub mod wordlist;

pub use bip39::{decode, encode, encode_hex, validate, DecodeOptions, Decoded, Mnemonic};
pub use checksum::{checksum, Checksum};
pub use entropy::{generate_entropy, generate_entropy_with, EntropySize};
pub use error::{Bip39Error, Result};
pub use language::Language;
pub use seed::{seed, Seed};
pub use wordlist::{Wordlist, WORDLIST_LEN};
