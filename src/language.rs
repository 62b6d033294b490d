use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::{Bip39Error, Result};
use crate::wordlist::Wordlist;

lazy_static! {
    static ref ENGLISH: Result<Wordlist> = Wordlist::load(Language::English);
}

/// Selects which 2048-word list a mnemonic is spelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    pub const ALL: [Language; 1] = [Language::English];

    /// Resource key, also accepted by `FromStr`.
    pub fn key(self) -> &'static str {
        match self {
            Language::English => "english",
        }
    }

    pub(crate) fn resource(self) -> &'static str {
        match self {
            Language::English => include_str!("../resources/english.txt"),
        }
    }

    /// Process-wide wordlist for this language, parsed on first use.
    ///
    /// Callers that prefer to own the handle can use [`Wordlist::load`] instead;
    /// every encode/decode entry point takes the wordlist by reference.
    pub fn wordlist(self) -> Result<&'static Wordlist> {
        let cached = match self {
            Language::English => &*ENGLISH,
        };
        cached.as_ref().map_err(Clone::clone)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Language {
    type Err = Bip39Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Bip39Error::InvalidWordlist(format!("unsupported language: {s}")))
    }
}
