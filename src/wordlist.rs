use std::collections::HashMap;

use log::trace;

use crate::error::{Bip39Error, Result};
use crate::language::Language;

/// Number of entries in every BIP39 wordlist; each word encodes 11 bits.
pub const WORDLIST_LEN: usize = 2048;

/// An immutable, ordered 2048-word list with a precomputed reverse index.
///
/// Built once and shared by reference; lookups never allocate.
#[derive(Debug, Clone)]
pub struct Wordlist {
    language: Language,
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Parses the list compiled into the crate for `language`.
    pub fn load(language: Language) -> Result<Self> {
        Self::parse(language, language.resource())
    }

    /// Parses newline-delimited text into a wordlist.
    ///
    /// Every line is trimmed. The text must hold exactly 2048 non-empty,
    /// distinct words; a single trailing newline is allowed.
    pub fn parse(language: Language, text: &str) -> Result<Self> {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let mut words = Vec::with_capacity(WORDLIST_LEN);
        for (line, entry) in body.split('\n').enumerate() {
            let word = entry.trim();
            if word.is_empty() {
                return Err(Bip39Error::InvalidWordlist(format!(
                    "{language} has an empty entry at line {}",
                    line + 1
                )));
            }
            words.push(word.to_owned());
        }

        if words.len() != WORDLIST_LEN {
            return Err(Bip39Error::InvalidWordlist(format!(
                "{language} has {} words, expected {WORDLIST_LEN}",
                words.len()
            )));
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(Bip39Error::InvalidWordlist(format!(
                    "{language} has duplicate word: {word}"
                )));
            }
        }

        trace!("loaded {language} wordlist ({} words)", words.len());
        Ok(Self { language, words, index })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Word at `index`, failing with `OutOfRange` outside `0..2048`.
    pub fn word_at(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(Bip39Error::OutOfRange(index))
    }

    /// Index of `word` (exact, case-sensitive match).
    pub fn index_of(&self, word: &str) -> Result<u16> {
        self.index
            .get(word)
            .copied()
            .ok_or_else(|| Bip39Error::UnknownWord(word.to_owned()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All words starting with `prefix`, in list order.
    pub fn words_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.words().filter(move |w| w.starts_with(prefix))
    }
}
