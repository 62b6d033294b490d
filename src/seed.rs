use std::fmt;

use sha2::Sha512;
use zeroize::Zeroize;

pub const SEED_LEN: usize = 64;
pub const PBKDF2_ROUNDS: u32 = 2048;

/// 64 bytes of key material derived from a phrase; wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

impl fmt::LowerHex for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// PBKDF2-HMAC-SHA512 over `phrase` with salt `"mnemonic" + passphrase`.
///
/// The phrase is used exactly as given; it is not checked against any
/// wordlist, so non-standard phrases derive a seed too.
pub fn seed(phrase: &str, passphrase: &str) -> Seed {
    let salt = zeroize::Zeroizing::new(format!("mnemonic{passphrase}"));
    let mut out = [0u8; SEED_LEN];

    pbkdf2::pbkdf2_hmac::<Sha512>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut out);

    let seed = Seed(out);
    out.zeroize();
    seed
}
