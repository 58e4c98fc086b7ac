//! Common interface over the three ciphers.
//!
//! [`TextCipher`] lets callers (benchmarks, key-file driven tools) treat the
//! ciphers uniformly, and [`build_cipher`] turns a raw key string, as held
//! by a [`KeyStore`](crate::key_store::KeyStore), into a ready cipher.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::block_matrix::BlockMatrixCipher;
use crate::error::CipherError;
use crate::grid::GridCipher;
use crate::shift::ShiftCipher;

/// A keyed text cipher.
///
/// Implementations are pure: the same input always yields the same output
/// and no call mutates the cipher.
pub trait TextCipher {
    /// Which cipher this is.
    fn kind(&self) -> CipherKind;

    /// Encrypts `text`.
    fn encrypt(&self, text: &str) -> Result<String, CipherError>;

    /// Decrypts `text`.
    fn decrypt(&self, text: &str) -> Result<String, CipherError>;
}

/// The supported cipher families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Shift (Caesar) cipher.
    Caesar,
    /// Grid (Playfair) cipher.
    Playfair,
    /// Block matrix (Hill) cipher.
    Hill,
}

impl CipherKind {
    /// Every kind, in display order.
    pub const ALL: [CipherKind; 3] = [CipherKind::Caesar, CipherKind::Playfair, CipherKind::Hill];

    /// Lowercase command name.
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Playfair => "playfair",
            CipherKind::Hill => "hill",
        }
    }

    /// Default key file name, `<name>_key.txt`.
    pub fn key_file_name(self) -> String {
        format!("{}_key.txt", self.name())
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown cipher name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown cipher {0:?}")]
pub struct UnknownCipher(pub String);

impl FromStr for CipherKind {
    type Err = UnknownCipher;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCipher(s.to_string()))
    }
}

/// Builds a cipher of `kind` from a raw key string.
///
/// Shift keys are trimmed and parsed as a signed integer. Grid and block
/// matrix keys are used as given.
///
/// # Errors
/// - [`CipherError::InvalidShiftKey`] for a shift key that is not an integer.
/// - Any error from [`BlockMatrixCipher::new`] for a block matrix key.
///
/// # Examples
///
/// ```
/// use classicrypt::cipher::{build_cipher, CipherKind};
///
/// let cipher = build_cipher(CipherKind::Caesar, "3").unwrap();
/// assert_eq!(cipher.encrypt("HELLO").unwrap(), "KHOOR");
/// ```
pub fn build_cipher(
    kind: CipherKind,
    raw_key: &str,
) -> Result<Box<dyn TextCipher + Send + Sync>, CipherError> {
    debug!(%kind, "building cipher");
    let cipher: Box<dyn TextCipher + Send + Sync> = match kind {
        CipherKind::Caesar => {
            let value = raw_key.trim();
            let shift = value
                .parse::<i64>()
                .map_err(|_| CipherError::InvalidShiftKey {
                    value: value.to_string(),
                })?;
            Box::new(ShiftCipher::new(shift))
        }
        CipherKind::Playfair => Box::new(GridCipher::new(raw_key)),
        CipherKind::Hill => Box::new(BlockMatrixCipher::new(raw_key)?),
    };
    Ok(cipher)
}
