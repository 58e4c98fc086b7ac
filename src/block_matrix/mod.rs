//! BlockMatrixCipher: Hill cipher over n-letter blocks.
//!
//! The key is validated once, up front: its letter count must be a perfect
//! square and its matrix must be invertible mod 26, for encryption as well
//! as decryption. The inverse is precomputed at construction.

mod key_matrix;

pub use key_matrix::{InverseMatrix, KeyMatrix};

use tracing::{debug, trace, warn};

use crate::cipher::{CipherKind, TextCipher};
use crate::error::CipherError;
use crate::utils::text::letters_only;

/// Letter appended to complete the last plaintext block.
pub const PAD: char = 'X';

/// Hill cipher bound to one invertible key matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatrixCipher {
    key: KeyMatrix,
    inverse: InverseMatrix,
}

impl BlockMatrixCipher {
    /// Creates a cipher for `key`.
    ///
    /// # Errors
    /// - [`CipherError::InvalidKeyLength`] if the key's letter count is not
    ///   a positive perfect square.
    /// - [`CipherError::NonInvertibleKeyMatrix`] if the key matrix's
    ///   determinant shares a factor with 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::block_matrix::BlockMatrixCipher;
    ///
    /// let cipher = BlockMatrixCipher::new("GYBNQKURP").unwrap();
    /// assert_eq!(cipher.encrypt("ACT"), "POH");
    /// assert_eq!(cipher.decrypt("POH").unwrap(), "ACT");
    ///
    /// assert!(BlockMatrixCipher::new("AAAA").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Self::from_matrix(KeyMatrix::from_key(key)?)
    }

    /// Creates a cipher from an already built key matrix.
    ///
    /// # Errors
    /// Returns [`CipherError::NonInvertibleKeyMatrix`] if `key` is not
    /// invertible mod 26.
    pub fn from_matrix(key: KeyMatrix) -> Result<Self, CipherError> {
        let determinant = key.determinant();
        let inverse = key.inverse_with(determinant).inspect_err(|err| {
            warn!(size = key.size(), %err, "rejected hill key");
        })?;
        debug!(size = key.size(), determinant, "built hill key matrix");
        Ok(BlockMatrixCipher { key, inverse })
    }

    /// Block size `n`.
    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    /// The key matrix.
    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    /// The precomputed inverse matrix.
    pub fn inverse(&self) -> &InverseMatrix {
        &self.inverse
    }

    /// Encrypts `text`.
    ///
    /// Non-letters are dropped, letters uppercased, and the result padded
    /// with `X` to a multiple of the block size. Padding is not removed by
    /// [`decrypt`](Self::decrypt).
    pub fn encrypt(&self, text: &str) -> String {
        let n = self.block_size();
        let mut letters = letters_only(text);
        let padding = (n - letters.len() % n) % n;
        letters.extend(std::iter::repeat_n(PAD, padding));
        trace!(len = letters.len(), padding, "hill encrypt");

        let mut out = String::with_capacity(letters.len());
        for block in letters.as_bytes().chunks_exact(n) {
            self.key.transform_block(block, &mut out);
        }
        out
    }

    /// Decrypts `ciphertext`.
    ///
    /// Non-letters are dropped and letters uppercased before the length
    /// check.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidCiphertextLength`] if the letter count
    /// is not a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let n = self.block_size();
        let letters = letters_only(ciphertext);
        if !letters.len().is_multiple_of(n) {
            return Err(CipherError::InvalidCiphertextLength {
                length: letters.len(),
                block_size: n,
            });
        }
        trace!(len = letters.len(), "hill decrypt");

        let mut out = String::with_capacity(letters.len());
        for block in letters.as_bytes().chunks_exact(n) {
            self.inverse.transform_block(block, &mut out);
        }
        Ok(out)
    }
}

impl TextCipher for BlockMatrixCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Hill
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(BlockMatrixCipher::encrypt(self, text))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        BlockMatrixCipher::decrypt(self, text)
    }
}

/// Encrypts `text` under `key`.
///
/// # Errors
/// See [`BlockMatrixCipher::new`].
pub fn encrypt(text: &str, key: &str) -> Result<String, CipherError> {
    Ok(BlockMatrixCipher::new(key)?.encrypt(text))
}

/// Decrypts `ciphertext` under `key`.
///
/// # Errors
/// See [`BlockMatrixCipher::new`] and [`BlockMatrixCipher::decrypt`].
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    BlockMatrixCipher::new(key)?.decrypt(ciphertext)
}
