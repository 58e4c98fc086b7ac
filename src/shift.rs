//! ShiftCipher: per-letter rotation (Caesar cipher).
//!
//! ASCII letters rotate within their own case's alphabet; every other
//! character passes through unchanged and keeps its position.

use tracing::trace;

use crate::cipher::{CipherKind, TextCipher};
use crate::error::CipherError;
use crate::utils::modular::residue;
use crate::utils::text::ALPHABET_LEN;

/// Caesar cipher keyed by a signed shift.
///
/// Any `i64` is a valid key; the effective rotation is `shift mod 26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCipher {
    shift: i64,
}

impl ShiftCipher {
    /// Creates a cipher for the given shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::shift::ShiftCipher;
    ///
    /// let cipher = ShiftCipher::new(3);
    /// assert_eq!(cipher.encrypt("HELLO"), "KHOOR");
    /// assert_eq!(cipher.decrypt("KHOOR"), "HELLO");
    /// ```
    pub fn new(shift: i64) -> Self {
        ShiftCipher { shift }
    }

    /// Returns the raw shift as supplied.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// Returns the effective rotation in `[0, 26)`.
    pub fn rotation(&self) -> u8 {
        residue(self.shift, ALPHABET_LEN) as u8
    }

    /// Rotates every ASCII letter forward by the shift.
    pub fn encrypt(&self, text: &str) -> String {
        rotate(text, self.rotation())
    }

    /// Rotates every ASCII letter backward by the shift.
    ///
    /// Equivalent to encrypting with `-shift`, computed on the rotation so
    /// that `i64::MIN` needs no negation.
    pub fn decrypt(&self, text: &str) -> String {
        let back = (ALPHABET_LEN as u8 - self.rotation()) % ALPHABET_LEN as u8;
        rotate(text, back)
    }
}

impl TextCipher for ShiftCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(ShiftCipher::encrypt(self, text))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(ShiftCipher::decrypt(self, text))
    }
}

/// Encrypts `text` with a Caesar shift of `shift`.
pub fn encrypt(text: &str, shift: i64) -> String {
    ShiftCipher::new(shift).encrypt(text)
}

/// Decrypts `text` that was encrypted with a Caesar shift of `shift`.
pub fn decrypt(text: &str, shift: i64) -> String {
    ShiftCipher::new(shift).decrypt(text)
}

fn rotate(text: &str, rotation: u8) -> String {
    trace!(len = text.len(), rotation, "shift rotate");
    text.chars()
        .map(|c| {
            let base = match c {
                'a'..='z' => b'a',
                'A'..='Z' => b'A',
                _ => return c,
            };
            (base + (c as u8 - base + rotation) % ALPHABET_LEN as u8) as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_vector() {
        assert_eq!(encrypt("HELLO", 3), "KHOOR");
        assert_eq!(decrypt("KHOOR", 3), "HELLO");
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        assert_eq!(encrypt("Hello, World! 42", 3), "Khoor, Zruog! 42");
        assert_eq!(decrypt("Khoor, Zruog! 42", 3), "Hello, World! 42");
    }

    #[test]
    fn test_wraps_around_alphabet() {
        assert_eq!(encrypt("xyz XYZ", 3), "abc ABC");
    }

    #[test]
    fn test_negative_shift() {
        assert_eq!(encrypt("abc", -1), "zab");
        assert_eq!(decrypt("zab", -1), "abc");
    }

    #[test]
    fn test_shift_is_taken_mod_26() {
        assert_eq!(encrypt("HELLO", 29), "KHOOR");
        assert_eq!(encrypt("HELLO", 26), "HELLO");
        assert_eq!(encrypt("HELLO", -23), "KHOOR");
    }

    #[test]
    fn test_extreme_shifts() {
        for shift in [i64::MIN, i64::MAX, i64::MIN + 1] {
            let cipher = ShiftCipher::new(shift);
            let text = "The quick brown fox";
            assert_eq!(cipher.decrypt(&cipher.encrypt(text)), text);
        }
        assert_eq!(ShiftCipher::new(i64::MIN).rotation(), 18);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(encrypt("año ü", 1), "bñp ü");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encrypt("", 5), "");
        assert_eq!(decrypt("", 5), "");
    }

    #[test]
    fn test_trait_dispatch() {
        let cipher: &dyn TextCipher = &ShiftCipher::new(3);
        assert_eq!(cipher.kind(), CipherKind::Caesar);
        assert_eq!(cipher.encrypt("HELLO").unwrap(), "KHOOR");
        assert_eq!(cipher.decrypt("KHOOR").unwrap(), "HELLO");
    }
}
