//! Error types for the classicrypt library.
//!
//! [`CipherError`] covers structural key and length violations detected
//! before any transformation work begins. [`KeyStoreError`] covers the key
//! persistence collaborator and never originates in the cipher core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the cipher core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Hill key letter count is not a perfect square `n²` with `n >= 1`.
    #[error("Key length {length} is not a positive perfect square")]
    InvalidKeyLength { length: usize },
    /// Hill key matrix determinant shares a factor with 26.
    #[error("Key matrix determinant ({determinant}) is not coprime with 26")]
    NonInvertibleKeyMatrix { determinant: u32 },
    /// Hill ciphertext letter count is not a multiple of the block size.
    #[error("Ciphertext length {length} is not a multiple of the block size {block_size}")]
    InvalidCiphertextLength { length: usize, block_size: usize },
    /// Playfair ciphertext cannot be consumed as grid digraphs.
    #[error("Malformed digraph input: {0}")]
    MalformedDigraphInput(DigraphDefect),
    /// Playfair filler is not a grid letter.
    #[error("Filler {filler:?} is not a grid letter")]
    InvalidFiller { filler: char },
    /// Raw shift key is not a signed integer.
    #[error("Shift key {value:?} is not an integer")]
    InvalidShiftKey { value: String },
}

/// Reason a Playfair ciphertext was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigraphDefect {
    /// Ciphertext has an odd number of characters.
    #[error("odd length {length}")]
    OddLength { length: usize },
    /// Character at `index` does not appear in the grid.
    #[error("character {character:?} at index {index} is not in the grid")]
    UngriddedCharacter { character: char, index: usize },
}

/// Errors produced by key persistence.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// The key file could not be read or written.
    #[error("Key file {} is unavailable: {source}", path.display())]
    KeyFileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No key has been saved yet.
    #[error("No key has been saved")]
    Missing,
    /// Stored shift key is not a signed integer.
    #[error("Stored shift key {value:?} is not an integer")]
    InvalidShift { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_length() {
        let err = CipherError::InvalidKeyLength { length: 5 };
        assert_eq!(
            format!("{}", err),
            "Key length 5 is not a positive perfect square"
        );
    }

    #[test]
    fn test_display_non_invertible() {
        let err = CipherError::NonInvertibleKeyMatrix { determinant: 13 };
        assert_eq!(
            format!("{}", err),
            "Key matrix determinant (13) is not coprime with 26"
        );
    }

    #[test]
    fn test_display_invalid_ciphertext_length() {
        let err = CipherError::InvalidCiphertextLength {
            length: 4,
            block_size: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Ciphertext length 4 is not a multiple of the block size 3"
        );
    }

    #[test]
    fn test_display_malformed_digraph() {
        let err = CipherError::MalformedDigraphInput(DigraphDefect::UngriddedCharacter {
            character: 'J',
            index: 2,
        });
        assert_eq!(
            format!("{}", err),
            "Malformed digraph input: character 'J' at index 2 is not in the grid"
        );

        let err = CipherError::MalformedDigraphInput(DigraphDefect::OddLength { length: 3 });
        assert_eq!(format!("{}", err), "Malformed digraph input: odd length 3");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::InvalidKeyLength { length: 5 },
            CipherError::InvalidKeyLength { length: 5 }
        );
        assert_ne!(
            CipherError::InvalidKeyLength { length: 5 },
            CipherError::InvalidKeyLength { length: 6 }
        );
    }

    #[test]
    fn test_key_file_unavailable_keeps_source() {
        use std::error::Error as _;

        let err = KeyStoreError::KeyFileUnavailable {
            path: PathBuf::from("hill_key.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(format!("{}", err).starts_with("Key file hill_key.txt is unavailable"));
        assert!(err.source().is_some());
    }
}
