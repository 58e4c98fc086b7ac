//! Known-answer and error-path tests for the public API.
//!
//! Vectors are either textbook examples or values computed by hand from
//! the substitution rules; any change in output is a regression.
//!
//! Coverage:
//! - `shift::{ShiftCipher, encrypt, decrypt}`
//! - `grid::{PlayfairGrid, GridCipher, encrypt, decrypt}`
//! - `block_matrix::{BlockMatrixCipher, KeyMatrix, encrypt, decrypt}`
//! - `cipher::{build_cipher, CipherKind, TextCipher}`
//! - `error::{CipherError, DigraphDefect}`

use classicrypt::block_matrix::{self, BlockMatrixCipher, KeyMatrix};
use classicrypt::cipher::{build_cipher, CipherKind, TextCipher};
use classicrypt::error::{CipherError, DigraphDefect};
use classicrypt::grid::{self, GridCipher, PlayfairGrid};
use classicrypt::shift::{self, ShiftCipher};

// ═══════════════════════════════════════════════════════════════════════
// ShiftCipher
// ═══════════════════════════════════════════════════════════════════════

/// HELLO shifted by 3 is KHOOR, and back.
#[test]
fn shift_hello_khoor() {
    assert_eq!(shift::encrypt("HELLO", 3), "KHOOR");
    assert_eq!(shift::decrypt("KHOOR", 3), "HELLO");
}

/// Mixed case and punctuation keep their positions.
#[test]
fn shift_mixed_text() {
    let cipher = ShiftCipher::new(13);
    assert_eq!(
        cipher.encrypt("Why did the chicken cross the road?"),
        "Jul qvq gur puvpxra pebff gur ebnq?"
    );
    assert_eq!(cipher.encrypt(&cipher.encrypt("Rot13 twice")), "Rot13 twice");
}

// ═══════════════════════════════════════════════════════════════════════
// GridCipher
// ═══════════════════════════════════════════════════════════════════════

/// The MONARCHY grid begins with the key letters and has no J.
#[test]
fn grid_monarchy_letters() {
    let grid = PlayfairGrid::from_key("MONARCHY");
    assert_eq!(grid.letters(), "MONARCHYBDEFGIKLPQSTUVWXZ");
    assert_eq!(grid.letters().len(), 25);
    assert!(!grid.letters().contains('J'));
}

/// INSTRUMENTS under MONARCHY: the textbook ciphertext pads the last
/// letter with Z; the default X filler changes only the final pair.
#[test]
fn grid_instruments() {
    let textbook = GridCipher::new("MONARCHY").with_tail_filler('Z').unwrap();
    assert_eq!(textbook.encrypt("INSTRUMENTS"), "GATLMZCLRQTX");
    assert_eq!(grid::encrypt("INSTRUMENTS", "MONARCHY"), "GATLMZCLRQXA");
}

/// Decryption recovers the segmented plaintext, fillers included.
#[test]
fn grid_decrypt_leaves_fillers() {
    assert_eq!(
        grid::decrypt("GATLMZCLRQXA", "MONARCHY").unwrap(),
        "INSTRUMENTSX"
    );
}

/// Ciphertext is consumed verbatim: lowercase is not in the grid.
#[test]
fn grid_decrypt_is_not_normalized() {
    assert_eq!(
        grid::decrypt("gatl", "MONARCHY"),
        Err(CipherError::MalformedDigraphInput(
            DigraphDefect::UngriddedCharacter {
                character: 'g',
                index: 0,
            }
        ))
    );
}

/// Odd-length ciphertext is rejected explicitly.
#[test]
fn grid_decrypt_odd_length() {
    assert_eq!(
        grid::decrypt("GATLM", "MONARCHY"),
        Err(CipherError::MalformedDigraphInput(DigraphDefect::OddLength {
            length: 5
        }))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// BlockMatrixCipher
// ═══════════════════════════════════════════════════════════════════════

/// ACT under GYBNQKURP is POH, and back.
#[test]
fn hill_act_poh() {
    assert_eq!(block_matrix::encrypt("ACT", "GYBNQKURP").unwrap(), "POH");
    assert_eq!(block_matrix::decrypt("POH", "GYBNQKURP").unwrap(), "ACT");
}

/// A non-square key fails before any matrix work.
#[test]
fn hill_invalid_key_length() {
    assert_eq!(
        KeyMatrix::from_key("ABCDE"),
        Err(CipherError::InvalidKeyLength { length: 5 })
    );
    assert_eq!(
        BlockMatrixCipher::new("ABCDE"),
        Err(CipherError::InvalidKeyLength { length: 5 })
    );
}

/// AAAA has determinant 0 and must never produce output.
#[test]
fn hill_rejects_singular_key() {
    assert_eq!(
        block_matrix::encrypt("HELP", "AAAA"),
        Err(CipherError::NonInvertibleKeyMatrix { determinant: 0 })
    );
    assert_eq!(
        block_matrix::decrypt("HELP", "AAAA"),
        Err(CipherError::NonInvertibleKeyMatrix { determinant: 0 })
    );
}

/// An even determinant is as unusable as zero.
#[test]
fn hill_rejects_even_determinant() {
    // [[1, 1], [1, 3]] has determinant 2.
    assert_eq!(
        BlockMatrixCipher::new("BBBD"),
        Err(CipherError::NonInvertibleKeyMatrix { determinant: 2 })
    );
}

/// Ciphertext length must be a multiple of the block size.
#[test]
fn hill_invalid_ciphertext_length() {
    assert_eq!(
        block_matrix::decrypt("POHPO", "GYBNQKURP"),
        Err(CipherError::InvalidCiphertextLength {
            length: 5,
            block_size: 3,
        })
    );
}

/// The benchmark key DDCF has determinant 9.
#[test]
fn hill_benchmark_key() {
    let cipher = BlockMatrixCipher::new("DDCF").unwrap();
    assert_eq!(cipher.key().determinant(), 9);
    let ct = cipher.encrypt("BENCHMARK");
    assert_eq!(ct.len(), 10);
    assert_eq!(cipher.decrypt(&ct).unwrap(), "BENCHMARKX");
}

// ═══════════════════════════════════════════════════════════════════════
// Dispatch by kind
// ═══════════════════════════════════════════════════════════════════════

/// Raw keys, as a key file would hold them, build working ciphers.
#[test]
fn build_from_raw_keys() {
    let caesar = build_cipher(CipherKind::Caesar, "3").unwrap();
    assert_eq!(caesar.encrypt("HELLO").unwrap(), "KHOOR");

    let playfair = build_cipher(CipherKind::Playfair, "MONARCHY").unwrap();
    assert_eq!(playfair.decrypt("GATLMZCLRQXA").unwrap(), "INSTRUMENTSX");

    let hill = build_cipher(CipherKind::Hill, "GYBNQKURP").unwrap();
    assert_eq!(hill.decrypt("POH").unwrap(), "ACT");
}

/// Every kind round-trips clean, block-aligned text through the trait.
#[test]
fn trait_round_trip_every_kind() {
    let text = "WEAREDISCOVEREDFLEEATONCEQ";
    for (kind, key) in [
        (CipherKind::Caesar, "11"),
        (CipherKind::Playfair, "SECRET"),
        (CipherKind::Hill, "DDCF"),
    ] {
        let cipher: Box<dyn TextCipher + Send + Sync> = build_cipher(kind, key).unwrap();
        let ct = cipher.encrypt(text).unwrap();
        assert_eq!(cipher.decrypt(&ct).unwrap(), text, "kind {}", kind);
    }
}
