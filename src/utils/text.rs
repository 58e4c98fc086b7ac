//! Text normalization shared by the ciphers.
//!
//! Only ASCII letters take part in substitution. Anything else is either
//! passed through (shift cipher) or dropped (grid and block matrix ciphers).

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// Uppercases `text` and keeps only ASCII letters.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Like [`letters_only`], with every `J` folded into `I`.
pub fn letters_folded(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            upper => upper,
        })
        .collect()
}

/// Maps an uppercase ASCII letter to its residue in `[0, 26)`.
///
/// Callers pass letters produced by [`letters_only`] or [`letters_folded`].
pub(crate) fn residue_of(letter: u8) -> i64 {
    debug_assert!(letter.is_ascii_uppercase());
    (letter - b'A') as i64
}

/// Maps a residue in `[0, 26)` back to its uppercase letter.
pub(crate) fn letter_of(residue: i64) -> char {
    debug_assert!((0..ALPHABET_LEN).contains(&residue));
    (b'A' + residue as u8) as char
}
