//! GridCipher: Playfair digraph substitution over a 5×5 key grid.
//!
//! The grid holds the 25 letters `A..Z` without `J`; key letters come
//! first, deduplicated and in key order, followed by the rest of the
//! alphabet. Plaintext is normalized (uppercase letters, `J` folded into
//! `I`) and segmented into digraphs, each substituted by grid geometry.
//!
//! Decryption is not an exact inverse of encryption: filler letters
//! inserted while segmenting are left in the recovered text.

use std::fmt;

use tracing::{debug, trace};

use crate::cipher::{CipherKind, TextCipher};
use crate::error::{CipherError, DigraphDefect};
use crate::utils::text::letters_folded;

/// Side length of the grid.
pub const GRID_SIDE: usize = 5;

/// Letters that populate the grid, in fill order.
pub const GRID_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Default filler letter for repeated pairs and a trailing single letter.
pub const FILLER: char = 'X';

const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// The 5×5 substitution table derived from a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairGrid {
    letters: String,
    /// Cell index per letter `A..Z`; `J` aliases `I`.
    cells: [u8; 26],
}

impl PlayfairGrid {
    /// Builds the grid for `key`.
    ///
    /// Non-letters in the key are ignored and `J` counts as `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::grid::PlayfairGrid;
    ///
    /// let grid = PlayfairGrid::from_key("MONARCHY");
    /// assert_eq!(grid.letters(), "MONARCHYBDEFGIKLPQSTUVWXZ");
    /// ```
    pub fn from_key(key: &str) -> Self {
        let mut letters = String::with_capacity(GRID_CELLS);
        let mut cells = [u8::MAX; 26];
        for letter in letters_folded(key).bytes().chain(GRID_ALPHABET.bytes()) {
            if letters.len() == GRID_CELLS {
                break;
            }
            let slot = &mut cells[(letter - b'A') as usize];
            if *slot == u8::MAX {
                *slot = letters.len() as u8;
                letters.push(letter as char);
            }
        }
        cells[(b'J' - b'A') as usize] = cells[(b'I' - b'A') as usize];
        debug!(grid = %letters, "built playfair grid");
        PlayfairGrid { letters, cells }
    }

    /// The 25 grid letters in row-major order.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Row and column of `letter`, or `None` if it is not a grid letter.
    ///
    /// Only uppercase letters other than `J` are in the grid.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        if !letter.is_ascii_uppercase() || letter == 'J' {
            return None;
        }
        Some(self.locate(letter as u8))
    }

    /// Letter at `row`, `col`, both taken mod 5.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.letters.as_bytes()[(row % GRID_SIDE) * GRID_SIDE + col % GRID_SIDE] as char
    }

    fn locate(&self, letter: u8) -> (usize, usize) {
        let cell = self.cells[(letter - b'A') as usize] as usize;
        (cell / GRID_SIDE, cell % GRID_SIDE)
    }

    /// Substitutes one pair of grid positions.
    ///
    /// `step` is 1 to move right/down and `GRID_SIDE - 1` to move left/up.
    fn substitute(&self, a: (usize, usize), b: (usize, usize), step: usize) -> [char; 2] {
        let ((ra, ca), (rb, cb)) = (a, b);
        if ra == rb {
            [self.at(ra, ca + step), self.at(rb, cb + step)]
        } else if ca == cb {
            [self.at(ra + step, ca), self.at(rb + step, cb)]
        } else {
            [self.at(ra, cb), self.at(rb, ca)]
        }
    }
}

impl fmt::Display for PlayfairGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.letters.as_bytes().chunks(GRID_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &letter) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}

/// One plaintext letter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph(pub char, pub char);

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Playfair cipher bound to one key grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCipher {
    grid: PlayfairGrid,
    repeat_filler: char,
    tail_filler: char,
}

impl GridCipher {
    /// Creates a cipher for `key` using `X` as filler.
    pub fn new(key: &str) -> Self {
        GridCipher {
            grid: PlayfairGrid::from_key(key),
            repeat_filler: FILLER,
            tail_filler: FILLER,
        }
    }

    /// Replaces the filler used to complete an odd-length text.
    ///
    /// Some textbook tables pad the last letter with `Z` while splitting
    /// doubled letters with `X`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidFiller`] if `filler` is not a grid
    /// letter.
    pub fn with_tail_filler(mut self, filler: char) -> Result<Self, CipherError> {
        self.tail_filler = self.checked_filler(filler)?;
        Ok(self)
    }

    /// Replaces the filler inserted between doubled letters.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidFiller`] if `filler` is not a grid
    /// letter.
    pub fn with_repeat_filler(mut self, filler: char) -> Result<Self, CipherError> {
        self.repeat_filler = self.checked_filler(filler)?;
        Ok(self)
    }

    fn checked_filler(&self, filler: char) -> Result<char, CipherError> {
        match self.grid.position(filler) {
            Some(_) => Ok(filler),
            None => Err(CipherError::InvalidFiller { filler }),
        }
    }

    /// The key grid.
    pub fn grid(&self) -> &PlayfairGrid {
        &self.grid
    }

    /// Normalizes `text` and splits it into digraphs.
    ///
    /// A pair of identical letters, or a single trailing letter, is
    /// completed with a filler and consumes only one input letter.
    pub fn digraphs(&self, text: &str) -> Vec<Digraph> {
        let letters: Vec<char> = letters_folded(text).chars().collect();
        let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
        let mut i = 0;
        while i < letters.len() {
            match letters.get(i + 1) {
                None => {
                    pairs.push(Digraph(letters[i], self.tail_filler));
                    i += 1;
                }
                Some(&next) if next == letters[i] => {
                    pairs.push(Digraph(letters[i], self.repeat_filler));
                    i += 1;
                }
                Some(&next) => {
                    pairs.push(Digraph(letters[i], next));
                    i += 2;
                }
            }
        }
        pairs
    }

    /// Encrypts `text`. The output length is always even.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::grid::GridCipher;
    ///
    /// let cipher = GridCipher::new("MONARCHY");
    /// assert_eq!(cipher.encrypt("instruments"), "GATLMZCLRQXA");
    /// ```
    pub fn encrypt(&self, text: &str) -> String {
        let pairs = self.digraphs(text);
        let mut out = String::with_capacity(pairs.len() * 2);
        for Digraph(a, b) in pairs {
            let (pa, pb) = (self.grid.locate(a as u8), self.grid.locate(b as u8));
            out.extend(self.grid.substitute(pa, pb, 1));
        }
        trace!(in_len = text.len(), out_len = out.len(), "playfair encrypt");
        out
    }

    /// Decrypts `ciphertext`, two characters at a time.
    ///
    /// The ciphertext is not normalized: every character must already be
    /// an uppercase grid letter. Fillers are not removed.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedDigraphInput`] if the ciphertext has
    /// an odd number of characters or contains a character that is not in
    /// the grid. Nothing is decrypted in that case. Length is checked
    /// first, so an odd-length input always reports
    /// [`DigraphDefect::OddLength`].
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let length = ciphertext.chars().count();
        if !length.is_multiple_of(2) {
            return Err(CipherError::MalformedDigraphInput(DigraphDefect::OddLength {
                length,
            }));
        }
        let positions = ciphertext
            .chars()
            .enumerate()
            .map(|(index, character)| {
                self.grid.position(character).ok_or(CipherError::MalformedDigraphInput(
                    DigraphDefect::UngriddedCharacter { character, index },
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = String::with_capacity(positions.len());
        for pair in positions.chunks_exact(2) {
            out.extend(self.grid.substitute(pair[0], pair[1], GRID_SIDE - 1));
        }
        trace!(len = out.len(), "playfair decrypt");
        Ok(out)
    }
}

impl TextCipher for GridCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Playfair
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(GridCipher::encrypt(self, text))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        GridCipher::decrypt(self, text)
    }
}

/// Splits `text` into digraphs with the default `X` filler.
pub fn digraphs(text: &str) -> Vec<Digraph> {
    // The grid does not affect segmentation.
    GridCipher::new("").digraphs(text)
}

/// Encrypts `text` under `key`.
pub fn encrypt(text: &str, key: &str) -> String {
    GridCipher::new(key).encrypt(text)
}

/// Decrypts `ciphertext` under `key`.
///
/// # Errors
/// See [`GridCipher::decrypt`].
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    GridCipher::new(key).decrypt(ciphertext)
}
