//! KeyMatrix: the Hill key as an n×n matrix of residues mod 26.
//!
//! Determinants, cofactors and the inverse are computed entirely in
//! integer residues. The determinant uses Euclidean row reduction (row
//! swaps and `row -= q * row` only), which keeps every intermediate value
//! in `[0, 26)` for any matrix size.

use crate::error::CipherError;
use crate::utils::modular::{gcd, mod_inverse, residue};
use crate::utils::text::{letter_of, letters_only, residue_of, ALPHABET_LEN};

/// Square key matrix with entries in `[0, 26)`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    size: usize,
    entries: Vec<i64>,
}

/// Modular inverse of a [`KeyMatrix`].
///
/// `KeyMatrix · InverseMatrix ≡ I (mod 26)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverseMatrix {
    size: usize,
    entries: Vec<i64>,
}

impl KeyMatrix {
    /// Builds the key matrix from an alphabetic key.
    ///
    /// The key is uppercased and stripped of everything but ASCII letters.
    /// Each letter becomes its residue (`A = 0 .. Z = 25`), laid out
    /// row-major.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyLength`] if the letter count is not
    /// `n²` for some `n >= 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::block_matrix::KeyMatrix;
    ///
    /// let matrix = KeyMatrix::from_key("GYBNQKURP").unwrap();
    /// assert_eq!(matrix.size(), 3);
    /// assert_eq!(matrix.determinant(), 25);
    /// assert!(KeyMatrix::from_key("ABCDE").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        let letters = letters_only(key);
        let length = letters.len();
        let size = length.isqrt();
        if size == 0 || size * size != length {
            return Err(CipherError::InvalidKeyLength { length });
        }
        let entries = letters.bytes().map(residue_of).collect();
        Ok(KeyMatrix { size, entries })
    }

    /// Builds a key matrix from row-major integers, reduced mod 26.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyLength`] if `entries.len()` is not
    /// `size²` or `size` is 0.
    pub fn from_residues(size: usize, entries: &[i64]) -> Result<Self, CipherError> {
        if size == 0 || entries.len() != size * size {
            return Err(CipherError::InvalidKeyLength {
                length: entries.len(),
            });
        }
        let entries = entries.iter().map(|&e| residue(e, ALPHABET_LEN)).collect();
        Ok(KeyMatrix { size, entries })
    }

    /// Block size `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `row`, `col`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        entry(&self.entries, self.size, row, col)
    }

    /// Renders the matrix back to key letters, row-major.
    pub fn to_key(&self) -> String {
        self.entries.iter().map(|&e| letter_of(e)).collect()
    }

    /// Determinant reduced to `[0, 26)`.
    pub fn determinant(&self) -> u32 {
        determinant_mod(self.entries.clone(), self.size) as u32
    }

    /// Whether the determinant is coprime with 26.
    pub fn is_invertible(&self) -> bool {
        gcd(self.determinant() as i64, ALPHABET_LEN) == 1
    }

    /// Transpose of the cofactor matrix, reduced mod 26.
    ///
    /// Each cofactor is the signed determinant of the minor left after
    /// removing one row and one column. The adjugate of a 1×1 matrix is
    /// `[1]`.
    pub fn adjugate(&self) -> KeyMatrix {
        let n = self.size;
        if n == 1 {
            return KeyMatrix {
                size: 1,
                entries: vec![1],
            };
        }
        let mut entries = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                let minor = determinant_mod(self.minor(row, col), n - 1);
                let cofactor = if (row + col).is_multiple_of(2) {
                    minor
                } else {
                    -minor
                };
                // Transposed.
                entries[col * n + row] = residue(cofactor, ALPHABET_LEN);
            }
        }
        KeyMatrix { size: n, entries }
    }

    /// Modular inverse: `adjugate · det⁻¹ mod 26`.
    ///
    /// # Errors
    /// Returns [`CipherError::NonInvertibleKeyMatrix`] if the determinant
    /// shares a factor with 26.
    pub fn inverse(&self) -> Result<InverseMatrix, CipherError> {
        self.inverse_with(self.determinant())
    }

    /// [`inverse`](Self::inverse) for an already computed determinant.
    pub(crate) fn inverse_with(&self, determinant: u32) -> Result<InverseMatrix, CipherError> {
        let det_inv = mod_inverse(determinant as i64, ALPHABET_LEN)
            .ok_or(CipherError::NonInvertibleKeyMatrix { determinant })?;
        let entries = self
            .adjugate()
            .entries
            .iter()
            .map(|&a| residue(a * det_inv, ALPHABET_LEN))
            .collect();
        Ok(InverseMatrix {
            size: self.size,
            entries,
        })
    }

    /// Multiplies the matrix by a column vector, mod 26.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidCiphertextLength`] if `vector.len()`
    /// is not the block size.
    pub fn apply(&self, vector: &[i64]) -> Result<Vec<i64>, CipherError> {
        multiply(&self.entries, self.size, vector)
    }

    pub(crate) fn transform_block(&self, block: &[u8], out: &mut String) {
        transform_block(&self.entries, self.size, block, out);
    }

    fn minor(&self, skip_row: usize, skip_col: usize) -> Vec<i64> {
        let n = self.size;
        let mut minor = Vec::with_capacity((n - 1) * (n - 1));
        for row in (0..n).filter(|&r| r != skip_row) {
            for col in (0..n).filter(|&c| c != skip_col) {
                minor.push(self.entries[row * n + col]);
            }
        }
        minor
    }
}

impl InverseMatrix {
    /// Block size `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `row`, `col`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        entry(&self.entries, self.size, row, col)
    }

    /// Multiplies the inverse by a column vector, mod 26.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidCiphertextLength`] if `vector.len()`
    /// is not the block size.
    pub fn apply(&self, vector: &[i64]) -> Result<Vec<i64>, CipherError> {
        multiply(&self.entries, self.size, vector)
    }

    pub(crate) fn transform_block(&self, block: &[u8], out: &mut String) {
        transform_block(&self.entries, self.size, block, out);
    }
}

fn entry(entries: &[i64], size: usize, row: usize, col: usize) -> Option<i64> {
    if row >= size || col >= size {
        return None;
    }
    entries.get(row * size + col).copied()
}

fn multiply(entries: &[i64], size: usize, vector: &[i64]) -> Result<Vec<i64>, CipherError> {
    if vector.len() != size {
        return Err(CipherError::InvalidCiphertextLength {
            length: vector.len(),
            block_size: size,
        });
    }
    Ok(entries
        .chunks_exact(size)
        .map(|row| {
            let sum: i64 = row
                .iter()
                .zip(vector)
                .map(|(&k, &v)| k * residue(v, ALPHABET_LEN))
                .sum();
            residue(sum, ALPHABET_LEN)
        })
        .collect())
}

/// Matrix · letter block, appended to `out` as letters.
///
/// `block` holds exactly `size` uppercase ASCII letters.
fn transform_block(entries: &[i64], size: usize, block: &[u8], out: &mut String) {
    for row in entries.chunks_exact(size) {
        let sum: i64 = row
            .iter()
            .zip(block)
            .map(|(&k, &letter)| k * residue_of(letter))
            .sum();
        out.push(letter_of(residue(sum, ALPHABET_LEN)));
    }
}

/// Determinant of the `n`×`n` row-major matrix `m`, reduced mod 26.
///
/// Reduces each column below the diagonal with the Euclidean algorithm on
/// row pairs: `pivot_row -= q * row` then swap, until the lower entry is
/// zero. Row subtraction keeps the determinant and each swap negates it.
fn determinant_mod(mut m: Vec<i64>, n: usize) -> i64 {
    let mut det = 1i64;
    for col in 0..n {
        for row in col + 1..n {
            while m[row * n + col] != 0 {
                let q = m[col * n + col] / m[row * n + col];
                for k in col..n {
                    m[col * n + k] = residue(m[col * n + k] - q * m[row * n + k], ALPHABET_LEN);
                }
                for k in col..n {
                    m.swap(col * n + k, row * n + k);
                }
                det = -det;
            }
        }
        det = residue(det * m[col * n + col], ALPHABET_LEN);
    }
    residue(det, ALPHABET_LEN)
}
