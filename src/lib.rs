//! Classical text ciphers with exact modular arithmetic.
//!
//! Three independent, stateless ciphers over alphabetic text. None of them
//! resists modern cryptanalysis; they exist for teaching and for
//! benchmarking.
//!
//! # Architecture
//!
//! ```text
//! ShiftCipher        (Caesar: rotate each letter by shift mod 26)
//! GridCipher         (Playfair: 5×5 key grid, digraph substitution)
//! BlockMatrixCipher  (Hill: n×n key matrix, inverse by residue adjugate)
//!     ↑ all implement TextCipher, built from raw keys by build_cipher
//! KeyStore           (injected key persistence; never used by the ciphers)
//! ```
//!
//! # Examples
//!
//! ```
//! use classicrypt::{block_matrix, grid, shift};
//!
//! assert_eq!(shift::encrypt("HELLO", 3), "KHOOR");
//!
//! let grid = grid::PlayfairGrid::from_key("MONARCHY");
//! assert_eq!(grid.letters(), "MONARCHYBDEFGIKLPQSTUVWXZ");
//!
//! assert_eq!(block_matrix::encrypt("ACT", "GYBNQKURP").unwrap(), "POH");
//! assert_eq!(block_matrix::decrypt("POH", "GYBNQKURP").unwrap(), "ACT");
//! ```
//!
//! Invalid Hill keys are rejected before any work is done:
//!
//! ```
//! use classicrypt::block_matrix;
//! use classicrypt::error::CipherError;
//!
//! assert_eq!(
//!     block_matrix::encrypt("ACT", "AAAA"),
//!     Err(CipherError::NonInvertibleKeyMatrix { determinant: 0 })
//! );
//! ```

#![deny(clippy::all)]

pub mod block_matrix;
pub mod cipher;
pub mod error;
pub mod grid;
pub mod key_store;
pub mod shift;
pub(crate) mod utils;

pub use block_matrix::BlockMatrixCipher;
pub use cipher::{build_cipher, CipherKind, TextCipher};
pub use error::{CipherError, KeyStoreError};
pub use grid::GridCipher;
pub use shift::ShiftCipher;
