//! Arithmetic and text helpers shared by the ciphers.

pub mod modular;
pub mod text;
