//! Key persistence collaborator.
//!
//! The ciphers never touch storage. Callers that need to keep a key between
//! runs hand a [`KeyStore`] around explicitly: [`FileKeyStore`] keeps one
//! key per single-line text file, [`MemoryKeyStore`] keeps it in process.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::cipher::CipherKind;
use crate::error::KeyStoreError;

/// Loads and saves one raw key string.
pub trait KeyStore {
    /// Returns the stored key.
    fn load_key(&self) -> Result<String, KeyStoreError>;

    /// Replaces the stored key with `key`.
    fn save_key(&self, key: &str) -> Result<(), KeyStoreError>;
}

/// Key kept as the first line of a text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileKeyStore { path: path.into() }
    }

    /// Store for `kind` in `dir`, using its default file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::cipher::CipherKind;
    /// use classicrypt::key_store::FileKeyStore;
    ///
    /// let store = FileKeyStore::for_kind(".", CipherKind::Hill);
    /// assert!(store.path().ends_with("hill_key.txt"));
    /// ```
    pub fn for_kind(dir: impl AsRef<Path>, kind: CipherKind) -> Self {
        Self::new(dir.as_ref().join(kind.key_file_name()))
    }

    /// Path of the key file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> KeyStoreError {
        warn!(path = %self.path.display(), %source, "key file unavailable");
        KeyStoreError::KeyFileUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyStore for FileKeyStore {
    /// Reads the first line of the file, trimmed. An empty file yields an
    /// empty key.
    fn load_key(&self) -> Result<String, KeyStoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), "loaded key");
        Ok(content.lines().next().unwrap_or("").trim().to_string())
    }

    /// Overwrites the file with `key`, verbatim and without a newline.
    fn save_key(&self, key: &str) -> Result<(), KeyStoreError> {
        fs::write(&self.path, key).map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), "saved key");
        Ok(())
    }
}

/// In-process key store.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    key: Mutex<Option<String>>,
}

impl MemoryKeyStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `key`.
    pub fn with_key(key: impl Into<String>) -> Self {
        MemoryKeyStore {
            key: Mutex::new(Some(key.into())),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    fn load_key(&self) -> Result<String, KeyStoreError> {
        let guard = self.key.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone().ok_or(KeyStoreError::Missing)
    }

    fn save_key(&self, key: &str) -> Result<(), KeyStoreError> {
        let mut guard = self.key.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(key.to_string());
        Ok(())
    }
}

/// Loads a shift key and parses it as a signed integer.
///
/// # Errors
/// Any load error, or [`KeyStoreError::InvalidShift`] if the stored value
/// is not an integer.
pub fn load_shift(store: &dyn KeyStore) -> Result<i64, KeyStoreError> {
    let value = store.load_key()?;
    value
        .parse()
        .map_err(|_| KeyStoreError::InvalidShift { value })
}

/// Saves a shift key in decimal form.
pub fn save_shift(store: &dyn KeyStore, shift: i64) -> Result<(), KeyStoreError> {
    store.save_key(&shift.to_string())
}
