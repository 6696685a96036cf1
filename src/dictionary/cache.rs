//! Local word-list cache with revalidation
//!
//! Two files live in the cache directory: the word list itself and the opaque
//! revalidation token identifying the version it holds. Both outlive the
//! process; nothing else is persisted.

use super::source::{Fetched, WordSource};
use super::{Dictionary, loader};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default cached word-list file name
pub const WORD_LIST_FILE: &str = "words.txt";
/// Default revalidation token file name
pub const TOKEN_FILE: &str = "etag.txt";

/// Outcome of a refresh attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    Updated,
    NotModified,
    /// The source or the cache write failed; the previous cache is untouched
    Failed(String),
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("word list '{}' not found; provide one with --source or place it in the cache directory", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Word list and revalidation token stored side by side
#[derive(Debug, Clone)]
pub struct DictionaryCache {
    words_path: PathBuf,
    token_path: PathBuf,
}

impl DictionaryCache {
    pub fn new(dir: impl AsRef<Path>, words_file: &str, token_file: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            words_path: dir.join(words_file),
            token_path: dir.join(token_file),
        }
    }

    /// Cache in `dir` using the default file names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, WORD_LIST_FILE, TOKEN_FILE)
    }

    #[must_use]
    pub fn words_path(&self) -> &Path {
        &self.words_path
    }

    #[must_use]
    pub fn token_path(&self) -> &Path {
        &self.token_path
    }

    /// The stored token, if there is a non-blank one
    #[must_use]
    pub fn stored_token(&self) -> Option<String> {
        fs::read_to_string(&self.token_path)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Bring the cache up to date with `source`
    ///
    /// Never fails the caller: problems are reported as [`Refresh::Failed`] and
    /// the cached copy stays as it was.
    pub fn refresh<S: WordSource + ?Sized>(&self, source: &S) -> Refresh {
        let token = self.stored_token();
        debug!(
            "Fetching {} (token: {})",
            source.describe(),
            token.as_deref().unwrap_or("none")
        );

        match source.fetch(token.as_deref()) {
            Ok(Fetched::Modified { body, token }) => match self.store(&body, token.as_deref()) {
                Ok(()) => Refresh::Updated,
                Err(e) => Refresh::Failed(format!(
                    "could not write {}: {e}",
                    self.words_path.display()
                )),
            },
            Ok(Fetched::NotModified) => Refresh::NotModified,
            Err(e) => Refresh::Failed(e.to_string()),
        }
    }

    fn store(&self, body: &[u8], token: Option<&str>) -> io::Result<()> {
        if let Some(parent) = self.words_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.words_path, body)?;

        match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => fs::write(&self.token_path, token)?,
            // A token for the old content must not validate the new content
            None => match fs::remove_file(&self.token_path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
                _ => {}
            },
        }

        Ok(())
    }

    /// Load the cached word list
    ///
    /// # Errors
    ///
    /// `DictionaryError::Missing` if no word list has been cached yet,
    /// `DictionaryError::Io` if it cannot be read.
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        match loader::load_from_file(&self.words_path) {
            Ok(dictionary) => Ok(dictionary),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DictionaryError::Missing {
                path: self.words_path.clone(),
            }),
            Err(source) => Err(DictionaryError::Io {
                path: self.words_path.clone(),
                source,
            }),
        }
    }
}
