//! Dictionary of five-letter words
//!
//! Holds the word set used to filter generated candidates, plus an index of
//! every proper prefix so enumeration can abandon dead branches early.
//! Acquisition lives in [`source`] and [`cache`].

pub mod cache;
pub mod loader;
pub mod source;

pub use cache::{DictionaryCache, DictionaryError, Refresh};
pub use source::{Fetched, FileSource, HttpSource, SourceError, SourceLocation, WordSource};

use crate::config::DictionarySettings;
use crate::core::{WORD_LEN, Word};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

/// Read-only set of 5-letter lowercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<[u8; WORD_LEN]>,
    prefixes: FxHashSet<Vec<u8>>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word; returns false if it was already present
    pub fn insert(&mut self, word: &Word) -> bool {
        let chars = *word.chars();
        if !self.words.insert(chars) {
            return false;
        }
        for len in 1..WORD_LEN {
            self.prefixes.insert(chars[..len].to_vec());
        }
        true
    }

    /// Check membership of a word given as text
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_text("Zebra\nbanana\n");
    /// assert!(dictionary.contains("zebra"));
    /// assert!(!dictionary.contains("banana"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        <&[u8; WORD_LEN]>::try_from(word.as_bytes()).is_ok_and(|chars| self.words.contains(chars))
    }

    #[inline]
    #[must_use]
    pub fn contains_chars(&self, chars: &[u8; WORD_LEN]) -> bool {
        self.words.contains(chars)
    }

    /// True if some word starts with `prefix`
    ///
    /// The empty prefix matches any non-empty dictionary; a full-length prefix
    /// is a membership test.
    #[must_use]
    pub fn has_prefix(&self, prefix: &[u8]) -> bool {
        match prefix.len() {
            0 => !self.words.is_empty(),
            WORD_LEN => <&[u8; WORD_LEN]>::try_from(prefix).is_ok_and(|c| self.words.contains(c)),
            n if n < WORD_LEN => self.prefixes.contains(prefix),
            _ => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build a dictionary from word-list text, one word per line
    ///
    /// Lines are trimmed and kept only if they are five alphabetic characters.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        loader::words_from_text(text).into_iter().collect()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.insert(&word);
        }
        dictionary
    }
}

/// Refresh the cached word list if a source is configured, then load it
///
/// # Errors
///
/// Returns `DictionaryError` when no cached word list exists after the refresh
/// attempt, or it cannot be read. A failed refresh alone is not an error.
pub fn get_dictionary(settings: &DictionarySettings) -> Result<Dictionary, DictionaryError> {
    let cache = DictionaryCache::new(
        &settings.cache_dir,
        &settings.words_file,
        &settings.token_file,
    );

    match (&settings.source, settings.offline) {
        (Some(location), false) => {
            let source = location.open();
            match cache.refresh(source.as_ref()) {
                Refresh::Updated => info!("Word list updated from {}.", source.describe()),
                Refresh::NotModified => {
                    debug!("Word list not modified. Using cached version.");
                }
                Refresh::Failed(reason) => {
                    warn!("Error refreshing word list: {reason}. Using cached version.");
                }
            }
        }
        (Some(_), true) => debug!("Offline mode, skipping word list refresh"),
        (None, _) => debug!("No word list source configured, using cache only"),
    }

    let dictionary = cache.load()?;
    if dictionary.is_empty() {
        warn!(
            "Word list {} contains no five-letter words",
            cache.words_path().display()
        );
    } else {
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            cache.words_path().display()
        );
    }

    Ok(dictionary)
}
