//! Word list loading utilities
//!
//! Applies the word-list rules: trim each line, keep it only if it is exactly
//! five alphabetic characters, store it lowercase.

use super::Dictionary;
use crate::core::{WORD_LEN, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a word-list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_filter::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let bytes = fs::read(path)?;
    Ok(from_bytes(&bytes))
}

/// Build a dictionary from raw word-list bytes
///
/// Invalid UTF-8 sequences are replaced rather than rejected so one bad line
/// cannot discard the whole list.
#[must_use]
pub fn from_bytes(bytes: &[u8]) -> Dictionary {
    Dictionary::from_text(&String::from_utf8_lossy(bytes))
}

/// Extract valid words from word-list text, one per line
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() == WORD_LEN && line.chars().all(char::is_alphabetic))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_applies_rules() {
        let text = "Crane\n  slate  \nco-op\nab1de\nlonger\nfour\n\r\nirate\r\n";
        let words = words_from_text(text);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_text_drops_non_ascii_letters() {
        // Alphabetic but not a-z
        let words = words_from_text("crâne\nzebra\n");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "zebra");
    }

    #[test]
    fn from_bytes_tolerates_bad_utf8() {
        let mut bytes = b"zebra\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"crane\n");
        let dictionary = from_bytes(&bytes);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("crane"));
    }

    #[test]
    fn load_missing_file_is_error() {
        let path = std::env::temp_dir().join("wordle_filter_loader_missing/none.txt");
        assert!(load_from_file(path).is_err());
    }
}
