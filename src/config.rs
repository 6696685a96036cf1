//! Run configuration
//!
//! Built once in `main` from the command line and passed down explicitly.

use crate::dictionary::Dictionary;
use crate::dictionary::cache::{TOKEN_FILE, WORD_LIST_FILE};
use crate::dictionary::source::SourceLocation;
use crate::generator::{CandidateGenerator, Enumeration};
use crate::parser::{ConstraintParser, DEFAULT_PLACEHOLDER};
use log::LevelFilter;
use std::path::PathBuf;

/// Default log file, overwritten on every run
pub const DEFAULT_LOG_FILE: &str = "wordle_filter.log";

/// Where the word list comes from and where it is cached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySettings {
    /// Upstream word list; `None` means use the cache as-is
    pub source: Option<SourceLocation>,
    pub cache_dir: PathBuf,
    pub words_file: String,
    pub token_file: String,
    /// Skip the refresh even when a source is configured
    pub offline: bool,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            source: Some(SourceLocation::default()),
            cache_dir: PathBuf::from("."),
            words_file: WORD_LIST_FILE.to_string(),
            token_file: TOKEN_FILE.to_string(),
            offline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Mirror log records to stdout
    pub console: bool,
    pub file: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set
    pub default_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            console: true,
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            default_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary: DictionarySettings,
    pub placeholder: char,
    pub enumeration: Enumeration,
    pub logging: LogSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionarySettings::default(),
            placeholder: DEFAULT_PLACEHOLDER,
            enumeration: Enumeration::default(),
            logging: LogSettings::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub const fn parser(&self) -> ConstraintParser {
        ConstraintParser::new(self.placeholder)
    }

    #[must_use]
    pub const fn generator<'d>(&self, dictionary: &'d Dictionary) -> CandidateGenerator<'d> {
        CandidateGenerator::new(dictionary).with_enumeration(self.enumeration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cache_layout() {
        let config = Config::default();
        assert_eq!(config.dictionary.words_file, "words.txt");
        assert_eq!(config.dictionary.token_file, "etag.txt");
        assert_eq!(config.dictionary.cache_dir, PathBuf::from("."));
        assert_eq!(
            config.dictionary.source,
            Some(SourceLocation::Url(
                crate::dictionary::source::DEFAULT_WORD_LIST_URL.to_string()
            ))
        );
        assert_eq!(config.placeholder, '_');
        assert_eq!(config.enumeration, Enumeration::Pruned);
        assert_eq!(
            config.logging.file.as_deref(),
            Some(std::path::Path::new("wordle_filter.log"))
        );
    }

    #[test]
    fn parser_uses_placeholder() {
        let config = Config {
            placeholder: '.',
            ..Config::default()
        };
        assert_eq!(config.parser().placeholder(), '.');
    }

    #[test]
    fn generator_uses_enumeration() {
        let dictionary = Dictionary::new();
        let config = Config {
            enumeration: Enumeration::Exhaustive,
            ..Config::default()
        };
        assert_eq!(
            config.generator(&dictionary).enumeration(),
            Enumeration::Exhaustive
        );
    }
}
