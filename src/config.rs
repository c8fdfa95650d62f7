//! # Configuration
//!
//! Game settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! The config file is optional and only read when a path is given. Every
//! field is optional so a file may set just the values it cares about:
//!
//! ```toml
//! [game]
//! rows = 6
//! cols = 5
//! fallback_word = "react"
//!
//! [words]
//! api_url = "https://random-words-api.kushcreates.com/api"
//! offline = false
//! timeout_secs = 5
//! word_list = "my_words.txt"
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::Word;
use crate::provider::DEFAULT_API_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub words: WordsSection,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GameSection {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub fallback_word: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct WordsSection {
    pub api_url: Option<String>,
    pub offline: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub word_list: Option<PathBuf>,
}

/// Values given on the command line; `None` means "not specified"
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub fallback_word: Option<String>,
    pub api_url: Option<String>,
    pub offline: bool,
    pub timeout_secs: Option<u64>,
    pub word_list: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ROWS: usize = 7;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_FALLBACK_WORD: &str = "react";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const MAX_COLS: usize = 12;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub fallback_word: Word,
    pub api_url: String,
    pub offline: bool,
    pub fetch_timeout: Duration,
    pub word_list: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Load a config file. A missing path yields the empty config.
///
/// # Errors
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse` if it is not valid TOML for this schema.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {config:?}");
    Ok(config)
}

/// Parse config file contents
///
/// # Errors
/// Returns `ConfigError::Parse` on malformed TOML.
pub fn parse_config(contents: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// # Errors
/// Returns `ConfigError::Invalid` if the grid size is out of range or the
/// fallback word does not fit the grid width.
pub fn resolve(file: &FileConfig, cli: &Overrides) -> Result<GameConfig, ConfigError> {
    let rows = cli.rows.or(file.game.rows).unwrap_or(DEFAULT_ROWS);
    let cols = cli.cols.or(file.game.cols).unwrap_or(DEFAULT_COLS);

    if rows == 0 {
        return Err(ConfigError::Invalid("rows must be at least 1".to_string()));
    }
    if !(1..=MAX_COLS).contains(&cols) {
        return Err(ConfigError::Invalid(format!(
            "cols must be between 1 and {MAX_COLS}, got {cols}"
        )));
    }

    let fallback_text = cli
        .fallback_word
        .clone()
        .or_else(|| file.game.fallback_word.clone())
        .unwrap_or_else(|| DEFAULT_FALLBACK_WORD.to_string());
    let fallback_word = Word::with_len(fallback_text.as_str(), cols)
        .map_err(|e| ConfigError::Invalid(format!("fallback word '{fallback_text}': {e}")))?;

    let api_url = cli
        .api_url
        .clone()
        .or_else(|| file.words.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let timeout_secs = cli
        .timeout_secs
        .or(file.words.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(GameConfig {
        rows,
        cols,
        fallback_word,
        api_url,
        offline: cli.offline || file.words.offline.unwrap_or(false),
        fetch_timeout: Duration::from_secs(timeout_secs),
        word_list: cli.word_list.clone().or_else(|| file.words.word_list.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = resolve(&FileConfig::default(), &Overrides::default()).unwrap();
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.fallback_word.text(), DEFAULT_FALLBACK_WORD);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.offline);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert!(config.word_list.is_none());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = parse_config(
            r#"
[game]
rows = 6
cols = 4
fallback_word = "KITE"

[words]
offline = true
timeout_secs = 2
"#,
        )
        .unwrap();
        let config = resolve(&file, &Overrides::default()).unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 4);
        assert_eq!(config.fallback_word.text(), "kite");
        assert!(config.offline);
        assert_eq!(config.fetch_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_cli_wins_over_file() {
        let file = FileConfig {
            game: GameSection {
                rows: Some(6),
                ..Default::default()
            },
            words: WordsSection {
                api_url: Some("http://file.example/api".to_string()),
                ..Default::default()
            },
        };
        let cli = Overrides {
            rows: Some(3),
            api_url: Some("http://cli.example/api".to_string()),
            ..Default::default()
        };
        let config = resolve(&file, &cli).unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.api_url, "http://cli.example/api");
    }

    #[test]
    fn test_fallback_must_match_width() {
        let cli = Overrides {
            cols: Some(6),
            ..Default::default()
        };
        let err = resolve(&FileConfig::default(), &cli).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_grid_bounds() {
        for (rows, cols) in [(0, 5), (6, 0), (6, MAX_COLS + 1)] {
            let cli = Overrides {
                rows: Some(rows),
                cols: Some(cols),
                ..Default::default()
            };
            assert!(resolve(&FileConfig::default(), &cli).is_err());
        }
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            parse_config("[game]\nrows = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_path_is_empty_config() {
        let config = load_config(None).unwrap();
        assert!(config.game.rows.is_none());
        assert!(matches!(
            load_config(Some(Path::new("no/such/config.toml"))),
            Err(ConfigError::Io(_))
        ));
    }
}
