//! # Word providers
//!
//! A [`WordProvider`] supplies the target word for a new game. Calls are
//! single-shot: no retries, and any failure is reported as a
//! [`ProviderError`] so the caller can fall back to its fixed word.

mod api;
mod fixed;
mod offline;

pub use api::{DEFAULT_API_URL, RandomWordApi};
pub use fixed::FixedWord;
pub use offline::EmbeddedWords;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::config::GameConfig;
use crate::core::Word;
use crate::wordlists::loader::load_from_file;

/// Errors that can occur while fetching a word.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (bad URL, client construction failed).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service returned a non-success status.
    Api { status: u16, message: String },
    /// Response body was not the expected shape, or held an unusable word.
    Parse(String),
    /// No word of the requested length is available.
    NoWord(usize),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
            ProviderError::NoWord(len) => write!(f, "no {len}-letter word available"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetch one lowercase word of exactly `len` letters.
    async fn fetch_word(&self, len: usize) -> Result<Word, ProviderError>;
}

/// Build the provider a resolved config asks for.
///
/// # Errors
/// Returns `ProviderError::Config` if a custom word list cannot be read or
/// the HTTP client cannot be built.
pub fn build_provider(config: &GameConfig) -> Result<Arc<dyn WordProvider>, ProviderError> {
    if !config.offline {
        let api = RandomWordApi::new(config.api_url.clone(), config.fetch_timeout)?;
        info!("Using word service at {}", api.base_url());
        return Ok(Arc::new(api));
    }

    let provider = match &config.word_list {
        Some(path) => {
            let words = load_from_file(path)
                .map_err(|e| ProviderError::Config(format!("{}: {e}", path.display())))?;
            info!("Loaded {} offline words from {}", words.len(), path.display());
            EmbeddedWords::from_words(words)
        }
        None => EmbeddedWords::new(),
    };
    Ok(Arc::new(provider))
}
