//! Random word HTTP service.
//!
//! One GET per game:
//!
//! ```text
//! GET {base}?language=en&length={len}&type=lowercase&words=1
//! → [{"word": "react", ...}]
//! ```
//!
//! Only the `word` field of the first element is read.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use super::{ProviderError, WordProvider};
use crate::core::Word;

pub const DEFAULT_API_URL: &str = "https://random-words-api.kushcreates.com/api";

#[derive(Deserialize, Debug)]
struct ApiWord {
    word: String,
}

pub struct RandomWordApi {
    client: reqwest::Client,
    base_url: String,
}

impl RandomWordApi {
    /// Build a provider for `base_url` whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns `ProviderError::Config` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WordProvider for RandomWordApi {
    fn name(&self) -> &str {
        "random-words-api"
    }

    async fn fetch_word(&self, len: usize) -> Result<Word, ProviderError> {
        let length = len.to_string();
        debug!("Requesting {len}-letter word from {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("language", "en"),
                ("length", length.as_str()),
                ("type", "lowercase"),
                ("words", "1"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let words: Vec<ApiWord> = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let first = words
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Parse("empty word array".to_string()))?;

        Word::with_len(first.word, len).map_err(|e| ProviderError::Parse(e.to_string()))
    }
}
