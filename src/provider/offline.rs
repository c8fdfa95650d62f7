//! Offline provider picking a random word from a local list.

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use super::{ProviderError, WordProvider};
use crate::core::Word;
use crate::wordlists::{WORDS, loader::words_from_slice};

pub struct EmbeddedWords {
    words: Vec<Word>,
}

impl EmbeddedWords {
    /// Use the word list compiled into the binary
    #[must_use]
    pub fn new() -> Self {
        Self::from_words(words_from_slice(WORDS))
    }

    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    fn pick(&self, len: usize) -> Option<Word> {
        let candidates: Vec<&Word> = self.words.iter().filter(|w| w.len() == len).collect();
        candidates.choose(&mut rand::rng()).map(|&w| w.clone())
    }
}

impl Default for EmbeddedWords {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordProvider for EmbeddedWords {
    fn name(&self) -> &str {
        "embedded"
    }

    async fn fetch_word(&self, len: usize) -> Result<Word, ProviderError> {
        self.pick(len).ok_or(ProviderError::NoWord(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn picks_word_of_requested_length() {
        let provider = EmbeddedWords::new();
        for len in [4, 5, 6] {
            let word = provider.fetch_word(len).await.unwrap();
            assert_eq!(word.len(), len);
        }
    }

    #[tokio::test]
    async fn missing_length_is_an_error() {
        let provider = EmbeddedWords::from_words(words_from_slice(&["react", "slate"]));
        assert!(matches!(
            provider.fetch_word(9).await,
            Err(ProviderError::NoWord(9))
        ));
    }

    #[tokio::test]
    async fn only_picks_from_list() {
        let provider = EmbeddedWords::from_words(words_from_slice(&["react", "kite"]));
        for _ in 0..10 {
            assert_eq!(provider.fetch_word(5).await.unwrap().text(), "react");
        }
    }
}
