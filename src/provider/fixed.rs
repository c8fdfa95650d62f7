//! Provider that always returns the same word.

use async_trait::async_trait;

use super::{ProviderError, WordProvider};
use crate::core::Word;

pub struct FixedWord {
    word: Word,
}

impl FixedWord {
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self { word }
    }
}

#[async_trait]
impl WordProvider for FixedWord {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch_word(&self, len: usize) -> Result<Word, ProviderError> {
        if self.word.len() == len {
            Ok(self.word.clone())
        } else {
            Err(ProviderError::NoWord(len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_word_of_matching_length() {
        let provider = FixedWord::new(Word::new("react").unwrap());
        assert_eq!(provider.fetch_word(5).await.unwrap().text(), "react");
        assert!(matches!(
            provider.fetch_word(4).await,
            Err(ProviderError::NoWord(4))
        ));
    }
}
