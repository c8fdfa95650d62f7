//! # Game engine
//!
//! Owns one [`GameState`] and runs the side effects its transitions ask for.
//!
//! Target words arrive asynchronously. Each reset bumps the state's
//! generation, aborts the previous fetch task and spawns a new one tagged
//! with the new generation. Results come back over a channel and are applied
//! as [`GameEvent::WordResolved`]; the state itself discards anything stale.
//!
//! Input is accepted while the fetch is in flight. Until it resolves the
//! fallback word is the target, and once a row has been submitted the game
//! stays on whatever target it was evaluated against.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;

use super::Statistics;
use crate::config::GameConfig;
use crate::core::{Effect, GameEvent, GameState, Key, event_for_key};
use crate::provider::{WordProvider, build_provider};

pub struct GameEngine {
    state: GameState,
    provider: Arc<dyn WordProvider>,
    stats: Statistics,
    tx: UnboundedSender<GameEvent>,
    rx: UnboundedReceiver<GameEvent>,
    fetch: Option<AbortHandle>,
}

impl GameEngine {
    /// Start a game and request its first target word.
    ///
    /// The fetch needs a Tokio runtime; without one the game simply keeps
    /// its fallback word.
    pub fn new(state: GameState, provider: Arc<dyn WordProvider>) -> Self {
        let (tx, rx) = unbounded_channel();
        let mut engine = Self {
            stats: Statistics::new(state.rows()),
            state,
            provider,
            tx,
            rx,
            fetch: None,
        };
        engine.spawn_fetch(engine.state.generation());
        engine
    }

    /// Build the state and provider described by `config` and start a game.
    ///
    /// # Errors
    /// Fails if the provider cannot be built or the fallback word does not
    /// fit the grid.
    pub fn from_config(config: &GameConfig) -> anyhow::Result<Self> {
        let state = GameState::new(config.rows, config.cols, config.fallback_word.clone())?;
        let provider = build_provider(config)?;
        info!(
            "Starting {}x{} game with {} provider",
            config.rows,
            config.cols,
            provider.name()
        );
        Ok(Self::new(state, provider))
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn type_letter(&mut self, ch: char) {
        self.handle(GameEvent::Letter(ch));
    }

    pub fn backspace(&mut self) {
        self.handle(GameEvent::Backspace);
    }

    pub fn submit_guess(&mut self) -> Effect {
        self.handle(GameEvent::Submit)
    }

    pub fn reset(&mut self) {
        self.handle(GameEvent::Reset);
    }

    /// Translate a key press and apply it. Returns `None` for ignored keys.
    pub fn handle_key(&mut self, key: Key) -> Option<Effect> {
        event_for_key(key, self.state.is_over()).map(|event| self.handle(event))
    }

    /// Apply one event and carry out whatever effect it requests.
    pub fn handle(&mut self, event: GameEvent) -> Effect {
        let effect = self.state.apply(event);
        match &effect {
            Effect::FetchWord { generation } => {
                info!("New game (generation {generation})");
                self.spawn_fetch(*generation);
            }
            Effect::GameOver { solved, guesses } => {
                info!(
                    "Game over: solved={solved} after {guesses} guesses, word was {}",
                    self.state.target()
                );
                self.stats.record(*solved, *guesses);
            }
            Effect::TargetReplaced => {
                debug!("Target word set for generation {}", self.state.generation());
            }
            Effect::WordDiscarded => {
                debug!("Discarded late or stale word");
            }
            Effect::None => {}
        }
        effect
    }

    /// Apply every word that has arrived since the last call.
    ///
    /// Returns true if anything was applied.
    pub fn poll_words(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.rx.try_recv() {
            self.handle(event);
            applied = true;
        }
        applied
    }

    /// Wait for the next fetch result and apply it.
    pub async fn wait_for_word(&mut self) -> Effect {
        match self.rx.recv().await {
            Some(event) => self.handle(event),
            None => Effect::None,
        }
    }

    fn spawn_fetch(&mut self, generation: u64) {
        if let Some(previous) = self.fetch.take() {
            previous.abort();
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime available, keeping fallback word");
            return;
        };

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let len = self.state.cols();
        let fallback = self.state.fallback().clone();

        let task = runtime.spawn(async move {
            let word = match provider.fetch_word(len).await {
                Ok(word) => {
                    debug!("{} supplied a word for generation {generation}", provider.name());
                    word
                }
                Err(e) => {
                    warn!(
                        "Word fetch from {} failed, using fallback: {e}",
                        provider.name()
                    );
                    fallback
                }
            };
            if tx.send(GameEvent::WordResolved { generation, word }).is_err() {
                debug!("Game dropped before word arrived (generation {generation})");
            }
        });
        self.fetch = Some(task.abort_handle());
    }
}

impl Drop for GameEngine {
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterState, Word};
    use crate::provider::{FixedWord, ProviderError};
    use async_trait::async_trait;
    use std::time::Duration;

    struct FailingProvider;

    #[async_trait]
    impl WordProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_word(&self, _len: usize) -> Result<Word, ProviderError> {
            Err(ProviderError::Network("connection refused".to_string()))
        }
    }

    /// Returns its word after a short delay
    struct SlowWord(&'static str);

    #[async_trait]
    impl WordProvider for SlowWord {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch_word(&self, _len: usize) -> Result<Word, ProviderError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(Word::new(self.0).unwrap())
        }
    }

    fn state() -> GameState {
        GameState::new(7, 5, Word::new("react").unwrap()).unwrap()
    }

    fn engine_with(provider: impl WordProvider + 'static) -> GameEngine {
        GameEngine::new(state(), Arc::new(provider))
    }

    async fn next_word(engine: &mut GameEngine) -> Effect {
        tokio::time::timeout(Duration::from_secs(5), engine.wait_for_word())
            .await
            .expect("word fetch timed out")
    }

    fn type_word(engine: &mut GameEngine, word: &str) {
        for ch in word.chars() {
            engine.type_letter(ch);
        }
    }

    #[tokio::test]
    async fn fetched_word_becomes_target() {
        let mut engine = engine_with(FixedWord::new(Word::new("allow").unwrap()));
        assert_eq!(engine.state().target().text(), "react");

        assert_eq!(next_word(&mut engine).await, Effect::TargetReplaced);
        assert_eq!(engine.state().target().text(), "allow");
    }

    #[tokio::test]
    async fn failed_fetch_keeps_fallback() {
        let mut engine = engine_with(FailingProvider);
        assert_eq!(next_word(&mut engine).await, Effect::TargetReplaced);
        assert_eq!(engine.state().target().text(), "react");
    }

    #[tokio::test]
    async fn guess_before_arrival_is_scored_against_fallback() {
        let mut engine = engine_with(SlowWord("allow"));
        type_word(&mut engine, "react");
        assert_eq!(
            engine.submit_guess(),
            Effect::GameOver {
                solved: true,
                guesses: 1
            }
        );

        assert_eq!(next_word(&mut engine).await, Effect::WordDiscarded);
        assert_eq!(engine.state().target().text(), "react");
    }

    #[tokio::test]
    async fn reset_supersedes_pending_fetch() {
        let mut engine = engine_with(SlowWord("allow"));
        // Finish the game immediately against the fallback
        type_word(&mut engine, "react");
        engine.submit_guess();

        engine.reset();
        assert_eq!(engine.state().generation(), 1);

        assert_eq!(next_word(&mut engine).await, Effect::TargetReplaced);
        assert_eq!(engine.state().target().text(), "allow");

        // The first fetch was aborted and never reports back
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!engine.poll_words());
    }

    #[tokio::test]
    async fn keys_drive_the_game() {
        let mut engine = engine_with(FixedWord::new(Word::new("react").unwrap()));
        for c in "tacer".chars() {
            engine.handle_key(Key::Char(c));
        }
        assert_eq!(engine.handle_key(Key::Escape), None);
        engine.handle_key(Key::Enter);

        let row: Vec<LetterState> = engine.state().grid().row(0).iter().map(|c| c.state).collect();
        assert_eq!(row, vec![LetterState::Present; 5]);

        for c in "reacx".chars() {
            engine.handle_key(Key::Char(c));
        }
        engine.handle_key(Key::Backspace);
        engine.handle_key(Key::Char('t'));
        engine.handle_key(Key::Enter);
        assert!(engine.state().solved());

        assert_eq!(
            engine.handle_key(Key::Escape),
            Some(Effect::FetchWord { generation: 1 })
        );
        assert!(!engine.state().is_over());
    }

    #[tokio::test]
    async fn stats_recorded_once_per_game() {
        let mut engine = engine_with(FailingProvider);
        next_word(&mut engine).await;

        for _ in 0..7 {
            type_word(&mut engine, "crane");
            engine.submit_guess();
        }
        // Extra submissions after the game is over change nothing
        engine.submit_guess();

        assert_eq!(engine.stats().total_games, 1);
        assert_eq!(engine.stats().games_won, 0);

        engine.reset();
        next_word(&mut engine).await;
        type_word(&mut engine, "react");
        engine.submit_guess();

        assert_eq!(engine.stats().total_games, 2);
        assert_eq!(engine.stats().games_won, 1);
        assert_eq!(engine.stats().guess_distribution[1], 1);
    }

    #[tokio::test]
    async fn from_config_offline_uses_embedded_words() {
        let cli = crate::config::Overrides {
            offline: true,
            ..Default::default()
        };
        let config = crate::config::resolve(&crate::config::FileConfig::default(), &cli).unwrap();
        let mut engine = GameEngine::from_config(&config).unwrap();
        assert_eq!(engine.provider_name(), "embedded");

        assert_eq!(next_word(&mut engine).await, Effect::TargetReplaced);
        assert_eq!(engine.state().target().len(), 5);
    }

    #[test]
    fn works_without_runtime() {
        let mut engine = engine_with(FailingProvider);
        assert!(!engine.poll_words());
        type_word(&mut engine, "react");
        engine.submit_guess();
        assert!(engine.state().solved());
    }
}
