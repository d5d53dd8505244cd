use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{CategoryId, LeaderboardEntry, QuestionBank};
use rand::Rng;
use storage::leaderboard::LeaderboardStore;

use crate::sessions::GameSession;

/// Coordinator between the session, the leaderboard store, and the clock.
///
/// Forwards every user intent to [`GameSession`] and handles the one place
/// where the game touches persistence: continuing past the results screen
/// saves a leaderboard entry when the score is positive and refreshes the
/// cached standings. Storage failures are absorbed by the store, so none of
/// these methods can fail.
pub struct GameService {
    session: GameSession,
    store: LeaderboardStore,
    leaderboard: Vec<LeaderboardEntry>,
    clock: Clock,
}

impl GameService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, store: LeaderboardStore, clock: Clock) -> Self {
        Self {
            session: GameSession::new(bank),
            store,
            leaderboard: Vec::new(),
            clock,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cached standings, refreshed at startup and after each saved entry.
    #[must_use]
    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    /// Re-read the persisted standings into the cache.
    pub async fn refresh_leaderboard(&mut self) {
        self.leaderboard = self.store.load().await;
    }

    // ─── Intent forwarding ─────────────────────────────────────────────────

    pub fn set_player_name(&mut self, name: &str) {
        self.session.set_player_name(name);
    }

    pub fn go_to_instructions(&mut self) {
        self.session.go_to_instructions();
    }

    pub fn dismiss_instructions(&mut self) {
        self.session.dismiss_instructions();
    }

    pub fn start_game(&mut self) {
        self.session.start_game();
    }

    /// Deterministic variant of [`GameService::start_game`] for tests.
    pub fn start_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session.start_game_with_rng(rng);
    }

    pub fn tick(&mut self) {
        self.session.tick();
    }

    pub fn select_number(&mut self, id: &str) {
        self.session.select_number(id);
    }

    pub fn place_in_category(&mut self, category: CategoryId) {
        self.session.place_in_category(category);
    }

    pub fn remove_from_category(&mut self, id: &str, category: CategoryId) {
        self.session.remove_from_category(id, category);
    }

    pub fn submit(&mut self) {
        self.session.submit();
    }

    /// Results → GameOver. A positive score becomes a leaderboard entry
    /// dated by the service clock; a zero score records nothing.
    pub async fn continue_after_results(&mut self) {
        let Some(score) = self.session.continue_after_results() else {
            return;
        };
        if score > 0 {
            let entry =
                LeaderboardEntry::new(self.session.player_name(), score, self.clock.now());
            self.store.save(entry).await;
            self.refresh_leaderboard().await;
        }
    }

    pub fn return_to_start(&mut self) {
        self.session.return_to_start();
    }

    pub fn open_leaderboard(&mut self) {
        self.session.open_leaderboard();
    }

    pub fn close_leaderboard(&mut self) {
        self.session.close_leaderboard();
    }
}
