use std::sync::Arc;

use quiz_core::model::{Board, CategoryId, GameResults, Phase, Question, QuestionBank, Slot};
use rand::Rng;

use super::draw::draw_questions;

/// Number of questions drawn from the bank for each play-through.
pub const QUESTIONS_PER_GAME: usize = 20;

/// One play-through of the classification game.
///
/// Owns the phase machine, the drawn question set, the pool/bucket board,
/// the elapsed-time counter, and the derived results. Every intent handler
/// silently rejects an invalid transition: the call is a no-op and the state
/// stays untouched, so the session is always in a renderable state.
///
/// The session is synchronous and single-writer; persistence and ticking
/// live with the caller (see [`crate::game::GameService`] and
/// [`crate::ticker::Ticker`]).
pub struct GameSession {
    bank: Arc<QuestionBank>,
    phase: Phase,
    player_name: String,
    selected_questions: Vec<Question>,
    board: Board,
    selected_number: Option<String>,
    elapsed_seconds: u64,
    results: Option<GameResults>,
    score: u32,
    leaderboard_open: bool,
}

impl GameSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            phase: Phase::Start,
            player_name: String::new(),
            selected_questions: Vec::new(),
            board: Board::default(),
            selected_number: None,
            elapsed_seconds: 0,
            results: None,
            score: 0,
            leaderboard_open: false,
        }
    }

    // ─── Read accessors (the presentation boundary) ────────────────────────

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Identifiers not yet assigned to any category.
    #[must_use]
    pub fn pool(&self) -> &[String] {
        self.board.pool()
    }

    /// Identifiers the player has placed in the given category.
    #[must_use]
    pub fn bucket(&self, category: CategoryId) -> &[String] {
        self.board.bucket(category)
    }

    #[must_use]
    pub fn selected_number(&self) -> Option<&str> {
        self.selected_number.as_deref()
    }

    #[must_use]
    pub fn results(&self) -> Option<GameResults> {
        self.results
    }

    #[must_use]
    pub fn selected_questions(&self) -> &[Question] {
        &self.selected_questions
    }

    /// How many of the drawn numbers have been placed so far.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.board.placed_count()
    }

    /// The current assignments: non-empty buckets as `(category,
    /// identifiers)` pairs.
    pub fn placements(&self) -> impl Iterator<Item = (CategoryId, &[String])> {
        self.board.placements()
    }

    #[must_use]
    pub fn leaderboard_open(&self) -> bool {
        self.leaderboard_open
    }

    fn has_player_name(&self) -> bool {
        !self.player_name.trim().is_empty()
    }

    // ─── Intent handlers ───────────────────────────────────────────────────

    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = name.to_string();
    }

    /// Start → Instructions. Rejected without a (trimmed) non-empty name.
    pub fn go_to_instructions(&mut self) {
        if self.phase == Phase::Start && self.has_player_name() {
            self.phase = Phase::Instructions;
        }
    }

    /// Instructions → Start.
    pub fn dismiss_instructions(&mut self) {
        if self.phase == Phase::Instructions {
            self.phase = Phase::Start;
        }
    }

    /// Start or Instructions → Playing: draw a fresh question set and reset
    /// the board, timer, selection, and results.
    pub fn start_game(&mut self) {
        self.start_game_with_rng(&mut rand::rng());
    }

    /// Same as [`GameSession::start_game`] with an injected random source,
    /// for deterministic draws in tests.
    pub fn start_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !matches!(self.phase, Phase::Start | Phase::Instructions) || !self.has_player_name() {
            return;
        }

        let questions = draw_questions(self.bank.questions(), QUESTIONS_PER_GAME, rng);
        let identifiers = questions.iter().map(|q| q.number().to_string()).collect();
        // Bank numbers are unique, so building the board cannot fail.
        let Ok(board) = Board::new(identifiers) else {
            return;
        };

        self.selected_questions = questions;
        self.board = board;
        self.selected_number = None;
        self.elapsed_seconds = 0;
        self.results = None;
        self.score = 0;
        self.phase = Phase::Playing;
    }

    /// Advance the elapsed-time counter by one second. Only ticks while
    /// Playing; in every other phase the counter is suspended.
    pub fn tick(&mut self) {
        if self.phase.is_playing() {
            self.elapsed_seconds += 1;
        }
    }

    /// Mark a number as picked up, pending placement. Nothing moves yet.
    pub fn select_number(&mut self, id: &str) {
        if self.phase.is_playing() && self.board.contains(id) {
            self.selected_number = Some(id.to_string());
        }
    }

    /// Drop the picked-up number into a category bucket, detaching it from
    /// the pool or any bucket it currently occupies. No-op without a
    /// selection.
    pub fn place_in_category(&mut self, category: CategoryId) {
        if !self.phase.is_playing() {
            return;
        }
        let Some(id) = self.selected_number.take() else {
            return;
        };
        self.board.relocate(&id, Slot::Category(category));
    }

    /// Send a number from the given bucket back to the pool.
    pub fn remove_from_category(&mut self, id: &str, category: CategoryId) {
        if !self.phase.is_playing() {
            return;
        }
        if self.board.slot_of(id) == Some(Slot::Category(category)) {
            self.board.relocate(id, Slot::Pool);
        }
    }

    /// Playing → Results: grade every placed number against its correct
    /// category. Numbers still in the pool count toward neither bucket.
    /// Submission is allowed no matter how many remain unplaced.
    pub fn submit(&mut self) {
        if !self.phase.is_playing() {
            return;
        }

        let mut correct = 0u32;
        let mut wrong = 0u32;
        for (category, ids) in self.board.placements() {
            for id in ids {
                match self.bank.get(id) {
                    Some(question) if question.correct_category() == category => correct += 1,
                    _ => wrong += 1,
                }
            }
        }

        self.results = Some(GameResults::from_counts(correct, wrong));
        self.selected_number = None;
        self.phase = Phase::Results;
    }

    /// Results → GameOver: fix the final score and hand it to the caller so
    /// the coordinator can persist a leaderboard entry when it is positive.
    ///
    /// Returns `None` when called outside Results (no transition).
    pub fn continue_after_results(&mut self) -> Option<u32> {
        if self.phase != Phase::Results {
            return None;
        }
        let results = self.results?;
        self.score = results.score();
        self.phase = Phase::GameOver;
        Some(self.score)
    }

    /// Back to the menu: full reset of the play-through. The player name is
    /// kept; clearing it is a presentation choice.
    pub fn return_to_start(&mut self) {
        self.phase = Phase::Start;
        self.selected_questions = Vec::new();
        self.board = Board::default();
        self.selected_number = None;
        self.elapsed_seconds = 0;
        self.results = None;
        self.score = 0;
    }

    /// Show the leaderboard overlay. Independent of the phase machine.
    pub fn open_leaderboard(&mut self) {
        self.leaderboard_open = true;
    }

    pub fn close_leaderboard(&mut self) {
        self.leaderboard_open = false;
    }
}
