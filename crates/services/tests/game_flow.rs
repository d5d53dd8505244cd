use std::sync::Arc;

use quiz_core::data::question_bank;
use quiz_core::model::{CategoryId, Phase, Question, QuestionBank};
use quiz_core::time::fixed_clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::GameService;
use storage::leaderboard::LeaderboardStore;
use storage::repository::InMemoryKeyValueStore;

fn single_question_service(question: Question) -> GameService {
    let bank = Arc::new(QuestionBank::new(vec![question]).unwrap());
    let store = LeaderboardStore::new(Arc::new(InMemoryKeyValueStore::new()));
    GameService::new(bank, store, fixed_clock())
}

#[tokio::test]
async fn correct_placement_scores_ten_and_lands_on_the_board() {
    let mut game = single_question_service(Question::new("2i", CategoryId::Imaginary));
    game.set_player_name("Ada");
    game.start_game();
    assert_eq!(game.session().phase(), Phase::Playing);

    game.select_number("2i");
    game.place_in_category(CategoryId::Imaginary);
    game.submit();

    let results = game.session().results().unwrap();
    assert_eq!(results.correct(), 1);
    assert_eq!(results.wrong(), 0);
    assert_eq!(results.total(), 1);

    game.continue_after_results().await;
    assert_eq!(game.session().phase(), Phase::GameOver);
    assert_eq!(game.session().score(), 10);

    let board = game.leaderboard();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name(), "Ada");
    assert_eq!(board[0].score(), 10);
}

#[tokio::test]
async fn wrong_placement_scores_zero_and_records_nothing() {
    let mut game = single_question_service(Question::new("2i", CategoryId::Imaginary));
    game.set_player_name("Ada");
    game.start_game();

    game.select_number("2i");
    game.place_in_category(CategoryId::Rational);
    game.submit();

    let results = game.session().results().unwrap();
    assert_eq!(results.correct(), 0);
    assert_eq!(results.wrong(), 1);
    assert_eq!(results.total(), 1);

    game.continue_after_results().await;
    assert_eq!(game.session().score(), 0);
    assert!(game.leaderboard().is_empty(), "zero scores must not persist");
}

#[tokio::test]
async fn perfect_game_tops_an_earlier_partial_score() {
    let bank = Arc::new(question_bank().unwrap());
    let store = LeaderboardStore::new(Arc::new(InMemoryKeyValueStore::new()));
    let mut game = GameService::new(Arc::clone(&bank), store, fixed_clock());
    game.refresh_leaderboard().await;
    assert!(game.leaderboard().is_empty());

    // First play-through: one correct answer, the rest left in the pool.
    game.set_player_name("Alan");
    game.start_game_with_rng(&mut StdRng::seed_from_u64(1));
    let (first_id, first_category) = {
        let q = &game.session().selected_questions()[0];
        (q.number().to_string(), q.correct_category())
    };
    game.select_number(&first_id);
    game.place_in_category(first_category);
    game.submit();
    game.continue_after_results().await;
    assert_eq!(game.leaderboard()[0].score(), 10);

    // Second play-through: classify everything correctly.
    game.return_to_start();
    game.set_player_name("Ada");
    game.start_game_with_rng(&mut StdRng::seed_from_u64(2));
    let answers: Vec<(String, CategoryId)> = game
        .session()
        .selected_questions()
        .iter()
        .map(|q| (q.number().to_string(), q.correct_category()))
        .collect();
    for (id, category) in answers {
        game.select_number(&id);
        game.place_in_category(category);
    }
    game.submit();

    let results = game.session().results().unwrap();
    assert_eq!(results.correct(), 20);
    assert_eq!(results.wrong(), 0);

    game.continue_after_results().await;
    assert_eq!(game.session().score(), 200);

    let board = game.leaderboard();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].name(), "Ada");
    assert_eq!(board[0].score(), 200);
    assert_eq!(board[1].name(), "Alan");
}

#[tokio::test]
async fn continue_outside_results_is_a_no_op() {
    let mut game = single_question_service(Question::new("π", CategoryId::Irrational));
    game.continue_after_results().await;
    assert_eq!(game.session().phase(), Phase::Start);
    assert!(game.leaderboard().is_empty());
}
