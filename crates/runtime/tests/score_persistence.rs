use game_core::{Choice, Outcome, ScoreRecord, ScriptedOpponent};
use runtime::{
    GameController, RuntimeBuilder, RuntimeConfig, ScoreRepository, ScoreStore,
    SqliteScoreRepository, StorageConfig,
};
use tempfile::TempDir;

fn config(dir: &TempDir, seed: u64) -> RuntimeConfig {
    RuntimeConfig {
        storage: StorageConfig::new(dir.path().join("RockPaperScissors.db")),
        opponent_seed: Some(seed),
    }
}

/// A session plays rounds, quits, and a second session sees the same score.
#[test]
fn test_score_persists_across_sessions() {
    let dir = TempDir::new().unwrap();

    let mut first = RuntimeBuilder::new().config(config(&dir, 1)).build().unwrap();
    assert_eq!(first.score(), ScoreRecord::ZERO);

    let mut expected = ScoreRecord::ZERO;
    for choice in [Choice::Rock, Choice::Paper, Choice::Scissors, Choice::Rock] {
        let report = first.play(choice);
        expected = expected.incremented(report.outcome);
    }
    assert_eq!(first.score_text(), expected.to_string());
    first.shutdown().unwrap();

    let second = RuntimeBuilder::new().config(config(&dir, 2)).build().unwrap();
    assert_eq!(second.score(), expected);
    assert_eq!(second.score_text(), expected.to_string());
    assert_eq!(second.result_text(), "Make your move!");
}

#[test]
fn test_reset_persists() {
    let dir = TempDir::new().unwrap();

    let mut controller = RuntimeBuilder::new().config(config(&dir, 9)).build().unwrap();
    controller.play(Choice::Paper);
    controller.play(Choice::Paper);
    controller.reset();
    controller.shutdown().unwrap();

    let reopened = RuntimeBuilder::new().config(config(&dir, 9)).build().unwrap();
    assert_eq!(reopened.score(), ScoreRecord::ZERO);
}

#[test]
fn test_n_increments_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.db");

    for outcome in Outcome::ALL {
        let store = ScoreStore::new(SqliteScoreRepository::open(&path).unwrap());
        store.ensure_initialized().unwrap();
        store.reset().unwrap();

        for _ in 0..5 {
            store.record_outcome(outcome).unwrap();
        }

        let score = store.read_score();
        for other in Outcome::ALL {
            assert_eq!(score.get(other), if other == outcome { 5 } else { 0 });
        }
        store.close().unwrap();
    }
}

#[test]
fn test_invalid_kind_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = ScoreStore::new(SqliteScoreRepository::open(dir.path().join("s.db")).unwrap());
    store.ensure_initialized().unwrap();
    store.record_named("win").unwrap();

    let err = store.record_named("draw").unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(store.read_score(), ScoreRecord::new(1, 0, 0));
}

#[test]
fn test_scripted_controller_over_sqlite() {
    let repo = SqliteScoreRepository::open_in_memory().unwrap();
    repo.initialize().unwrap();
    let mut controller = GameController::new(
        ScoreStore::new(repo),
        ScriptedOpponent::new([Choice::Scissors, Choice::Rock, Choice::Paper]),
    );

    assert_eq!(controller.play(Choice::Rock).outcome, Outcome::Win);
    assert_eq!(controller.play(Choice::Scissors).outcome, Outcome::Lose);
    assert_eq!(controller.play(Choice::Paper).outcome, Outcome::Tie);
    assert_eq!(controller.score_text(), "Wins: 1 | Losses: 1 | Ties: 1");
}

#[test]
fn test_unopenable_path_fails_to_build() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be opened as a database file.
    let config = RuntimeConfig {
        storage: StorageConfig::new(dir.path()),
        opponent_seed: None,
    };

    assert!(RuntimeBuilder::new().config(config).build().is_err());
}
