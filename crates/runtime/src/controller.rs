//! Round orchestration and the two display texts.
//!
//! The controller is driven by one UI event at a time. Each call runs to
//! completion (draw opponent move, resolve, persist, refresh texts) before
//! the next event is handled, so there is no state between rounds other than
//! the persisted score.

use game_core::{Choice, OpponentSource, Outcome, ScoreRecord, resolve};

use crate::error::Result;
use crate::repository::ScoreRepository;
use crate::store::ScoreStore;

/// Result text shown before the first round.
pub const WELCOME_TEXT: &str = "Make your move!";
/// Result text shown after the scores are reset.
pub const RESET_TEXT: &str = "Scores reset!";

/// What happened in a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub player: Choice,
    pub opponent: Choice,
    pub outcome: Outcome,
}

impl RoundReport {
    /// Human-readable round summary.
    pub fn summary(&self) -> String {
        format!(
            "You chose {}. Computer chose {}.\n{}",
            self.player,
            self.opponent,
            self.outcome.phrase()
        )
    }
}

/// Plays rounds against an [`OpponentSource`] and records them in a [`ScoreStore`].
///
/// Persistence failures after startup are logged and swallowed; the score
/// text then shows the zero record.
pub struct GameController<R, O> {
    store: ScoreStore<R>,
    opponent: O,
    result_text: String,
    score_text: String,
}

impl<R, O> GameController<R, O>
where
    R: ScoreRepository,
    O: OpponentSource,
{
    /// Wrap an initialized store.
    pub fn new(store: ScoreStore<R>, opponent: O) -> Self {
        let score_text = store.read_score().to_string();
        Self {
            store,
            opponent,
            result_text: WELCOME_TEXT.to_owned(),
            score_text,
        }
    }

    /// Play one round with the player's `choice`.
    pub fn play(&mut self, choice: Choice) -> RoundReport {
        let opponent = self.opponent.choose();
        let report = RoundReport {
            player: choice,
            opponent,
            outcome: resolve(choice, opponent),
        };

        tracing::info!(
            "Round: player={} computer={} outcome={}",
            report.player,
            report.opponent,
            report.outcome
        );

        self.result_text = report.summary();
        if let Err(e) = self.store.record_outcome(report.outcome) {
            tracing::error!("Failed to record {}: {}", report.outcome, e);
        }
        self.refresh_score();

        report
    }

    /// Zero the persisted score.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.reset() {
            tracing::error!("Failed to reset scores: {}", e);
        } else {
            tracing::info!("Scores reset");
        }
        self.refresh_score();
        self.result_text = RESET_TEXT.to_owned();
    }

    /// Latest round summary or status message.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Formatted score as of the last event.
    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    /// Fresh best-effort read of the persisted score.
    pub fn score(&self) -> ScoreRecord {
        self.store.read_score()
    }

    pub fn store(&self) -> &ScoreStore<R> {
        &self.store
    }

    /// Release storage at shutdown.
    pub fn shutdown(self) -> Result<()> {
        self.store.close()
    }

    fn refresh_score(&mut self) {
        self.score_text = self.store.read_score().to_string();
    }
}
