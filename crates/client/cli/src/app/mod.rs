//! Glue code tying the game controller and the terminal UI together.
//!
//! Events are handled strictly one at a time: a key press runs its round or
//! reset to completion, the screen is redrawn, and only then is the next
//! terminal event read.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};

use game_core::OpponentSource;
use runtime::{GameController, ScoreRepository};

use crate::input::{InputHandler, KeyAction};
use crate::presentation::ui::{self, RenderContext};
use crate::state::{AppState, Button};

pub struct CliApp<R, O> {
    controller: GameController<R, O>,
    input: InputHandler,
    app_state: AppState,
}

impl<R, O> CliApp<R, O>
where
    R: ScoreRepository,
    O: OpponentSource,
{
    pub fn new(controller: GameController<R, O>) -> Self {
        Self {
            controller,
            input: InputHandler::new(),
            app_state: AppState::new(),
        }
    }

    /// Run until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        tracing::info!("CLI client starting...");
        self.render(terminal)?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                    self.render(terminal)?;
                }
                Event::Resize(_, _) => self.render(terminal)?,
                _ => {}
            }
        }

        tracing::info!("CLI client exiting");
        Ok(())
    }

    /// Apply one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key) {
            KeyAction::Quit => return true,
            KeyAction::Press(button) => {
                self.app_state.focus_on(button);
                self.press(button);
            }
            KeyAction::Activate => self.press(self.app_state.focused()),
            KeyAction::FocusNext => self.app_state.focus_next(),
            KeyAction::FocusPrev => self.app_state.focus_prev(),
            KeyAction::None => {}
        }
        false
    }

    fn press(&mut self, button: Button) {
        match button {
            Button::Play(choice) => {
                self.controller.play(choice);
            }
            Button::ResetScores => self.controller.reset(),
        }
    }

    pub fn render<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let ctx = RenderContext {
            app_state: &self.app_state,
            result_text: self.controller.result_text(),
            score_text: self.controller.score_text(),
        };
        terminal.draw(|frame| ui::render(frame, &ctx))?;
        Ok(())
    }

    pub fn controller(&self) -> &GameController<R, O> {
        &self.controller
    }

    pub fn into_controller(self) -> GameController<R, O> {
        self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use game_core::{Choice, ScoreRecord, ScriptedOpponent};
    use ratatui::backend::TestBackend;
    use runtime::{InMemoryScoreRepo, ScoreStore};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app(moves: &[Choice]) -> CliApp<InMemoryScoreRepo, ScriptedOpponent> {
        let store = ScoreStore::new(InMemoryScoreRepo::new());
        store.ensure_initialized().unwrap();
        CliApp::new(GameController::new(
            store,
            ScriptedOpponent::new(moves.iter().copied()),
        ))
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shortcut_plays_a_round() {
        let mut app = app(&[Choice::Scissors]);

        assert!(!app.handle_key(key(KeyCode::Char('r'))));

        assert_eq!(app.controller().score(), ScoreRecord::new(1, 0, 0));
        assert_eq!(
            app.controller().result_text(),
            "You chose Rock. Computer chose Scissors.\nYou win!"
        );
    }

    #[test]
    fn enter_presses_focused_button() {
        let mut app = app(&[Choice::Rock]);

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.controller().score(), ScoreRecord::new(1, 0, 0));
        assert!(app.controller().result_text().starts_with("You chose Paper."));
    }

    #[test]
    fn reset_button_clears_score() {
        let mut app = app(&[Choice::Paper]);
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Char('x')));

        assert_eq!(app.controller().score(), ScoreRecord::ZERO);
        assert_eq!(app.controller().result_text(), "Scores reset!");
    }

    #[test]
    fn quit_key_stops_without_playing() {
        let mut app = app(&[]);
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.controller().score(), ScoreRecord::ZERO);
    }

    #[test]
    fn renders_buttons_and_texts() {
        let mut app = app(&[Choice::Rock]);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        app.render(&mut terminal).unwrap();
        let initial = screen(&terminal);
        assert!(initial.contains("Rock-Paper-Scissors"));
        assert!(initial.contains("Reset Scores"));
        assert!(initial.contains("Make your move!"));
        assert!(initial.contains("Wins: 0 | Losses: 0 | Ties: 0"));

        app.handle_key(key(KeyCode::Char('p')));
        app.render(&mut terminal).unwrap();
        let after = screen(&terminal);
        assert!(after.contains("Computer chose Rock."));
        assert!(after.contains("You win!"));
        assert!(after.contains("Wins: 1 | Losses: 0 | Ties: 0"));
    }
}
