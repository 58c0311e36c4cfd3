//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Choice;

use crate::state::Button;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Press a specific button.
    Press(Button),
    /// Press the focused button.
    Activate,
    FocusNext,
    FocusPrev,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left | KeyCode::BackTab => KeyAction::FocusPrev,
            KeyCode::Right | KeyCode::Tab => KeyAction::FocusNext,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'r' => KeyAction::Press(Button::Play(Choice::Rock)),
            'p' => KeyAction::Press(Button::Play(Choice::Paper)),
            's' => KeyAction::Press(Button::Play(Choice::Scissors)),
            'x' => KeyAction::Press(Button::ResetScores),
            'h' => KeyAction::FocusPrev,
            'l' => KeyAction::FocusNext,
            ' ' => KeyAction::Activate,
            _ => KeyAction::None,
        }
    }
}
