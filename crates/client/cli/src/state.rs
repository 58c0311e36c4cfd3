//! Application state for button focus.

use game_core::Choice;

/// One of the four on-screen buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Play(Choice),
    ResetScores,
}

impl Button {
    /// Buttons in display order.
    pub const ALL: [Button; 4] = [
        Button::Play(Choice::Rock),
        Button::Play(Choice::Paper),
        Button::Play(Choice::Scissors),
        Button::ResetScores,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::Play(choice) => choice.into(),
            Button::ResetScores => "Reset Scores",
        }
    }

    /// Single-key shortcut shown next to the label.
    pub fn shortcut(self) -> char {
        match self {
            Button::Play(Choice::Rock) => 'r',
            Button::Play(Choice::Paper) => 'p',
            Button::Play(Choice::Scissors) => 's',
            Button::ResetScores => 'x',
        }
    }
}

/// Mutable UI state tracking which button has focus.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    focus: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Button {
        Button::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Button::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Button::ALL.len() - 1) % Button::ALL.len();
    }

    /// Move focus to `button`, e.g. after it was pressed by shortcut.
    pub fn focus_on(&mut self, button: Button) {
        if let Some(index) = Button::ALL.iter().position(|b| *b == button) {
            self.focus = index;
        }
    }
}
