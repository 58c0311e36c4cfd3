//! Raw-mode terminal session for the game screen.
use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the UI runs.
///
/// Dropping the session leaves the alternate screen and raw mode, so the
/// shell is restored on normal quit, on `?` early returns, and on panic.
pub struct TerminalSession {
    terminal: Tui,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        let terminal = execute!(stdout, EnterAlternateScreen)
            .and_then(|_| Terminal::new(CrosstermBackend::new(stdout)));

        match terminal {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = leave();
                Err(e).context("Failed to enter alternate screen")
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = leave();
    }
}

fn leave() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// A panic message printed inside the alternate screen is lost, so restore
/// first and then defer to the previous hook.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave();
        previous(info);
    }));
}
