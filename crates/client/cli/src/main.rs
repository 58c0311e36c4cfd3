//! Terminal client entry point.
mod app;
mod config;
mod input;
mod logging;
mod presentation;
mod state;

use anyhow::Result;
use app::CliApp;
use config::CliConfig;
use presentation::terminal::TerminalSession;
use runtime::{RuntimeBuilder, RuntimeConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli_config = CliConfig::from_env();
    let runtime_config = RuntimeConfig::from_env();

    let log_guard = logging::setup_logging(&cli_config.log_dir)?;

    let controller = match RuntimeBuilder::new().config(runtime_config).build() {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("Failed to initialize score storage: {}", e);
            eprintln!("Failed to initialize score storage: {e}");
            drop(log_guard);
            std::process::exit(1);
        }
    };

    let mut app = CliApp::new(controller);
    {
        let mut session = TerminalSession::enter()?;
        app.run(session.terminal_mut())?;
    }

    if let Err(e) = app.into_controller().shutdown() {
        tracing::error!("Failed to close score storage: {}", e);
    }

    Ok(())
}
