//! CLI-specific configuration for the terminal client.
use std::env;
use std::path::PathBuf;

/// CLI terminal client configuration.
///
/// Storage and opponent settings live in `runtime::RuntimeConfig`; this only
/// covers what the terminal binary itself needs.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory receiving per-session log folders.
    pub log_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RPS_LOG_DIR` - Log directory (default: platform cache dir + `logs`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("RPS_LOG_DIR").filter(|d| !d.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/rock-paper-scissors/logs`
/// - Linux: `~/.cache/rock-paper-scissors/logs` (or `$XDG_CACHE_HOME/...`)
/// - Windows: `%LOCALAPPDATA%\rock-paper-scissors\cache\logs`
/// - Fallback: `/tmp/rock-paper-scissors/logs`
fn default_log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", runtime::config::APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join(runtime::config::APP_NAME));

    base_dir.join("logs")
}
