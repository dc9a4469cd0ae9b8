//! Logging initialization and configuration.
//!
//! The TUI owns the terminal, so interactive runs log to a file in the
//! platform log directory. `print` runs log to stderr.

use std::path::PathBuf;

/// Log output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the log file.
    File,
    /// Write to stderr.
    Stderr,
}

/// Filter directive for the given verbosity.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "mcpr_howto=debug,mcpr_tui_core=debug,mcpr_tui_dialog=debug"
    } else {
        "mcpr_howto=info,mcpr_tui_core=warn,mcpr_tui_dialog=info"
    }
}

/// Initialize logging. `RUST_LOG` overrides the verbosity flag.
/// Returns the log file path if logging to file.
pub fn init_logging(verbose: bool, target: LogTarget) -> Option<PathBuf> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directive(verbose)));

    if target == LogTarget::Stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    let log_dir = get_log_dir();

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Could not create log directory: {e}");
        return None;
    }

    let log_file = log_dir.join("mcpr-howto.log");

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {e}");
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(file)
        .init();

    Some(log_file)
}

/// Get the log directory path.
pub fn get_log_dir() -> PathBuf {
    // macOS: ~/Library/Logs/mcpr-howto
    // Linux: ~/.local/state/mcpr-howto/logs
    // Windows: %LOCALAPPDATA%/mcpr-howto/logs

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library/Logs/mcpr-howto");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(state_dir) = dirs::state_dir() {
            return state_dir.join("mcpr-howto/logs");
        }
        if let Some(home) = dirs::home_dir() {
            return home.join(".local/state/mcpr-howto/logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_app) = dirs::data_local_dir() {
            return local_app.join("mcpr-howto/logs");
        }
    }

    PathBuf::from(".mcpr-howto/logs")
}
