//! Error types for the AgentHub TUI.
//!
//! All error types use `thiserror` for derive macros and provide clear,
//! user-friendly error messages.
//!
//! **Panic-Free Policy:** This module follows the project's panic-free guidelines.
//! No `.unwrap()`, `.expect()`, `panic!()`, `unreachable!()`, or `todo!()`.

use std::io;
use thiserror::Error;

/// TUI application errors.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Failed to initialize the terminal.
    ///
    /// This occurs when the TUI cannot set up raw mode, alternate screen,
    /// or other terminal requirements. Common causes include running in a
    /// non-TTY environment or an unsupported terminal emulator.
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    /// Failed to cleanup/restore the terminal.
    ///
    /// The terminal may be left in an inconsistent state; running
    /// `reset` can help recover.
    #[error("Failed to restore terminal: {0}")]
    TerminalCleanup(String),

    /// I/O error passthrough.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A provider state file could not be parsed.
    #[error("Failed to parse state file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Convenience Result type alias for TUI operations.
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_init_error_display() {
        let error = TuiError::TerminalInit("not a TTY".to_string());
        let display = format!("{error}");
        assert!(display.contains("Failed to initialize terminal"));
        assert!(display.contains("not a TTY"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "state file not found");
        let tui_error: TuiError = io_error.into();
        assert!(matches!(tui_error, TuiError::Io(_)));
    }

    #[test]
    fn test_parse_error_from_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("{ invalid json }");
        let json_error = parse_result.unwrap_err();
        let tui_error: TuiError = json_error.into();
        assert!(matches!(tui_error, TuiError::ParseError(_)));
    }
}
