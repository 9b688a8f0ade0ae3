//! Keyboard input handling for the AgentHub TUI.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

use std::collections::HashMap;

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hub_core::{MonitoredItem, PendingSession, ProviderKind};

// ============================================================================
// Event Types
// ============================================================================

/// Events that the TUI can receive and process.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input from the user.
    Key(KeyEvent),

    /// Terminal window resize event.
    Resize(u16, u16),

    /// One provider's fresh session snapshot from the feed.
    ProviderUpdate {
        provider: ProviderKind,
        pending: Vec<PendingSession>,
        monitored: Vec<MonitoredItem>,
        /// Custom display names keyed by panel item id.
        display_names: HashMap<String, String>,
    },
}

// ============================================================================
// Feed Commands
// ============================================================================

/// Commands that can be sent to the feed task from the main loop.
#[derive(Debug, Clone)]
pub enum FeedCommand {
    /// Re-read all provider state files immediately.
    Poll,
}

// ============================================================================
// Action Types
// ============================================================================

/// Actions that can result from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action required.
    None,

    /// Quit the application.
    Quit,

    /// Re-read the provider state files.
    Refresh,

    /// The size mode changed; the new value should be persisted.
    SizeModeChanged,
}

// ============================================================================
// Input Handler
// ============================================================================

/// Handles a keyboard event and updates application state accordingly.
///
/// Returns an `Action` indicating what the main loop should do in response.
///
/// # Key Bindings
///
/// | Key          | Action                               |
/// |--------------|--------------------------------------|
/// | `q`, `Q`     | Quit the application                 |
/// | `Esc`        | Quit the application                 |
/// | `Ctrl+C`     | Quit the application                 |
/// | `j`, `Down`  | Select the next item                 |
/// | `k`, `Up`    | Select the previous item             |
/// | `Tab`        | Cycle the panel size mode            |
/// | `r`, `R`     | Re-read the provider state files     |
#[must_use]
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    // Handle Ctrl+C specially as an unconditional quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Action::Quit;
    }

    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            Action::Quit
        }

        // Navigation: next item (moves the primary selection)
        KeyCode::Char('j') | KeyCode::Down => {
            app.panel.select_next();
            Action::None
        }

        // Navigation: previous item
        KeyCode::Char('k') | KeyCode::Up => {
            app.panel.select_previous();
            Action::None
        }

        // Cycle size mode: collapsed -> small -> medium -> full -> collapsed
        KeyCode::Tab => {
            app.panel.cycle_size_mode();
            Action::SizeModeChanged
        }

        // Force a feed poll
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Refresh,

        // Unhandled keys
        _ => Action::None,
    }
}

// ============================================================================
// Tests
// ============================================================================
