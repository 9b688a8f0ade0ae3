//! Application state for the AgentHub TUI.
//!
//! The `App` owns the selection panel and the small amount of shell-only
//! state (quit flag, blink timing, feed freshness). All session ordering
//! and selection semantics live in the panel itself.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use hub_core::{MonitoredItem, PendingSession, ProviderKind, SessionStatus};
use hub_panel::{PanelItem, SelectionPanel, SizeMode};

/// Core application state for the AgentHub TUI.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// The selection panel driving everything the shell renders.
    pub panel: SelectionPanel,

    /// Custom display names keyed by panel item id.
    display_names: HashMap<String, String>,

    /// Flag indicating the application should quit.
    pub should_quit: bool,

    /// When the last provider snapshot arrived, if any.
    pub last_refresh: Option<DateTime<Utc>>,

    /// Whether blinking status icons are currently visible.
    /// Toggles every 500ms (5 ticks at 100ms tick rate).
    pub blink_visible: bool,

    /// Internal tick counter for blink timing.
    tick_count: u32,
}

impl App {
    /// Creates a new App with an empty panel in the default size mode.
    pub fn new() -> Self {
        Self {
            blink_visible: true,
            ..Self::default()
        }
    }

    /// Creates a new App with a restored size mode.
    pub fn with_size_mode(mode: SizeMode) -> Self {
        Self {
            panel: SelectionPanel::with_size_mode(mode),
            blink_visible: true,
            ..Self::default()
        }
    }

    /// Applies a provider snapshot from the feed.
    ///
    /// Replaces that provider's session lists (the panel reconciles the
    /// primary selection) and that provider's custom display names.
    pub fn apply_update(
        &mut self,
        provider: ProviderKind,
        pending: Vec<PendingSession>,
        monitored: Vec<MonitoredItem>,
        display_names: HashMap<String, String>,
    ) {
        self.panel.update_provider(provider, pending, monitored);

        let prefix = format!("{}-", provider.id_prefix());
        self.display_names.retain(|id, _| !id.starts_with(&prefix));
        self.display_names.extend(display_names);

        self.last_refresh = Some(Utc::now());
    }

    /// Returns the user-assigned display name for an item, if any.
    pub fn display_name(&self, item: &PanelItem) -> Option<&str> {
        self.display_names.get(&item.id).map(String::as_str)
    }

    /// Returns the number of items currently working.
    pub fn working_count(&self) -> usize {
        self.panel
            .items()
            .iter()
            .filter(|item| item.status == SessionStatus::Working)
            .count()
    }

    /// Returns the number of items waiting for user input.
    pub fn attention_count(&self) -> usize {
        self.panel
            .items()
            .iter()
            .filter(|item| item.status == SessionStatus::NeedsInput)
            .count()
    }

    /// Advances the blink animation by one tick.
    ///
    /// Should be called every 100ms (on each event loop tick).
    /// Toggles `blink_visible` every 5 ticks (500ms).
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.tick_count % 5 == 0 {
            self.blink_visible = !self.blink_visible;
        }
    }

    /// Sets the quit flag to true, signaling the application should exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ============================================================================
// Tests
// ============================================================================
