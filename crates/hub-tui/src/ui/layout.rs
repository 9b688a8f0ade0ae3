//! Layout helpers for the AgentHub TUI.
//!
//! The panel's size mode gates how much of the terminal the content area
//! occupies below the header. In `Collapsed` mode the content area is
//! empty; `Small` shows a compact list; `Medium` adds the detail pane
//! with a capped height; `Full` uses everything available.

use hub_panel::SizeMode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Content height caps per size mode.
const SMALL_HEIGHT: u16 = 10;
const MEDIUM_HEIGHT: u16 = 18;

/// Minimum width for showing the detail pane next to the list.
const DETAIL_MIN_WIDTH: u16 = 60;

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct HubLayout {
    /// Header area for title, counts, and size-mode indicator.
    pub header: Rect,
    /// Left panel for the session list (zero-height when collapsed).
    pub list_area: Rect,
    /// Right panel for item details; present in medium/full modes only.
    pub detail_area: Option<Rect>,
    /// Footer area for keybindings.
    pub footer: Rect,
}

impl HubLayout {
    /// Creates a new HubLayout by splitting the given area for a size mode.
    pub fn new(area: Rect, mode: SizeMode) -> Self {
        // Vertical split: header, body, footer
        let [header, body, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .areas(area);

        let content_height = match mode {
            SizeMode::Collapsed => 0,
            SizeMode::Small => body.height.min(SMALL_HEIGHT),
            SizeMode::Medium => body.height.min(MEDIUM_HEIGHT),
            SizeMode::Full => body.height,
        };

        // Content hangs from the top of the body, dropdown-style
        let content = Rect {
            height: content_height,
            ..body
        };

        let wants_detail = matches!(mode, SizeMode::Medium | SizeMode::Full);
        let (list_area, detail_area) = if wants_detail && content.width >= DETAIL_MIN_WIDTH {
            let [list, detail] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(35), // List panel
                    Constraint::Percentage(65), // Detail panel
                ])
                .areas(content);
            (list, Some(detail))
        } else {
            (content, None)
        };

        Self {
            header,
            list_area,
            detail_area,
            footer,
        }
    }
}
