//! UI rendering module for the AgentHub TUI.
//!
//! # Layout Structure
//!
//! ```text
//! +--------------------------------------------------+
//! |  Header: title, counts, size mode                |  <- 3 lines
//! +---------------+----------------------------------+
//! | Session List  |  Detail Pane (medium/full only)  |  <- gated by size mode
//! +---------------+----------------------------------+
//! |                  (blank)                         |
//! +--------------------------------------------------+
//! |  Footer: keybinding hints                        |  <- 3 lines
//! +--------------------------------------------------+
//! ```
//!
//! The content area is never rendered while the panel is collapsed, and
//! renders nothing at all while the panel has zero sessions - the header
//! stays up as the always-visible anchor, everything below it disappears.

pub mod detail;
pub mod layout;
pub mod panel_list;
pub mod theme;

use crate::app::App;
use layout::HubLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Re-export commonly used items
pub use detail::render_detail;
pub use panel_list::render_panel_list;

/// Renders the complete TUI interface.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = HubLayout::new(frame.area(), app.panel.size_mode());

    render_header(frame, layout.header, app);
    render_footer(frame, layout.footer, app);

    // Hard visibility contract: nothing below the header when the panel
    // is empty or collapsed.
    if app.panel.is_empty() || !app.panel.size_mode().shows_content() {
        return;
    }

    render_panel_list(frame, layout.list_area, app);
    if let Some(detail_area) = layout.detail_area {
        let selected = app.panel.selected_item();
        render_detail(frame, detail_area, app, selected.as_ref());
    }
}

/// Renders the header bar with title, counts, and the size-mode indicator.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.panel.total_count();

    let stats_display = if count > 0 {
        let mut stats = format!(
            " | {} session{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        let working = app.working_count();
        let attention = app.attention_count();
        if working > 0 {
            stats.push_str(&format!(" | {working} working"));
        }
        if attention > 0 {
            stats.push_str(&format!(" | {attention} need input"));
        }
        stats
    } else {
        " | no sessions".to_string()
    };

    let header_line = Line::from(vec![
        Span::styled(
            "AgentHub",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - CLI agent sessions"),
        Span::styled(stats_display, Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" | {}", app.panel.size_mode().label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let border_color = if app.attention_count() > 0 {
        Color::Yellow
    } else {
        Color::White
    };

    let header = Paragraph::new(header_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(header, area);
}

/// Renders the footer bar with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect, _app: &App) {
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let hints = vec![
        Span::styled(" j/k", key_style),
        Span::raw(" select"),
        Span::raw("  "),
        Span::styled("Tab", key_style),
        Span::raw(" size"),
        Span::raw("  "),
        Span::styled("r", key_style),
        Span::raw(" refresh"),
        Span::raw("  "),
        Span::styled("q", key_style),
        Span::raw(" quit"),
    ];

    let footer = Paragraph::new(Line::from(hints)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(footer, area);
}
