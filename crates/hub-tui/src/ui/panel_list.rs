//! Session list widget for the AgentHub TUI.
//!
//! Displays the panel's merged, time-ordered item list with one row per
//! pending or monitored session across all providers.

use crate::app::App;
use crate::ui::theme::{provider_color, provider_tag, status_color, status_icon};
use chrono::{DateTime, Utc};
use hub_panel::PanelItem;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Renders the merged session list.
///
/// Each row shows:
/// - Selection indicator (`>` for the primary selection)
/// - Status icon (blinking for attention states; `+` for pending launches)
/// - Provider tag
/// - Short label (custom display name, slug, or shortened id)
/// - Branch and relative age
pub fn render_panel_list(frame: &mut Frame, area: Rect, app: &App) {
    let items = app.panel.items();
    let primary = app.panel.primary();
    let now = Utc::now();

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let is_selected = primary == Some(item.id.as_str());
            create_row(item, app, is_selected, now)
        })
        .collect();

    let title = format!(" Sessions ({}) ", app.panel.total_count());

    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(list, area);
}

/// Creates a list row for a single panel item.
fn create_row(
    item: &PanelItem,
    app: &App,
    is_selected: bool,
    now: DateTime<Utc>,
) -> ListItem<'static> {
    let icon = if item.is_pending {
        "+"
    } else {
        status_icon(item.status, app.blink_visible)
    };
    let icon_color = status_color(item.status);

    let label = app
        .display_name(item)
        .unwrap_or_else(|| item.session.short_label())
        .to_string();

    let branch = item
        .session
        .branch
        .as_deref()
        .map(|b| format!(" [{}]", truncate_string(b, 14)))
        .unwrap_or_default();

    let mut spans = vec![
        Span::styled(
            if is_selected { ">" } else { " " },
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{icon} "),
            Style::default()
                .fg(icon_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", provider_tag(item.provider)),
            Style::default().fg(provider_color(item.provider)),
        ),
        Span::styled(
            truncate_string(&label, 20),
            Style::default().fg(Color::White),
        ),
        Span::styled(branch, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(
            format_relative_age(item.timestamp, now),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if item.is_pending {
        spans.push(Span::styled(
            " starting...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let bg_style = if is_selected {
        Style::default().bg(Color::Rgb(30, 30, 40))
    } else {
        Style::default()
    };

    ListItem::new(Line::from(spans)).style(bg_style)
}

/// Formats a timestamp as a compact relative age ("3s", "5m", "2h", "4d").
///
/// Timestamps in the future (clock skew) display as "0s".
pub fn format_relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h", seconds / 3600)
    } else {
        format!("{}d", seconds / 86_400)
    }
}

/// Truncates a string to the specified maximum display width.
///
/// If truncated, appends "..." to indicate truncation.
/// Handles UTF-8 multi-byte characters safely by counting chars, not bytes.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
