//! Detail pane for the primary selection.
//!
//! Shown next to the list in medium and full size modes.

use crate::app::App;
use crate::ui::panel_list::{format_relative_age, truncate_string};
use crate::ui::theme::{provider_color, status_color};
use chrono::Utc;
use hub_panel::PanelItem;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the detail pane for the selected item (or an empty frame when
/// nothing is selected).
pub fn render_detail(frame: &mut Frame, area: Rect, app: &App, item: Option<&PanelItem>) {
    match item {
        Some(item) => {
            let block = Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(provider_color(item.provider)));

            let paragraph = Paragraph::new(build_detail_lines(app, item)).block(block);
            frame.render_widget(paragraph, area);
        }
        None => {
            let block = Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));

            let paragraph = Paragraph::new("").block(block);
            frame.render_widget(paragraph, area);
        }
    }
}

fn build_detail_lines(app: &App, item: &PanelItem) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);

    let status_display = if item.is_pending {
        "starting".to_string()
    } else {
        item.status.label().to_string()
    };

    let name = app
        .display_name(item)
        .unwrap_or_else(|| item.session.short_label())
        .to_string();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Status: ", label_style),
            Span::styled(
                status_display,
                Style::default()
                    .fg(status_color(item.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Name: ", label_style),
            Span::styled(name, value_style),
            Span::styled("  Provider: ", label_style),
            Span::styled(
                item.provider.label().to_string(),
                Style::default().fg(provider_color(item.provider)),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ID: ", label_style),
            Span::styled(item.session.id.short().to_string(), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Project: ", label_style),
            Span::styled(item.session.project_path.clone(), value_style),
        ]),
    ];

    if let Some(branch) = &item.session.branch {
        lines.push(Line::from(vec![
            Span::styled("  Branch: ", label_style),
            Span::styled(branch.clone(), value_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Last activity: ", label_style),
        Span::styled(
            format!("{} ago", format_relative_age(item.timestamp, Utc::now())),
            value_style,
        ),
    ]));

    if let Some(first_message) = &item.session.first_message {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  First message: ", label_style),
            Span::styled(
                truncate_string(first_message, 60),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines
}
