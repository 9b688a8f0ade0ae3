//! Shared theme utilities for the AgentHub TUI.
//!
//! Provides consistent styling across all UI components.

use hub_core::{ProviderKind, SessionStatus};
use ratatui::style::Color;

/// Returns the appropriate color for a session status.
///
/// Color coding:
/// - Blue: working (active, normal operation)
/// - Yellow: needs input (blocked, requires attention)
/// - DarkGray: idle (waiting for the user, no urgency)
pub fn status_color(status: SessionStatus) -> Color {
    match status {
        SessionStatus::Working => Color::Blue,
        SessionStatus::NeedsInput => Color::Yellow,
        SessionStatus::Idle => Color::DarkGray,
    }
}

/// Returns the icon for a status, respecting blink visibility.
///
/// Statuses that blink return a blank icon when blink is off.
pub fn status_icon(status: SessionStatus, blink_visible: bool) -> &'static str {
    if status.should_blink() && !blink_visible {
        " "
    } else {
        status.icon()
    }
}

/// Returns the accent color for a provider tag.
pub fn provider_color(provider: ProviderKind) -> Color {
    match provider {
        ProviderKind::Claude => Color::Magenta,
        ProviderKind::Codex => Color::Cyan,
    }
}

/// Returns the short uppercase tag shown next to each row.
pub fn provider_tag(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Claude => "CLD",
        ProviderKind::Codex => "CDX",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_input_blinks() {
        assert_eq!(status_icon(SessionStatus::NeedsInput, true), "!");
        assert_eq!(status_icon(SessionStatus::NeedsInput, false), " ");
    }

    #[test]
    fn test_idle_does_not_blink() {
        assert_eq!(status_icon(SessionStatus::Idle, true), "-");
        assert_eq!(status_icon(SessionStatus::Idle, false), "-");
    }

    #[test]
    fn test_provider_tags_distinct() {
        assert_ne!(
            provider_tag(ProviderKind::Claude),
            provider_tag(ProviderKind::Codex)
        );
    }
}
