//! Integration tests for the selection panel across two providers.
//!
//! Exercises the full lifecycle the panel sees in practice: launches are
//! requested (pending), sessions get confirmed (monitored), activity
//! updates reorder the list, and sessions end.

use chrono::{DateTime, Duration, TimeZone, Utc};
use hub_core::{
    LiveState, MonitoredItem, PendingSession, ProviderKind, Session, SessionId, SessionStatus,
};
use hub_panel::SelectionPanel;
use uuid::Uuid;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).single().expect("valid")
}

fn session(id: &str, last_activity: DateTime<Utc>) -> Session {
    Session {
        id: SessionId::new(id),
        slug: None,
        project_path: format!("/home/user/{id}"),
        branch: Some("main".to_string()),
        last_activity_at: last_activity,
        first_message: Some("add a login form".to_string()),
    }
}

fn monitored(id: &str, last_activity: DateTime<Utc>) -> MonitoredItem {
    MonitoredItem {
        session: session(id, last_activity),
        state: None,
    }
}

fn monitored_live(id: &str, record: DateTime<Utc>, live: DateTime<Utc>) -> MonitoredItem {
    MonitoredItem {
        session: session(id, record),
        state: Some(LiveState {
            status: SessionStatus::Working,
            last_activity_at: Some(live),
        }),
    }
}

fn launch(seed: u128, started_at: DateTime<Utc>) -> PendingSession {
    PendingSession {
        id: Uuid::from_u128(seed),
        started_at,
        placeholder: session("starting", started_at),
    }
}

#[test]
fn dual_provider_lifecycle() {
    let now = base_time();
    let mut panel = SelectionPanel::new();

    // A Claude launch is requested.
    let claude_launch = launch(1, now - Duration::seconds(30));
    let pending_id = format!("pending-claude-{}", claude_launch.id);
    panel.update_provider(ProviderKind::Claude, vec![claude_launch], vec![]);

    assert_eq!(panel.total_count(), 1);
    assert_eq!(panel.primary(), Some(pending_id.as_str()));

    // A Codex session is already running and more recently active.
    panel.update_provider(
        ProviderKind::Codex,
        vec![],
        vec![monitored("codex-session", now - Duration::seconds(5))],
    );

    // The pending selection survives; it is still a valid id.
    assert_eq!(panel.primary(), Some(pending_id.as_str()));
    assert_eq!(panel.total_count(), 2);
    let items = panel.items();
    assert_eq!(
        items.first().map(|i| i.id.as_str()),
        Some("codex-codex-session")
    );

    // The Claude launch confirms: pending entry removed, real session appears.
    panel.update_provider(
        ProviderKind::Claude,
        vec![],
        vec![monitored_live(
            "claude-session",
            now - Duration::seconds(30),
            now,
        )],
    );

    // The pending id vanished, so the selection heals to the newest item,
    // which is the freshly confirmed Claude session (live activity = now).
    assert_eq!(panel.primary(), Some("claude-claude-session"));
    assert_eq!(panel.total_count(), 2);

    // The Claude session ends; selection heals to the remaining Codex one.
    panel.update_provider(ProviderKind::Claude, vec![], vec![]);
    assert_eq!(panel.primary(), Some("codex-codex-session"));

    // Everything ends; the panel empties and the selection clears.
    panel.update_provider(ProviderKind::Codex, vec![], vec![]);
    assert_eq!(panel.total_count(), 0);
    assert!(panel.items().is_empty());
    assert_eq!(panel.primary(), None);
}

#[test]
fn merged_ordering_holds_across_providers() {
    let now = base_time();
    let mut panel = SelectionPanel::new();

    panel.update_provider(
        ProviderKind::Claude,
        vec![launch(9, now - Duration::seconds(40))],
        vec![
            monitored("c1", now - Duration::seconds(20)),
            monitored_live("c2", now - Duration::seconds(300), now - Duration::seconds(2)),
        ],
    );
    panel.update_provider(
        ProviderKind::Codex,
        vec![launch(10, now - Duration::seconds(1))],
        vec![monitored("x1", now - Duration::seconds(10))],
    );

    let items = panel.items();
    assert_eq!(items.len(), 5);
    assert_eq!(panel.total_count(), 5);

    for pair in items.windows(2) {
        if let [first, second] = pair {
            assert!(
                first.timestamp >= second.timestamp,
                "items out of order: {} before {}",
                first.id,
                second.id
            );
        }
    }

    // Most recent is the Codex pending launch (1s ago).
    assert!(items
        .first()
        .is_some_and(|i| i.is_pending && i.provider == ProviderKind::Codex));
}

#[test]
fn user_selection_is_sticky_across_updates() {
    let now = base_time();
    let mut panel = SelectionPanel::new();

    panel.update_provider(
        ProviderKind::Claude,
        vec![],
        vec![
            monitored("a", now - Duration::seconds(50)),
            monitored("b", now - Duration::seconds(40)),
        ],
    );

    // User picks the older session.
    panel.select("claude-a");
    panel.reconcile();
    assert_eq!(panel.primary(), Some("claude-a"));

    // Activity elsewhere reorders the list but does not steal focus.
    panel.update_provider(
        ProviderKind::Claude,
        vec![],
        vec![
            monitored("a", now - Duration::seconds(50)),
            monitored("b", now),
        ],
    );
    assert_eq!(panel.primary(), Some("claude-a"));
}
