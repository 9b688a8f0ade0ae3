//! Read-only item projection for the selection panel.
//!
//! Pending and monitored sessions from every provider are projected into
//! [`PanelItem`]s before merging. Item ids are namespaced by provider and
//! by pending/monitored status so that two providers reporting identical
//! raw session ids can never collide in the merged list.

use chrono::{DateTime, Utc};
use hub_core::{MonitoredItem, PendingSession, ProviderKind, Session, SessionStatus};

/// Prefix used for items projected from pending sessions.
pub const PENDING_ITEM_PREFIX: &str = "pending-";

/// Builds the namespaced item id for a monitored session.
#[must_use]
pub fn monitored_item_id(provider: ProviderKind, session_id: &hub_core::SessionId) -> String {
    format!("{}-{}", provider.id_prefix(), session_id)
}

/// The panel's derived, read-only projection of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelItem {
    /// Provider-namespaced identifier, unique across the merged list.
    pub id: String,

    /// Which backend this item came from.
    pub provider: ProviderKind,

    /// Underlying session snapshot (the placeholder for pending items).
    pub session: Session,

    /// Ordering timestamp: `started_at` for pending items, the effective
    /// activity timestamp for monitored items.
    pub timestamp: DateTime<Utc>,

    /// Whether this item is still awaiting session confirmation.
    pub is_pending: bool,

    /// Status to display for this item.
    pub status: SessionStatus,
}

impl PanelItem {
    /// Projects a pending session into a panel item.
    ///
    /// Id format: `pending-<provider>-<launch-uuid>`.
    pub fn from_pending(provider: ProviderKind, pending: &PendingSession) -> Self {
        Self {
            id: format!("{PENDING_ITEM_PREFIX}{}-{}", provider.id_prefix(), pending.id),
            provider,
            session: pending.placeholder.clone(),
            timestamp: pending.started_at,
            is_pending: true,
            // A pending launch is busy by definition
            status: SessionStatus::Working,
        }
    }

    /// Projects a monitored session into a panel item.
    ///
    /// Id format: `<provider>-<session-id>`. The ordering timestamp is the
    /// live state's last activity when present, else the session's own.
    pub fn from_monitored(provider: ProviderKind, item: &MonitoredItem) -> Self {
        Self {
            id: monitored_item_id(provider, &item.session.id),
            provider,
            session: item.session.clone(),
            timestamp: item.effective_activity(),
            is_pending: false,
            status: item.status(),
        }
    }
}
