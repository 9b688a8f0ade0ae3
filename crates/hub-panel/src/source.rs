//! Collaborator contract for the session-monitoring subsystem.
//!
//! The panel never owns session data; it pulls snapshots through this
//! trait (or has them pushed via
//! [`SelectionPanel::update_provider`](crate::SelectionPanel::update_provider)).
//! Implementations are expected to be infallible from the panel's point of
//! view: they swallow and log their own failures and return empty lists.

use hub_core::{MonitoredItem, PendingSession, ProviderKind, SessionId};

/// One provider's view of the session-monitoring subsystem.
pub trait SessionSource {
    /// The provider this source reports for.
    fn provider(&self) -> ProviderKind;

    /// Sessions requested to start but not yet confirmed.
    fn pending_sessions(&self) -> Vec<PendingSession>;

    /// Confirmed sessions currently being tracked, with optional live state.
    fn monitored_sessions(&self) -> Vec<MonitoredItem>;

    /// User-assigned display name for a session, if any.
    ///
    /// Consulted by row rendering only; the ordering algorithm never
    /// looks at display names.
    fn custom_display_name(&self, id: &SessionId) -> Option<String>;
}
