//! The selection panel model.
//!
//! Merges pending and monitored sessions from every active provider into
//! one deterministic, time-ordered list and keeps a single "primary"
//! selection always valid against that list.

use std::collections::BTreeMap;

use hub_core::{MonitoredItem, PendingSession, ProviderKind};
use tracing::debug;

use crate::item::PanelItem;
use crate::size_mode::SizeMode;
use crate::source::SessionSource;

/// One provider's current input to the panel.
#[derive(Debug, Clone, Default)]
pub struct ProviderSnapshot {
    pub pending: Vec<PendingSession>,
    pub monitored: Vec<MonitoredItem>,
}

impl ProviderSnapshot {
    fn count(&self) -> usize {
        self.pending.len() + self.monitored.len()
    }
}

/// Merges per-provider session lists into one ordered view and maintains
/// the primary-selection invariant.
///
/// The panel holds no persistent ownership of session data: the merged
/// item list is recomputed from the current snapshots on every call to
/// [`items`](Self::items), never cached. The only state the panel owns is
/// the primary selection and the size mode.
///
/// # Invariants
///
/// - If the merged item list is non-empty, the primary selection
///   references an id present in that list.
/// - If the merged item list is empty, the primary selection is `None`.
///
/// Reconciliation restores these invariants silently after every snapshot
/// update; a primary selection pointing at a vanished item heals to the
/// most-recently-active item on the next pass.
#[derive(Debug, Clone, Default)]
pub struct SelectionPanel {
    snapshots: BTreeMap<ProviderKind, ProviderSnapshot>,
    primary: Option<String>,
    size_mode: SizeMode,
}

impl SelectionPanel {
    /// Creates an empty panel in the default (small) size mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty panel with a restored size mode.
    pub fn with_size_mode(size_mode: SizeMode) -> Self {
        Self {
            size_mode,
            ..Self::default()
        }
    }

    /// Replaces one provider's snapshot and reconciles the primary
    /// selection against the new merged list.
    pub fn update_provider(
        &mut self,
        provider: ProviderKind,
        pending: Vec<PendingSession>,
        monitored: Vec<MonitoredItem>,
    ) {
        self.snapshots
            .insert(provider, ProviderSnapshot { pending, monitored });
        self.reconcile();
    }

    /// Pulls a fresh snapshot from a monitoring collaborator and applies it.
    pub fn refresh_from(&mut self, source: &dyn SessionSource) {
        self.update_provider(
            source.provider(),
            source.pending_sessions(),
            source.monitored_sessions(),
        );
    }

    /// Returns the merged, deduplicated item list, sorted by timestamp
    /// descending (most-recently-active first).
    ///
    /// Recomputed from the current snapshots on every call. Per provider,
    /// pending items are projected before monitored items, and providers
    /// are visited in [`ProviderKind::ALL`] order; the stable sort makes
    /// equal-timestamp ordering deterministic for identical inputs.
    pub fn items(&self) -> Vec<PanelItem> {
        let mut items = Vec::with_capacity(self.total_count());
        for provider in ProviderKind::ALL {
            let Some(snapshot) = self.snapshots.get(&provider) else {
                continue;
            };
            for pending in &snapshot.pending {
                items.push(PanelItem::from_pending(provider, pending));
            }
            for monitored in &snapshot.monitored {
                items.push(PanelItem::from_monitored(provider, monitored));
            }
        }
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items
    }

    /// Total number of pending plus monitored sessions across all providers.
    ///
    /// Zero means the panel (and its enclosing shell) renders nothing.
    pub fn total_count(&self) -> usize {
        self.snapshots.values().map(ProviderSnapshot::count).sum()
    }

    /// Whether the panel has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// The id of the item the UI currently treats as focused, if any.
    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Sets the primary selection to the given item id.
    ///
    /// A pure setter: an id that does not exist in the current list is
    /// healed to the most-recently-active item by the next reconciliation
    /// pass.
    pub fn select(&mut self, id: impl Into<String>) {
        self.primary = Some(id.into());
    }

    /// Returns the item the primary selection references, if present.
    pub fn selected_item(&self) -> Option<PanelItem> {
        let primary = self.primary.as_deref()?;
        self.items().into_iter().find(|item| item.id == primary)
    }

    /// Moves the primary selection to the next item in the sorted list,
    /// wrapping around at the end.
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Moves the primary selection to the previous item in the sorted
    /// list, wrapping around at the start.
    pub fn select_previous(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, delta: isize) {
        let items = self.items();
        if items.is_empty() {
            self.primary = None;
            return;
        }
        let len = items.len() as isize;
        let current = self
            .primary
            .as_deref()
            .and_then(|id| items.iter().position(|item| item.id == id));
        let next = match current {
            Some(idx) => (idx as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };
        self.primary = items.get(next).map(|item| item.id.clone());
    }

    /// Restores the primary-selection invariant against the current list.
    ///
    /// Runs after every snapshot update; hosts that mutate the selection
    /// externally may also call it directly.
    pub fn reconcile(&mut self) {
        let items = self.items();
        if items.is_empty() {
            self.primary = None;
            return;
        }
        let valid = self
            .primary
            .as_deref()
            .is_some_and(|id| items.iter().any(|item| item.id == id));
        if !valid {
            let healed = items.first().map(|item| item.id.clone());
            debug!(old = ?self.primary, new = ?healed, "Primary selection healed");
            self.primary = healed;
        }
    }

    /// The panel's current size mode.
    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    /// Advances the size mode one step in its cycle and returns the new
    /// mode. Persistence is the host's responsibility.
    pub fn cycle_size_mode(&mut self) -> SizeMode {
        self.size_mode = self.size_mode.next();
        self.size_mode
    }
}

// ============================================================================
// Tests
// ============================================================================
