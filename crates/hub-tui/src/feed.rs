//! File-backed session feed.
//!
//! External monitors (one per provider) write their pending and monitored
//! session lists to a JSON state file; this module reads those files and
//! forwards snapshots to the main event loop. The feed is the only place
//! the shell touches the filesystem for session data.
//!
//! State file layout: `<state-dir>/<provider-prefix>.json`, e.g.
//! `~/.local/state/agenthub/claude.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hub_core::{MonitoredItem, PendingSession, ProviderKind, SessionId};
use hub_panel::{monitored_item_id, SessionSource};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::input::Event;

/// How often the feed re-reads the provider state files.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// On-disk snapshot written by one provider's monitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderState {
    /// Sessions requested to start but not yet confirmed.
    #[serde(default)]
    pub pending: Vec<PendingSession>,

    /// Confirmed sessions with optional live state.
    #[serde(default)]
    pub monitored: Vec<MonitoredItem>,

    /// User-assigned display names keyed by raw session id.
    #[serde(default)]
    pub display_names: HashMap<String, String>,
}

/// A [`SessionSource`] backed by one provider's JSON state file.
///
/// Infallible from the caller's perspective: a missing file means "no
/// sessions", and read or parse failures are logged and reported as empty.
#[derive(Debug, Clone)]
pub struct FileSource {
    provider: ProviderKind,
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for one provider under the given state directory.
    pub fn new(state_dir: &Path, provider: ProviderKind) -> Self {
        Self {
            provider,
            path: state_dir.join(format!("{}.json", provider.id_prefix())),
        }
    }

    /// The state file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the state file.
    ///
    /// Missing file yields the empty default; failures are logged and
    /// also yield the empty default.
    pub fn snapshot(&self) -> ProviderState {
        if !self.path.exists() {
            return ProviderState::default();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read state file");
                return ProviderState::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse state file");
                ProviderState::default()
            }
        }
    }
}

impl SessionSource for FileSource {
    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn pending_sessions(&self) -> Vec<PendingSession> {
        self.snapshot().pending
    }

    fn monitored_sessions(&self) -> Vec<MonitoredItem> {
        self.snapshot().monitored
    }

    fn custom_display_name(&self, id: &SessionId) -> Option<String> {
        self.snapshot().display_names.get(id.as_str()).cloned()
    }
}

/// Returns the default state directory for provider state files.
///
/// Respects XDG Base Directory specification:
/// - Uses `$XDG_STATE_HOME/agenthub` if set
/// - Falls back to `$HOME/.local/state/agenthub`
pub fn default_state_dir() -> PathBuf {
    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return PathBuf::from(xdg_state).join("agenthub");
    }
    dirs::home_dir()
        .map(|home| home.join(".local/state/agenthub"))
        .unwrap_or_else(|| PathBuf::from("/tmp/agenthub"))
}

/// Converts one provider's state into a `ProviderUpdate` event.
///
/// Display names are re-keyed from raw session ids to panel item ids so
/// the shell can look them up directly against rendered items.
fn snapshot_event(source: &FileSource) -> Event {
    let state = source.snapshot();
    let provider = source.provider();
    let display_names = state
        .display_names
        .into_iter()
        .map(|(raw_id, name)| (monitored_item_id(provider, &SessionId::new(raw_id)), name))
        .collect();
    Event::ProviderUpdate {
        provider,
        pending: state.pending,
        monitored: state.monitored,
        display_names,
    }
}

/// Spawns the feed task: polls every provider's state file on an interval
/// (and on demand) and forwards snapshots to the event loop.
///
/// The task exits when the cancellation token fires or either channel
/// closes.
pub fn spawn_feed_task(
    state_dir: PathBuf,
    event_tx: mpsc::UnboundedSender<Event>,
    mut command_rx: mpsc::UnboundedReceiver<crate::input::FeedCommand>,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let sources: Vec<FileSource> = ProviderKind::ALL
            .iter()
            .map(|&provider| FileSource::new(&state_dir, provider))
            .collect();

        let mut interval = tokio::time::interval(POLL_INTERVAL);

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    debug!("Feed task shutting down");
                    break;
                }
                command = command_rx.recv() => {
                    match command {
                        Some(crate::input::FeedCommand::Poll) => {
                            debug!("On-demand poll requested");
                        }
                        None => {
                            debug!("Command channel closed, feed task exiting");
                            break;
                        }
                    }
                }
                _ = interval.tick() => {}
            }

            let mut closed = false;
            for source in &sources {
                if event_tx.send(snapshot_event(source)).is_err() {
                    closed = true;
                    break;
                }
            }
            if closed {
                debug!("Event channel closed, feed task exiting");
                break;
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hub_core::Session;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn write_state(dir: &Path, provider: ProviderKind, json: &str) {
        fs::write(dir.join(format!("{}.json", provider.id_prefix())), json).expect("writes");
    }

    fn sample_state() -> ProviderState {
        let when = Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).single().expect("valid");
        let session = Session {
            id: "abc-123".into(),
            slug: Some("fix-login".to_string()),
            project_path: "/home/user/project".to_string(),
            branch: Some("main".to_string()),
            last_activity_at: when,
            first_message: Some("fix the login page".to_string()),
        };
        ProviderState {
            pending: vec![PendingSession {
                id: Uuid::from_u128(42),
                started_at: when,
                placeholder: session.clone(),
            }],
            monitored: vec![MonitoredItem {
                session,
                state: None,
            }],
            display_names: HashMap::from([("abc-123".to_string(), "login work".to_string())]),
        }
    }

    #[test]
    fn test_missing_file_is_empty_snapshot() {
        let dir = TempDir::new().expect("tempdir");
        let source = FileSource::new(dir.path(), ProviderKind::Claude);
        let state = source.snapshot();
        assert!(state.pending.is_empty());
        assert!(state.monitored.is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty_snapshot() {
        let dir = TempDir::new().expect("tempdir");
        write_state(dir.path(), ProviderKind::Claude, "{ not json }");
        let source = FileSource::new(dir.path(), ProviderKind::Claude);
        let state = source.snapshot();
        assert!(state.pending.is_empty());
        assert!(state.monitored.is_empty());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let json = serde_json::to_string(&sample_state()).expect("serializes");
        write_state(dir.path(), ProviderKind::Codex, &json);

        let source = FileSource::new(dir.path(), ProviderKind::Codex);
        let state = source.snapshot();
        assert_eq!(state.pending.len(), 1);
        assert_eq!(state.monitored.len(), 1);
        assert_eq!(
            state.display_names.get("abc-123").map(String::as_str),
            Some("login work")
        );
    }

    #[test]
    fn test_session_source_contract() {
        let dir = TempDir::new().expect("tempdir");
        let json = serde_json::to_string(&sample_state()).expect("serializes");
        write_state(dir.path(), ProviderKind::Claude, &json);

        let source = FileSource::new(dir.path(), ProviderKind::Claude);
        assert_eq!(source.provider(), ProviderKind::Claude);
        assert_eq!(source.pending_sessions().len(), 1);
        assert_eq!(source.monitored_sessions().len(), 1);
        assert_eq!(
            source.custom_display_name(&"abc-123".into()),
            Some("login work".to_string())
        );
        assert_eq!(source.custom_display_name(&"unknown".into()), None);
    }

    #[test]
    fn test_state_files_are_per_provider() {
        let dir = TempDir::new().expect("tempdir");
        let claude = FileSource::new(dir.path(), ProviderKind::Claude);
        let codex = FileSource::new(dir.path(), ProviderKind::Codex);
        assert_ne!(claude.path(), codex.path());
    }

    #[test]
    fn test_snapshot_event_rekeys_display_names() {
        let dir = TempDir::new().expect("tempdir");
        let json = serde_json::to_string(&sample_state()).expect("serializes");
        write_state(dir.path(), ProviderKind::Claude, &json);

        let source = FileSource::new(dir.path(), ProviderKind::Claude);
        match snapshot_event(&source) {
            Event::ProviderUpdate { display_names, .. } => {
                assert_eq!(
                    display_names.get("claude-abc-123").map(String::as_str),
                    Some("login work")
                );
            }
            other => panic!("Expected ProviderUpdate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_feed_task_emits_updates_and_cancels() {
        let dir = TempDir::new().expect("tempdir");
        let json = serde_json::to_string(&sample_state()).expect("serializes");
        write_state(dir.path(), ProviderKind::Claude, &json);

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (_command_tx, command_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        let handle = spawn_feed_task(
            dir.path().to_path_buf(),
            event_tx,
            command_rx,
            cancel_token.clone(),
        );

        // First interval tick fires immediately; expect one update per provider.
        let first = tokio::time::timeout(Duration::from_secs(2), event_rx.recv())
            .await
            .expect("no timeout")
            .expect("event");
        assert!(matches!(first, Event::ProviderUpdate { .. }));

        cancel_token.cancel();
        let _ = tokio::time::timeout(Duration::from_secs(2), handle).await;
    }
}
