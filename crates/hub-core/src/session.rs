//! Session domain entities and value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Type-Safe Identifiers
// ============================================================================

/// Unique identifier for a confirmed coding-agent session.
///
/// Wraps the raw identifier string reported by the provider's CLI
/// (typically a UUID, but the format is not validated here - the
/// monitoring subsystem owns the raw value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a shortened display form (first 8 characters).
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Session Status (3-State Model)
// ============================================================================

/// Current operational status of a live session.
///
/// Three fundamental states based on user action requirements:
/// - **Idle**: agent finished, waiting for the user
/// - **Working**: agent is actively processing
/// - **NeedsInput**: user must act for the session to proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Agent finished, waiting for the user's next action.
    #[default]
    Idle,

    /// Agent is actively processing.
    Working,

    /// User must take action for the session to proceed.
    NeedsInput,
}

impl SessionStatus {
    /// Returns the display label for this status.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Working => "working",
            Self::NeedsInput => "needs input",
        }
    }

    /// Returns the ASCII icon for this status.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Idle => "-",
            Self::Working => ">",
            Self::NeedsInput => "!",
        }
    }

    /// Returns true if this status should blink in the UI.
    #[must_use]
    pub fn should_blink(&self) -> bool {
        matches!(self, Self::NeedsInput)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Session Snapshot
// ============================================================================

/// Immutable snapshot of a coding-agent session.
///
/// Supplied by the external monitoring collaborator; the selection panel
/// reads these but never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Raw session identifier as reported by the provider.
    pub id: SessionId,

    /// Optional user-facing slug (e.g. a short conversation title).
    #[serde(default)]
    pub slug: Option<String>,

    /// Working directory the session runs in.
    pub project_path: String,

    /// Git branch the session is on, if known.
    #[serde(default)]
    pub branch: Option<String>,

    /// When the session last showed activity, per the session's own record.
    /// Superseded by `LiveState::last_activity_at` when that is present.
    pub last_activity_at: DateTime<Utc>,

    /// Preview of the first user message, if any.
    #[serde(default)]
    pub first_message: Option<String>,
}

impl Session {
    /// Returns the best short label for list rows: the slug when present,
    /// otherwise the shortened session id.
    #[must_use]
    pub fn short_label(&self) -> &str {
        match &self.slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => self.id.short(),
        }
    }

    /// Returns the last path component of the project path.
    #[must_use]
    pub fn project_name(&self) -> &str {
        self.project_path
            .rsplit('/')
            .find(|part| !part.is_empty())
            .unwrap_or(&self.project_path)
    }
}

// ============================================================================
// Pending Session
// ============================================================================

/// A session that has been requested to start but has not yet produced a
/// confirmed identifier.
///
/// Exists from the moment a launch is requested until either the real
/// session appears in the monitored list or the launch is cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingSession {
    /// Launch request identifier, assigned locally.
    pub id: Uuid,

    /// When the launch was requested.
    pub started_at: DateTime<Utc>,

    /// Placeholder snapshot used for display until confirmation.
    pub placeholder: Session,
}

// ============================================================================
// Live State
// ============================================================================

/// Live state attached to a monitored session by the monitoring subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveState {
    /// Current operational status.
    #[serde(default)]
    pub status: SessionStatus,

    /// Most recent observed activity. When present, this supersedes
    /// `Session::last_activity_at` for ordering purposes.
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
}

/// Pairing of a session snapshot with its optional live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoredItem {
    pub session: Session,

    #[serde(default)]
    pub state: Option<LiveState>,
}

impl MonitoredItem {
    /// Returns the timestamp used for ordering: the live state's
    /// `last_activity_at` when present, else the session's own.
    #[must_use]
    pub fn effective_activity(&self) -> DateTime<Utc> {
        self.state
            .as_ref()
            .and_then(|s| s.last_activity_at)
            .unwrap_or(self.session.last_activity_at)
    }

    /// Returns the status to display: live state when present, idle otherwise.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.as_ref().map(|s| s.status).unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
