//! Provider identification for the supported CLI coding-agent backends.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the supported CLI coding-agent backends.
///
/// Each provider maintains its own independent pending and monitored
/// session lists; the selection panel merges them into one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Claude Code CLI sessions.
    Claude,

    /// Codex CLI sessions.
    Codex,
}

impl ProviderKind {
    /// All providers in their fixed merge order.
    ///
    /// The selection panel concatenates per-provider items in this order
    /// before sorting, so the order only matters for tie determinism.
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Claude, ProviderKind::Codex];

    /// Returns a human-readable display name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Claude => "Claude Code",
            Self::Codex => "Codex",
        }
    }

    /// Returns the short prefix used to namespace panel item ids.
    ///
    /// Two providers can report sessions with identical raw ids; the
    /// prefix keeps the merged item list collision-free.
    #[must_use]
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Codex => "codex",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(Self::Claude),
            "codex" => Ok(Self::Codex),
            other => Err(DomainError::UnknownProvider {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_serde_roundtrip() {
        let json = serde_json::to_string(&ProviderKind::Claude).unwrap();
        assert_eq!(json, "\"claude\"");
        let back: ProviderKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProviderKind::Claude);
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("claude".parse::<ProviderKind>().unwrap(), ProviderKind::Claude);
        assert_eq!("codex".parse::<ProviderKind>().unwrap(), ProviderKind::Codex);
        assert!("cursor".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_prefixes_are_distinct() {
        assert_ne!(
            ProviderKind::Claude.id_prefix(),
            ProviderKind::Codex.id_prefix()
        );
    }

    #[test]
    fn test_all_order_is_stable() {
        assert_eq!(
            ProviderKind::ALL,
            [ProviderKind::Claude, ProviderKind::Codex]
        );
    }
}
