//! Hub Core - Shared domain types for AgentHub
//!
//! This crate provides the immutable session snapshots shared between
//! the selection panel model (hub-panel) and the TUI shell (hub-tui).
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

pub mod error;
pub mod provider;
pub mod session;

// Re-exports for convenience
pub use error::{DomainError, DomainResult};
pub use provider::ProviderKind;
pub use session::{LiveState, MonitoredItem, PendingSession, Session, SessionId, SessionStatus};
