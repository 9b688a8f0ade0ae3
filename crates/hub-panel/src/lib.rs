//! Hub Panel - Multi-provider session selection and ordering
//!
//! This crate implements the selection panel model for AgentHub: it merges
//! pending and monitored sessions from one or two providers into a single
//! time-ordered list, keeps a single "primary" selection always valid, and
//! tracks the panel's persisted size mode.
//!
//! The panel is a pure selector/orderer. It performs no I/O (size-mode
//! persistence lives in [`prefs`], driven by the host), spawns no tasks,
//! and never mutates the session snapshots it is fed.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

pub mod item;
pub mod panel;
pub mod prefs;
pub mod size_mode;
pub mod source;

// Re-exports for convenience
pub use item::{monitored_item_id, PanelItem};
pub use panel::{ProviderSnapshot, SelectionPanel};
pub use prefs::Prefs;
pub use size_mode::SizeMode;
pub use source::SessionSource;
