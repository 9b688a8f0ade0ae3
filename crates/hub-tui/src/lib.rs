//! Hub TUI - Rendering shell for the AgentHub selection panel
//!
//! This library renders the multi-provider session selection panel in a
//! terminal. It is a passive shell: all list merging, ordering and
//! selection logic lives in `hub-panel`; this crate only draws the
//! panel's output and routes user input back into it.
//!
//! # Architecture
//!
//! 1. **Keyboard Task**: polls for keyboard input and sends events to the main loop
//! 2. **Feed Task**: polls per-provider state files and forwards session snapshots
//! 3. **Main Event Loop**: processes events, updates state, and renders the UI
//!
//! All tasks respect a shared `CancellationToken` for graceful shutdown.

pub mod app;
pub mod error;
pub mod feed;
pub mod input;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use error::{Result, TuiError};
pub use feed::FileSource;
