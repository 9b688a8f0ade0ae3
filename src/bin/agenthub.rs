//! AgentHub TUI - unified panel for CLI coding agent sessions
//!
//! This binary renders the multi-provider session selection panel in a
//! terminal: Claude Code and Codex sessions merged into one time-ordered
//! list with a single primary selection.
//!
//! # Usage
//!
//! ```text
//! agenthub                        # Default state and settings locations
//! agenthub --state-dir /tmp/hub   # Read provider state files elsewhere
//! agenthub --config ./hub.json    # Explicit settings file
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hub_core::ProviderKind;
use hub_panel::Prefs;
use hub_tui::app::App;
use hub_tui::error::{Result as TuiResult, TuiError};
use hub_tui::feed::{default_state_dir, spawn_feed_task, FileSource};
use hub_tui::input::{handle_key_event, Action, Event, FeedCommand};
use hub_tui::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Arguments
// ============================================================================

/// AgentHub TUI - unified panel for CLI coding agent sessions
#[derive(Parser, Debug)]
#[command(name = "agenthub")]
#[command(about = "Monitor Claude Code and Codex sessions in one panel")]
#[command(version)]
struct Args {
    /// Directory containing per-provider state files (claude.json, codex.json)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Settings file for persisted preferences
    #[arg(long)]
    config: Option<PathBuf>,
}

// ============================================================================
// Terminal Setup / Cleanup
// ============================================================================

fn setup_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| TuiError::TerminalInit(e.to_string()))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| TuiError::TerminalInit(e.to_string()))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| TuiError::TerminalInit(e.to_string()))
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| TuiError::TerminalCleanup(e.to_string()))?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| TuiError::TerminalCleanup(e.to_string()))?;

    terminal
        .show_cursor()
        .map_err(|e| TuiError::TerminalCleanup(e.to_string()))?;

    Ok(())
}

// ============================================================================
// Keyboard Input Task
// ============================================================================

fn spawn_keyboard_task(
    event_tx: mpsc::UnboundedSender<Event>,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if cancel_token.is_cancelled() {
                debug!("Keyboard task shutting down");
                break;
            }

            let poll_result = tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await;

            match poll_result {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if event_tx.send(Event::Key(key)).is_err() {
                        debug!("Event channel closed, keyboard task exiting");
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(width, height))) => {
                    if event_tx.send(Event::Resize(width, height)).is_err() {
                        break;
                    }
                }
                Ok(Some(_)) => {}
                Ok(None) => {}
                Err(e) => {
                    error!(error = %e, "Keyboard polling task panicked");
                    break;
                }
            }
        }
    })
}

// ============================================================================
// Main Event Loop
// ============================================================================

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    prefs: &Prefs,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    command_tx: &mpsc::UnboundedSender<FeedCommand>,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        app.tick();
        terminal.draw(|frame| ui::render(frame, app))?;

        let event = tokio::time::timeout(tick_rate, event_rx.recv()).await;

        match event {
            Ok(Some(received_event)) => match received_event {
                Event::Key(key) => {
                    let action = handle_key_event(key, app);
                    match action {
                        Action::Quit => {
                            info!("User requested quit");
                            cancel_token.cancel();
                            break;
                        }
                        Action::Refresh => {
                            debug!("User requested refresh");
                            if command_tx.send(FeedCommand::Poll).is_err() {
                                warn!("Failed to send poll command - feed may have stopped");
                            }
                        }
                        Action::SizeModeChanged => {
                            let mode = app.panel.size_mode();
                            debug!(mode = mode.label(), "Size mode changed");
                            if let Err(e) = prefs.save_size_mode(mode) {
                                warn!(error = %e, "Failed to persist size mode");
                            }
                        }
                        Action::None => {}
                    }
                }
                Event::Resize(_width, _height) => {
                    debug!("Terminal resized");
                }
                Event::ProviderUpdate {
                    provider,
                    pending,
                    monitored,
                    display_names,
                } => {
                    debug!(
                        provider = %provider,
                        pending = pending.len(),
                        monitored = monitored.len(),
                        "Received provider update"
                    );
                    app.apply_update(provider, pending, monitored, display_names);
                }
            },
            Ok(None) => {
                warn!("Event channel closed");
                break;
            }
            Err(_) => {}
        }

        if app.should_quit {
            cancel_token.cancel();
            break;
        }

        if cancel_token.is_cancelled() {
            break;
        }
    }

    Ok(())
}

// ============================================================================
// Logging Setup
// ============================================================================

fn get_log_dir() -> Option<PathBuf> {
    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg_state).join("agenthub"));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".local/state/agenthub"))
}

fn create_log_file() -> Option<std::fs::File> {
    let log_dir = get_log_dir()?;

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory {log_dir:?}: {e}");
        return None;
    }

    let log_path = log_dir.join("tui.log");

    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to open log file {log_path:?}: {e}");
            None
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging goes to a file: stderr would corrupt the TUI
    let log_file = create_log_file();

    if let Some(file) = log_file {
        let writer = Mutex::new(file);

        let filter = EnvFilter::from_default_env().add_directive(
            "agenthub=info"
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::Directive::from(tracing::Level::INFO)),
        );

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .init();
    }

    info!("AgentHub TUI starting...");

    let prefs = match args.config {
        Some(path) => Prefs::new(path),
        None => match Prefs::default_path() {
            Some(path) => Prefs::new(path),
            None => {
                warn!("No config directory available, preferences will not persist");
                Prefs::new(PathBuf::from("/tmp/agenthub-settings.json"))
            }
        },
    };

    let state_dir = args.state_dir.unwrap_or_else(default_state_dir);
    info!(state_dir = %state_dir.display(), "Reading provider state");

    let mut app = App::with_size_mode(prefs.load_size_mode());

    // Load what's already on disk so the first frame isn't empty
    for provider in ProviderKind::ALL {
        app.panel
            .refresh_from(&FileSource::new(&state_dir, provider));
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let (command_tx, command_rx) = mpsc::unbounded_channel::<FeedCommand>();
    let cancel_token = CancellationToken::new();

    let mut terminal = match setup_terminal() {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to initialize terminal");
            return Err(e.into());
        }
    };

    let feed_handle = spawn_feed_task(
        state_dir,
        event_tx.clone(),
        command_rx,
        cancel_token.clone(),
    );

    let keyboard_handle = spawn_keyboard_task(event_tx, cancel_token.clone());

    let result = run_event_loop(
        &mut terminal,
        &mut app,
        &prefs,
        &mut event_rx,
        &command_tx,
        &cancel_token,
    )
    .await;

    cancel_token.cancel();

    let _ = tokio::time::timeout(Duration::from_millis(100), feed_handle).await;
    let _ = tokio::time::timeout(Duration::from_millis(100), keyboard_handle).await;

    if let Err(e) = cleanup_terminal(&mut terminal) {
        error!(error = %e, "Failed to cleanup terminal");
    }

    info!("AgentHub TUI stopped");

    result
}
