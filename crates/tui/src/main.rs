//! contact-tui - Terminal contact form.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration, the submission service and the terminal.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Validation or the submit state machine (see `form`).
//! - HTTP delivery and the local cache (see `crates/client`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Logs go to a daily rolling file; the terminal owns stdout.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use anyhow::{Context, Result};
use clap::Parser;
use contact_client::{SubmissionClient, SubmissionService, open_submission_cache};
use contact_config::ConfigLoader;
use contact_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use contact_tui::action::{Action, RedactedAction};
use contact_tui::app::App;
use contact_tui::cli::Cli;
use contact_tui::runtime::side_effects::{TaskTracker, spawn_submission};
use contact_tui::runtime::terminal::TerminalGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "contact-tui.log");
    // _guard must live for the whole of main() so logs are flushed.
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let loader = ConfigLoader::new().load_dotenv()?.from_env()?;
    let config = cli.apply_to(loader).build()?;
    tracing::info!(
        endpoint = %config.endpoint,
        mode = %config.delivery_mode,
        cache = %config.cache_path.display(),
        "Configuration loaded"
    );

    let client = SubmissionClient::builder().from_config(&config).build()?;
    let service = SubmissionService::new(client, open_submission_cache(&config.cache_path));

    let mut app = App::from_config(&config);
    let task_tracker = TaskTracker::new();

    let terminal_guard = TerminalGuard::enter(cli.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let input_task = tokio::spawn(forward_terminal_events(tx.clone()));

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!("Handling action: {:?}", RedactedAction(&action));
                if let Some(payload) = app.update(action) {
                    spawn_submission(service.clone(), payload, tx.clone(), &task_tracker);
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    input_task.abort();
    // Let an in-flight submission finish so its cache fallback is not lost.
    let _ = task_tracker.close();
    if !task_tracker.is_empty() {
        tracing::info!("Waiting for in-flight submission before exit");
    }
    task_tracker.wait().await;

    terminal.show_cursor()?;
    drop(terminal_guard);
    tracing::info!("contact-tui exited");

    Ok(())
}

/// Forward crossterm events into the action channel.
///
/// Key presses and resizes are never dropped; mouse events are dropped when
/// the channel is full.
async fn forward_terminal_events(tx: Sender<Action>) {
    let mut reader = EventStream::new();
    while let Some(event_result) = reader.next().await {
        let Ok(event) = event_result else {
            break;
        };
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
            Event::Resize(width, height) => Action::Resize(width, height),
            Event::Mouse(mouse) => {
                match tx.try_send(Action::Mouse(mouse)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
                continue;
            }
            _ => continue,
        };
        if tx.send(action).await.is_err() {
            break;
        }
    }
}
