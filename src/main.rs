//! # dotwiz CLI Entry Point
//!
//! Interactive terminal wizard that installs and configures a dotfiles
//! setup.
//!
//! ## Usage
//!
//! ```bash
//! # Start with the intro animation
//! dotwiz
//!
//! # Go straight to the welcome screen
//! dotwiz --skip-intro
//!
//! # Use a different installer script
//! DOTWIZ_SCRIPT=~/src/dotfiles/setup.sh dotwiz
//! ```
//!
//! ## Runtime
//!
//! One tokio channel carries every [`Msg`]: terminal input (blocking reader
//! task), animation ticks (interval task) and installer output (bridge
//! thread). The loop below drains it, lets [`App::update`] mutate the
//! model, executes any returned [`Effect`], and redraws.
//!
//! Logs are written to `dotwiz.log` in the platform data directory; set
//! `DOTWIZ_LOG=debug` for navigation traces.

use dotwiz::catalog::{CatalogKind, DefaultCatalog};
use dotwiz::config::Config;
use dotwiz::favorites::FavoriteStore;
use dotwiz::install::{bridge, ProcessRunner, PtyRunner};
use dotwiz::logging;
use dotwiz::ui::event::{self, CrosstermEventReader, MsgSender, TICK_RATE};
use dotwiz::ui::{self, App, Effect, Msg};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// dotwiz - set up your terminal environment, one screen at a time
#[derive(Parser, Debug)]
#[command(name = "dotwiz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive installer for your dotfiles", long_about = None)]
struct Args {
    /// Skip the intro animation and start on the welcome screen
    #[arg(long)]
    skip_intro: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is best effort; the wizard works without it
    let _log_guard = match logging::default_log_path() {
        Some(path) => match logging::init_file_logging(&path) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: file logging disabled: {:#}", e);
                None
            }
        },
        None => None,
    };

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    if let Err(ref e) = result {
        tracing::error!("exiting with error: {:#}", e);
    }
    result
}

async fn run_application(args: Args) -> Result<()> {
    let config = Config::load();
    info!(
        user = config.current_user(),
        script = %config.setup_script.display(),
        shell = %config.shell,
        "starting dotwiz"
    );

    let store = FavoriteStore::load(config.current_user());
    let runner: Arc<dyn ProcessRunner> = Arc::new(PtyRunner::new(
        config.shell.clone(),
        config.setup_script.clone(),
    ));

    let mut app = App::new(
        Box::new(DefaultCatalog::new(CatalogKind::Hotkeys)),
        &DefaultCatalog::new(CatalogKind::Packages),
        store,
        args.skip_intro,
    )
    .with_theme(config.theme.as_deref());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let run_result = match terminal.size() {
        Ok(size) => {
            app.update(Msg::Resize(size.width, size.height));
            run_app(&mut terminal, &mut app, runner).await
        }
        Err(e) => Err(anyhow::Error::from(e).context("Failed to read terminal size")),
    };

    // Always try to restore the terminal, even if the loop failed
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    info!("bye");
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runner: Arc<dyn ProcessRunner>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _input = event::spawn_input(CrosstermEventReader, tx.clone());
    let ticker = event::spawn_ticker(tx.clone(), TICK_RATE);

    'outer: loop {
        app.prepare_frame();
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // `tx` lives in this scope, so the channel never closes under us
        let Some(first) = rx.recv().await else {
            break;
        };

        // Drain whatever queued up while drawing, one message at a time
        let mut next = Some(first);
        while let Some(msg) = next {
            if let Some(effect) = app.update(msg) {
                execute_effect(effect, app, &runner, &tx);
            }
            if app.should_quit {
                break 'outer;
            }
            next = rx.try_recv().ok();
        }
    }

    ticker.abort();
    // Dropping the receiver stops the input reader at its next poll
    drop(rx);
    Ok(())
}

/// Carry out work requested by the dispatcher. Persistence failures are
/// logged and otherwise ignored.
fn execute_effect(effect: Effect, app: &App, runner: &Arc<dyn ProcessRunner>, tx: &MsgSender) {
    match effect {
        Effect::StartInstall(request) => {
            let tx = tx.clone();
            bridge::start(Arc::clone(runner), request, move |event| {
                // The loop may already be gone when the user force-quits
                let _ = tx.send(Msg::Install(event));
            });
        }
        Effect::PersistStore => {
            if let Err(e) = app.store.save() {
                warn!("failed to save favorites: {}", e);
            }
        }
        Effect::PersistConfig => {
            if let Err(e) = Config::save_theme(app.theme().id) {
                warn!("failed to save theme to config: {:#}", e);
            }
        }
    }
}
