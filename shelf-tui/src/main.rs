//! shelf-tui - Terminal UI for Shelf
//!
//! Keeps a list of books for the current session: add them through a
//! form, mark them read or unread, remove them, and sort them by title.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::event::KeyEvent;

use libshelf::logging::LoggingConfig;
use libshelf::view::EventBus;
use libshelf::{Config, Library, LibraryController, ShelfError};
use shelf_tui::{
    app::{event::EventHandler, event::TuiEvent, Action, UiConfig},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, FieldEditor},
    TuiError, TuiView,
};

#[derive(Parser, Debug)]
#[command(name = "shelf-tui")]
#[command(about = "Track the books you own and have read", long_about = None)]
struct Cli {
    /// Path to config file (defaults to $SHELF_CONFIG or the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty library instead of the demonstration books
    #[arg(long)]
    no_seed: bool,

    /// Write logs to this file
    #[arg(long, env = "SHELF_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<TuiError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<ShelfError>() {
        return e.exit_code();
    }
    1
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match cli.config {
        Some(ref path) => Config::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    if cli.no_seed {
        config.library.seed_demo_books = false;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path.to_string_lossy().into_owned());
    }

    if let Some(logging) = LoggingConfig::from_config(&config) {
        logging.init().context("initializing logging")?;
        tracing::info!(format = %logging.format, level = %logging.level, "Logging initialized");
    }

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;

    result?;
    Ok(())
}

fn run_app(terminal: &mut Tui, config: &Config) -> shelf_tui::Result<()> {
    let ui_config = UiConfig::from_config(config);
    let event_handler = EventHandler::new(ui_config.tick_rate_ms);

    let mut bus = EventBus::new();
    let events = bus.subscribe();
    let view = TuiView::new(ui_config, bus);

    let mut controller = if config.library.seed_demo_books {
        LibraryController::new(Library::new(), view, events)
    } else {
        LibraryController::with_seed(Library::new(), view, events, Vec::new())
    };
    tracing::info!(books = controller.library().len(), "Shelf started");
    let books = controller.library().len();
    controller.view_mut().greet(books);

    let mut editor = FieldEditor::new();

    loop {
        let state = controller.view().state();
        editor.sync(&state.form, state.config.colors_enabled);

        terminal.draw(|frame| {
            ui::render(frame, controller.view().state(), &editor);
        })?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => key_action(controller.view(), &mut editor, key),
            other => other.into(),
        };

        controller.view_mut().dispatch(action);
        controller.pump();

        if controller.view().state().should_quit {
            break;
        }
    }

    tracing::info!(books = controller.library().len(), "Shelf closed");
    Ok(())
}

/// Route a key press to the field editor when the form is taking text
fn key_action(view: &TuiView, editor: &mut FieldEditor, key: KeyEvent) -> Action {
    if !view.state().form.accepts_text() {
        return Action::Key(key);
    }

    if shelf_tui::app::is_form_control_key(&key) {
        return Action::Key(key);
    }

    match editor.input(key) {
        Some(content) => Action::FormFieldChanged(content),
        None => Action::Tick,
    }
}
