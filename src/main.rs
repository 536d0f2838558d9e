//! Name Form TUI - controlled form input in the terminal
//!
//! A Ratatui-based TUI with a first/last name form, a list of accepted
//! submissions and a required-field check on the first name.

mod app;
mod config;
mod event_source;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event_source::{CrosstermEvents, EventSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use sink::LogSink;
use state::Record;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    init_logging();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
        TuiConfig::default()
    });
    let print_on_exit = config.print_on_exit();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Box::new(LogSink));
    let result = run_app(&mut terminal, &mut app, &mut CrosstermEvents);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    if print_on_exit {
        println!("{}", submissions_json(app.form.submissions())?);
    }

    Ok(())
}

/// Pretty JSON of the submission log, printed on exit when configured
fn submissions_json(submissions: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(submissions)?)
}

/// Route logs to a file so they don't draw over the TUI; stderr if none can be opened
fn init_logging() {
    let writer = match log_file() {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "name_form_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

fn log_file() -> Option<File> {
    let dirs = config::project_dirs()?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("name-form-tui.log"))
        .ok()
}

fn run_app<B: ratatui::backend::Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut E,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events.next_event(POLL_INTERVAL)? {
            match event {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
