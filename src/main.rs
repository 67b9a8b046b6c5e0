use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod flow;
mod form;
mod models;
mod theme;
mod ui;

use app::App;
use cli::CliConfig;
use flow::{Completion, Handoff, NavPayload};
use models::SkillCatalog;

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    init_logging(&config)?;

    let catalog = SkillCatalog::resolve(config.catalog_path.as_deref())?;
    let form_data = load_form_data(&config)?;
    info!(skills = catalog.skill_count(), "starting questionnaire");

    let mut app = App::new(catalog, Completion::Standalone { form_data });

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    match result? {
        Some(payload) => emit_payload(&config, &payload),
        None => Ok(()),
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<Option<NavPayload>> {
    loop {
        let now = Instant::now();
        app.tick(now);

        // Fire the scheduled hand-off once its delay has elapsed
        if let Some(handoff) = app.poll_handoff(now) {
            match handoff {
                Handoff::Delivered => return Ok(None),
                Handoff::Navigate(payload) => return Ok(Some(payload)),
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(exit) = app.handle_key(key.code, Instant::now()) {
                        info!(?exit, "leaving questionnaire");
                        app.shutdown();
                        return Ok(None);
                    }
                }
            }
        }
    }
}

/// Route tracing output to the configured log file; logging is off without one
/// (stdout belongs to the raw-mode terminal).
fn init_logging(config: &CliConfig) -> io::Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Read the form data carried over from earlier screens, if any
fn load_form_data(config: &CliConfig) -> io::Result<Value> {
    let Some(path) = &config.form_data_path else {
        return Ok(Value::Null);
    };
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Hand the navigation payload to the next questionnaire screen: written to
/// the configured output file, or printed for the caller to consume.
fn emit_payload(config: &CliConfig, payload: &NavPayload) -> io::Result<()> {
    let document = json!({
        "route": payload.route.name(),
        "state": payload.state,
    });
    let pretty = serde_json::to_string_pretty(&document)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    match &config.out_path {
        Some(path) => {
            std::fs::write(path, pretty)?;
            info!(path = %path.display(), "payload written");
        }
        None => println!("{}", pretty),
    }
    Ok(())
}
