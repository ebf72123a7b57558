use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    rc::Rc,
    sync::mpsc,
    time::Duration,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rule-based batch file renamer for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log at debug severity to the log file
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Files or folders to add at startup
    paths: Vec<String>,
}

mod app;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use config::Config;
use model::{Model, TemplatesModel};
use services::{ErrorHub, ErrorNote, PdfSupport, Registry, TemplateStore};

pub struct App {
    pub model: Model,

    pub(crate) hub: Rc<ErrorHub>,
    pub(crate) store: Rc<TemplateStore>,
    pub(crate) pdf: Rc<PdfSupport>,

    /// Classified errors forwarded by the hub's default observer
    error_rx: mpsc::Receiver<ErrorNote>,

    pub(crate) confirm_apply: bool,
    pub(crate) detect_pdf_siblings: bool,
}

impl App {
    /// Wire the application root out of the registry.
    fn new(config: Config, registry: &Registry) -> Result<Self> {
        let hub = registry.get::<ErrorHub>()?;
        let store = registry.get::<TemplateStore>()?;
        let pdf = registry.get::<PdfSupport>()?;

        // Default observer: forward every classified error to the event
        // loop, which turns it into a toast
        let (error_tx, error_rx) = mpsc::channel();
        hub.observe_all(move |err| {
            let _ = error_tx.send(ErrorNote::from(err));
        });

        // Stored templates, falling back to the built-ins
        let templates = match store.load() {
            Ok(loaded) => TemplatesModel::from_loaded(loaded),
            Err(err) => {
                hub.report(err, None, Default::default());
                TemplatesModel::with_defaults()
            }
        };

        let mut model = Model::new(templates);
        if let Some(name) = &config.default_template {
            if !model.templates.select_by_name(name) {
                tracing::warn!(template = %name, "default_template not found");
            }
        }

        let mut app = App {
            model,
            hub,
            store,
            pdf,
            error_rx,
            confirm_apply: config.confirm_apply,
            detect_pdf_siblings: config.detect_pdf_siblings,
        };
        app.refresh_previews();
        app.apply_search_filter();
        Ok(app)
    }

    /// Add paths given on the command line.
    fn add_startup_paths(&mut self, paths: &[String]) {
        for path in paths {
            if std::path::Path::new(path).is_dir() {
                self.add_folder(path);
            } else {
                self.add_files(path);
            }
        }
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/refile/config.yaml
    if let Some(config_dir) = utils::get_config_dir() {
        let config_path = config_dir.join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // Every key has a default, so no config file is fine
    Ok(None)
}

/// The TUI owns stdout; tracing writes to the log file.
fn init_logging(config: &Config, debug: bool) -> Result<()> {
    let default_directive = if debug { "refile=debug" } else { "refile=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or(default_directive))
    });

    let log_path = utils::get_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = get_config_path(args.config.clone())?;
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    init_logging(&config, args.debug)?;
    tracing::debug!(config = ?config_path, "starting");

    // Wire services through the registry, owned here at the root
    let registry = Registry::new();
    let store_path = utils::get_config_dir()
        .map(|dir| dir.join("templates.yaml"))
        .unwrap_or_else(|| PathBuf::from("templates.yaml"));
    registry.register_factory(true, move || TemplateStore::new(store_path.clone()));
    registry.register_instance(PdfSupport::detect());
    registry.register_instance(ErrorHub::new());

    let mut app = App::new(config, &registry)?;
    app.add_startup_paths(&args.paths);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Classified errors arrive from the hub's default observer
        while let Ok(note) = app.error_rx.try_recv() {
            app.model.ui.last_error_kind = Some(note.kind);
            app.model.show_toast(format!("Error: {}", note.message));
        }

        // Auto-dismiss toast
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            // Persist unsaved template edits before quitting
            if app.model.templates.dirty {
                if let Err(err) = app.store.save(&app.model.templates.templates) {
                    tracing::warn!(%err, "failed to save templates on exit");
                }
            }
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
