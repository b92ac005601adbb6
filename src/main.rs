use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use todui::ai::spawn_worker;
use todui::app::{App, handle_key, render};
use todui::config::load_config;
use todui::items::{items_path, load_items};

/// Terminal to-do list with AI-assisted task phrasing
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the items file (default: ~/.config/todui/items.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Disable AI suggestions for this session
    #[arg(long)]
    no_ai: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    #[cfg(debug_assertions)]
    init_debug_logging();

    let mut config = load_config();
    if cli.no_ai {
        config.ai.enabled = false;
    }

    let storage_path = cli.file.or_else(items_path);
    let items = match storage_path {
        Some(ref path) => load_items(path),
        None => Vec::new(),
    };

    let mut app = App::new(&config, items, storage_path);

    if app.suggestions.enabled {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(&config.ai, request_rx, response_tx);
        app.suggestions.set_channels(request_tx, response_rx);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| render(&app, frame))?;

        // Poll with a timeout so worker responses show up between keypresses
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (avoid duplicates)
            && key.kind == KeyEventKind::Press
        {
            handle_key(&mut app, key);
        }

        app.poll_ai_responses();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Log to a file in debug builds; logging would corrupt the TUI on stderr
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::fs::OpenOptions;

    if let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("todui-debug.log")
    {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}
