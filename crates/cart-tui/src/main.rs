use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod app;
mod components;
mod dispatcher;
mod error;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use app::App;
use cart_config::AppConfig;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    logger::install_panic_hook();
    log::info!("Starting cart-tui, logging to {}", log_file.display());

    let config = AppConfig::load();
    let mut app = App::new(&config).context("Failed to build the store")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("cart-tui stopped with error: {:#}", err);
    }

    log::info!("Exiting cart-tui");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(app, area, frame);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }
    }

    Ok(())
}
