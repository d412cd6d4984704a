mod app;
mod effects;
mod screen;
mod scryfall;
mod worker;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use horde_core::{default_config_path, HordeConfig};
use ratatui::prelude::*;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use app::App;
use scryfall::ScryfallClient;

/// Log to a daily file under `logs/`; the terminal belongs to the UI.
fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "horde.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_thread_names(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    guard
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = init_logging();
    info!("-- the horde stirs --");

    let config = HordeConfig::load_or_default(&default_config_path())?;
    let source = Arc::new(ScryfallClient::new(config.clone())?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(config, source));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(%e, "horde exited with an error");
        eprintln!("Error: {}", e);
    }

    info!("-- the horde rests --");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> color_eyre::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Poll with ~30fps tick for animations and fetch results
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break; // Quit signal
                    }
                }
                Event::Mouse(mouse) => {
                    if app.handle_mouse(mouse) {
                        break;
                    }
                }
                _ => {}
            }
        }

        app.tick();
    }

    Ok(())
}
