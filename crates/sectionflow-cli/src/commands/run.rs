use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use sectionflow_core::{deck::Deck, AppConfig};
use sectionflow_tui::{
    event::{AppEvent, EventHandler},
    slide::UiConfigExt,
    App,
};

pub async fn run(config: Arc<AppConfig>, deck_path: &Path) -> Result<()> {
    let deck = Deck::load(deck_path)
        .with_context(|| format!("Failed to load deck {}", deck_path.display()))?;
    let mut app = App::new(config.clone(), deck)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = format!("sectionflow - {}", deck_path.display());
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(
        config.ui.tick_duration(),
        config.ui.animation_tick_duration(),
    );

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Presenter closed on section {}", app.navigator.current_section());
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    app.start(Instant::now());

    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        let now = Instant::now();
        app.update(now);

        terminal.draw(|frame| sectionflow_tui::draw(frame, app, now))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Tick | AppEvent::Resize(_, _) => {}
                event => app.handle_event(&event, Instant::now()),
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
