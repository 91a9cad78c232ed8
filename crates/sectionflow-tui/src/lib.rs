pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod slide;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use widgets::{ProgressWidget, SectionWidget, StatusBarWidget};

/// Draw one frame of the presenter
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    SectionWidget::render(frame, layout[0], app, now);
    ProgressWidget::render(frame, layout[1], app);
    StatusBarWidget::render(frame, layout[2], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use sectionflow_core::deck::Deck;
    use sectionflow_core::AppConfig;

    #[test]
    fn test_draw_shows_first_section_after_reveal() {
        let deck = Deck::parse("# Hello\n---\n# World\n").unwrap();
        let mut app = App::new(Arc::new(AppConfig::default()), deck).unwrap();
        let t0 = Instant::now();
        app.start(t0);
        let later = t0 + std::time::Duration::from_secs(5);
        app.update(later);

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| draw(frame, &app, later)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Hello"));
        assert!(!text.contains("World"));
        assert!(text.contains("SECTION 1/2"));
    }

    #[test]
    fn test_status_bar_hint_uses_configured_keys() {
        let mut config = AppConfig::default();
        config.keymap.forward = vec!["n".to_string()];
        config.keymap.backward = vec!["p".to_string()];
        config.keymap.quit = vec!["x".to_string()];
        let deck = Deck::parse("# A\n---\n# B\n").unwrap();
        let mut app = App::new(Arc::new(config), deck).unwrap();
        let t0 = Instant::now();
        app.start(t0);

        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        terminal.draw(|frame| draw(frame, &app, t0)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("n/p:move"));
        assert!(text.contains("x:quit"));
        assert!(!text.contains("q:quit"));
    }
}
