use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// One dot per section: current, visited or not yet seen
pub struct ProgressWidget;

impl ProgressWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let current = app.navigator.current_section();
        let visits = app.navigator.visits();
        let theme = &app.theme;

        let mut spans = Vec::with_capacity(app.navigator.section_count() * 2);
        for index in 0..app.navigator.section_count() {
            let (glyph, color) = if index == current {
                ("◆", theme.current)
            } else if visits.contains(index) {
                ("●", theme.visited)
            } else {
                ("○", theme.unvisited)
            };
            spans.push(Span::styled(glyph, Style::default().fg(color)));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(paragraph, area);
    }
}
