use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let navigator = &app.navigator;

        let mut status_text = format!(
            " SECTION {}/{} | queue: {}",
            navigator.current_section() + 1,
            navigator.section_count(),
            navigator.pending().len()
        );
        if let Some(msg) = &app.status_message {
            status_text.push_str(" | ");
            status_text.push_str(msg);
        }

        let cooldown = if navigator.is_scrolling() { " swipe cooldown " } else { "" };
        let help_hint = app.help_hint.as_str();
        let used = status_text.width() + cooldown.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(cooldown, Style::default().fg(theme.warning).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
