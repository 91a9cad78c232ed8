use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use sectionflow_core::GroupKind;

use crate::app::App;
use crate::surface::SectionView;

pub struct SectionWidget;

impl SectionWidget {
    /// Draw every visible section, each shifted by its slide offset
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), area);

        for view in app.navigator.surface().sections() {
            if !view.is_visible() {
                continue;
            }
            let offset = view
                .slide()
                .map(|(state, started)| app.animator.offset_rows(state, started, now, area.height))
                .unwrap_or(0);
            let lines = Self::content(view, app, now);
            Self::render_shifted(frame, area, offset, lines, app);
        }
    }

    fn content(view: &SectionView, app: &App, now: Instant) -> Vec<Line<'static>> {
        let step = app.reveal_step();
        let theme = &app.theme;
        let mut lines = Vec::new();

        for group in view.groups() {
            let visible = group.visible_units(step, now);
            let rendered = group.render_lines(visible);
            let style = match group.kind() {
                GroupKind::Letter => Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                GroupKind::LetterGather => {
                    Style::default().fg(theme.subtitle).add_modifier(Modifier::ITALIC)
                }
                GroupKind::DresscodeWord => Style::default().fg(theme.item),
                GroupKind::Word => Style::default().fg(theme.body),
            };

            if !lines.is_empty() {
                lines.push(Line::default());
            }
            for text in rendered {
                let text = match group.kind() {
                    GroupKind::DresscodeWord if !text.is_empty() => format!("• {}", text),
                    _ => text,
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
        }

        lines
    }

    fn render_shifted(
        frame: &mut Frame,
        area: Rect,
        offset: i32,
        mut lines: Vec<Line<'static>>,
        app: &App,
    ) {
        let height = area.height as i32;
        let top = area.y as i32 + offset;
        let bottom = top + height;
        let clip_top = top.max(area.y as i32);
        let clip_bottom = bottom.min(area.y as i32 + height);
        if clip_bottom <= clip_top {
            return;
        }

        // Center vertically inside the full (unclipped) section
        let pad = (height - lines.len() as i32).max(0) / 2;
        let mut padded = vec![Line::default(); pad as usize];
        padded.append(&mut lines);

        let target = Rect::new(
            area.x,
            clip_top as u16,
            area.width,
            (clip_bottom - clip_top) as u16,
        );
        let skip = (clip_top - top) as u16;

        let paragraph = Paragraph::new(padded)
            .alignment(Alignment::Center)
            .style(Style::default().bg(app.theme.bg0))
            .scroll((skip, 0));
        frame.render_widget(paragraph, target);
    }
}
