//! Kontroll info popup

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::common::{center_rect, popup_block, render_popup_background};
use crate::tui::themes::Theme;

const BODY: &str = "Dette simulerer kontroll av studentbeviset. Alt ser bra ut.";

#[derive(Default)]
pub struct KontrollInfoPopup {
    pub visible: bool,
}

impl KontrollInfoPopup {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn render(&self, f: &mut Frame, theme: &Theme) {
        if !self.visible {
            return;
        }

        let area = center_rect(46, 9, f.area());
        render_popup_background(f, area, theme);

        let block = popup_block(theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(2),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Kontroll",
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[0]);

        let body = Paragraph::new(BODY)
            .style(Style::default().fg(theme.text_color))
            .wrap(Wrap { trim: true });
        f.render_widget(body, chunks[1]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": lukk", Style::default().fg(theme.muted_color)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[2]);
    }
}
