//! European student-card popup
//!
//! Shows a static QR-looking glyph; there is no real payload behind it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{center_rect, popup_block, render_popup_background};
use crate::tui::themes::Theme;

const QR_PLACEHOLDER: [&str; 9] = [
    "█▀▀▀▀▀█ ▀█▄█ █▀▀▀▀▀█",
    "█ ███ █ ▄▀ ▀ █ ███ █",
    "█ ▀▀▀ █ █▄▀▄ █ ▀▀▀ █",
    "▀▀▀▀▀▀▀ █ ▀ ▀▀▀▀▀▀▀ ",
    "▀█▄ ▄▄▀▄▀▀█▄▀▄ ▄█▀▄▀",
    "▀ ▄▀▄▄▀██ ▄ ▀█▄▀ ██▀",
    "▀▀▀▀▀▀▀ ▄▀▄ █ ▀ ██ ▀",
    "█▀▀▀▀▀█ ██▀▄▄▀▄ ▄ ▄█",
    "█ ▀▀▀ █ ▀█▄█▀█▄▀██▄ ",
];

#[derive(Default)]
pub struct EuCardPopup {
    pub visible: bool,
}

impl EuCardPopup {
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

        let area = center_rect(40, 16, f.area());
        render_popup_background(f, area, theme);

        let block = popup_block(theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                         // Title
                Constraint::Length(QR_PLACEHOLDER.len() as u16), // Glyph
                Constraint::Min(1),                            // Footer
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Europeisk studentbevis",
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let glyph: Vec<Line> = QR_PLACEHOLDER
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(theme.text_color))))
            .collect();
        let qr = Paragraph::new(glyph).alignment(Alignment::Center);
        f.render_widget(qr, chunks[1]);

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
