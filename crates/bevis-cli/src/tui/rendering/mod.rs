//! Screen rendering
//!
//! Paints the whole student-ID screen every tick. All animation state is
//! read-only here: the sequencer's progress scalars are sampled through
//! the theme's ramps and nothing is written back.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::themes::{to_color, Theme};

const COLUMN_WIDTH: u16 = 52;

const AVATAR: [&str; 4] = ["╭────╮", "│ ◠◠ │", "│ ── │", "╰────╯"];

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg_color)),
        area,
    );

    // Readiness gate: nothing but the placeholder until config lands
    if !app.ready {
        render_loading(f, &app.theme, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar
            Constraint::Min(0),    // Content column
        ])
        .split(area);

    render_header(f, &app.theme, chunks[0]);

    let column = centered_column(chunks[1], COLUMN_WIDTH);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Avatar
            Constraint::Length(8), // Profile card
            Constraint::Length(7), // Validity card
            Constraint::Length(1),
            Constraint::Length(3), // Kontroll button
            Constraint::Length(3), // EU card button
            Constraint::Min(4),    // Footer metadata
        ])
        .split(column);

    render_avatar(f, &app.theme, rows[0]);
    render_profile_card(f, app, rows[1]);
    render_validity_card(f, app, rows[2]);
    render_kontroll_button(f, app, rows[4]);
    render_eu_button(f, &app.theme, rows[5]);
    render_footer(f, app, rows[6]);

    app.popups.kontroll_info.render(f, &app.theme);
    app.popups.eu_card.render(f, &app.theme);
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_loading(f: &mut Frame, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let placeholder = Paragraph::new("Laster …")
        .style(Style::default().fg(theme.muted_color))
        .alignment(Alignment::Center);
    f.render_widget(placeholder, chunks[1]);
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.header_border_color))
        .style(Style::default().bg(theme.header_bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" ∞ ", Style::default().fg(theme.accent_color)),
        Span::styled(
            "Sikt",
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(brand, inner);

    let menu = Paragraph::new(Line::from(Span::styled(
        "⋮ ",
        Style::default().fg(theme.accent_color),
    )))
    .alignment(Alignment::Right);
    f.render_widget(menu, inner);
}

fn render_avatar(f: &mut Frame, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = AVATAR
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(theme.muted_color))))
        .collect();
    let avatar = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(avatar, area);
}

fn render_profile_card(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.profile_card_border_color))
        .style(Style::default().bg(theme.profile_card_bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let label = Style::default()
        .fg(theme.text_color)
        .add_modifier(Modifier::BOLD);
    let value = Style::default().fg(theme.text_color);

    let lines = vec![
        Line::from(Span::styled(app.profile.name.clone(), value)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Fødselsdato: ", label),
            Span::styled(app.profile.birth_date.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Studentnummer: ", label),
            Span::styled(app.profile.student_number.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Studiested: ", label),
            Span::styled(app.profile.institution.clone(), value),
        ]),
    ];
    let card = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(card, inner);
}

fn render_validity_card(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let progress = app.sequencer.progress();
    let running = app.sequencer.is_running();

    let card_bg = if running {
        to_color(theme.kontroll_card_ramp.sample(progress.card))
    } else {
        theme.validity_bg_color
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.validity_border_color))
        .style(Style::default().bg(card_bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            app.profile.validity_header.clone(),
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.profile.validity_semester.clone(),
            Style::default().fg(theme.muted_color),
        )),
        Line::from(vec![
            Span::styled(
                "Utløper: ",
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                app.profile.validity_expiry.clone(),
                Style::default().fg(theme.text_color),
            ),
        ]),
    ];

    if running {
        // Overlay fades in by blending out of the card color
        let overlay_fg = to_color(theme.kontroll_text_ramp.sample(progress.text));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Kontrollert",
            Style::default().fg(overlay_fg).add_modifier(Modifier::BOLD),
        )));
    }

    let card = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(card, inner);
}

fn render_kontroll_button(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let progress = app.sequencer.progress();
    let running = app.sequencer.is_running();

    let button_bg = if running {
        to_color(theme.kontroll_button_ramp.sample(progress.button))
    } else {
        theme.accent_color
    };

    let mut label_style = Style::default()
        .fg(theme.button_text_color)
        .add_modifier(Modifier::BOLD);
    if running {
        // Trigger is disabled for the duration of a run
        label_style = label_style.add_modifier(Modifier::DIM);
    }
    let label = if running { "Kontroll pågår" } else { "Kontroll (k)" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(button_bg).bg(button_bg))
        .style(Style::default().bg(button_bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let button = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center);
    f.render_widget(button, inner);
}

fn render_eu_button(f: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.outline_color))
        .style(Style::default().bg(theme.bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let button = Paragraph::new(Line::from(Span::styled(
        "Europeisk studentbevis (e)",
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, inner);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let muted = Style::default().fg(theme.muted_color);

    let lines = vec![
        Line::from(Span::styled(
            format!("Sist oppdatert: {}", app.profile.updated_at_label()),
            muted,
        )),
        Line::from(Span::styled(
            format!("Tidssone: {}", app.profile.timezone),
            muted,
        )),
        Line::from(Span::styled(
            format!("Versjon: {}", app.profile.version),
            muted,
        )),
        Line::from(Span::styled("i: info   e: europeisk   q: avslutt", muted)),
    ];
    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 44)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_loading_gate_blocks_card_render() {
        let app = App::new();
        let text = draw(&app);
        assert!(text.contains("Laster"));
        assert!(!text.contains("Gyldig studentbevis"));
        assert!(!text.contains("Kontroll"));
    }

    #[test]
    fn test_ready_screen_shows_card_content() {
        let mut app = App::new();
        app.ready = true;
        let text = draw(&app);
        assert!(text.contains("Sikt"));
        assert!(text.contains("Gyldig studentbevis"));
        assert!(text.contains("Studentnummer: 599264"));
        assert!(text.contains("Kontroll (k)"));
        assert!(text.contains("Europeisk studentbevis (e)"));
        assert!(text.contains("Tidssone: Europe/Oslo"));
    }

    #[test]
    fn test_overlay_text_appears_only_while_running() {
        let mut app = App::new();
        app.ready = true;
        assert!(!draw(&app).contains("Kontrollert"));

        let t0 = Instant::now();
        app.sequencer.trigger(t0);
        app.sequencer.tick(t0 + std::time::Duration::from_millis(400));
        let text = draw(&app);
        assert!(text.contains("Kontrollert"));
        assert!(text.contains("Kontroll pågår"));
    }

    #[test]
    fn test_popup_overlays_screen() {
        let mut app = App::new();
        app.ready = true;
        app.popups.eu_card.open();
        let text = draw(&app);
        assert!(text.contains("Europeisk studentbevis"));
        assert!(text.contains("lukk"));
    }
}
