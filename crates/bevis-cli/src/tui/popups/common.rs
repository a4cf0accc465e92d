//! Shared popup building blocks

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::tui::themes::Theme;

pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Clear the cells under the popup so the screen doesn't bleed through.
pub fn render_popup_background(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_color)),
        area,
    );
}

pub fn popup_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_color))
        .style(Style::default().bg(theme.bg_color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 40);
        let rect = center_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 15, 40, 10));
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 8);
        let rect = center_rect(40, 10, area);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 8);
    }
}
