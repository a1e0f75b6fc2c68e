use crate::app::state::InputState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// Single-line entry used for both the city and focus prompts.
pub struct TextInputModal<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub input: &'a InputState<'a>,
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(50, 3, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.card_title),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", self.theme.footer_key),
                Span::styled(": confirm ", self.theme.footer_text),
                Span::styled("Esc", self.theme.footer_key),
                Span::styled(": cancel ", self.theme.footer_text),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.width > 0 && inner.height > 0 {
            Widget::render(&self.input.text_area, inner, buf);
        }
    }
}
