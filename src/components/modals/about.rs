use crate::theme::{PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct AboutModal<'a> {
    pub theme: &'a Theme,
    pub palette: PaletteType,
}

impl Widget for AboutModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(50, 50, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" ABOUT ", self.theme.card_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("daybreak {}", env!("CARGO_PKG_VERSION")),
                self.theme.card_value,
            )),
            Line::from(Span::styled(
                "A quiet start page for your terminal.",
                self.theme.card_label,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Ctrl+k", self.theme.footer_key),
                Span::styled(" commands  ", self.theme.footer_text),
                Span::styled("c", self.theme.footer_key),
                Span::styled(" city  ", self.theme.footer_text),
                Span::styled("f", self.theme.footer_key),
                Span::styled(" focus  ", self.theme.footer_text),
                Span::styled("q", self.theme.footer_key),
                Span::styled(" quit", self.theme.footer_text),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Palette: ", self.theme.footer_text),
                Span::styled(self.palette.label(), self.theme.card_value),
            ]),
            Line::from(Span::styled(
                "Weather by Open-Meteo",
                self.theme.card_label,
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(modal_area, buf);
    }
}
