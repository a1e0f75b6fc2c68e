use crate::app::state::weather::WeatherState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

fn card_block<'a>(title: &'a str, theme: &'a Theme) -> Block<'a> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, theme.card_title),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border)
}

/// Current conditions plus the resolution status line. The status always
/// renders; readings only once a fetch has succeeded, and a stale reading
/// stays up through later failures.
pub struct WeatherCard<'a> {
    pub theme: &'a Theme,
    pub weather: &'a WeatherState,
}

impl Widget for WeatherCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = card_block("WEATHER", self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let status_style = if self.weather.status.is_error() {
            self.theme.status_error
        } else {
            self.theme.status_ready
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.weather.status.text(), status_style)),
        ];
        if let Some(reading) = &self.weather.reading {
            lines.push(Line::from(Span::styled(
                reading.temperature_display(),
                self.theme.card_value,
            )));
            lines.push(Line::from(Span::styled(
                reading.sky_display(),
                self.theme.card_label,
            )));
            lines.push(Line::from(vec![
                Span::styled("Wind ", self.theme.card_label),
                Span::styled(reading.wind_display(), self.theme.card_value),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// The one-line focus note, or a hint when none is set.
pub struct FocusCard<'a> {
    pub theme: &'a Theme,
    pub focus: Option<&'a str>,
}

impl Widget for FocusCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = card_block("FOCUS", self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.focus {
            Some(note) => vec![
                Line::from(""),
                Line::from(Span::styled("Today", self.theme.card_label)),
                Line::from(Span::styled(note.to_string(), self.theme.card_value)),
            ],
            None => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", self.theme.card_label),
                    Span::styled("f", self.theme.footer_key),
                    Span::styled(" to set a focus", self.theme.card_label),
                ]),
            ],
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

pub struct QuoteCard<'a> {
    pub theme: &'a Theme,
    pub quote: (&'static str, &'static str),
}

impl Widget for QuoteCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = card_block("QUOTE", self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let (text, author) = self.quote;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("\u{201c}{text}\u{201d}"), self.theme.card_value)),
            Line::from(Span::styled(format!("\u{2014} {author}"), self.theme.card_label)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .render(inner, buf);
    }
}
