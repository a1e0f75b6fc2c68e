use crate::domain::clock;
use crate::theme::Theme;
use chrono::{DateTime, Local, Timelike};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Greeting, clock and date, centered at the top of the page.
pub struct Header<'a> {
    pub theme: &'a Theme,
    pub now: DateTime<Local>,
    pub time_12h: bool,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                clock::format_time(&self.now, self.time_12h),
                self.theme.clock,
            )),
            Line::from(Span::styled(
                clock::greeting_for_hour(self.now.hour()),
                self.theme.greeting,
            )),
            Line::from(Span::styled(
                clock::format_date(&self.now),
                self.theme.date,
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
