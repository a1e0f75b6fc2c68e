use crate::app::command_palette::get_commands;
use crate::app::state::CommandPaletteState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 50, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMANDS ", self.theme.card_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner.height == 0 {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Matches
            ])
            .split(inner);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_key),
            Span::styled(&self.state.query, self.theme.input_text),
            Span::styled(
                "_",
                self.theme.input_text.add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border);

        let commands = get_commands();
        let items: Vec<ListItem> = self
            .state
            .matches
            .iter()
            .enumerate()
            .map(|(i, &cmd_idx)| {
                let cmd = &commands[cmd_idx];
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };

                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<20}", cmd.name), style),
                    Span::styled(
                        cmd.description,
                        self.theme.list_item.add_modifier(Modifier::DIM),
                    ),
                ]))
            })
            .collect();

        if items.is_empty() {
            // The results rect can be 0 or 1 rows tall on a cramped
            // terminal; never write below it.
            if layout[2].height > 0 {
                let y = layout[2].y + u16::from(layout[2].height > 1);
                let no_results = Line::from(Span::styled(
                    "  No commands found.",
                    self.theme.list_item.add_modifier(Modifier::DIM),
                ));
                buf.set_line(layout[2].x, y, &no_results, layout[2].width);
            }
        } else {
            List::new(items).render(layout[2], buf);
        }
    }
}
