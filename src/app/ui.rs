use crate::app::state::{AppMode, AppState};
use crate::components::cards::{FocusCard, QuoteCard, WeatherCard};
use crate::components::header::Header;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::{AboutModal, CommandPaletteModal, TextInputModal};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub cards: Vec<Rect>,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Clock header
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(main[1])
        .to_vec();

    AppLayout {
        header: main[0],
        cards,
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme;
    f.render_widget(Block::default().style(theme.root), area);

    let layout = get_layout(area);

    if layout.header.height > 0 {
        f.render_widget(
            Header {
                theme,
                now: chrono::Local::now(),
                time_12h: app_state.time_12h,
            },
            layout.header,
        );
    }

    if layout.cards[0].width > 0 && layout.cards[0].height > 0 {
        f.render_widget(
            WeatherCard {
                theme,
                weather: &app_state.weather,
            },
            layout.cards[0],
        );
        f.render_widget(
            FocusCard {
                theme,
                focus: app_state.focus.as_deref(),
            },
            layout.cards[1],
        );
        f.render_widget(
            QuoteCard {
                theme,
                quote: app_state.current_quote(),
            },
            layout.cards[2],
        );
    }

    if layout.footer.height > 0 {
        f.render_widget(footer_line(app_state), layout.footer);
    }

    // Overlays. The page underneath stays visible but dimmed.
    match app_state.mode {
        AppMode::Normal => {}
        AppMode::Palette => {
            dim_area(f.buffer_mut(), area);
            if let Some(palette) = &app_state.palette {
                f.render_widget(
                    CommandPaletteModal {
                        theme,
                        state: palette,
                    },
                    area,
                );
            }
        }
        AppMode::CityInput | AppMode::FocusInput => {
            dim_area(f.buffer_mut(), area);
            if let Some(input) = &app_state.input {
                let title = if app_state.mode == AppMode::CityInput {
                    " SET CITY "
                } else {
                    " TODAY'S FOCUS "
                };
                f.render_widget(
                    TextInputModal {
                        theme,
                        title,
                        input,
                    },
                    area,
                );
            }
        }
        AppMode::About => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(
                AboutModal {
                    theme,
                    palette: app_state.palette_type,
                },
                area,
            );
        }
    }
}

fn footer_line<'a>(app_state: &'a AppState<'a>) -> Paragraph<'a> {
    let theme = &app_state.theme;
    let spans = match app_state.mode {
        AppMode::Palette => vec![
            Span::styled(" ↑/↓", theme.footer_key),
            Span::styled(": select ", theme.footer_text),
            Span::styled("Enter", theme.footer_key),
            Span::styled(": run ", theme.footer_text),
            Span::styled("Esc", theme.footer_key),
            Span::styled(": close ", theme.footer_text),
        ],
        AppMode::CityInput | AppMode::FocusInput => vec![
            Span::styled(" Enter", theme.footer_key),
            Span::styled(": confirm ", theme.footer_text),
            Span::styled("Esc", theme.footer_key),
            Span::styled(": cancel ", theme.footer_text),
        ],
        AppMode::About => vec![
            Span::styled(" Esc", theme.footer_key),
            Span::styled(": close ", theme.footer_text),
        ],
        AppMode::Normal => vec![
            Span::styled(" Ctrl+k", theme.footer_key),
            Span::styled(": commands ", theme.footer_text),
            Span::styled("c", theme.footer_key),
            Span::styled(": city ", theme.footer_text),
            Span::styled("f", theme.footer_key),
            Span::styled(": focus ", theme.footer_text),
            Span::styled("t", theme.footer_key),
            Span::styled(": theme ", theme.footer_text),
            Span::styled("q", theme.footer_key),
            Span::styled(": quit ", theme.footer_text),
        ],
    };
    Paragraph::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::action::Action;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app_state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw(f, app_state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn start_page_shows_all_three_cards() {
        let text = rendered(&AppState::default());
        assert!(text.contains("WEATHER"));
        assert!(text.contains("FOCUS"));
        assert!(text.contains("QUOTE"));
        assert!(text.contains("Ctrl+k"));
    }

    #[test]
    fn palette_overlay_renders_on_top() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenPalette);
        let text = rendered(&state);
        assert!(text.contains("COMMANDS"));
        assert!(text.contains("Toggle Theme"));
    }

    #[test]
    fn city_input_overlay_has_its_title() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SetCityIntent);
        let text = rendered(&state);
        assert!(text.contains("SET CITY"));
    }

    #[test]
    fn about_overlay_names_the_app_and_palette() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ShowAbout);
        let text = rendered(&state);
        assert!(text.contains("daybreak"));
        assert!(text.contains("Palette: Dark"));

        reducer::update(&mut state, Action::ToggleTheme);
        assert!(rendered(&state).contains("Palette: Light"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        for (w, h) in [(1u16, 1u16), (5, 2), (20, 4)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| draw(f, &AppState::default())).unwrap();
        }
    }

    #[test]
    fn tiny_terminal_survives_a_no_match_palette() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenPalette);
        for c in "zzz".chars() {
            reducer::update(
                &mut state,
                Action::TextAreaInput(crossterm::event::KeyEvent::new(
                    crossterm::event::KeyCode::Char(c),
                    crossterm::event::KeyModifiers::empty(),
                )),
            );
        }
        assert!(state.palette.as_ref().unwrap().matches.is_empty());

        for (w, h) in [(40u16, 3u16), (40, 4), (10, 2), (80, 24)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| draw(f, &state)).unwrap();
        }
    }
}
