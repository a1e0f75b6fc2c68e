use super::state::{AppMode, AppState};
use crate::app::action::Action;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Translates a terminal event into an action, given the current mode.
/// Precedence: the palette chord beats everything, then the active
/// overlay's keys, then the normal-mode keymap.
pub fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let key = match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => *key,
        Event::Resize(w, h) => return Some(Action::Resize(*w, *h)),
        _ => return None,
    };

    // Ctrl+k (or Super+k) opens the palette from anywhere, including on
    // top of an input modal or an already-open palette.
    if matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K'))
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
    {
        return Some(Action::OpenPalette);
    }

    match state.mode {
        AppMode::Palette => match key.code {
            KeyCode::Esc => Some(Action::ClosePalette),
            KeyCode::Down => Some(Action::PaletteNext),
            KeyCode::Up => Some(Action::PalettePrev),
            KeyCode::Enter => Some(Action::PaletteSelect),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::CityInput => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => state
                .input
                .as_ref()
                .map(|input| Action::SubmitCity(input.text())),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::FocusInput => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => state
                .input
                .as_ref()
                .map(|input| Action::SubmitFocus(input.text())),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::About => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CancelMode),
            _ => None,
        },
        AppMode::Normal => state.keymap.get_action(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn chord(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn palette_chord_wins_in_every_mode() {
        let mut state = AppState::default();
        let ctrl_k = chord(KeyCode::Char('k'), KeyModifiers::CONTROL);
        for mode in [
            AppMode::Normal,
            AppMode::Palette,
            AppMode::CityInput,
            AppMode::FocusInput,
            AppMode::About,
        ] {
            state.mode = mode;
            assert_eq!(
                map_event_to_action(&ctrl_k, &state),
                Some(Action::OpenPalette)
            );
        }
        assert_eq!(
            map_event_to_action(&chord(KeyCode::Char('K'), KeyModifiers::SUPER), &state),
            Some(Action::OpenPalette)
        );
    }

    #[test]
    fn plain_k_is_not_the_chord() {
        let state = AppState::default();
        assert_eq!(map_event_to_action(&key(KeyCode::Char('k')), &state), None);
    }

    #[test]
    fn palette_mode_routes_navigation_and_text() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenPalette);
        assert_eq!(
            map_event_to_action(&key(KeyCode::Down), &state),
            Some(Action::PaletteNext)
        );
        assert_eq!(
            map_event_to_action(&key(KeyCode::Up), &state),
            Some(Action::PalettePrev)
        );
        assert_eq!(
            map_event_to_action(&key(KeyCode::Enter), &state),
            Some(Action::PaletteSelect)
        );
        assert_eq!(
            map_event_to_action(&key(KeyCode::Esc), &state),
            Some(Action::ClosePalette)
        );
        // 'q' is query text here, not quit.
        assert!(matches!(
            map_event_to_action(&key(KeyCode::Char('q')), &state),
            Some(Action::TextAreaInput(_))
        ));
    }

    #[test]
    fn city_input_submits_the_typed_text() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SetCityIntent);
        for c in "Oslo".chars() {
            let action = map_event_to_action(&key(KeyCode::Char(c)), &state).unwrap();
            reducer::update(&mut state, action);
        }
        assert_eq!(
            map_event_to_action(&key(KeyCode::Enter), &state),
            Some(Action::SubmitCity("Oslo".to_string()))
        );
        assert_eq!(
            map_event_to_action(&key(KeyCode::Esc), &state),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn about_dismisses_on_the_usual_keys() {
        let mut state = AppState::default();
        state.mode = AppMode::About;
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            assert_eq!(
                map_event_to_action(&key(code), &state),
                Some(Action::CancelMode)
            );
        }
        assert_eq!(map_event_to_action(&key(KeyCode::Char('x')), &state), None);
    }

    #[test]
    fn normal_mode_falls_through_to_the_keymap() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(&key(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(&key(KeyCode::Char('t')), &state),
            Some(Action::ToggleTheme)
        );
    }

    #[test]
    fn resize_maps_through() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(&Event::Resize(80, 24), &state),
            Some(Action::Resize(80, 24))
        );
    }
}
