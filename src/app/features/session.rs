use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, InputState, QUOTES},
};
use crate::theme::Theme;

/// Theme, clock format, focus note and the small overlays. All plain
/// state-to-state transitions; the only side effect is the preference
/// write, which is best-effort.
pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleTheme => {
            state.palette_type = state.palette_type.toggled();
            state.theme = Theme::from_palette_type(state.palette_type);
            state.persist_preferences();
            UpdateResult::Handled(None)
        }
        Action::SwitchTimeFormat => {
            state.time_12h = !state.time_12h;
            state.persist_preferences();
            UpdateResult::Handled(None)
        }
        Action::FocusStartIntent => {
            state.mode = AppMode::FocusInput;
            state.palette = None;
            state.input = Some(InputState::prefilled(state.focus.as_deref().unwrap_or("")));
            UpdateResult::Handled(None)
        }
        Action::SubmitFocus(text) => {
            state.mode = AppMode::Normal;
            state.input = None;
            let text = text.trim();
            // An empty note is a cancelled edit, not a cleared note.
            if !text.is_empty() {
                state.focus = Some(text.to_string());
                state.persist_preferences();
            }
            UpdateResult::Handled(None)
        }
        Action::ClearFocus => {
            state.focus = None;
            state.persist_preferences();
            UpdateResult::Handled(None)
        }
        Action::ShowAbout => {
            state.mode = AppMode::About;
            state.palette = None;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.input = None;
            state.palette = None;
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if let Some(input) = &mut state.input {
                input.text_area.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            // Tick rate is 250ms; rotate the quote every 15 seconds.
            if state.frame_count % 60 == 0 {
                state.quote_index = (state.quote_index + 1) % QUOTES.len();
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::PaletteType;

    #[test]
    fn theme_toggles_and_rebuilds_styles() {
        let mut state = AppState::default();
        assert_eq!(state.palette_type, PaletteType::Dark);
        update(&mut state, &Action::ToggleTheme);
        assert_eq!(state.palette_type, PaletteType::Light);
        assert_eq!(state.theme, Theme::light());
        update(&mut state, &Action::ToggleTheme);
        assert_eq!(state.palette_type, PaletteType::Dark);
    }

    #[test]
    fn time_format_flips() {
        let mut state = AppState::default();
        update(&mut state, &Action::SwitchTimeFormat);
        assert!(state.time_12h);
        update(&mut state, &Action::SwitchTimeFormat);
        assert!(!state.time_12h);
    }

    #[test]
    fn focus_submit_trims_and_stores() {
        let mut state = AppState::default();
        update(&mut state, &Action::FocusStartIntent);
        assert_eq!(state.mode, AppMode::FocusInput);
        update(&mut state, &Action::SubmitFocus("  write the report  ".to_string()));
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.focus.as_deref(), Some("write the report"));
    }

    #[test]
    fn empty_focus_submit_changes_nothing() {
        let mut state = AppState {
            focus: Some("keep me".to_string()),
            ..AppState::default()
        };
        update(&mut state, &Action::SubmitFocus("   ".to_string()));
        assert_eq!(state.focus.as_deref(), Some("keep me"));
    }

    #[test]
    fn clear_focus_drops_the_note() {
        let mut state = AppState {
            focus: Some("done".to_string()),
            ..AppState::default()
        };
        update(&mut state, &Action::ClearFocus);
        assert!(state.focus.is_none());
    }

    #[test]
    fn quote_rotates_every_sixty_ticks() {
        let mut state = AppState::default();
        let start = state.quote_index;
        for _ in 0..60 {
            update(&mut state, &Action::Tick);
        }
        assert_eq!(state.quote_index, (start + 1) % QUOTES.len());
    }

    #[test]
    fn cancel_closes_any_overlay() {
        let mut state = AppState::default();
        update(&mut state, &Action::ShowAbout);
        assert_eq!(state.mode, AppMode::About);
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.input.is_none());
    }
}
