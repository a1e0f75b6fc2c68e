use crate::app::{
    action::{Action, UpdateResult},
    command_palette::search_commands,
    state::{AppMode, AppState, CommandPaletteState},
};
use crossterm::event::KeyCode;

/// Palette controller. Every operation is total: no input can fail, an
/// empty match list is an ordinary state, and the highlight invariant
/// (`selected_index` in bounds whenever matches exist, zero otherwise)
/// holds after every arm.
pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenPalette => {
            // Re-opening an open palette resets the query, by contract.
            state.mode = AppMode::Palette;
            state.input = None;
            state.palette = Some(CommandPaletteState {
                matches: search_commands(""),
                ..Default::default()
            });
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            // Idempotent: closing a closed palette does nothing visible.
            if state.mode == AppMode::Palette {
                state.mode = AppMode::Normal;
            }
            state.palette = None;
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            if let Some(cp) = &mut state.palette {
                if !cp.matches.is_empty() {
                    cp.selected_index = (cp.selected_index + 1).min(cp.matches.len() - 1);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            if let Some(cp) = &mut state.palette {
                if !cp.matches.is_empty() {
                    cp.selected_index = cp.selected_index.saturating_sub(1);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) if state.mode == AppMode::Palette => {
            if let Some(cp) = &mut state.palette {
                match key.code {
                    KeyCode::Char(c) => {
                        cp.query.push(c);
                        cp.matches = search_commands(&cp.query);
                        cp.selected_index = 0;
                    }
                    KeyCode::Backspace => {
                        cp.query.pop();
                        cp.matches = search_commands(&cp.query);
                        cp.selected_index = 0;
                    }
                    _ => {}
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
