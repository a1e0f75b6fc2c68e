use super::{
    action::{Action, UpdateResult},
    command::Command,
    command_palette,
    features,
    state::{AppMode, AppState},
};

/// The single place state mutates. Delegates to the feature updaters in
/// order; the first one to handle the action wins.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            return None;
        }
        Action::Resize(_, _) => return None,
        Action::PaletteSelect => return execute_selected(state),
        _ => {}
    }

    let features: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::palette::update,
        features::weather::update,
        features::session::update,
    ];
    for feature in features {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    None
}

/// Runs the highlighted palette entry. On an empty match list this is a
/// complete no-op: nothing executes and the palette stays open.
fn execute_selected(state: &mut AppState) -> Option<Command> {
    let selected = state.palette.as_ref().and_then(|cp| {
        cp.matches
            .get(cp.selected_index)
            .map(|&idx| command_palette::get_commands()[idx].action.clone())
    });

    match selected {
        Some(action) => {
            state.mode = AppMode::Normal;
            state.palette = None;
            update(state, action)
        }
        None => None,
    }
}
