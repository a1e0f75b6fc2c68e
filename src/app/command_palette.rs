use super::action::Action;

#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

/// The fixed command registry. Order matters: it is the unfiltered display
/// order and filtering preserves it.
#[must_use]
pub fn get_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: "Toggle Theme",
            description: "Switch between the dark and light palette",
            action: Action::ToggleTheme,
        },
        CommandDefinition {
            name: "Switch Time Format",
            description: "Toggle the clock between 24h and 12h",
            action: Action::SwitchTimeFormat,
        },
        CommandDefinition {
            name: "Refresh Weather",
            description: "Resolve your location and fetch conditions",
            action: Action::RefreshWeather,
        },
        CommandDefinition {
            name: "Set City",
            description: "Type a city to pin the weather location",
            action: Action::SetCityIntent,
        },
        CommandDefinition {
            name: "Clear City",
            description: "Forget the pinned city",
            action: Action::ClearCity,
        },
        CommandDefinition {
            name: "Focus Mode: Start",
            description: "Write down today's focus",
            action: Action::FocusStartIntent,
        },
        CommandDefinition {
            name: "Focus Mode: Clear",
            description: "Clear the focus note",
            action: Action::ClearFocus,
        },
        CommandDefinition {
            name: "About",
            description: "About this dashboard",
            action: Action::ShowAbout,
        },
    ]
}

/// Case-insensitive contiguous substring match against command names,
/// returning indices into `get_commands()` in registry order. Not a fuzzy
/// or subsequence match. An empty query matches everything.
#[must_use]
pub fn search_commands(query: &str) -> Vec<usize> {
    let commands = get_commands();
    if query.is_empty() {
        return (0..commands.len()).collect();
    }

    let query_lower = query.to_lowercase();
    commands
        .iter()
        .enumerate()
        .filter(|(_, cmd)| cmd.name.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect()
}
