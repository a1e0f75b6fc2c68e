use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Normal-mode bindings. Only consulted while no overlay owns the
/// keyboard; the palette shortcut itself is handled ahead of this map.
pub struct KeyMap {
    global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        let mut global = HashMap::new();

        global.insert(key('q'), Action::Quit);
        global.insert(key('t'), Action::ToggleTheme);
        global.insert(key('h'), Action::SwitchTimeFormat);
        global.insert(key('r'), Action::RefreshWeather);
        global.insert(key('c'), Action::SetCityIntent);
        global.insert(shift_key('C'), Action::ClearCity);
        global.insert(key('f'), Action::FocusStartIntent);
        global.insert(shift_key('F'), Action::ClearFocus);
        global.insert(key('a'), Action::ShowAbout);

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&event).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
}

// Terminals report shifted letters as the uppercase char with SHIFT set.
fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}
