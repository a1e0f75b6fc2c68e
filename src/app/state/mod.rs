use super::keymap::KeyMap;
use super::persistence::{self, Preferences};
use crate::theme::{PaletteType, Theme};
use std::path::PathBuf;
use std::sync::Arc;

pub mod command_palette;
pub mod input;
pub mod weather;

// Re-exports
pub use command_palette::CommandPaletteState;
pub use input::InputState;
pub use weather::WeatherState;

pub const QUOTES: &[(&str, &str)] = &[
    (
        "Simplicity is the ultimate sophistication.",
        "Leonardo da Vinci",
    ),
    (
        "Perfection is achieved when there is nothing left to take away.",
        "Antoine de Saint-Exupéry",
    ),
    ("Well begun is half done.", "Aristotle"),
    ("Make it work, make it right, make it fast.", "Kent Beck"),
    (
        "The details are not the details. They make the design.",
        "Charles Eames",
    ),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,     // Start page, keymap active
    Palette,    // Command palette overlay owns the keyboard
    CityInput,  // Typing a city name
    FocusInput, // Typing the focus note
    About,      // About overlay
}

pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub frame_count: u64,

    // --- Panels ---
    pub weather: WeatherState,
    pub focus: Option<String>,
    pub time_12h: bool,
    pub quote_index: usize,

    // --- Overlays ---
    pub palette: Option<CommandPaletteState>,
    pub input: Option<InputState<'a>>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
    pub geolocation_enabled: bool,
    /// Where preference writes go; `None` disables persistence (tests).
    pub prefs_path: Option<PathBuf>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(prefs: Preferences) -> Self {
        let palette_type = prefs.theme.unwrap_or(PaletteType::Dark);
        let quote_index =
            (chrono::Local::now().timestamp().unsigned_abs() as usize) % QUOTES.len();
        Self {
            weather: WeatherState {
                city: prefs.city,
                ..WeatherState::default()
            },
            focus: prefs.focus,
            time_12h: prefs.time_12h,
            quote_index,
            palette_type,
            theme: Theme::from_palette_type(palette_type),
            geolocation_enabled: prefs.geolocation,
            prefs_path: persistence::preferences_path(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            theme: Some(self.palette_type),
            time_12h: self.time_12h,
            city: self.weather.city.clone(),
            focus: self.focus.clone(),
            geolocation: self.geolocation_enabled,
        }
    }

    /// Fire-and-forget preference write, skipped when no path is set.
    pub fn persist_preferences(&self) {
        if let Some(path) = &self.prefs_path {
            persistence::save_to(path, &self.preferences());
        }
    }

    #[must_use]
    pub fn current_quote(&self) -> (&'static str, &'static str) {
        QUOTES[self.quote_index % QUOTES.len()]
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            frame_count: 0,
            weather: WeatherState::default(),
            focus: None,
            time_12h: false,
            quote_index: 0,
            palette: None,
            input: None,
            keymap: Arc::new(KeyMap::new()),
            palette_type: PaletteType::Dark,
            theme: Theme::default(),
            geolocation_enabled: true,
            prefs_path: None,
        }
    }
}
