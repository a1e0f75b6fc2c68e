use crate::app::command::Command;
use crate::domain::models::{Coordinates, ResolutionStatus, WeatherReading};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Command Palette ---
    OpenPalette,   // Ctrl/Super+k, works in any mode and resets the query
    ClosePalette,  // Esc while the palette is open
    PaletteNext,   // Highlight next match
    PalettePrev,   // Highlight previous match
    PaletteSelect, // Execute the highlighted command

    // --- Registered Commands ---
    ToggleTheme,
    SwitchTimeFormat,
    RefreshWeather,
    SetCityIntent,      // Open the city input; does not resolve by itself
    SubmitCity(String), // Geocode the typed name, overwriting any preference
    ClearCity,          // Drop the preference; next refresh uses geolocation
    FocusStartIntent,   // Open the focus-note input
    SubmitFocus(String),
    ClearFocus,
    ShowAbout,

    // --- Input Modals ---
    CancelMode,                                // Esc: close modal / overlay
    TextAreaInput(crossterm::event::KeyEvent), // Keystroke for the active input

    // --- Async Results (sent back by the weather orchestrator) ---
    ResolutionStarted(ResolutionStatus), // Locating or Resolving
    CityResolved(String, Coordinates),   // Typed name + coordinates; persists
    Located(Coordinates),                // Geolocation fix; never persisted
    ResolutionFailed(String),            // Terminal status text for this attempt
    WeatherLoaded(WeatherReading),
}
