use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, InputState},
};
use crate::domain::models::ResolutionStatus;

/// State transitions for the location/weather pipeline. The async half
/// lives in `handler`; everything here runs on the loop task.
pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::RefreshWeather => {
            // The active path follows the stored preference: city if set,
            // device geolocation otherwise.
            UpdateResult::Handled(Some(Command::Refresh(state.weather.city.clone())))
        }
        Action::SetCityIntent => {
            state.mode = AppMode::CityInput;
            state.palette = None;
            state.input = Some(InputState::prefilled(
                state.weather.city.as_deref().unwrap_or(""),
            ));
            UpdateResult::Handled(None)
        }
        Action::SubmitCity(name) => {
            state.mode = AppMode::Normal;
            state.input = None;
            let name = name.trim();
            if name.is_empty() {
                UpdateResult::Handled(None)
            } else {
                UpdateResult::Handled(Some(Command::Refresh(Some(name.to_string()))))
            }
        }
        Action::ClearCity => {
            // Reverts to the geolocation invite without resolving; the
            // next refresh takes the geolocation path.
            state.weather.city = None;
            state.weather.status = ResolutionStatus::Idle;
            state.persist_preferences();
            UpdateResult::Handled(None)
        }
        Action::ResolutionStarted(status) => {
            state.weather.status = status.clone();
            UpdateResult::Handled(None)
        }
        Action::CityResolved(city, coords) => {
            // Geocode success is the moment the preference becomes active.
            state.weather.city = Some(city.clone());
            state.weather.status = ResolutionStatus::Ready(coords.label.clone());
            state.persist_preferences();
            UpdateResult::Handled(None)
        }
        Action::Located(coords) => {
            state.weather.status = ResolutionStatus::Ready(coords.label.clone());
            UpdateResult::Handled(None)
        }
        Action::ResolutionFailed(reason) => {
            // The previous reading stays on screen; only the status changes.
            state.weather.status = ResolutionStatus::Error(reason.clone());
            UpdateResult::Handled(None)
        }
        Action::WeatherLoaded(reading) => {
            state.weather.reading = Some(reading.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
