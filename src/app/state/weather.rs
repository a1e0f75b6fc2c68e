use crate::domain::models::{ResolutionStatus, WeatherReading};

/// Weather card state. `city` is the persisted location preference; when
/// absent, refreshes fall back to device geolocation. `reading` survives
/// failed attempts so stale-but-valid data is never blanked by an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    pub status: ResolutionStatus,
    pub reading: Option<WeatherReading>,
    pub city: Option<String>,
}
