use thiserror::Error;

/// A resolved geographic position, produced once per resolution attempt.
/// `label` is what the weather card shows next to the reading: either
/// "City, CC" from geocoding or "Now" when the position came from
/// device geolocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Current conditions as decoded from the forecast endpoint. Overwritten
/// wholesale on every successful fetch; no history is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition_code: i64,
}

impl WeatherReading {
    #[must_use]
    pub fn temperature_display(&self) -> String {
        format!("{}°C", self.temperature_c.round() as i64)
    }

    #[must_use]
    pub fn wind_display(&self) -> String {
        format!("{} km/h", self.wind_speed_kmh.round() as i64)
    }

    #[must_use]
    pub fn sky_display(&self) -> String {
        sky_label(self.condition_code)
    }
}

/// WMO weather interpretation codes, reduced to short labels. The table is
/// deliberately not exhaustive: codes outside it render verbatim.
#[must_use]
pub fn sky_label(code: i64) -> String {
    let label = match code {
        0 => "Clear",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Rime fog",
        51 | 53 | 55 => "Drizzle",
        61 | 63 | 65 => "Rain",
        71 | 73 | 75 => "Snow",
        80 | 81 | 82 => "Showers",
        95 | 96 | 99 => "Thunderstorm",
        other => return format!("Code {other}"),
    };
    label.to_string()
}

/// Display state of the location/weather pipeline, rendered as the weather
/// card's status line.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResolutionStatus {
    #[default]
    Idle,
    Locating,
    Resolving,
    Ready(String),
    Error(String),
}

impl ResolutionStatus {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ResolutionStatus::Idle => "Allow location to show weather",
            ResolutionStatus::Locating => "Locating…",
            ResolutionStatus::Resolving => "Looking up city…",
            ResolutionStatus::Ready(label) => label,
            ResolutionStatus::Error(reason) => reason,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ResolutionStatus::Error(_))
    }
}

/// Failure taxonomy for the three remote lookups. Adapters map transport
/// and decode failures into these; the orchestrator turns them into the
/// short status strings the user sees. Nothing here escapes the weather
/// feature.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no results for {0:?}")]
    NotFound(String),
    #[error("geolocation capability unavailable")]
    Unavailable,
    #[error("location permission denied or request timed out")]
    Denied,
    #[error("request failed: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Malformed(err.to_string())
        } else {
            LookupError::Network(err.to_string())
        }
    }
}
