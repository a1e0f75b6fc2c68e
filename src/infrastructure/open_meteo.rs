use crate::domain::models::{Coordinates, LookupError, WeatherReading};
use crate::domain::providers::{Geocoder, WeatherFeed};
use async_trait::async_trait;
use serde::Deserialize;

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com";
const FORECAST_BASE: &str = "https://api.open-meteo.com";

/// Unauthenticated client for the Open-Meteo geocoding and forecast APIs.
pub struct OpenMeteoClient {
    http: reqwest::Client,
    geocoding_base: String,
    forecast_base: String,
}

impl OpenMeteoClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_urls(GEOCODING_BASE.to_string(), FORECAST_BASE.to_string())
    }

    #[must_use]
    pub fn with_base_urls(geocoding_base: String, forecast_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            geocoding_base,
            forecast_base,
        }
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i64,
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    async fn geocode(&self, city: &str) -> Result<Coordinates, LookupError> {
        let url = format!("{}/v1/search", self.geocoding_base);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Network(format!(
                "geocoding returned {}",
                response.status()
            )));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;

        let first = body
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(city.to_string()))?;

        let label = match &first.country_code {
            Some(cc) => format!("{}, {}", first.name, cc.to_uppercase()),
            None => first.name.clone(),
        };

        Ok(Coordinates {
            latitude: first.latitude,
            longitude: first.longitude,
            label,
        })
    }
}

#[async_trait]
impl WeatherFeed for OpenMeteoClient {
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReading, LookupError> {
        let url = format!("{}/v1/forecast", self.forecast_base);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Network(format!(
                "forecast returned {}",
                response.status()
            )));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;

        let cw = body
            .current_weather
            .ok_or_else(|| LookupError::Malformed("missing current_weather".to_string()))?;

        Ok(WeatherReading {
            temperature_c: cw.temperature,
            wind_speed_kmh: cw.windspeed,
            condition_code: cw.weathercode,
        })
    }
}
