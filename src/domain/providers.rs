use crate::domain::models::{Coordinates, LookupError, WeatherReading};
use async_trait::async_trait;
use std::sync::Arc;

/// Forward geocoding: free-text city name to coordinates. Implementations
/// must request exactly one result; zero results is `LookupError::NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, city: &str) -> Result<Coordinates, LookupError>;
}

/// Device-position lookup used when no city preference is stored. Results
/// are never persisted; every session asks again.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceLocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, LookupError>;
}

/// Current-conditions fetch keyed by latitude/longitude.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherFeed: Send + Sync {
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReading, LookupError>;
}

/// The set of remote collaborators handed to the weather orchestrator.
/// `locator` is `None` when geolocation is disabled in preferences; the
/// orchestrator then reports the capability as unavailable without issuing
/// a request.
pub struct Providers {
    pub geocoder: Arc<dyn Geocoder>,
    pub locator: Option<Arc<dyn DeviceLocator>>,
    pub weather: Arc<dyn WeatherFeed>,
}
