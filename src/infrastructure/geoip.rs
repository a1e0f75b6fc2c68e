use crate::domain::models::{Coordinates, LookupError};
use crate::domain::providers::DeviceLocator;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const IP_API_BASE: &str = "http://ip-api.com";
const LOCATE_TIMEOUT: Duration = Duration::from_secs(8);

/// Best-effort device position from the caller's public IP. The closest a
/// terminal process gets to browser geolocation: coarse, sessions are never
/// cached, and a denial (blocked endpoint, fail status, timeout) maps to
/// `LookupError::Denied` so the user is invited to type a city instead.
pub struct IpLocator {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl IpLocator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(IP_API_BASE.to_string(), LOCATE_TIMEOUT)
    }

    #[must_use]
    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    async fn fetch(&self) -> Result<Coordinates, LookupError> {
        let url = format!("{}/json/", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("fields", "status,message,lat,lon,city")])
            .send()
            .await
            .map_err(|_| LookupError::Denied)?;

        if !response.status().is_success() {
            return Err(LookupError::Denied);
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;

        if body.status != "success" {
            return Err(LookupError::Denied);
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates {
                latitude: lat,
                longitude: lon,
                label: body.city.unwrap_or_default(),
            }),
            _ => Err(LookupError::Malformed("missing coordinates".to_string())),
        }
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
}

#[async_trait]
impl DeviceLocator for IpLocator {
    async fn locate(&self) -> Result<Coordinates, LookupError> {
        match tokio::time::timeout(self.timeout, self.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Denied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn locate_returns_coordinates_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success", "lat": 51.51, "lon": -0.13, "city": "London"
            })))
            .mount(&server)
            .await;

        let locator = IpLocator::with_base_url(server.uri(), Duration::from_secs(2));
        let coords = locator.locate().await.unwrap();
        assert_eq!(coords.latitude, 51.51);
        assert_eq!(coords.longitude, -0.13);
        assert_eq!(coords.label, "London");
    }

    #[tokio::test]
    async fn locate_fail_status_is_denied() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "fail", "message": "private range"
            })))
            .mount(&server)
            .await;

        let locator = IpLocator::with_base_url(server.uri(), Duration::from_secs(2));
        assert!(matches!(
            locator.locate().await.unwrap_err(),
            LookupError::Denied
        ));
    }

    #[tokio::test]
    async fn locate_times_out_as_denied() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "lat": 0.0, "lon": 0.0 }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let locator = IpLocator::with_base_url(server.uri(), Duration::from_millis(50));
        assert!(matches!(
            locator.locate().await.unwrap_err(),
            LookupError::Denied
        ));
    }
}
