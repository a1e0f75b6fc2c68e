use crate::app::{action::Action, command::Command};
use crate::domain::models::{Coordinates, LookupError, ResolutionStatus};
use crate::domain::providers::Providers;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const CITY_NOT_FOUND: &str = "City not found";
pub const GEOLOCATION_UNAVAILABLE: &str = "Geolocation unavailable";
pub const LOCATION_BLOCKED: &str = "Location blocked — enter a city";
pub const WEATHER_ERROR: &str = "Weather error";

/// Entry point for weather side effects. Each command spawns one task;
/// overlapping refreshes are not cancelled, the last settled response
/// simply wins.
pub fn handle_command(
    command: Command,
    providers: Arc<Providers>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Refresh(city) => {
            tokio::spawn(run_resolution(providers, tx, city));
        }
    }
    Ok(())
}

/// The orchestrator: resolve coordinates, then fetch conditions. The two
/// steps are strictly sequential and a resolve error is terminal for the
/// attempt; the fetch is never issued with invalid coordinates.
async fn run_resolution(providers: Arc<Providers>, tx: mpsc::Sender<Action>, city: Option<String>) {
    let coords = match city {
        Some(name) => {
            let _ = tx
                .send(Action::ResolutionStarted(ResolutionStatus::Resolving))
                .await;
            match providers.geocoder.geocode(&name).await {
                Ok(coords) => {
                    let _ = tx.send(Action::CityResolved(name, coords.clone())).await;
                    coords
                }
                Err(_) => {
                    // No silent fallback to geolocation: the user typed
                    // this name and gets to correct it.
                    let _ = tx
                        .send(Action::ResolutionFailed(CITY_NOT_FOUND.to_string()))
                        .await;
                    return;
                }
            }
        }
        None => {
            let _ = tx
                .send(Action::ResolutionStarted(ResolutionStatus::Locating))
                .await;
            let Some(locator) = providers.locator.clone() else {
                let _ = tx
                    .send(Action::ResolutionFailed(GEOLOCATION_UNAVAILABLE.to_string()))
                    .await;
                return;
            };
            match locator.locate().await {
                Ok(coords) => {
                    let coords = Coordinates {
                        label: "Now".to_string(),
                        ..coords
                    };
                    let _ = tx.send(Action::Located(coords.clone())).await;
                    coords
                }
                Err(LookupError::Unavailable) => {
                    let _ = tx
                        .send(Action::ResolutionFailed(GEOLOCATION_UNAVAILABLE.to_string()))
                        .await;
                    return;
                }
                Err(_) => {
                    let _ = tx
                        .send(Action::ResolutionFailed(LOCATION_BLOCKED.to_string()))
                        .await;
                    return;
                }
            }
        }
    };

    match providers
        .weather
        .current_conditions(coords.latitude, coords.longitude)
        .await
    {
        Ok(reading) => {
            let _ = tx.send(Action::WeatherLoaded(reading)).await;
        }
        Err(_) => {
            let _ = tx
                .send(Action::ResolutionFailed(WEATHER_ERROR.to_string()))
                .await;
        }
    }
}
