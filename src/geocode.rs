//! Hosted geocoding adapter.
//!
//! Resolves street addresses to coordinates through the geocoding
//! endpoint. Failures are per-address; the preparation step decides what
//! a failed record means for the batch.

use serde::Deserialize;
use tracing::debug;

use crate::geo::GeoPoint;
use crate::traits::{GeocodeError, Geocoder};

#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl GeocodingConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    config: GeocodingConfig,
    client: reqwest::blocking::Client,
}

impl GeocodingClient {
    pub fn new(config: GeocodingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for GeocodingClient {
    fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let url = format!("{}/maps/api/geocode/json", self.config.base_url);
        let response = self
            .client
            .get(url)
            .query(&[("address", address), ("key", self.config.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let parsed: GeocodeResponse = response
            .json()
            .map_err(|error| GeocodeError::Shape(error.to_string()))?;
        if parsed.status != "OK" {
            debug!(address, status = %parsed.status, "geocoding returned no result");
            return Err(GeocodeError::NoResult(address.to_string()));
        }

        let location = parsed
            .results
            .first()
            .map(|result| result.geometry.location)
            .ok_or_else(|| GeocodeError::NoResult(address.to_string()))?;

        Ok(GeoPoint::new(location.lat, location.lng))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: WireLatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct WireLatLng {
    lat: f64,
    lng: f64,
}
