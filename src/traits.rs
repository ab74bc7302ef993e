//! Collaborator contracts for the routing core.
//!
//! Geocoding, the distance-matrix service, and the directions service are
//! external capabilities. They sit behind these traits so planning logic
//! can be exercised against stub responses.

use thiserror::Error;

use crate::geo::GeoPoint;

/// Resolves a street address to coordinates.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError>;
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geocoding service returned status {0}")]
    Status(u16),

    #[error("unrecognized geocoding response: {0}")]
    Shape(String),

    #[error("no coordinates found for address: {0}")]
    NoResult(String),
}

/// One origin/destination cell of a remote travel-matrix response.
///
/// Durations arrive as strings with a trailing unit suffix. Either field
/// may be absent for pairs the service could not route.
#[derive(Debug, Clone, Default)]
pub struct MatrixElement {
    pub origin_index: usize,
    pub destination_index: usize,
    pub duration: Option<String>,
    pub distance_meters: Option<f64>,
}

/// Pairwise travel estimates over a point set.
pub trait MatrixSource {
    /// Request travel estimates with every point as both origin and
    /// destination. Element order and coverage are not guaranteed.
    fn travel_elements(&self, points: &[GeoPoint])
    -> Result<Vec<MatrixElement>, MatrixServiceError>;
}

#[derive(Debug, Error)]
pub enum MatrixServiceError {
    #[error("matrix request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("matrix service returned status {0}")]
    Status(u16),

    #[error("unrecognized matrix response: {0}")]
    Shape(String),
}

/// Driving-route summary returned by the directions service.
#[derive(Debug, Clone)]
pub struct DrivingRoute {
    pub distance_meters: f64,
    /// Total duration as reported, e.g. `"1265s"`.
    pub duration: String,
    pub encoded_polyline: String,
}

/// Turn-by-turn route provider over an ordered stop list.
pub trait DirectionsSource {
    fn driving_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        intermediates: &[GeoPoint],
    ) -> Result<DrivingRoute, DirectionsServiceError>;
}

#[derive(Debug, Error)]
pub enum DirectionsServiceError {
    #[error("directions request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("directions service returned status {0}")]
    Status(u16),

    #[error("unrecognized directions response: {0}")]
    Shape(String),
}

/// Parse an integer number of seconds from a duration value with an
/// optional trailing unit suffix (`"1265s"`). Fractional values truncate.
pub fn parse_duration_seconds(raw: &str) -> Option<u32> {
    let trimmed = raw.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(whole) = trimmed.parse::<u32>() {
        return Some(whole);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
}
