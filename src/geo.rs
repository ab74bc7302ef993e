//! Geographic primitives and straight-line travel estimation.
//!
//! Great-circle distance is the fallback cost metric for every other
//! component: less accurate than the remote routing service (ignores
//! roads) but always available.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Average driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite and inside the valid coordinate ranges.
    pub fn in_bounds(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points in meters.
pub fn haversine_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Straight-line travel estimator at an assumed driving speed.
///
/// Converts great-circle distances to travel times. Used cell by cell to
/// plug gaps in remote matrix responses, and wholesale when the remote
/// service is unavailable.
#[derive(Debug, Clone)]
pub struct GreatCircleEstimator {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for GreatCircleEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl GreatCircleEstimator {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Convert a distance in meters to travel time in whole seconds.
    pub fn meters_to_seconds(&self, meters: f64) -> u32 {
        let hours = meters / 1000.0 / self.speed_kmh;
        (hours * 3600.0).round() as u32
    }

    /// Estimated travel time between two points in whole seconds.
    pub fn seconds_between(&self, from: GeoPoint, to: GeoPoint) -> u32 {
        self.meters_to_seconds(haversine_meters(from, to))
    }

    /// Full N×N travel-time matrix from straight-line estimates.
    pub fn matrix_for(&self, points: &[GeoPoint]) -> Vec<Vec<u32>> {
        points
            .par_iter()
            .map(|from| {
                points
                    .iter()
                    .map(|to| self.seconds_between(*from, *to))
                    .collect()
            })
            .collect()
    }
}
