//! Path resolution for an ordered stop list.
//!
//! Asks the directions service for a drivable route and decodes its
//! geometry. Any failure along the way degrades to the straight-line
//! path between the stops, so callers always get a usable result.

use thiserror::Error;
use tracing::debug;

use crate::geo::{GeoPoint, GreatCircleEstimator, haversine_meters};
use crate::polyline::{self, MalformedPolylineError};
use crate::project::Waypoint;
use crate::traits::{DirectionsServiceError, DirectionsSource, parse_duration_seconds};

/// Aggregate result of resolving a drawable path over ordered waypoints.
///
/// Ephemeral: recomputed whenever the waypoint set or its order changes,
/// never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub distance_meters: f64,
    pub duration_seconds: u32,
    pub path: Vec<GeoPoint>,
}

impl RouteInfo {
    pub fn empty() -> Self {
        Self {
            distance_meters: 0.0,
            duration_seconds: 0,
            path: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
enum PathFailure {
    #[error(transparent)]
    Service(#[from] DirectionsServiceError),

    #[error(transparent)]
    Geometry(#[from] MalformedPolylineError),

    #[error("unparseable route duration: {0:?}")]
    Duration(String),
}

/// Resolve a drivable path over the waypoints in their given order.
///
/// The first stop is the origin, the last the destination, and anything
/// in between rides along as ordered intermediates. On success the
/// returned geometry is decoded and the reported totals are used
/// verbatim; on any failure the result is the straight-line path with
/// distance summed pairwise and travel time estimated at the assumed
/// driving speed.
pub fn resolve_path(ordered: &[Waypoint], source: &impl DirectionsSource) -> RouteInfo {
    match ordered {
        [] => RouteInfo::empty(),
        [only] => RouteInfo {
            distance_meters: 0.0,
            duration_seconds: 0,
            path: vec![only.point],
        },
        [first, .., last] => {
            let intermediates: Vec<GeoPoint> = ordered[1..ordered.len() - 1]
                .iter()
                .map(|w| w.point)
                .collect();

            match request_route(first.point, last.point, &intermediates, source) {
                Ok(info) => info,
                Err(error) => {
                    debug!(%error, "directions unavailable, using straight-line path");
                    straight_line(ordered)
                }
            }
        }
    }
}

fn request_route(
    origin: GeoPoint,
    destination: GeoPoint,
    intermediates: &[GeoPoint],
    source: &impl DirectionsSource,
) -> Result<RouteInfo, PathFailure> {
    let route = source.driving_route(origin, destination, intermediates)?;
    let path = polyline::decode(&route.encoded_polyline)?.into_points();
    let duration_seconds = parse_duration_seconds(&route.duration)
        .ok_or_else(|| PathFailure::Duration(route.duration.clone()))?;

    Ok(RouteInfo {
        distance_meters: route.distance_meters,
        duration_seconds,
        path,
    })
}

/// Straight-line fallback: the waypoints themselves are the path.
fn straight_line(ordered: &[Waypoint]) -> RouteInfo {
    let estimator = GreatCircleEstimator::default();
    let distance_meters: f64 = ordered
        .windows(2)
        .map(|pair| haversine_meters(pair[0].point, pair[1].point))
        .sum();

    RouteInfo {
        distance_meters,
        duration_seconds: estimator.meters_to_seconds(distance_meters),
        path: ordered.iter().map(|w| w.point).collect(),
    }
}
