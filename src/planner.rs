//! End-to-end route planning over injected sources.

use tracing::{debug, info_span};

use crate::matrix::build_matrix;
use crate::project::Waypoint;
use crate::route::{RouteInfo, resolve_path};
use crate::sequence::sequence;
use crate::traits::{DirectionsSource, MatrixSource};

/// A computed plan: the visiting order and its resolved path summary.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    /// Indices into the input waypoints, in visiting order.
    pub order: Vec<usize>,
    pub route: RouteInfo,
}

/// Plan a route over the waypoints, starting from the stop at `start`.
///
/// Builds the travel-time matrix, picks a visiting order, and resolves
/// the drivable path for that order. Always returns a usable plan;
/// remote failures degrade to straight-line estimates along the way.
pub fn plan_route(
    waypoints: &[Waypoint],
    start: usize,
    matrix_source: &impl MatrixSource,
    directions_source: &impl DirectionsSource,
) -> RoutePlan {
    let _span = info_span!("plan_route", stops = waypoints.len()).entered();

    let matrix = build_matrix(waypoints, matrix_source);
    let order = sequence(&matrix, start);
    let ordered: Vec<Waypoint> = order.iter().map(|&i| waypoints[i].clone()).collect();
    let route = resolve_path(&ordered, directions_source);

    debug!(
        stops = order.len(),
        distance_meters = route.distance_meters,
        duration_seconds = route.duration_seconds,
        "route planned"
    );

    RoutePlan { order, route }
}
