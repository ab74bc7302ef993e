//! Live Routes API checks.
//!
//! These hit the hosted service and are skipped unless
//! `GOOGLE_MAPS_API_KEY` is set in the environment.

use std::env;

use fieldroute::geo::GeoPoint;
use fieldroute::polyline;
use fieldroute::routes_api::{RoutesApiClient, RoutesApiConfig};
use fieldroute::traits::{DirectionsSource, MatrixSource};

fn live_client() -> Option<RoutesApiClient> {
    let Ok(api_key) = env::var("GOOGLE_MAPS_API_KEY") else {
        eprintln!("GOOGLE_MAPS_API_KEY not set, skipping live check");
        return None;
    };
    Some(RoutesApiClient::new(RoutesApiConfig::new(api_key)).expect("build client"))
}

#[test]
fn live_matrix_returns_elements() {
    let Some(client) = live_client() else { return };

    let points = vec![
        GeoPoint::new(44.6488, -63.5752),
        GeoPoint::new(44.6820, -63.6500),
    ];
    let elements = client.travel_elements(&points).expect("matrix request");
    assert!(!elements.is_empty());
}

#[test]
fn live_directions_return_decodable_polyline() {
    let Some(client) = live_client() else { return };

    let route = client
        .driving_route(
            GeoPoint::new(44.6488, -63.5752),
            GeoPoint::new(44.6820, -63.6500),
            &[],
        )
        .expect("directions request");

    assert!(route.distance_meters > 0.0);
    let path = polyline::decode(&route.encoded_polyline)
        .expect("returned geometry should decode")
        .into_points();
    assert!(path.len() >= 2);
}
