//! Hosted Routes API adapter for travel matrices and directions.
//!
//! Implements [`MatrixSource`] and [`DirectionsSource`] over the
//! compute-route-matrix and compute-routes endpoints. Requests are
//! authenticated with an API key header and scoped with a response
//! field mask.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::GeoPoint;
use crate::traits::{
    DirectionsServiceError, DirectionsSource, DrivingRoute, MatrixElement, MatrixServiceError,
    MatrixSource,
};

const MATRIX_FIELD_MASK: &str = "originIndex,destinationIndex,duration,distanceMeters";
const ROUTE_FIELD_MASK: &str = "routes.duration,routes.distanceMeters,routes.polyline.encodedPolyline";

#[derive(Debug, Clone)]
pub struct RoutesApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl RoutesApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://routes.googleapis.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutesApiClient {
    config: RoutesApiConfig,
    client: reqwest::blocking::Client,
}

impl RoutesApiClient {
    pub fn new(config: RoutesApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn post(
        &self,
        path: &str,
        field_mask: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::blocking::Response, reqwest::Error> {
        self.client
            .post(format!("{}{}", self.config.base_url, path))
            .header("X-Goog-Api-Key", self.config.api_key.as_str())
            .header("X-Goog-FieldMask", field_mask)
            .json(body)
            .send()
    }
}

impl MatrixSource for RoutesApiClient {
    fn travel_elements(
        &self,
        points: &[GeoPoint],
    ) -> Result<Vec<MatrixElement>, MatrixServiceError> {
        let stops: Vec<MatrixStop> = points.iter().map(|&point| MatrixStop::from(point)).collect();
        let body = MatrixRequestBody {
            origins: stops.clone(),
            destinations: stops,
            travel_mode: "DRIVE",
            routing_preference: "TRAFFIC_UNAWARE",
        };

        let response = self.post("/distanceMatrix/v2:computeRouteMatrix", MATRIX_FIELD_MASK, &body)?;
        let status = response.status();
        if !status.is_success() {
            return Err(MatrixServiceError::Status(status.as_u16()));
        }

        let elements: Vec<WireMatrixElement> = response
            .json()
            .map_err(|error| MatrixServiceError::Shape(error.to_string()))?;
        debug!(points = points.len(), elements = elements.len(), "matrix response");

        Ok(elements.into_iter().map(WireMatrixElement::into_element).collect())
    }
}

impl DirectionsSource for RoutesApiClient {
    fn driving_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        intermediates: &[GeoPoint],
    ) -> Result<DrivingRoute, DirectionsServiceError> {
        let body = RouteRequestBody {
            origin: ApiWaypoint::from(origin),
            destination: ApiWaypoint::from(destination),
            intermediates: intermediates.iter().map(|&p| ApiWaypoint::from(p)).collect(),
            travel_mode: "DRIVE",
        };

        let response = self.post("/directions/v2:computeRoutes", ROUTE_FIELD_MASK, &body)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectionsServiceError::Status(status.as_u16()));
        }

        let parsed: RoutesResponse = response
            .json()
            .map_err(|error| DirectionsServiceError::Shape(error.to_string()))?;
        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| DirectionsServiceError::Shape("no routes in response".to_string()))?;
        let encoded_polyline = route
            .polyline
            .map(|p| p.encoded_polyline)
            .ok_or_else(|| DirectionsServiceError::Shape("route missing polyline".to_string()))?;
        debug!(
            distance_meters = route.distance_meters,
            duration = %route.duration.as_deref().unwrap_or("0s"),
            "directions response"
        );

        Ok(DrivingRoute {
            distance_meters: route.distance_meters,
            duration: route.duration.unwrap_or_else(|| "0s".to_string()),
            encoded_polyline,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    lat_lng: LatLng,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiWaypoint {
    location: Location,
}

impl From<GeoPoint> for ApiWaypoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            location: Location {
                lat_lng: LatLng {
                    latitude: point.lat,
                    longitude: point.lng,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatrixStop {
    waypoint: ApiWaypoint,
}

impl From<GeoPoint> for MatrixStop {
    fn from(point: GeoPoint) -> Self {
        Self {
            waypoint: ApiWaypoint::from(point),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatrixRequestBody {
    origins: Vec<MatrixStop>,
    destinations: Vec<MatrixStop>,
    travel_mode: &'static str,
    routing_preference: &'static str,
}

/// The wire format omits zero-valued indices, so both default to 0.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMatrixElement {
    #[serde(default)]
    origin_index: usize,
    #[serde(default)]
    destination_index: usize,
    duration: Option<String>,
    distance_meters: Option<f64>,
}

impl WireMatrixElement {
    fn into_element(self) -> MatrixElement {
        MatrixElement {
            origin_index: self.origin_index,
            destination_index: self.destination_index,
            duration: self.duration,
            distance_meters: self.distance_meters,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteRequestBody {
    origin: ApiWaypoint,
    destination: ApiWaypoint,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    intermediates: Vec<ApiWaypoint>,
    travel_mode: &'static str,
}

#[derive(Debug, Deserialize)]
struct RoutesResponse {
    #[serde(default)]
    routes: Vec<WireRoute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRoute {
    #[serde(default)]
    distance_meters: f64,
    duration: Option<String>,
    polyline: Option<WirePolyline>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePolyline {
    encoded_polyline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_request_serializes_camel_case() {
        let body = MatrixRequestBody {
            origins: vec![MatrixStop::from(GeoPoint::new(44.64, -63.57))],
            destinations: vec![MatrixStop::from(GeoPoint::new(44.65, -63.60))],
            travel_mode: "DRIVE",
            routing_preference: "TRAFFIC_UNAWARE",
        };

        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["travelMode"], "DRIVE");
        assert_eq!(json["routingPreference"], "TRAFFIC_UNAWARE");
        assert_eq!(
            json["origins"][0]["waypoint"]["location"]["latLng"]["latitude"],
            44.64
        );
    }

    #[test]
    fn test_route_request_omits_empty_intermediates() {
        let body = RouteRequestBody {
            origin: ApiWaypoint::from(GeoPoint::new(44.64, -63.57)),
            destination: ApiWaypoint::from(GeoPoint::new(44.65, -63.60)),
            intermediates: Vec::new(),
            travel_mode: "DRIVE",
        };

        let json = serde_json::to_value(&body).expect("serializes");
        assert!(json.get("intermediates").is_none());
    }

    #[test]
    fn test_matrix_element_defaults_omitted_indices() {
        let element: WireMatrixElement =
            serde_json::from_str(r#"{"duration": "160s", "distanceMeters": 1800.0}"#)
                .expect("deserializes");
        assert_eq!(element.origin_index, 0);
        assert_eq!(element.destination_index, 0);
        assert_eq!(element.duration.as_deref(), Some("160s"));

        let element: WireMatrixElement = serde_json::from_str(
            r#"{"originIndex": 1, "destinationIndex": 2, "duration": "90s"}"#,
        )
        .expect("deserializes");
        assert_eq!(element.origin_index, 1);
        assert_eq!(element.destination_index, 2);
        assert_eq!(element.distance_meters, None);
    }

    #[test]
    fn test_routes_response_deserializes() {
        let parsed: RoutesResponse = serde_json::from_str(
            r#"{"routes": [{"distanceMeters": 57824, "duration": "1265s",
                "polyline": {"encodedPolyline": "_p~iF~ps|U_ulLnnqC"}}]}"#,
        )
        .expect("deserializes");
        let route = &parsed.routes[0];
        assert_eq!(route.distance_meters, 57824.0);
        assert_eq!(route.duration.as_deref(), Some("1265s"));
        assert_eq!(
            route.polyline.as_ref().map(|p| p.encoded_polyline.as_str()),
            Some("_p~iF~ps|U_ulLnnqC")
        );
    }
}
