//! Record-layer entries and the routable waypoints extracted from them.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// An entry as stored by the surrounding record-management layer.
///
/// Coordinates are optional: entries are created from an address and may
/// not have been geocoded yet. Persistence of any change stays with the
/// record layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub client_name: String,
    pub address: Option<String>,
    pub point: Option<GeoPoint>,
    /// Entry is a technician location and contributes service coverage.
    #[serde(default)]
    pub technician: bool,
}

/// A geolocated stop participating in route planning.
///
/// Always carries valid coordinates; records without them never become
/// waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub point: GeoPoint,
}

impl Waypoint {
    /// Extract a waypoint from a record, if it has usable coordinates.
    pub fn from_record(record: &ProjectRecord) -> Option<Self> {
        let point = record.point.filter(GeoPoint::in_bounds)?;
        Some(Self {
            id: record.id.clone(),
            name: record.client_name.clone(),
            address: record.address.clone(),
            point,
        })
    }
}
