//! Waypoint preparation: repair records with missing coordinates.
//!
//! Entries come out of storage with coordinates that may be absent or
//! invalid. Records with an address get one geocoding attempt; a failure
//! flags the record and never aborts the batch.

use tracing::warn;

use crate::project::{ProjectRecord, Waypoint};
use crate::traits::Geocoder;

/// Outcome of coordinate resolution for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordStatus {
    /// Coordinates were already present and valid.
    Located,
    /// Coordinates were resolved just now; the caller should persist them.
    Geocoded,
    /// The record has an address the geocoder could not resolve.
    GeocodeFailed,
    /// The record has no address to geocode.
    NoAddress,
}

/// A record after coordinate resolution.
#[derive(Debug, Clone)]
pub struct PreparedRecord {
    pub record: ProjectRecord,
    pub status: CoordStatus,
}

impl PreparedRecord {
    /// Freshly geocoded coordinates the caller should write back to
    /// storage.
    pub fn needs_persist(&self) -> bool {
        self.status == CoordStatus::Geocoded
    }
}

/// Resolve missing coordinates across a record batch.
///
/// Records that already carry a valid point pass through untouched.
/// Records with an address but no usable point are geocoded; failed and
/// addressless records come back flagged with their point cleared.
pub fn prepare_records(
    records: Vec<ProjectRecord>,
    geocoder: &impl Geocoder,
) -> Vec<PreparedRecord> {
    records
        .into_iter()
        .map(|mut record| {
            let has_valid_point = record.point.is_some_and(|p| p.in_bounds());
            let address = record
                .address
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty());

            let status = if has_valid_point {
                CoordStatus::Located
            } else if let Some(address) = address {
                match geocoder.geocode(address) {
                    Ok(point) => {
                        record.point = Some(point);
                        CoordStatus::Geocoded
                    }
                    Err(error) => {
                        warn!(id = %record.id, %error, "geocoding failed for record");
                        record.point = None;
                        CoordStatus::GeocodeFailed
                    }
                }
            } else {
                record.point = None;
                CoordStatus::NoAddress
            };

            PreparedRecord { record, status }
        })
        .collect()
}

/// The records that can participate in routing.
pub fn routable_waypoints(prepared: &[PreparedRecord]) -> Vec<Waypoint> {
    prepared
        .iter()
        .filter_map(|p| Waypoint::from_record(&p.record))
        .collect()
}
