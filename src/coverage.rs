//! Service-area evaluation.
//!
//! Technician entries define a fixed 50-mile coverage disk around their
//! location; every located entry is classified against the union of those
//! disks. Persisting the resulting flag is the record layer's job.

use tracing::debug;

use crate::geo::{GeoPoint, haversine_meters};
use crate::project::ProjectRecord;

/// Coverage radius around a technician location: 50 miles.
pub const SERVICE_RADIUS_METERS: f64 = 80_467.0;

/// Classification result for one located record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageStatus {
    pub id: String,
    pub covered: bool,
}

/// True when at least one provider point lies within the service radius
/// of `point`. The boundary is inclusive.
pub fn is_covered<'a>(point: GeoPoint, providers: impl IntoIterator<Item = &'a GeoPoint>) -> bool {
    providers
        .into_iter()
        .any(|provider| haversine_meters(point, *provider) <= SERVICE_RADIUS_METERS)
}

/// Classify every located record against the technician entries in the
/// same set.
///
/// A technician sits inside its own disk, so technicians with coordinates
/// always come back covered. Records without coordinates cannot be
/// evaluated and are omitted; the preparation step flags those
/// separately.
pub fn classify(records: &[ProjectRecord]) -> Vec<CoverageStatus> {
    let providers: Vec<GeoPoint> = records
        .iter()
        .filter(|record| record.technician)
        .filter_map(|record| record.point)
        .collect();

    records
        .iter()
        .filter_map(|record| {
            let point = record.point?;
            let covered = is_covered(point, &providers);
            debug!(id = %record.id, covered, "coverage evaluated");
            Some(CoverageStatus {
                id: record.id.clone(),
                covered,
            })
        })
        .collect()
}
