//! Service-area classification over record batches.

mod fixtures;

use fieldroute::coverage::{SERVICE_RADIUS_METERS, classify, is_covered};
use fieldroute::geo::{GeoPoint, haversine_meters};
use fieldroute::project::ProjectRecord;

use fixtures::WEST_END;

// 1 degree of latitude along a meridian is an exact great-circle arc.
const METERS_PER_DEGREE_LAT: f64 = 111_194.92664455873;

fn north_of(point: GeoPoint, meters: f64) -> GeoPoint {
    GeoPoint::new(point.lat + meters / METERS_PER_DEGREE_LAT, point.lng)
}

fn record(id: &str, point: Option<GeoPoint>, technician: bool) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        client_name: id.to_string(),
        address: None,
        point,
        technician,
    }
}

#[test]
fn radius_boundary_is_inclusive() {
    let provider = WEST_END.point();
    let inside = north_of(provider, 80_000.0);
    let outside = north_of(provider, 81_000.0);

    // Sanity-check the constructed offsets before using them.
    assert!((haversine_meters(provider, inside) - 80_000.0).abs() < 1.0);
    assert!((haversine_meters(provider, outside) - 81_000.0).abs() < 1.0);
    assert!(80_000.0 < SERVICE_RADIUS_METERS && SERVICE_RADIUS_METERS < 81_000.0);

    assert!(is_covered(inside, &[provider]));
    assert!(!is_covered(outside, &[provider]));
}

#[test]
fn classify_flags_entries_against_technicians() {
    let provider = WEST_END.point();
    let records = vec![
        record("tech", Some(provider), true),
        record("near", Some(north_of(provider, 40_000.0)), false),
        record("far", Some(north_of(provider, 120_000.0)), false),
    ];

    let statuses = classify(&records);
    assert_eq!(statuses.len(), 3);
    assert!(statuses[0].covered, "a technician covers its own location");
    assert!(statuses[1].covered);
    assert!(!statuses[2].covered);
}

#[test]
fn classify_without_technicians_marks_everything_out_of_area() {
    let records = vec![
        record("a", Some(WEST_END.point()), false),
        record("b", Some(north_of(WEST_END.point(), 1_000.0)), false),
    ];

    assert!(classify(&records).iter().all(|status| !status.covered));
}

#[test]
fn classify_skips_unlocated_records_and_providers() {
    let records = vec![
        record("tech-unlocated", None, true),
        record("entry", Some(WEST_END.point()), false),
        record("entry-unlocated", None, false),
    ];

    let statuses = classify(&records);
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].id, "entry");
    assert!(
        !statuses[0].covered,
        "an unlocated technician contributes no coverage"
    );
}
