//! Halifax-area locations for realistic test fixtures.
//!
//! The surrounding system defaults its map view to the Halifax Regional
//! Municipality, so scenario tests use coordinates from the same area.

use fieldroute::geo::GeoPoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

// ============================================================================
// Halifax peninsula and surroundings
// ============================================================================

pub const DOWNTOWN: Location = Location::new("Downtown Halifax", 44.64, -63.57);
pub const WEST_END: Location = Location::new("West End Halifax", 44.65, -63.60);
pub const BEDFORD: Location = Location::new("Bedford Basin", 44.70, -63.55);
pub const EASTERN_PASSAGE: Location = Location::new("Eastern Passage", 44.60, -63.50);

/// The four metro stops in sidebar order: starting from downtown, the
/// straight-line nearest-neighbor tour visits them in this exact order.
pub const METRO_STOPS: &[Location] = &[DOWNTOWN, WEST_END, BEDFORD, EASTERN_PASSAGE];
