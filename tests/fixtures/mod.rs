//! Test fixtures for fieldroute.
//!
//! Provides Halifax-area locations and small builders shared by the
//! integration tests.

pub mod halifax_locations;

pub use halifax_locations::*;

use fieldroute::project::Waypoint;

/// Build a routable waypoint from a fixture location.
pub fn waypoint(id: &str, location: &Location) -> Waypoint {
    Waypoint {
        id: id.to_string(),
        name: location.name.to_string(),
        address: None,
        point: location.point(),
    }
}
