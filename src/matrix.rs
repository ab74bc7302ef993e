//! Travel-cost matrix construction.
//!
//! The remote matrix service is best-effort enrichment, never a hard
//! dependency: whatever it returns, the matrix comes back fully
//! populated, degrading cell by cell to straight-line estimates.

use tracing::{debug, trace, warn};

use crate::geo::{GeoPoint, GreatCircleEstimator};
use crate::project::Waypoint;
use crate::traits::{MatrixSource, parse_duration_seconds};

/// Sentinel for cells the remote service has not covered yet.
pub const UNKNOWN: u32 = u32::MAX;

/// Square travel-time table in seconds, row-major by origin index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl CostMatrix {
    /// Fresh matrix: zero diagonal, unknown everywhere else.
    pub fn unknown(n: usize) -> Self {
        let mut cells = vec![UNKNOWN; n * n];
        for i in 0..n {
            cells[i * n + i] = 0;
        }
        Self { n, cells }
    }

    /// Build from fully populated rows.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            debug_assert_eq!(row.len(), n, "matrix rows must be square");
            cells.extend(row);
        }
        Self { n, cells }
    }

    /// Number of waypoints the matrix covers.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, origin: usize, destination: usize) -> u32 {
        self.cells[origin * self.n + destination]
    }

    pub fn set(&mut self, origin: usize, destination: usize, seconds: u32) {
        self.cells[origin * self.n + destination] = seconds;
    }

    /// True when no cell is left at the unknown sentinel.
    pub fn fully_populated(&self) -> bool {
        self.cells.iter().all(|&cell| cell != UNKNOWN)
    }

    /// At least one off-diagonal cell holds a positive known cost.
    fn usable(&self) -> bool {
        self.cells.iter().enumerate().any(|(index, &cell)| {
            index / self.n != index % self.n && cell != UNKNOWN && cell > 0
        })
    }
}

/// Build a fully populated travel-time matrix over the waypoints.
///
/// Cells come from the remote response where possible, degrading per
/// cell: reported duration, then reported distance at the assumed
/// driving speed, then zero on the diagonal, then the great-circle
/// estimate. A failed or unrecognized remote response estimates every
/// cell instead. The returned matrix never contains [`UNKNOWN`].
pub fn build_matrix(waypoints: &[Waypoint], source: &impl MatrixSource) -> CostMatrix {
    build_matrix_with(waypoints, source, &GreatCircleEstimator::default())
}

/// [`build_matrix`] with a caller-supplied speed assumption.
pub fn build_matrix_with(
    waypoints: &[Waypoint],
    source: &impl MatrixSource,
    estimator: &GreatCircleEstimator,
) -> CostMatrix {
    let n = waypoints.len();
    let mut matrix = CostMatrix::unknown(n);
    if n == 0 {
        return matrix;
    }

    let points: Vec<GeoPoint> = waypoints.iter().map(|w| w.point).collect();

    match source.travel_elements(&points) {
        Ok(elements) => {
            for element in elements {
                let (i, j) = (element.origin_index, element.destination_index);
                if i >= n || j >= n {
                    trace!(origin = i, destination = j, "element outside matrix, skipped");
                    continue;
                }

                let (seconds, tier) = if let Some(seconds) =
                    element.duration.as_deref().and_then(parse_duration_seconds)
                {
                    (seconds, "duration")
                } else if let Some(meters) = element.distance_meters {
                    (estimator.meters_to_seconds(meters), "distance")
                } else if i == j {
                    (0, "diagonal")
                } else {
                    (estimator.seconds_between(points[i], points[j]), "estimate")
                };

                trace!(origin = i, destination = j, seconds, tier, "matrix cell");
                matrix.set(i, j, seconds);
            }

            // Cells the response never mentioned.
            let mut gap_filled = 0usize;
            for i in 0..n {
                for j in 0..n {
                    if matrix.get(i, j) == UNKNOWN {
                        matrix.set(i, j, estimator.seconds_between(points[i], points[j]));
                        gap_filled += 1;
                    }
                }
            }
            if gap_filled > 0 {
                debug!(gap_filled, "filled matrix gaps from great-circle estimates");
            }
        }
        Err(error) => {
            debug!(%error, "matrix service unavailable, estimating all cells");
            matrix = CostMatrix::from_rows(estimator.matrix_for(&points));
        }
    }

    if n > 1 && !matrix.usable() {
        warn!("degenerate matrix after fill, rebuilding from great-circle estimates");
        matrix = CostMatrix::from_rows(estimator.matrix_for(&points));
    }

    matrix
}
