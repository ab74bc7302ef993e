//! Polyline representation and decoding for route geometries.
//!
//! Route paths travel the wire in the compact encoded polyline format;
//! this module decodes them into coordinate sequences at the boundary.
//! Internal processing always works on decoded points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoPoint;

/// Decoding failed partway through the encoded byte stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedPolylineError {
    #[error("encoded polyline truncated at byte {0}")]
    Truncated(usize),
    #[error("byte {1:#04x} at offset {0} is outside the encoding alphabet")]
    InvalidByte(usize, u8),
}

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

/// Decode a compact encoded path into coordinate points.
///
/// Each coordinate pair is stored as a zigzag-encoded delta from the
/// previous pair, split into 5-bit chunks offset by 63, at 1e-5 degree
/// precision. A chunk sequence cut off mid-value is an error; callers
/// treat that as "path unavailable".
pub fn decode(encoded: &str) -> Result<Polyline, MalformedPolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut cursor = 0usize;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while cursor < bytes.len() {
        let (delta, next) = next_delta(bytes, cursor)?;
        lat += delta;
        let (delta, next) = next_delta(bytes, next)?;
        lng += delta;
        cursor = next;
        points.push(GeoPoint::new(lat as f64 * 1e-5, lng as f64 * 1e-5));
    }

    Ok(Polyline::new(points))
}

/// Read one zigzag-encoded delta starting at `cursor`.
fn next_delta(bytes: &[u8], mut cursor: usize) -> Result<(i64, usize), MalformedPolylineError> {
    let mut accumulator: u64 = 0;
    let mut shift = 0u32;

    loop {
        let byte = *bytes
            .get(cursor)
            .ok_or(MalformedPolylineError::Truncated(cursor))?;
        let chunk = byte
            .checked_sub(63)
            .ok_or(MalformedPolylineError::InvalidByte(cursor, byte))?;
        cursor += 1;

        accumulator |= u64::from(chunk & 0x1f) << shift;
        shift += 5;

        // Bit 6 flags a continuation chunk.
        if chunk & 0x20 == 0 {
            break;
        }
    }

    Ok((decode_zigzag(accumulator), cursor))
}

fn decode_zigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
