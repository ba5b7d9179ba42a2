//! Polar-to-screen mapping on the dial.
//!
//! Angles are measured in radians from 12 o'clock, increasing clockwise.
//! Screen space has y growing downwards.

use std::f64::consts::TAU;

use clockface_protocol::Point;

use crate::error::GeometryError;

/// Convert a position around the dial (`0.0` = 12 o'clock, `0.5` = 6
/// o'clock) to an angle in radians.
pub fn angle(fraction: f64) -> f64 {
    fraction * TAU
}

/// Map a polar coordinate around `center` to a screen point.
///
/// `r` must be non-negative and `angle` must lie in `[0, 2π]`.
pub fn face_point(center: Point, r: f64, angle: f64) -> Result<Point, GeometryError> {
    if r.is_nan() || r < 0.0 {
        return Err(GeometryError::NegativeRadius(r));
    }
    if !(0.0..=TAU).contains(&angle) {
        return Err(GeometryError::AngleOutOfRange(angle));
    }

    Ok(Point::new(
        r * angle.sin() + center.x,
        -r * angle.cos() + center.y,
    ))
}

/// Endpoints of a radial segment from radius `begin` out to radius `end`.
pub fn radial_segment(
    center: Point,
    begin: f64,
    end: f64,
    angle: f64,
) -> Result<(Point, Point), GeometryError> {
    if end < begin {
        return Err(GeometryError::InvertedSegment { begin, end });
    }
    Ok((
        face_point(center, begin, angle)?,
        face_point(center, end, angle)?,
    ))
}
