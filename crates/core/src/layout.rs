use clockface_protocol::Point;
use serde::{Deserialize, Serialize};

/// Share of the shorter viewport side covered by the dial's diameter.
pub const CLOCK_RADIUS_MULTIPLIER: f64 = 0.9;

/// Cached dial geometry for one viewport size.
///
/// Recomputed on resize only; every frame between two resizes reuses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub width: u32,
    pub height: u32,
    pub min_side: u32,
    pub center: Point,
    pub clock_radius: f64,
}

impl ViewportMetrics {
    /// Metrics for a host that reports its bounds as floating point.
    ///
    /// Fractional pixels are truncated; negative or non-finite values are
    /// clamped to zero.
    pub fn from_bounds(width: f64, height: f64) -> Self {
        compute_metrics(clamp_dimension(width), clamp_dimension(height))
    }

    pub fn is_empty(&self) -> bool {
        self.min_side == 0
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        compute_metrics(0, 0)
    }
}

/// Compute the dial center and radius for a `width` x `height` viewport.
pub fn compute_metrics(width: u32, height: u32) -> ViewportMetrics {
    let min_side = width.min(height);
    ViewportMetrics {
        width,
        height,
        min_side,
        center: Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0),
        clock_radius: CLOCK_RADIUS_MULTIPLIER * f64::from(min_side) / 2.0,
    }
}

fn clamp_dimension(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        // `as` saturates at u32::MAX
        v as u32
    } else {
        0
    }
}
