//! Ring dimensions derived from size and stroke thickness.

use std::f64::consts::PI;

use super::RingIndicatorError;

/// Immutable geometry of a ring indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Outer diameter of the drawing area.
    pub size: f64,
    /// Stroke width of both rings.
    pub thickness: f64,
    /// Center offset, `size / 2`.
    pub radius: f64,
    /// Radius of the stroked circle, `radius - thickness * 2`.
    pub normalized_radius: f64,
    /// Stroke length of the full circle.
    pub circumference: f64,
}

impl RingGeometry {
    /// Derives the geometry, rejecting configurations that leave no ring to
    /// draw.
    pub fn new(size: f64, thickness: f64) -> Result<Self, RingIndicatorError> {
        let degenerate = || RingIndicatorError::DegenerateGeometry { size, thickness };
        if !(size.is_finite() && size > 0.0 && thickness.is_finite() && thickness > 0.0) {
            return Err(degenerate());
        }

        let radius = size / 2.0;
        let normalized_radius = radius - thickness * 2.0;
        if normalized_radius <= 0.0 {
            return Err(degenerate());
        }

        Ok(Self {
            size,
            thickness,
            radius,
            normalized_radius,
            circumference: normalized_radius * 2.0 * PI,
        })
    }

    /// Dash offset that reveals `percentage` percent of the arc.
    ///
    /// `0` yields the full circumference (nothing drawn), `100` yields `0`.
    pub fn dash_offset(&self, percentage: f64) -> f64 {
        self.circumference - (percentage / 100.0) * self.circumference
    }
}
