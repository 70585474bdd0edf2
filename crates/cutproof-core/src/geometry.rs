//! Geometric data model
//!
//! This module provides:
//! - Absolute 3D machine positions
//! - Partial axis targets for selective axis changes (modal carry-over)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute 3D machine position in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Point3 {
    /// Machine origin (0, 0, 0).
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a point with the specified coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && z.is_finite(),
            "Point3 axes must be finite: x={x}, y={y}, z={z}"
        );
        Self { x, y, z }
    }

    /// Get all axes as a tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Component-wise minimum of two points.
    pub fn min(&self, other: &Point3) -> Point3 {
        Point3 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Component-wise maximum of two points.
    pub fn max(&self, other: &Point3) -> Point3 {
        Point3 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Partial axis update: each axis is either a new absolute target or
/// "unchanged from the current position".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisTargets {
    /// New absolute X target, if present on the command.
    pub x: Option<f64>,
    /// New absolute Y target, if present on the command.
    pub y: Option<f64>,
    /// New absolute Z target, if present on the command.
    pub z: Option<f64>,
}

impl AxisTargets {
    /// Create an empty update (no axes set).
    pub fn none() -> Self {
        Self::default()
    }

    /// True if at least one axis carries a target.
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some()
    }

    /// Apply this update over a base position, keeping absent axes
    /// (modal carry-over).
    pub fn apply_to(&self, base: Point3) -> Point3 {
        Point3 {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            z: self.z.unwrap_or(base.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_absent_axes() {
        let base = Point3::new(10.0, -2.0, 5.0);
        let update = AxisTargets {
            x: None,
            y: Some(7.5),
            z: None,
        };
        assert_eq!(update.apply_to(base), Point3::new(10.0, 7.5, 5.0));
    }

    #[test]
    fn empty_update_is_identity() {
        let base = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(AxisTargets::none().apply_to(base), base);
        assert!(!AxisTargets::none().any());
    }
}
