//! # Cutproof Core
//!
//! Core types, constants, and error handling for Cutproof.
//! Provides the fundamental data model shared by the visualizer and
//! settings crates: 3D points, partial axis updates, units, and the
//! load-error taxonomy.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, LoadError, Result};
pub use geometry::{AxisTargets, Point3};
pub use units::Units;
