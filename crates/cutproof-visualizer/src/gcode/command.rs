//! Motion command types

use cutproof_core::AxisTargets;
use serde::{Deserialize, Serialize};

/// Motion mode of a parsed instruction
///
/// Derived from the literal form of the line's `G` word: a value starting
/// with `0` is a rapid move, a value starting with `1` is a linear move.
/// Every other `G` value is `Other`: retained for completeness but never
/// contributing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionMode {
    /// Rapid positioning (G0)
    Rapid,
    /// Linear interpolation (G1)
    Linear,
    /// Any other command (modal directives, dwell, tool changes, ...)
    Other,
}

impl MotionMode {
    /// True for the modes that produce trajectory segments.
    pub fn is_motion(&self) -> bool {
        matches!(self, MotionMode::Rapid | MotionMode::Linear)
    }
}

impl std::fmt::Display for MotionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rapid => write!(f, "rapid"),
            Self::Linear => write!(f, "linear"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One parsed instruction directing the tool to move.
///
/// Axis values are absolute targets; an absent axis means "unchanged from
/// the current machine position" (modal carry-over, resolved by the
/// toolpath builder).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionCommand {
    /// Motion mode of this command
    pub mode: MotionMode,
    /// Absolute axis targets present on the command
    pub targets: AxisTargets,
    /// 1-based source line this command came from
    pub line_number: u32,
}

impl MotionCommand {
    /// Create a command with the given mode and targets.
    pub fn new(mode: MotionMode, targets: AxisTargets, line_number: u32) -> Self {
        Self {
            mode,
            targets,
            line_number,
        }
    }

    /// True if the command carries at least one axis target.
    pub fn has_targets(&self) -> bool {
        self.targets.any()
    }
}
