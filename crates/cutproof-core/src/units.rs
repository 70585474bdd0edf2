//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems
//! for display purposes. The interpreter itself does not model G20/G21
//! semantics; coordinates flow through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Machine coordinate units (millimeters or inches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Millimeters (metric)
    Mm,
    /// Inches (imperial)
    Inch,
}

impl Units {
    /// Convert a value from one unit to another
    ///
    /// # Arguments
    /// * `value` - The value to convert
    /// * `from` - The unit of the input value
    /// * `to` - The target unit
    ///
    /// # Returns
    /// The converted value, or the original value if units are the same
    pub fn convert(value: f64, from: Units, to: Units) -> f64 {
        match (from, to) {
            (Units::Mm, Units::Inch) => value / 25.4,
            (Units::Inch, Units::Mm) => value * 25.4,
            _ => value,
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::Mm
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Mm => write!(f, "mm"),
            Units::Inch => write!(f, "in"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Mm),
            "imperial" | "inch" | "in" => Ok(Self::Inch),
            _ => Err(format!("Unknown units: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_inch_round_trip() {
        let mm = 25.4;
        let inches = Units::convert(mm, Units::Mm, Units::Inch);
        assert!((inches - 1.0).abs() < 1e-9);
        assert!((Units::convert(inches, Units::Inch, Units::Mm) - mm).abs() < 1e-9);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("mm".parse::<Units>().unwrap(), Units::Mm);
        assert_eq!("Imperial".parse::<Units>().unwrap(), Units::Inch);
        assert!("furlong".parse::<Units>().is_err());
    }
}
