use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use spline_core::SplineError;

/// Blend algorithm used between control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SplineMode {
    /// Average of three overlapping linear blends over four anchors.
    Weighted = 0,
    /// Cubic Bezier through the anchors using precomputed tangent handles.
    Bezier = 1,
}

impl TryFrom<u8> for SplineMode {
    type Error = SplineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Weighted),
            1 => Ok(Self::Bezier),
            other => Err(SplineError::InvalidMode(other.to_string())),
        }
    }
}

impl FromStr for SplineMode {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted" => Ok(Self::Weighted),
            "bezier" => Ok(Self::Bezier),
            _ => Err(SplineError::InvalidMode(s.to_owned())),
        }
    }
}

impl fmt::Display for SplineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weighted => f.write_str("weighted"),
            Self::Bezier => f.write_str("bezier"),
        }
    }
}
