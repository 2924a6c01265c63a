//! Recorded-groove span of the record being aligned for

use serde::{Deserialize, Serialize};

use crate::error::{InvalidGeometry, Result};
use crate::presets::{din, iec, PRESET_MATCH_TOLERANCE_MM};

/// Inner and outer recorded-groove radii (mm).
///
/// Immutable once constructed; every constructor validates
/// `0 < inner_radius < outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrooveSpec {
    inner_radius: f64,
    outer_radius: f64,
}

impl GrooveSpec {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Result<Self> {
        if inner_radius <= 0.0 {
            return Err(InvalidGeometry::NonPositiveGrooveRadius { radius: inner_radius });
        }
        if outer_radius <= 0.0 {
            return Err(InvalidGeometry::NonPositiveGrooveRadius { radius: outer_radius });
        }
        if inner_radius >= outer_radius {
            return Err(InvalidGeometry::InvertedGroove {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        Ok(Self { inner_radius, outer_radius })
    }

    /// IEC 98 standard groove span (60.325-146.05mm).
    pub fn iec() -> Self {
        // Constants satisfy the invariant
        Self { inner_radius: iec::INNER_GROOVE_MM, outer_radius: iec::OUTER_GROOVE_MM }
    }

    /// DIN 45547 standard groove span (57.5-146.05mm).
    pub fn din() -> Self {
        Self { inner_radius: din::INNER_GROOVE_MM, outer_radius: din::OUTER_GROOVE_MM }
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Recorded span width (mm).
    pub fn span(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// True when both radii match `inner`/`outer` within the preset tolerance.
    pub fn matches(&self, inner: f64, outer: f64) -> bool {
        (self.inner_radius - inner).abs() <= PRESET_MATCH_TOLERANCE_MM
            && (self.outer_radius - outer).abs() <= PRESET_MATCH_TOLERANCE_MM
    }
}
