//! Tonearm mounting parameters derived from the null points
//!
//! The stylus path is a circle of radius = effective length centered at the
//! arm pivot. Requiring zero tracking error at both null radii fixes the
//! effective length (Bauer's relation, law of cosines on the
//! spindle/pivot/stylus triangle) and the headshell offset angle in closed
//! form; no iteration is involved.

use serde::{Deserialize, Serialize};

use crate::alignment::NullPoints;
use crate::error::{InvalidGeometry, Result};

/// The single external parameter describing the tonearm: distance from the
/// arm pivot to the platter spindle (mm).
///
/// Documented tonearms run roughly 150-300mm, but the math has no upper
/// bound; only positivity is enforced here. Plausibility checks belong to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotGeometry {
    pivot_to_spindle: f64,
}

impl PivotGeometry {
    pub fn new(pivot_to_spindle: f64) -> Result<Self> {
        if pivot_to_spindle <= 0.0 {
            return Err(InvalidGeometry::NonPositivePivot { distance: pivot_to_spindle });
        }
        Ok(Self { pivot_to_spindle })
    }

    pub fn pivot_to_spindle(&self) -> f64 {
        self.pivot_to_spindle
    }
}

/// Physical mounting parameters for the cartridge.
///
/// Never mutated; re-derive from new inputs instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountGeometry {
    /// Pivot to stylus tip (mm)
    pub effective_length: f64,
    /// How far the stylus overshoots the spindle (mm)
    pub overhang: f64,
    /// Angle between headshell axis and the stylus-to-pivot line (degrees)
    pub offset_angle: f64,
}

impl MountGeometry {
    /// Derive mounting parameters from the pivot distance and null points.
    ///
    /// `L = sqrt(d^2 + n1*n2)`, `overhang = L - d`,
    /// `offset = asin((n1 + n2) / 2L)`. The offset uses the null-point sum:
    /// that is the form implied by the zero-error condition at both nulls
    /// (the two null radii are the roots of `r^2 - 2L*sin(offset)*r +
    /// (L^2 - d^2) = 0`).
    pub fn derive(pivot: PivotGeometry, nulls: NullPoints) -> Result<Self> {
        let d = pivot.pivot_to_spindle();
        let n1 = nulls.inner();
        let n2 = nulls.outer();
        if n1 >= n2 {
            return Err(InvalidGeometry::NonIncreasingNulls { inner: n1, outer: n2 });
        }

        let effective_length = (d * d + n1 * n2).sqrt();
        if effective_length <= 0.0 {
            return Err(InvalidGeometry::NonPositiveEffectiveLength { length: effective_length });
        }

        let sin_offset = (n1 + n2) / (2.0 * effective_length);
        if !(0.0..=1.0).contains(&sin_offset) {
            // Nulls too far out for this pivot distance; no real offset angle
            return Err(InvalidGeometry::UnreachableRadius {
                radius: n2,
                pivot: d,
                length: effective_length,
            });
        }

        Ok(Self {
            effective_length,
            overhang: effective_length - d,
            offset_angle: sin_offset.asin().to_degrees(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{solve, AlignmentKind};
    use crate::groove::GrooveSpec;

    #[test]
    fn test_pivot_rejects_non_positive() {
        assert!(PivotGeometry::new(0.0).is_err());
        assert!(PivotGeometry::new(-10.0).is_err());
        assert!(PivotGeometry::new(215.5).is_ok());
    }

    #[test]
    fn test_sme_3009_baerwald_reference() {
        // Published SME 3009 figures: overhang ~17.8mm, offset ~23.6 degrees
        let pivot = PivotGeometry::new(215.7).unwrap();
        let nulls = solve(&AlignmentKind::Baerwald, &GrooveSpec::iec()).unwrap().points;
        let mount = MountGeometry::derive(pivot, nulls).unwrap();

        assert!((mount.effective_length - 233.5).abs() < 0.5);
        assert!(mount.overhang > 17.0 && mount.overhang < 18.5, "{}", mount.overhang);
        assert!(mount.offset_angle > 23.0 && mount.offset_angle < 24.5, "{}", mount.offset_angle);
    }

    #[test]
    fn test_overhang_is_length_minus_pivot() {
        let pivot = PivotGeometry::new(222.0).unwrap();
        let nulls = NullPoints::new(66.04, 120.90).unwrap();
        let mount = MountGeometry::derive(pivot, nulls).unwrap();
        assert!((mount.overhang - (mount.effective_length - 222.0)).abs() < 1e-12);
    }

    #[test]
    fn test_effective_length_bauer_relation() {
        let pivot = PivotGeometry::new(215.5).unwrap();
        let nulls = NullPoints::new(66.04, 120.90).unwrap();
        let mount = MountGeometry::derive(pivot, nulls).unwrap();
        let expected = (215.5f64 * 215.5 + 66.04 * 120.90).sqrt();
        assert!((mount.effective_length - expected).abs() < 1e-12);
    }

    #[test]
    fn test_offset_angle_grows_with_shorter_arm() {
        let nulls = NullPoints::new(66.04, 120.90).unwrap();
        let long_arm =
            MountGeometry::derive(PivotGeometry::new(300.0).unwrap(), nulls).unwrap();
        let short_arm =
            MountGeometry::derive(PivotGeometry::new(160.0).unwrap(), nulls).unwrap();
        assert!(short_arm.offset_angle > long_arm.offset_angle);
    }

    #[test]
    fn test_derive_rejects_unordered_nulls() {
        let pivot = PivotGeometry::new(215.5).unwrap();
        // Construct unordered nulls through serde to bypass the constructor
        let nulls: NullPoints = serde_json::from_str(r#"{"inner":121.0,"outer":66.0}"#).unwrap();
        assert!(matches!(
            MountGeometry::derive(pivot, nulls).unwrap_err(),
            InvalidGeometry::NonIncreasingNulls { .. }
        ));
    }
}
