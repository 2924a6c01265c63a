//! Stylus-path arc and alignment-grid geometry for the renderer
//!
//! Coordinate frame: spindle at the origin, pivot on the positive x-axis,
//! arc swept below the spindle (negative y), matching the printed page
//! orientation. This module computes values only; drawing belongs to the
//! rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::alignment::NullPoints;
use crate::error::{InvalidGeometry, Result};
use crate::mount::{MountGeometry, PivotGeometry};

/// Target extension of the drawn arc past each null point (mm). Shrunk in
/// 1mm steps when the extended radius falls outside the arm's sweep.
const TARGET_ARC_EXTENSION_MM: f64 = 40.0;

/// Placement of one cartridge-alignment grid.
///
/// `position` puts the grid's reference mark exactly on the stylus arc at
/// the null radius; `rotation` is the local groove-tangent angle there, so
/// a cartridge parallel to the grid lines tracks tangentially.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridTransform {
    /// Reference mark relative to the spindle (mm)
    pub position: (f64, f64),
    /// Grid rotation (degrees)
    pub rotation: f64,
}

/// Everything the renderer needs to draw the protractor arc and grids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    /// Arc radius = effective tonearm length (mm)
    pub radius: f64,
    /// Arc center (the pivot) relative to the spindle (mm)
    pub center_offset: (f64, f64),
    /// Arc start angle measured at the pivot (degrees, 0-360)
    pub start_angle: f64,
    /// Arc end angle measured at the pivot (degrees, 0-360)
    pub end_angle: f64,
    pub inner_grid: GridTransform,
    pub outer_grid: GridTransform,
}

/// Intersection of the groove circle (radius `groove_radius`, centered at
/// the spindle) with the stylus arc, taking the solution below the spindle.
fn stylus_position(d: f64, length: f64, groove_radius: f64) -> Result<(f64, f64)> {
    let x = (d * d + groove_radius * groove_radius - length * length) / (2.0 * d);
    let y_squared = groove_radius * groove_radius - x * x;
    if groove_radius <= 0.0 || y_squared < 0.0 {
        return Err(InvalidGeometry::UnreachableRadius { radius: groove_radius, pivot: d, length });
    }
    Ok((x, -y_squared.sqrt()))
}

/// Angle (degrees, normalized to [0, 360)) from the pivot to the stylus
/// position at `groove_radius`.
fn arc_angle_at(d: f64, length: f64, groove_radius: f64) -> Result<f64> {
    let (x, y) = stylus_position(d, length, groove_radius)?;
    let angle = y.atan2(x - d).to_degrees();
    Ok(if angle < 0.0 { angle + 360.0 } else { angle })
}

/// Largest extension (up to the target) that keeps the arc endpoint inside
/// the arm's sweep. Falls back to the null radius itself.
fn extended_radius(d: f64, length: f64, null_radius: f64, outward: bool) -> f64 {
    let mut extension = TARGET_ARC_EXTENSION_MM;
    while extension > 0.0 {
        let candidate =
            if outward { null_radius + extension } else { null_radius - extension };
        if candidate > 0.0 && stylus_position(d, length, candidate).is_ok() {
            return candidate;
        }
        extension -= 1.0;
    }
    null_radius
}

fn grid_at(d: f64, length: f64, null_radius: f64) -> Result<GridTransform> {
    let (x, y) = stylus_position(d, length, null_radius)?;
    // Groove tangent for clockwise record rotation: (y, -x)
    let rotation = (-x).atan2(y).to_degrees();
    Ok(GridTransform { position: (x, y), rotation })
}

/// Build the arc description and the two null-point grid transforms.
pub fn build(pivot: PivotGeometry, nulls: NullPoints, mount: &MountGeometry) -> Result<ArcDescriptor> {
    let d = pivot.pivot_to_spindle();
    let length = mount.effective_length;
    if length <= 0.0 {
        return Err(InvalidGeometry::NonPositiveEffectiveLength { length });
    }

    let inner_grid = grid_at(d, length, nulls.inner())?;
    let outer_grid = grid_at(d, length, nulls.outer())?;

    let start_radius = extended_radius(d, length, nulls.inner(), false);
    let end_radius = extended_radius(d, length, nulls.outer(), true);

    Ok(ArcDescriptor {
        radius: length,
        center_offset: (d, 0.0),
        start_angle: arc_angle_at(d, length, start_radius)?,
        end_angle: arc_angle_at(d, length, end_radius)?,
        inner_grid,
        outer_grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{solve, AlignmentKind};
    use crate::groove::GrooveSpec;

    fn baerwald_setup() -> (PivotGeometry, NullPoints, MountGeometry) {
        let pivot = PivotGeometry::new(215.5).unwrap();
        let nulls = solve(&AlignmentKind::Baerwald, &GrooveSpec::iec()).unwrap().points;
        let mount = MountGeometry::derive(pivot, nulls).unwrap();
        (pivot, nulls, mount)
    }

    #[test]
    fn test_arc_radius_is_effective_length() {
        let (pivot, nulls, mount) = baerwald_setup();
        let arc = build(pivot, nulls, &mount).unwrap();
        assert_eq!(arc.radius, mount.effective_length);
        assert_eq!(arc.center_offset, (215.5, 0.0));
    }

    #[test]
    fn test_grid_marks_lie_on_both_circles() {
        let (pivot, nulls, mount) = baerwald_setup();
        let arc = build(pivot, nulls, &mount).unwrap();

        for (grid, radius) in [(arc.inner_grid, nulls.inner()), (arc.outer_grid, nulls.outer())] {
            let (x, y) = grid.position;
            // On the groove circle around the spindle
            assert!(((x * x + y * y).sqrt() - radius).abs() < 1e-9);
            // On the stylus arc around the pivot
            let dx = x - 215.5;
            assert!(((dx * dx + y * y).sqrt() - mount.effective_length).abs() < 1e-9);
            // Below the spindle, per the page orientation
            assert!(y < 0.0);
        }
    }

    #[test]
    fn test_grid_rotation_perpendicular_to_spindle_radius() {
        let (pivot, nulls, mount) = baerwald_setup();
        let arc = build(pivot, nulls, &mount).unwrap();

        for grid in [arc.inner_grid, arc.outer_grid] {
            let (x, y) = grid.position;
            let radial = y.atan2(x).to_degrees();
            let mut diff = (grid.rotation - radial).rem_euclid(360.0);
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!((diff - 90.0).abs() < 1e-9, "tangent not perpendicular: {diff}");
        }
    }

    #[test]
    fn test_arc_spans_past_both_nulls() {
        let (pivot, nulls, mount) = baerwald_setup();
        let arc = build(pivot, nulls, &mount).unwrap();
        let d = pivot.pivot_to_spindle();

        let inner_angle = arc_angle_at(d, mount.effective_length, nulls.inner()).unwrap();
        let outer_angle = arc_angle_at(d, mount.effective_length, nulls.outer()).unwrap();

        // Full 40mm extensions are reachable for this geometry, so the arc
        // endpoints sit strictly beyond both null angles.
        let min_null = inner_angle.min(outer_angle);
        let max_null = inner_angle.max(outer_angle);
        let min_arc = arc.start_angle.min(arc.end_angle);
        let max_arc = arc.start_angle.max(arc.end_angle);
        assert!(min_arc < min_null);
        assert!(max_arc > max_null);
    }

    #[test]
    fn test_inward_extension_shrinks_when_sweep_runs_out() {
        // Short arm: the arm's sweep bottoms out at |d - L| = ~23.1mm, so
        // the full 40mm inward extension past the 61mm inner null is
        // unreachable and must shrink instead of failing.
        let pivot = PivotGeometry::new(160.0).unwrap();
        let nulls = NullPoints::new(61.0, 130.0).unwrap();
        let mount = MountGeometry::derive(pivot, nulls).unwrap();
        let arc = build(pivot, nulls, &mount).unwrap();

        let d = pivot.pivot_to_spindle();
        let min_sweep = (d - mount.effective_length).abs();
        assert!(nulls.inner() - TARGET_ARC_EXTENSION_MM < min_sweep);
        let start_radius = extended_radius(d, mount.effective_length, nulls.inner(), false);
        assert!(start_radius >= min_sweep);
        assert!(start_radius < nulls.inner());
        assert!((0.0..360.0).contains(&arc.start_angle));
    }

    #[test]
    fn test_stevenson_builds() {
        let pivot = PivotGeometry::new(215.5).unwrap();
        let nulls = solve(&AlignmentKind::Stevenson, &GrooveSpec::iec()).unwrap().points;
        let mount = MountGeometry::derive(pivot, nulls).unwrap();
        assert!(build(pivot, nulls, &mount).is_ok());
    }

    #[test]
    fn test_angles_normalized() {
        let (pivot, nulls, mount) = baerwald_setup();
        let arc = build(pivot, nulls, &mount).unwrap();
        for angle in [arc.start_angle, arc.end_angle] {
            assert!((0.0..360.0).contains(&angle));
        }
    }
}
