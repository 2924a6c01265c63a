//! Tracking-error evaluation across the recorded groove span
//!
//! Tracking error is the angle between the stylus's velocity vector and the
//! local groove tangent. For a pivoted arm it is
//! `e(r) = asin((L^2 + r^2 - d^2) / (2*L*r)) - offset`, zero at exactly the
//! two null radii by construction. Used for the show-all diagnostic
//! comparison and for validating solver output.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidGeometry, Result};
use crate::groove::GrooveSpec;
use crate::mount::{MountGeometry, PivotGeometry};

/// One point on the tracking-error curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingErrorSample {
    /// Groove radius (mm)
    pub groove_radius: f64,
    /// Instantaneous tracking error (degrees, signed)
    pub error_angle: f64,
}

/// Instantaneous tracking error (degrees) at `groove_radius`.
///
/// Radii the arm cannot reach are an error, never clamped.
pub fn error_at(pivot: PivotGeometry, mount: &MountGeometry, groove_radius: f64) -> Result<f64> {
    let d = pivot.pivot_to_spindle();
    let length = mount.effective_length;
    if groove_radius <= 0.0 {
        return Err(InvalidGeometry::NonPositiveGrooveRadius { radius: groove_radius });
    }

    let sin_tangent = (length * length + groove_radius * groove_radius - d * d)
        / (2.0 * length * groove_radius);
    if !(-1.0..=1.0).contains(&sin_tangent) {
        return Err(InvalidGeometry::UnreachableRadius { radius: groove_radius, pivot: d, length });
    }

    Ok(sin_tangent.asin().to_degrees() - mount.offset_angle)
}

/// Lazy, finite, restartable iterator over the tracking-error curve.
///
/// Regenerating the sequence is cheap and side-effect-free; clone it to
/// restart. Samples are evenly spaced over `[groove.inner, groove.outer]`
/// inclusive, in increasing radius order.
#[derive(Debug, Clone)]
pub struct ErrorCurve {
    pivot: PivotGeometry,
    mount: MountGeometry,
    start_radius: f64,
    step: f64,
    sample_count: usize,
    next_index: usize,
}

impl ErrorCurve {
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}

impl Iterator for ErrorCurve {
    type Item = Result<TrackingErrorSample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.sample_count {
            return None;
        }
        let groove_radius = self.start_radius + self.step * self.next_index as f64;
        self.next_index += 1;
        Some(
            error_at(self.pivot, &self.mount, groove_radius)
                .map(|error_angle| TrackingErrorSample { groove_radius, error_angle }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sample_count - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ErrorCurve {}

/// Sample the tracking-error curve across the groove span.
///
/// Fails immediately if either groove boundary is unreachable by the arm,
/// so a successfully constructed curve yields only `Ok` samples.
pub fn curve(
    pivot: PivotGeometry,
    mount: &MountGeometry,
    groove: &GrooveSpec,
    sample_count: usize,
) -> Result<ErrorCurve> {
    if sample_count < 2 {
        return Err(InvalidGeometry::BadSampleCount { count: sample_count });
    }
    // Boundary reachability check up front; interior radii lie between
    error_at(pivot, mount, groove.inner_radius())?;
    error_at(pivot, mount, groove.outer_radius())?;

    Ok(ErrorCurve {
        pivot,
        mount: *mount,
        start_radius: groove.inner_radius(),
        step: groove.span() / (sample_count - 1) as f64,
        sample_count,
        next_index: 0,
    })
}

/// Largest |error| over the sampled span (degrees).
pub fn max_abs_error(
    pivot: PivotGeometry,
    mount: &MountGeometry,
    groove: &GrooveSpec,
    sample_count: usize,
) -> Result<f64> {
    let mut max = 0.0f64;
    for sample in curve(pivot, mount, groove, sample_count)? {
        max = max.max(sample?.error_angle.abs());
    }
    Ok(max)
}

/// Root-mean-square error over the sampled span (degrees).
pub fn rms_error(
    pivot: PivotGeometry,
    mount: &MountGeometry,
    groove: &GrooveSpec,
    sample_count: usize,
) -> Result<f64> {
    let samples = curve(pivot, mount, groove, sample_count)?;
    let count = samples.sample_count();
    let mut sum_sq = 0.0f64;
    for sample in samples {
        let e = sample?.error_angle;
        sum_sq += e * e;
    }
    Ok((sum_sq / count as f64).sqrt())
}
