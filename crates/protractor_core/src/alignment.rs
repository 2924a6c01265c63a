//! Null-point solver for the classical alignment geometries
//!
//! A null point is a groove radius at which tracking error is exactly zero.
//! Each named alignment places its two null points per a published optimality
//! criterion; `Custom` carries caller-supplied null points instead.
//!
//! All functions are pure - same inputs always give the same solution.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidGeometry, Result};
use crate::groove::GrooveSpec;
use crate::presets::{preset_for, AlignmentPreset};

/// Tolerance (mm) when validating a custom inner null against the groove
/// boundary, so `inner == groove.inner` survives decimal input round-trips.
const CUSTOM_INNER_BOUNDARY_TOLERANCE_MM: f64 = 0.001;

/// The two groove radii where tracking error crosses zero (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NullPoints {
    inner: f64,
    outer: f64,
}

impl NullPoints {
    pub fn new(inner: f64, outer: f64) -> Result<Self> {
        if inner <= 0.0 {
            return Err(InvalidGeometry::NonPositiveGrooveRadius { radius: inner });
        }
        if inner >= outer {
            return Err(InvalidGeometry::NonIncreasingNulls { inner, outer });
        }
        Ok(Self { inner, outer })
    }

    pub fn inner(&self) -> f64 {
        self.inner
    }

    pub fn outer(&self) -> f64 {
        self.outer
    }
}

/// Which alignment criterion to solve for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignmentKind {
    /// Löfgren A: minimize the maximum |tracking error| over the span
    Baerwald,
    /// Löfgren B: minimize RMS tracking error over the span
    LofgrenB,
    /// Zero error at the innermost groove, where mistracking risk peaks
    Stevenson,
    /// Caller-supplied null points, validated against the groove span
    Custom(NullPoints),
}

impl AlignmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            AlignmentKind::Baerwald => "Baerwald (Löfgren A)",
            AlignmentKind::LofgrenB => "Löfgren B",
            AlignmentKind::Stevenson => "Stevenson",
            AlignmentKind::Custom(_) => "Custom",
        }
    }
}

/// How the solver arrived at the null points.
///
/// `ScaledApproximation` preserves the preset's relative distortion-balance
/// shape without re-solving the underlying optimization; callers needing
/// exact optimality for non-standard grooves must supply `Custom` nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullPointSource {
    /// Groove matched the alignment's reference groove; published constants
    ExactPreset,
    /// Preset offsets rescaled to a non-standard groove span
    ScaledApproximation,
    /// Caller-supplied override, passed through after bounds validation
    Custom,
}

/// Solver output: the null points plus an explicit label for how they were
/// obtained, so approximate results are never mistaken for exact optima.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NullPointSolution {
    pub points: NullPoints,
    pub source: NullPointSource,
}

/// Solve for the two null points of `alignment` over `groove`.
///
/// Preset grooves (within 0.01mm on both radii) return the published
/// constants; other grooves take the per-alignment approximation. The
/// returned points always satisfy
/// `groove.inner <= inner < outer <= groove.outer` (Stevenson pins the inner
/// null to the groove boundary exactly).
pub fn solve(alignment: &AlignmentKind, groove: &GrooveSpec) -> Result<NullPointSolution> {
    let solution = match alignment {
        AlignmentKind::Custom(points) => {
            validate_custom(points, groove)?;
            NullPointSolution { points: *points, source: NullPointSource::Custom }
        }
        AlignmentKind::Stevenson => solve_stevenson(groove)?,
        kind => {
            // Baerwald and Löfgren B share the offset-scaling approximation
            let preset = preset_for(*kind).expect("preset table covers named alignments");
            solve_from_preset(preset, groove)?
        }
    };

    debug_assert!(solution.points.inner() < solution.points.outer());
    Ok(solution)
}

fn solve_from_preset(preset: &AlignmentPreset, groove: &GrooveSpec) -> Result<NullPointSolution> {
    if groove.matches(preset.groove_inner, preset.groove_outer) {
        return Ok(NullPointSolution {
            points: NullPoints::new(preset.inner_null, preset.outer_null)?,
            source: NullPointSource::ExactPreset,
        });
    }

    // Rescale the preset's null offsets from its own groove boundaries by
    // sqrt(span ratio). Preserves the criterion's distortion-balance shape;
    // not an exact re-optimization.
    let offset_inner = preset.inner_null - preset.groove_inner;
    let offset_outer = preset.groove_outer - preset.outer_null;
    let preset_span = preset.groove_outer - preset.groove_inner;
    let scale = (groove.span() / preset_span).sqrt();

    let inner = groove.inner_radius() + offset_inner * scale;
    let outer = groove.outer_radius() - offset_outer * scale;
    if inner >= outer {
        // Span too narrow for the scaled offsets to stay ordered
        return Err(InvalidGeometry::NonIncreasingNulls { inner, outer });
    }

    Ok(NullPointSolution {
        points: NullPoints::new(inner, outer)?,
        source: NullPointSource::ScaledApproximation,
    })
}

fn solve_stevenson(groove: &GrooveSpec) -> Result<NullPointSolution> {
    let preset =
        preset_for(AlignmentKind::Stevenson).expect("preset table covers named alignments");
    if groove.matches(preset.groove_inner, preset.groove_outer) {
        return Ok(NullPointSolution {
            points: NullPoints::new(preset.inner_null, preset.outer_null)?,
            source: NullPointSource::ExactPreset,
        });
    }

    // Inner null pinned to the groove boundary; outer null approximated by
    // the geometric mean of the span, which always lands strictly between
    // the boundaries.
    let inner = groove.inner_radius();
    let outer = (groove.inner_radius() * groove.outer_radius()).sqrt();

    Ok(NullPointSolution {
        points: NullPoints::new(inner, outer)?,
        source: NullPointSource::ScaledApproximation,
    })
}

fn validate_custom(points: &NullPoints, groove: &GrooveSpec) -> Result<()> {
    if points.inner() < groove.inner_radius() - CUSTOM_INNER_BOUNDARY_TOLERANCE_MM {
        return Err(InvalidGeometry::NullOutOfBounds {
            which: "inner null",
            value: points.inner(),
            groove_inner: groove.inner_radius(),
            groove_outer: groove.outer_radius(),
        });
    }
    if points.outer() > groove.outer_radius() {
        return Err(InvalidGeometry::NullOutOfBounds {
            which: "outer null",
            value: points.outer(),
            groove_inner: groove.inner_radius(),
            groove_outer: groove.outer_radius(),
        });
    }
    Ok(())
}
