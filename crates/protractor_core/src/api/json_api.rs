//! JSON request/response surface for external collaborators
//!
//! The CLI and any web backend talk to the geometry engine through these
//! types. All alignment mathematics lives in the geometry modules; this
//! layer only parses, validates schema versions, and assembles responses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::{solve, AlignmentKind, NullPointSolution, NullPointSource, NullPoints};
use crate::arc::{build, ArcDescriptor};
use crate::error::{InvalidGeometry, Result};
use crate::groove::GrooveSpec;
use crate::mount::{MountGeometry, PivotGeometry};
use crate::tracking::{curve, max_abs_error, rms_error, TrackingErrorSample};

/// Sample count used for the diagnostic error statistics.
const DIAGNOSTIC_SAMPLES: usize = 501;

fn err_msg(context: &str, err: impl std::fmt::Display) -> String {
    format!("{context}: {err}")
}

/// Alignment selector as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentSelector {
    Baerwald,
    LofgrenB,
    Stevenson,
    Custom,
}

#[derive(Debug, Deserialize)]
pub struct ProtractorRequest {
    pub schema_version: u8,
    /// Pivot-to-spindle distance (mm)
    pub pivot_to_spindle: f64,
    pub alignment: AlignmentSelector,
    /// Inner groove radius (mm); defaults to the IEC preset
    #[serde(default)]
    pub inner_groove: Option<f64>,
    /// Outer groove radius (mm); defaults to the IEC preset
    #[serde(default)]
    pub outer_groove: Option<f64>,
    /// Required when alignment = custom: [inner, outer] null radii (mm)
    #[serde(default)]
    pub custom_nulls: Option<[f64; 2]>,
    /// When >= 2, the response carries an error curve with this many samples
    #[serde(default)]
    pub error_curve_samples: usize,
}

#[derive(Debug, Serialize)]
pub struct ProtractorResponse {
    pub alignment: String,
    pub source: NullPointSource,
    pub pivot_to_spindle: f64,
    pub groove: GrooveSpec,
    pub nulls: NullPoints,
    pub mount: MountGeometry,
    pub arc: ArcDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_curve: Option<Vec<TrackingErrorSample>>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub schema_version: u8,
    pub pivot_to_spindle: f64,
    #[serde(default)]
    pub inner_groove: Option<f64>,
    #[serde(default)]
    pub outer_groove: Option<f64>,
}

/// One row of the show-all diagnostic comparison.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    pub alignment: String,
    pub source: NullPointSource,
    pub nulls: NullPoints,
    pub mount: MountGeometry,
    /// Largest |tracking error| over the groove span (degrees)
    pub max_abs_error: f64,
    /// RMS tracking error over the groove span (degrees)
    pub rms_error: f64,
}

fn groove_from(inner: Option<f64>, outer: Option<f64>) -> Result<GrooveSpec> {
    let iec = GrooveSpec::iec();
    GrooveSpec::new(
        inner.unwrap_or_else(|| iec.inner_radius()),
        outer.unwrap_or_else(|| iec.outer_radius()),
    )
}

fn alignment_from(selector: AlignmentSelector, custom_nulls: Option<[f64; 2]>) -> Result<AlignmentKind> {
    match selector {
        AlignmentSelector::Baerwald => Ok(AlignmentKind::Baerwald),
        AlignmentSelector::LofgrenB => Ok(AlignmentKind::LofgrenB),
        AlignmentSelector::Stevenson => Ok(AlignmentKind::Stevenson),
        AlignmentSelector::Custom => {
            let [inner, outer] = custom_nulls.ok_or(InvalidGeometry::MissingCustomNulls)?;
            Ok(AlignmentKind::Custom(NullPoints::new(inner, outer)?))
        }
    }
}

/// Full pipeline: solve null points, derive the mount, build the arc.
pub fn generate_protractor(request: &ProtractorRequest) -> Result<ProtractorResponse> {
    let pivot = PivotGeometry::new(request.pivot_to_spindle)?;
    let groove = groove_from(request.inner_groove, request.outer_groove)?;
    let alignment = alignment_from(request.alignment, request.custom_nulls)?;

    let NullPointSolution { points, source } = solve(&alignment, &groove)?;
    let mount = MountGeometry::derive(pivot, points)?;
    let arc = build(pivot, points, &mount)?;
    debug!(
        alignment = alignment.name(),
        ?source,
        effective_length = mount.effective_length,
        "protractor geometry solved"
    );

    let error_curve = if request.error_curve_samples >= 2 {
        let samples = curve(pivot, &mount, &groove, request.error_curve_samples)?
            .collect::<Result<Vec<_>>>()?;
        Some(samples)
    } else {
        None
    };

    Ok(ProtractorResponse {
        alignment: alignment.name().to_string(),
        source,
        pivot_to_spindle: pivot.pivot_to_spindle(),
        groove,
        nulls: points,
        mount,
        arc,
        error_curve,
    })
}

/// Show-all diagnostic: every named alignment for one tonearm and groove.
pub fn compare_alignments(pivot: PivotGeometry, groove: &GrooveSpec) -> Result<Vec<AlignmentReport>> {
    let mut reports = Vec::with_capacity(3);
    for alignment in [AlignmentKind::Baerwald, AlignmentKind::LofgrenB, AlignmentKind::Stevenson] {
        let NullPointSolution { points, source } = solve(&alignment, groove)?;
        let mount = MountGeometry::derive(pivot, points)?;
        reports.push(AlignmentReport {
            alignment: alignment.name().to_string(),
            source,
            nulls: points,
            mount,
            max_abs_error: max_abs_error(pivot, &mount, groove, DIAGNOSTIC_SAMPLES)?,
            rms_error: rms_error(pivot, &mount, groove, DIAGNOSTIC_SAMPLES)?,
        });
    }
    Ok(reports)
}

/// JSON entry point for protractor generation.
pub fn generate_protractor_json(request_json: &str) -> std::result::Result<String, String> {
    let request: ProtractorRequest =
        serde_json::from_str(request_json).map_err(|e| err_msg("Invalid JSON request", e))?;

    if request.schema_version != 1 {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let response =
        generate_protractor(&request).map_err(|e| err_msg("Invalid geometry", e))?;
    serde_json::to_string(&response).map_err(|e| err_msg("Response serialization failed", e))
}

/// JSON entry point for the show-all comparison.
pub fn compare_alignments_json(request_json: &str) -> std::result::Result<String, String> {
    let request: CompareRequest =
        serde_json::from_str(request_json).map_err(|e| err_msg("Invalid JSON request", e))?;

    if request.schema_version != 1 {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let pivot = PivotGeometry::new(request.pivot_to_spindle)
        .map_err(|e| err_msg("Invalid geometry", e))?;
    let groove = groove_from(request.inner_groove, request.outer_groove)
        .map_err(|e| err_msg("Invalid geometry", e))?;
    let reports =
        compare_alignments(pivot, &groove).map_err(|e| err_msg("Invalid geometry", e))?;
    serde_json::to_string(&reports).map_err(|e| err_msg("Response serialization failed", e))
}
