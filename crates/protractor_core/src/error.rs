use thiserror::Error;

/// Every failure the geometry engine can produce.
///
/// All variants are deterministic consequences of the supplied inputs: there
/// is no transient failure mode and no retry semantics. Each variant names the
/// quantity and the bound that was violated so the caller can correct the
/// input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidGeometry {
    #[error("inverted groove radii: inner {inner}mm must be less than outer {outer}mm")]
    InvertedGroove { inner: f64, outer: f64 },

    #[error("groove radius must be positive, got {radius}mm")]
    NonPositiveGrooveRadius { radius: f64 },

    #[error("pivot-to-spindle distance must be positive, got {distance}mm")]
    NonPositivePivot { distance: f64 },

    #[error("null points must be strictly increasing: inner {inner}mm, outer {outer}mm")]
    NonIncreasingNulls { inner: f64, outer: f64 },

    #[error(
        "null point {value}mm outside groove span {groove_inner}mm-{groove_outer}mm ({which})"
    )]
    NullOutOfBounds { which: &'static str, value: f64, groove_inner: f64, groove_outer: f64 },

    #[error("custom alignment requires explicit null points")]
    MissingCustomNulls,

    #[error("derived effective length {length}mm is not positive")]
    NonPositiveEffectiveLength { length: f64 },

    #[error(
        "groove radius {radius}mm unreachable by arm (pivot {pivot}mm, effective length {length}mm)"
    )]
    UnreachableRadius { radius: f64, pivot: f64, length: f64 },

    #[error("error curve needs at least 2 samples, got {count}")]
    BadSampleCount { count: usize },
}

pub type Result<T> = std::result::Result<T, InvalidGeometry>;
