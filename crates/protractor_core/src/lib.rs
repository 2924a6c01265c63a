//! # protractor_core - Tonearm Alignment Geometry Engine
//!
//! This library computes the geometry needed to align a pivoted-tonearm
//! phono cartridge: null points for the classical alignment criteria
//! (Baerwald/Löfgren A, Löfgren B, Stevenson), the derived mounting
//! parameters (effective length, overhang, offset angle), the tracking-error
//! curve, and the arc/grid geometry a printable protractor encodes.
//!
//! ## Properties
//! - 100% deterministic: every public operation is a pure function of its
//!   explicit inputs
//! - Closed-form only: no iteration, no root finding
//! - No shared mutable state; the preset table is read-only, so concurrent
//!   callers need no coordination
//!
//! Rendering (PDF pages, labels, paper layout) is the consumer's job; this
//! crate stops at values.

pub mod alignment;
pub mod api;
pub mod arc;
pub mod error;
pub mod groove;
pub mod mount;
pub mod presets;
pub mod tracking;

// Re-export the geometry pipeline types
pub use alignment::{solve, AlignmentKind, NullPointSolution, NullPointSource, NullPoints};
pub use arc::{build, ArcDescriptor, GridTransform};
pub use error::{InvalidGeometry, Result};
pub use groove::GrooveSpec;
pub use mount::{MountGeometry, PivotGeometry};
pub use tracking::{curve, error_at, max_abs_error, rms_error, ErrorCurve, TrackingErrorSample};

// Re-export the request-facing API
pub use api::{
    compare_alignments, compare_alignments_json, generate_protractor, generate_protractor_json,
    AlignmentReport, AlignmentSelector, CompareRequest, ProtractorRequest, ProtractorResponse,
};
