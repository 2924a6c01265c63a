//! Reference data for tonearm alignment
//!
//! Groove-radius standards and the published null points for each alignment
//! geometry at the IEC reference groove. These constants are the analytic
//! optima of the respective Löfgren/Stevenson criteria and are treated as
//! ground truth; the solver never re-derives them numerically.

use once_cell::sync::Lazy;

use crate::alignment::AlignmentKind;

// ============================================================
// Groove-radius standards
// ============================================================

/// IEC 98 recorded-groove radii (the common modern reference)
pub mod iec {
    /// Innermost recorded groove radius (mm)
    pub const INNER_GROOVE_MM: f64 = 60.325;

    /// Outermost recorded groove radius (mm)
    pub const OUTER_GROOVE_MM: f64 = 146.05;
}

/// DIN 45547 recorded-groove radii (slightly deeper inner groove)
pub mod din {
    /// Innermost recorded groove radius (mm)
    pub const INNER_GROOVE_MM: f64 = 57.5;

    /// Outermost recorded groove radius (mm)
    pub const OUTER_GROOVE_MM: f64 = 146.05;
}

/// Absolute tolerance (mm) for deciding a groove spec matches a preset.
pub const PRESET_MATCH_TOLERANCE_MM: f64 = 0.01;

// ============================================================
// Published null points at the IEC reference groove
// ============================================================

/// Baerwald (Löfgren A): equal-maximum-error null points, IEC groove
pub mod baerwald {
    pub const INNER_NULL_MM: f64 = 66.04;
    pub const OUTER_NULL_MM: f64 = 120.90;
}

/// Löfgren B: minimum-RMS-error null points, IEC groove
pub mod lofgren_b {
    pub const INNER_NULL_MM: f64 = 70.29;
    pub const OUTER_NULL_MM: f64 = 116.60;
}

/// Stevenson: inner null pinned to the innermost groove, IEC groove
pub mod stevenson {
    pub const INNER_NULL_MM: f64 = 60.325;
    pub const OUTER_NULL_MM: f64 = 117.42;
}

/// One alignment geometry's reference optimum.
///
/// `groove_inner`/`groove_outer` are the groove radii the published null
/// points were optimized for. The non-preset scaling approximation measures
/// its offsets against these boundaries.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentPreset {
    pub kind: AlignmentKind,
    pub name: &'static str,
    pub description: &'static str,
    pub groove_inner: f64,
    pub groove_outer: f64,
    pub inner_null: f64,
    pub outer_null: f64,
}

/// Read-only preset table, safe for unsynchronized concurrent reads.
pub static ALIGNMENT_PRESETS: Lazy<[AlignmentPreset; 3]> = Lazy::new(|| {
    [
        AlignmentPreset {
            kind: AlignmentKind::Baerwald,
            name: "Baerwald (Löfgren A)",
            description: "Minimizes maximum tracking error across the record",
            groove_inner: iec::INNER_GROOVE_MM,
            groove_outer: iec::OUTER_GROOVE_MM,
            inner_null: baerwald::INNER_NULL_MM,
            outer_null: baerwald::OUTER_NULL_MM,
        },
        AlignmentPreset {
            kind: AlignmentKind::LofgrenB,
            name: "Löfgren B",
            description: "Minimizes RMS tracking error across the record",
            groove_inner: iec::INNER_GROOVE_MM,
            groove_outer: iec::OUTER_GROOVE_MM,
            inner_null: lofgren_b::INNER_NULL_MM,
            outer_null: lofgren_b::OUTER_NULL_MM,
        },
        AlignmentPreset {
            kind: AlignmentKind::Stevenson,
            name: "Stevenson",
            description: "Zero tracking error at the innermost groove",
            groove_inner: iec::INNER_GROOVE_MM,
            groove_outer: iec::OUTER_GROOVE_MM,
            inner_null: stevenson::INNER_NULL_MM,
            outer_null: stevenson::OUTER_NULL_MM,
        },
    ]
});

/// Look up the reference preset for a named alignment.
///
/// `Custom` has no preset; the caller supplies its null points directly.
pub fn preset_for(kind: AlignmentKind) -> Option<&'static AlignmentPreset> {
    ALIGNMENT_PRESETS.iter().find(|p| p.kind == kind)
}

/// Well-known tonearm pivot-to-spindle distances (mm), for diagnostics and
/// CLI help text only. The math itself accepts any positive distance.
pub const KNOWN_TONEARMS: &[(&str, f64)] = &[
    ("SME 3009 S2 Improved (early)", 215.5),
    ("SME 3009 S2 Improved (late)", 213.25),
    ("Technics SL-1200", 215.0),
    ("Rega RB300", 222.0),
    ("Audio-Technica AT-LP120", 215.0),
    ("Pro-Ject 8.6\" tonearms", 200.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table_covers_named_alignments() {
        assert!(preset_for(AlignmentKind::Baerwald).is_some());
        assert!(preset_for(AlignmentKind::LofgrenB).is_some());
        assert!(preset_for(AlignmentKind::Stevenson).is_some());
    }

    #[test]
    fn test_preset_nulls_inside_reference_groove() {
        for preset in ALIGNMENT_PRESETS.iter() {
            assert!(preset.groove_inner <= preset.inner_null, "{}", preset.name);
            assert!(preset.inner_null < preset.outer_null, "{}", preset.name);
            assert!(preset.outer_null <= preset.groove_outer, "{}", preset.name);
        }
    }

    #[test]
    fn test_stevenson_inner_null_pinned_to_groove() {
        let preset = preset_for(AlignmentKind::Stevenson).unwrap();
        assert_eq!(preset.inner_null, preset.groove_inner);
    }
}
