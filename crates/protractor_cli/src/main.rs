//! Arc Protractor CLI
//!
//! Thin front end over protractor_core: parses arguments, runs the geometry
//! pipeline, and prints either the show-all comparison table or the computed
//! geometry as JSON for a rendering collaborator. No alignment math here.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use protractor_core::{
    compare_alignments, generate_protractor, presets, AlignmentSelector, GrooveSpec,
    PivotGeometry, ProtractorRequest,
};

#[derive(Parser)]
#[command(name = "protractor")]
#[command(about = "Compute arc protractor geometry for turntable cartridge alignment", long_about = None)]
#[command(after_help = tonearm_help())]
struct Cli {
    /// Distance from tonearm pivot to spindle center (mm)
    pivot_to_spindle: f64,

    /// Alignment geometry
    #[arg(short, long, value_enum, default_value_t = Alignment::Baerwald)]
    alignment: Alignment,

    /// Custom null points in mm (overrides alignment type)
    #[arg(long, num_args = 2, value_names = ["INNER", "OUTER"])]
    custom_nulls: Option<Vec<f64>>,

    /// Inner groove radius in mm (default: 60.325 IEC)
    #[arg(long)]
    inner_groove: Option<f64>,

    /// Outer groove radius in mm (default: 146.05 IEC)
    #[arg(long)]
    outer_groove: Option<f64>,

    /// Show calculations for all alignment types and exit
    #[arg(long)]
    show_all: bool,

    /// Number of tracking-error samples to include in the JSON output
    #[arg(long, default_value_t = 0)]
    error_samples: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Alignment {
    Baerwald,
    LofgrenB,
    Stevenson,
}

impl Alignment {
    fn selector(self) -> AlignmentSelector {
        match self {
            Alignment::Baerwald => AlignmentSelector::Baerwald,
            Alignment::LofgrenB => AlignmentSelector::LofgrenB,
            Alignment::Stevenson => AlignmentSelector::Stevenson,
        }
    }
}

fn tonearm_help() -> String {
    let mut help = String::from("Common tonearm mounting distances:\n");
    for (name, distance) in presets::KNOWN_TONEARMS {
        help.push_str(&format!("  {name:<32} {distance:.2} mm\n"));
    }
    help
}

fn show_all(cli: &Cli) -> Result<()> {
    let pivot = PivotGeometry::new(cli.pivot_to_spindle)?;
    let iec = GrooveSpec::iec();
    let groove = GrooveSpec::new(
        cli.inner_groove.unwrap_or_else(|| iec.inner_radius()),
        cli.outer_groove.unwrap_or_else(|| iec.outer_radius()),
    )?;

    println!("\nAlignment calculations for {}mm mounting distance:", cli.pivot_to_spindle);
    println!(
        "Groove radii: {:.2} - {:.2}mm\n",
        groove.inner_radius(),
        groove.outer_radius()
    );
    println!(
        "{:<22} {:>11} {:>11} {:>12} {:>10} {:>8} {:>8} {:>8}",
        "Alignment", "Inner Null", "Outer Null", "Eff. Length", "Overhang", "Offset", "Max Err", "RMS Err"
    );
    println!("{}", "-".repeat(98));

    for report in compare_alignments(pivot, &groove)? {
        println!(
            "{:<22} {:>9.3}mm {:>9.3}mm {:>10.3}mm {:>8.3}mm {:>7.3}\u{b0} {:>7.3}\u{b0} {:>7.3}\u{b0}",
            report.alignment,
            report.nulls.inner(),
            report.nulls.outer(),
            report.mount.effective_length,
            report.mount.overhang,
            report.mount.offset_angle,
            report.max_abs_error,
            report.rms_error,
        );
    }
    println!();
    Ok(())
}

fn generate(cli: &Cli) -> Result<()> {
    let (alignment, custom_nulls) = match &cli.custom_nulls {
        Some(values) => {
            if values.len() != 2 {
                bail!("--custom-nulls takes exactly two values");
            }
            (AlignmentSelector::Custom, Some([values[0], values[1]]))
        }
        None => (cli.alignment.selector(), None),
    };

    let request = ProtractorRequest {
        schema_version: 1,
        pivot_to_spindle: cli.pivot_to_spindle,
        alignment,
        inner_groove: cli.inner_groove,
        outer_groove: cli.outer_groove,
        custom_nulls,
        error_curve_samples: cli.error_samples,
    };

    let response = generate_protractor(&request).context("geometry computation failed")?;

    eprintln!("Specifications:");
    eprintln!("  Alignment:         {} [{:?}]", response.alignment, response.source);
    eprintln!("  Pivot to Spindle:  {:.3} mm", response.pivot_to_spindle);
    eprintln!("  Effective Length:  {:.3} mm", response.mount.effective_length);
    eprintln!("  Overhang:          {:.3} mm", response.mount.overhang);
    eprintln!("  Inner Null Point:  {:.3} mm", response.nulls.inner());
    eprintln!("  Outer Null Point:  {:.3} mm", response.nulls.outer());
    eprintln!("  Offset Angle:      {:.3}\u{b0}", response.mount.offset_angle);

    // Geometry JSON on stdout for the rendering collaborator
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.pivot_to_spindle <= 0.0 {
        bail!("pivot-to-spindle distance must be positive, got {}", cli.pivot_to_spindle);
    }

    if cli.show_all {
        show_all(&cli)
    } else {
        generate(&cli)
    }
}
