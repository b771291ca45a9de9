//! Output formatting and the text visuals for each experiment.

use std::io::{self, Write};

use chemlab_core::constants::{BALLOON_SCALE_MAX, BALLOON_SCALE_MIN, NEUTRAL_PH};
use chemlab_core::ExperimentResult;

/// Width of the dilution fill bar, in cells.
pub const FILL_BAR_WIDTH: usize = 20;

/// Balloon width (characters) at scale 1.0.
const BALLOON_UNIT_WIDTH: f64 = 8.0;

/// Colour band of the beaker for a given pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhBand {
    StrongAcid,
    WeakAcid,
    Neutral,
    WeakBase,
    StrongBase,
}

impl PhBand {
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_ph(ph: f64) -> Self {
        if ph < 3.0 {
            PhBand::StrongAcid
        } else if ph < NEUTRAL_PH {
            PhBand::WeakAcid
        } else if ph == NEUTRAL_PH {
            PhBand::Neutral
        } else if ph <= 10.0 {
            PhBand::WeakBase
        } else {
            PhBand::StrongBase
        }
    }

    /// Colour name used when colour output is disabled.
    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            PhBand::StrongAcid => "red",
            PhBand::WeakAcid => "orange",
            PhBand::Neutral => "blue",
            PhBand::WeakBase => "green",
            PhBand::StrongBase => "purple",
        }
    }
}

/// Format a pH to two decimals.
#[must_use]
pub fn format_ph(ph: f64) -> String {
    format!("{ph:.2}")
}

/// Clamp a balloon scale to the drawable range.
#[must_use]
pub fn balloon_scale(scale: f64) -> f64 {
    scale.clamp(BALLOON_SCALE_MIN, BALLOON_SCALE_MAX)
}

/// Draw a horizontal tube filled to `percent`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn fill_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "[{}{}] {percent:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

/// Draw a balloon whose width follows the clamped scale.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn balloon(scale: f64) -> String {
    let clamped = balloon_scale(scale);
    let width = (clamped * BALLOON_UNIT_WIDTH).round().max(1.0) as usize;
    format!("({}) x{clamped:.2}", "o".repeat(width))
}

/// Numeric panel lines for a result.
#[must_use]
pub fn result_lines(result: &ExperimentResult) -> Vec<String> {
    match result {
        ExperimentResult::AcidBase(r) => vec![
            format!("Final pH: {}", format_ph(r.ph)),
            format!("Result: {}", r.result),
            r.message.clone(),
            format!(
                "Acid: {} ({}), Base: {} ({})",
                r.acid,
                r.acid.name(),
                r.base,
                r.base.name()
            ),
        ],
        ExperimentResult::Dilution(r) => vec![
            format!("Solute: {}", r.solute),
            format!("C1: {} M", r.c1),
            format!("V1: {} mL", r.v1),
            format!("V2: {} mL", r.v2),
            format!("Final Concentration C2: {:.3} M", r.c2),
        ],
        ExperimentResult::GasLaw(r) => vec![
            format!("Pressure P: {} atm", r.pressure),
            format!("Moles n: {} mol", r.moles),
            format!("Temperature T: {} K", r.temperature),
            format!("Volume V: {:.2} L", r.volume),
        ],
    }
}

/// The single headline number of a result, for quiet mode.
#[must_use]
pub fn headline(result: &ExperimentResult) -> String {
    match result {
        ExperimentResult::AcidBase(r) => format_ph(r.ph),
        ExperimentResult::Dilution(r) => format!("{:.3}", r.c2),
        ExperimentResult::GasLaw(r) => format!("{:.2}", r.volume),
    }
}

/// Pretty JSON for a result.
#[must_use]
pub fn to_json(result: &ExperimentResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Write a result as JSON to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, result: &ExperimentResult) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", to_json(result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemlab_core::{compute, example_request, ExperimentKind};

    #[test]
    fn ph_bands() {
        assert_eq!(PhBand::from_ph(1.0), PhBand::StrongAcid);
        assert_eq!(PhBand::from_ph(5.5), PhBand::WeakAcid);
        assert_eq!(PhBand::from_ph(7.0), PhBand::Neutral);
        assert_eq!(PhBand::from_ph(10.0), PhBand::WeakBase);
        assert_eq!(PhBand::from_ph(12.7), PhBand::StrongBase);
        assert_eq!(PhBand::from_ph(-0.5).color_name(), "red");
    }

    #[test]
    fn format_ph_two_decimals() {
        assert_eq!(format_ph(7.0), "7.00");
        assert_eq!(format_ph(1.477_121), "1.48");
    }

    #[test]
    fn balloon_scale_is_clamped() {
        assert!((balloon_scale(0.01) - 0.4).abs() < f64::EPSILON);
        assert!((balloon_scale(9.0) - 2.5).abs() < f64::EPSILON);
        assert!((balloon_scale(1.2) - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn fill_bar_widths() {
        assert_eq!(fill_bar(100.0, 4), "[████] 100%");
        assert_eq!(fill_bar(50.0, 4), "[██░░] 50%");
        assert_eq!(fill_bar(10.0, 10), "[█░░░░░░░░░] 10%");
    }

    #[test]
    fn balloon_grows_with_scale() {
        assert!(balloon(2.0).len() > balloon(1.0).len());
        assert_eq!(balloon(100.0), balloon(2.5));
        assert_eq!(balloon(0.0), balloon(0.4));
    }

    #[test]
    fn lines_for_examples() {
        let res = compute(&example_request(ExperimentKind::AcidBase)).unwrap();
        let lines = result_lines(&res);
        assert_eq!(lines[0], "Final pH: 7.00");
        assert_eq!(lines[1], "Result: neutral");
        assert_eq!(
            lines[3],
            "Acid: HCl (Hydrochloric Acid), Base: NaOH (Sodium Hydroxide)"
        );

        let res = compute(&example_request(ExperimentKind::Dilution)).unwrap();
        assert!(result_lines(&res)
            .iter()
            .any(|l| l == "Final Concentration C2: 0.100 M"));

        let res = compute(&example_request(ExperimentKind::GasLaw)).unwrap();
        assert_eq!(result_lines(&res)[3], "Volume V: 12.23 L");
        assert_eq!(headline(&res), "12.23");
    }

    #[test]
    fn json_keeps_experiment_tag() {
        let res = compute(&example_request(ExperimentKind::Dilution)).unwrap();
        let parsed: ExperimentResult = serde_json::from_str(&to_json(&res)).unwrap();
        assert_eq!(parsed.kind(), ExperimentKind::Dilution);
    }

    #[test]
    fn write_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("result.json");
        let res = compute(&example_request(ExperimentKind::GasLaw)).unwrap();
        write_to_file(path.to_str().unwrap(), &res).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"gas_law\""));
    }
}
