//! UI helpers for CLI display.

use console::{style, StyledObject};

use crate::output::PhBand;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Print a hint below an error.
pub fn print_hint(text: &str) {
    if is_color_disabled() {
        eprintln!("hint: {text}");
    } else {
        eprintln!("{} {text}", style("hint:").yellow());
    }
}

/// Colour `text` with the beaker colour for `band`.
#[must_use]
pub fn paint_band(text: &str, band: PhBand) -> StyledObject<&str> {
    let styled = style(text);
    match band {
        PhBand::StrongAcid => styled.red(),
        PhBand::WeakAcid => styled.color256(208),
        PhBand::Neutral => styled.blue(),
        PhBand::WeakBase => styled.green(),
        PhBand::StrongBase => styled.magenta(),
    }
}

/// A beaker drawn in its pH colour, or labelled when colour is off.
#[must_use]
pub fn beaker(ph: f64) -> String {
    let band = PhBand::from_ph(ph);
    let liquid = "~~~~~~~~~~";
    if is_color_disabled() {
        format!("|{liquid}| ({})", band.color_name())
    } else {
        format!("|{}|", paint_band(liquid, band))
    }
}
