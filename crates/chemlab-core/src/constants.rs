//! Physical constants and fixed tuning values for the experiments.

/// Ideal gas constant in L·atm/(mol·K).
pub const GAS_CONSTANT_R: f64 = 0.0821;

/// pH of a perfectly neutralized solution at 25 °C.
pub const NEUTRAL_PH: f64 = 7.0;

/// pH + pOH at 25 °C.
pub const PH_SCALE_MAX: f64 = 14.0;

/// Ion concentration (mol/L) contributed by water autoionization.
///
/// An excess of acid or base diluted below this level no longer moves
/// the pH away from neutral.
pub const WATER_ION_CONCENTRATION: f64 = 1e-7;

/// Relative tolerance used when comparing acid and base equivalents.
pub const EQUIVALENCE_TOLERANCE: f64 = 1e-12;

/// Lowest fill level (percent) reported for a dilution tube.
pub const MIN_FILL_PERCENT: f64 = 10.0;

/// Highest fill level (percent) reported for a dilution tube.
pub const MAX_FILL_PERCENT: f64 = 100.0;

/// Gas volume (L) that maps to a balloon scale of 1.0.
pub const BALLOON_REFERENCE_VOLUME: f64 = 10.0;

/// Client-side clamp range for the balloon scale.
pub const BALLOON_SCALE_MIN: f64 = 0.4;
/// Client-side clamp range for the balloon scale.
pub const BALLOON_SCALE_MAX: f64 = 2.5;

/// Solute label used when a dilution request names none.
pub const DEFAULT_SOLUTE: &str = "Solution";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An experiment parameter was missing, non-positive, or unsupported.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// The computation service could not be reached.
    pub const ERROR_SERVICE_UNAVAILABLE: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
