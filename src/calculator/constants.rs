/// Ratios are percentages of the whole blend.
pub const TOTAL_PERCENT: f64 = 100.0;

/// Spacing between candidate ratios, in percentage points.
pub const DEFAULT_STEP_PERCENT: f64 = 1.0;

/// Finest spacing the sweep accepts; caps a full 0-100 sweep at 10_001 samples.
pub const MIN_STEP_PERCENT: f64 = 0.01;

/// Allowed float slack when checking that ratios sum to 100.
pub const RATIO_SUM_TOLERANCE: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Savings above this are shown as a clear gain.
pub const GAIN_THRESHOLD_PERCENT: f64 = 5.0;

/// Savings below this are shown as a loss.
pub const LOSS_THRESHOLD_PERCENT: f64 = -5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Default table (prefilled in interactive mode)
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_NAMES: [&str; 2] = ["ingredient_1", "ingredient_2"];
pub const DEFAULT_RATIOS: [f64; 2] = [65.0, 35.0];
pub const DEFAULT_COSTS: [f64; 2] = [0.12, 0.39];
pub const DEFAULT_MAX_VARIANCES: [f64; 2] = [20.0, 20.0];

/// Informational totals; not used by the sweep.
pub const DEFAULT_TOTAL_POUNDS: f64 = 1.0;
pub const DEFAULT_TOTAL_SPEND: f64 = 100.0;
