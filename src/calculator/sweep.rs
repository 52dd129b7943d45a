use crate::calculator::constants::{DEFAULT_STEP_PERCENT, MIN_STEP_PERCENT, TOTAL_PERCENT};
use crate::calculator::report::SavingsReport;
use crate::error::{Result, SavingsError};
use crate::models::Blend;

/// Runtime settings for the ratio sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Nominal spacing between candidates for ingredient A, in percentage points.
    pub step_percent: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step_percent: DEFAULT_STEP_PERCENT,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.step_percent.is_finite() || self.step_percent < MIN_STEP_PERCENT {
            return Err(SavingsError::InvalidInput(format!(
                "Sweep step must be at least {}, got {}",
                MIN_STEP_PERCENT, self.step_percent
            )));
        }
        Ok(())
    }
}

/// Feasible ratio interval `[max(0, r - v), min(100, r + v)]`.
#[inline]
pub fn feasible_range(ratio: f64, variance: f64) -> (f64, f64) {
    ((ratio - variance).max(0.0), (ratio + variance).min(TOTAL_PERCENT))
}

#[inline]
fn weighted_cost(ratio_a: f64, ratio_b: f64, costs: [f64; 2]) -> f64 {
    (ratio_a / TOTAL_PERCENT) * costs[0] + (ratio_b / TOTAL_PERCENT) * costs[1]
}

/// Evenly spaced samples over the closed interval `[low, high]`.
///
/// The sample count is `floor((high - low) / step) + 1`; the last sample is
/// exactly `high`. With integer bounds and a step of 1 this yields every
/// integer percentage point. `step` must already satisfy
/// [`SweepConfig::validate`].
pub(crate) fn ratio_samples(low: f64, high: f64, step: f64) -> Vec<f64> {
    if high < low {
        return Vec::new();
    }

    let count = ((high - low) / step).floor() as usize + 1;
    if count == 1 {
        return vec![low];
    }

    let spacing = (high - low) / (count - 1) as f64;
    (0..count)
        .map(|i| if i == count - 1 { high } else { low + i as f64 * spacing })
        .collect()
}

/// Scan ratio splits for a two-ingredient blend with unit step.
///
/// Returns index-aligned sequences of candidate A ratios and savings
/// percentages, in ascending order of ratio. Only strictly positive savings
/// are kept. The caller must have checked that `ratios` sum to 100.
pub fn compute_savings(
    ratios: [f64; 2],
    costs: [f64; 2],
    max_variances: [f64; 2],
) -> Result<(Vec<f64>, Vec<f64>)> {
    compute_savings_with(ratios, costs, max_variances, &SweepConfig::default())
}

/// Same as [`compute_savings`] with an explicit sweep configuration.
pub fn compute_savings_with(
    ratios: [f64; 2],
    costs: [f64; 2],
    max_variances: [f64; 2],
    config: &SweepConfig,
) -> Result<(Vec<f64>, Vec<f64>)> {
    config.validate()?;

    let current_weighted_cost = weighted_cost(ratios[0], ratios[1], costs);
    if current_weighted_cost == 0.0 {
        return Err(SavingsError::DegenerateCost);
    }

    let (a_min, a_max) = feasible_range(ratios[0], max_variances[0]);
    let (b_min, b_max) = feasible_range(ratios[1], max_variances[1]);

    let mut valid_ratios_a = Vec::new();
    let mut savings = Vec::new();

    for ratio_a in ratio_samples(a_min, a_max, config.step_percent) {
        let ratio_b = TOTAL_PERCENT - ratio_a;
        if ratio_b < b_min || ratio_b > b_max {
            continue;
        }

        // current cost minus candidate cost; equal costs cancel to exactly 0
        let cost_delta = ((ratios[0] - ratio_a) / TOTAL_PERCENT) * costs[0]
            + ((ratios[1] - ratio_b) / TOTAL_PERCENT) * costs[1];
        let saving = cost_delta / current_weighted_cost * TOTAL_PERCENT;
        if saving > 0.0 {
            valid_ratios_a.push(ratio_a);
            savings.push(saving);
        }
    }

    Ok((valid_ratios_a, savings))
}

/// Sweep a validated blend and pair up the results.
pub fn sweep(blend: &Blend, config: &SweepConfig) -> Result<SavingsReport> {
    let (ratios_a, savings) = compute_savings_with(
        blend.ratios(),
        blend.costs(),
        blend.max_variances(),
        config,
    )?;

    SavingsReport::from_sequences(
        &ratios_a,
        &savings,
        blend.a.ratio_percent,
        blend.current_weighted_cost(),
    )
}
