use serde::{Deserialize, Serialize};

use crate::calculator::constants::TOTAL_PERCENT;
use crate::calculator::feasible_range;
use crate::error::{Result, SavingsError};

/// One row of the ingredient table.
///
/// Field names match the column headers of the original spreadsheet-style
/// table so CSV inputs can be loaded without a mapping step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    #[serde(rename = "Ingredient")]
    pub name: String,

    #[serde(rename = "Ratio (%)")]
    pub ratio_percent: f64,

    #[serde(rename = "Cost per Pound")]
    pub cost_per_unit: f64,

    #[serde(rename = "Max Variance (%)")]
    pub max_variance_percent: f64,
}

impl IngredientRecord {
    pub fn new(name: &str, ratio_percent: f64, cost_per_unit: f64, max_variance_percent: f64) -> Self {
        Self {
            name: name.to_string(),
            ratio_percent,
            cost_per_unit,
            max_variance_percent,
        }
    }

    /// Interval this ingredient's ratio may move within.
    #[inline]
    pub fn feasible_range(&self) -> (f64, f64) {
        feasible_range(self.ratio_percent, self.max_variance_percent)
    }

    /// Cost contribution of this ingredient at the given ratio.
    #[inline]
    pub fn cost_at(&self, ratio: f64) -> f64 {
        ratio / TOTAL_PERCENT * self.cost_per_unit
    }

    /// Range checks on every numeric field.
    pub fn validate(&self) -> Result<()> {
        let in_percent_range = |v: f64| v.is_finite() && (0.0..=TOTAL_PERCENT).contains(&v);

        if !in_percent_range(self.ratio_percent) {
            return Err(SavingsError::InvalidInput(format!(
                "{}: ratio must be between 0 and 100, got {}",
                self.name, self.ratio_percent
            )));
        }
        if !self.cost_per_unit.is_finite() || self.cost_per_unit < 0.0 {
            return Err(SavingsError::InvalidInput(format!(
                "{}: cost must be a non-negative number, got {}",
                self.name, self.cost_per_unit
            )));
        }
        if !in_percent_range(self.max_variance_percent) {
            return Err(SavingsError::InvalidInput(format!(
                "{}: max variance must be between 0 and 100, got {}",
                self.name, self.max_variance_percent
            )));
        }
        Ok(())
    }
}
