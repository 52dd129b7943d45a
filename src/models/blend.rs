use serde::{Deserialize, Serialize};

use crate::calculator::constants::{
    DEFAULT_TOTAL_POUNDS, DEFAULT_TOTAL_SPEND, RATIO_SUM_TOLERANCE, TOTAL_PERCENT,
};
use crate::error::{Result, SavingsError};
use crate::models::IngredientRecord;

/// A validated two-ingredient blend (A, B).
#[derive(Debug, Clone, PartialEq)]
pub struct Blend {
    pub a: IngredientRecord,
    pub b: IngredientRecord,
}

impl Blend {
    /// Build a blend from table rows, enforcing the two-row and sum-to-100 rules.
    pub fn from_records(records: &[IngredientRecord]) -> Result<Self> {
        let [a, b] = records else {
            return Err(SavingsError::WrongIngredientCount(records.len()));
        };

        a.validate()?;
        b.validate()?;

        let total = a.ratio_percent + b.ratio_percent;
        if (total - TOTAL_PERCENT).abs() > RATIO_SUM_TOLERANCE {
            return Err(SavingsError::InvalidBlend { total });
        }

        Ok(Self {
            a: a.clone(),
            b: b.clone(),
        })
    }

    /// Weighted cost of the blend at ratio `ratio_a` for A (B takes the rest).
    #[inline]
    pub fn weighted_cost_at(&self, ratio_a: f64) -> f64 {
        self.a.cost_at(ratio_a) + self.b.cost_at(TOTAL_PERCENT - ratio_a)
    }

    /// Σ (ratio_i / 100 * cost_i) at the current ratios.
    pub fn current_weighted_cost(&self) -> f64 {
        self.a.cost_at(self.a.ratio_percent) + self.b.cost_at(self.b.ratio_percent)
    }

    /// The same blend with A and B exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }

    pub fn ratios(&self) -> [f64; 2] {
        [self.a.ratio_percent, self.b.ratio_percent]
    }

    pub fn costs(&self) -> [f64; 2] {
        [self.a.cost_per_unit, self.b.cost_per_unit]
    }

    pub fn max_variances(&self) -> [f64; 2] {
        [self.a.max_variance_percent, self.b.max_variance_percent]
    }
}

/// Everything the caller supplies for one calculation.
///
/// `total_pounds` and `total_spend` are informational only; the sweep does
/// not read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendInputs {
    pub ingredients: Vec<IngredientRecord>,

    #[serde(default = "default_total_pounds")]
    pub total_pounds: f64,

    #[serde(default = "default_total_spend")]
    pub total_spend: f64,
}

fn default_total_pounds() -> f64 {
    DEFAULT_TOTAL_POUNDS
}

fn default_total_spend() -> f64 {
    DEFAULT_TOTAL_SPEND
}

impl BlendInputs {
    pub fn new(ingredients: Vec<IngredientRecord>) -> Self {
        Self {
            ingredients,
            total_pounds: DEFAULT_TOTAL_POUNDS,
            total_spend: DEFAULT_TOTAL_SPEND,
        }
    }

    /// Validate the table and return the blend to sweep.
    pub fn blend(&self) -> Result<Blend> {
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !non_negative(self.total_pounds) || !non_negative(self.total_spend) {
            return Err(SavingsError::InvalidInput(format!(
                "Total pounds and total spend must be non-negative numbers, got {} and {}",
                self.total_pounds, self.total_spend
            )));
        }
        Blend::from_records(&self.ingredients)
    }
}
