use serde::{Deserialize, Serialize};

use crate::calculator::constants::TOTAL_PERCENT;

/// A candidate ratio split and the savings it yields against the current mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsPoint {
    #[serde(rename = "Ratio of Ingredient A (%)")]
    pub ratio_a_percent: f64,

    #[serde(rename = "Ratio of Ingredient B (%)")]
    pub ratio_b_percent: f64,

    #[serde(rename = "Potential Savings (%)")]
    pub savings_percent: f64,
}

impl SavingsPoint {
    pub fn new(ratio_a_percent: f64, savings_percent: f64) -> Self {
        Self {
            ratio_a_percent,
            ratio_b_percent: TOTAL_PERCENT - ratio_a_percent,
            savings_percent,
        }
    }
}
