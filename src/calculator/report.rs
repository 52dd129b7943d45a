use std::cmp::Ordering;

use serde::Serialize;

use crate::calculator::constants::TOTAL_PERCENT;
use crate::error::{Result, SavingsError};
use crate::models::SavingsPoint;

/// Result of one sweep: the improving candidates plus the current mix.
#[derive(Debug, Clone, Serialize)]
pub struct SavingsReport {
    /// Candidates in ascending order of ingredient A's ratio.
    pub points: Vec<SavingsPoint>,
    pub current_ratio_a: f64,
    pub current_weighted_cost: f64,
}

impl SavingsReport {
    /// Zip the index-aligned ratio and savings sequences.
    ///
    /// Unequal lengths are an integrity failure, never truncated.
    pub fn from_sequences(
        ratios_a: &[f64],
        savings: &[f64],
        current_ratio_a: f64,
        current_weighted_cost: f64,
    ) -> Result<Self> {
        if ratios_a.len() != savings.len() {
            return Err(SavingsError::LengthMismatch {
                ratios: ratios_a.len(),
                savings: savings.len(),
            });
        }

        let points = ratios_a
            .iter()
            .zip(savings)
            .map(|(&ratio_a, &saving)| SavingsPoint::new(ratio_a, saving))
            .collect();

        Ok(Self {
            points,
            current_ratio_a,
            current_weighted_cost,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points with strictly positive savings.
    pub fn positive(&self) -> Vec<SavingsPoint> {
        self.points
            .iter()
            .filter(|p| p.savings_percent > 0.0)
            .copied()
            .collect()
    }

    /// Points ordered by savings, largest first. Ties keep ratio order.
    pub fn sorted_by_savings(&self) -> Vec<SavingsPoint> {
        let mut sorted = self.positive();
        sorted.sort_by(|a, b| {
            b.savings_percent
                .partial_cmp(&a.savings_percent)
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    /// The candidate with the largest savings, if any.
    pub fn best(&self) -> Option<SavingsPoint> {
        self.sorted_by_savings().into_iter().next()
    }

    /// The current mix as a point on the savings axis.
    ///
    /// Its savings is the current cost compared with itself, so always 0.
    pub fn current_point(&self) -> SavingsPoint {
        let cost = self.current_weighted_cost;
        SavingsPoint::new(self.current_ratio_a, (cost - cost) / cost * TOTAL_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        let result = SavingsReport::from_sequences(&[66.0, 67.0], &[1.0], 65.0, 0.2);
        match result {
            Err(SavingsError::LengthMismatch { ratios, savings }) => {
                assert_eq!(ratios, 2);
                assert_eq!(savings, 1);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_sorted_by_savings_descending() {
        let report =
            SavingsReport::from_sequences(&[66.0, 67.0, 68.0], &[1.0, 3.0, 2.0], 65.0, 0.2)
                .unwrap();
        let sorted = report.sorted_by_savings();
        let ratios: Vec<f64> = sorted.iter().map(|p| p.ratio_a_percent).collect();
        assert_eq!(ratios, vec![67.0, 68.0, 66.0]);
        assert_eq!(report.best().unwrap().ratio_a_percent, 67.0);
        // the report itself stays in ratio order
        assert_eq!(report.points[0].ratio_a_percent, 66.0);
    }

    #[test]
    fn test_points_carry_complement() {
        let report = SavingsReport::from_sequences(&[70.0], &[4.0], 65.0, 0.2).unwrap();
        assert_eq!(report.points[0].ratio_b_percent, 30.0);
    }

    #[test]
    fn test_current_point_is_zero() {
        let report = SavingsReport::from_sequences(&[], &[], 65.0, 0.2145).unwrap();
        assert!(report.is_empty());
        assert!(report.best().is_none());
        let current = report.current_point();
        assert_eq!(current.ratio_a_percent, 65.0);
        assert_eq!(current.savings_percent, 0.0);
    }
}
