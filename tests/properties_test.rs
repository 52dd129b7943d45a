use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blend_savings_rs::calculator::{compute_savings, sweep, SweepConfig};
use blend_savings_rs::models::{Blend, IngredientRecord};

/// A random valid blend with integer ratios and variances.
fn random_blend(rng: &mut StdRng) -> ([f64; 2], [f64; 2], [f64; 2]) {
    let ratio_a = rng.gen_range(0..=100) as f64;
    let ratios = [ratio_a, 100.0 - ratio_a];
    let costs = [rng.gen_range(0.01..2.0), rng.gen_range(0.01..2.0)];
    let variances = [
        rng.gen_range(0..=100) as f64,
        rng.gen_range(0..=100) as f64,
    ];
    (ratios, costs, variances)
}

#[test]
fn test_candidates_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(123);

    for _ in 0..500 {
        let (ratios, costs, variances) = random_blend(&mut rng);
        let (candidates, savings) = compute_savings(ratios, costs, variances).unwrap();

        let a_min = (ratios[0] - variances[0]).max(0.0);
        let a_max = (ratios[0] + variances[0]).min(100.0);
        let b_min = (ratios[1] - variances[1]).max(0.0);
        let b_max = (ratios[1] + variances[1]).min(100.0);

        assert_eq!(candidates.len(), savings.len());
        for &a in &candidates {
            assert!(a >= a_min && a <= a_max, "{} outside [{}, {}]", a, a_min, a_max);
            let b = 100.0 - a;
            assert!(b >= b_min && b <= b_max, "{} outside [{}, {}]", b, b_min, b_max);
        }
    }
}

#[test]
fn test_savings_strictly_positive_and_current_excluded() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let (ratios, costs, variances) = random_blend(&mut rng);
        let (candidates, savings) = compute_savings(ratios, costs, variances).unwrap();

        assert!(savings.iter().all(|&s| s > 0.0));
        assert!(!candidates.contains(&ratios[0]));
        assert!(candidates.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let (ratios, costs, variances) = random_blend(&mut rng);
        let first = compute_savings(ratios, costs, variances).unwrap();
        let second = compute_savings(ratios, costs, variances).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_swapping_ingredients_mirrors_results() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = SweepConfig::default();

    for _ in 0..300 {
        let (ratios, costs, variances) = random_blend(&mut rng);
        let blend = Blend::from_records(&[
            IngredientRecord::new("A", ratios[0], costs[0], variances[0]),
            IngredientRecord::new("B", ratios[1], costs[1], variances[1]),
        ])
        .unwrap();

        let report = sweep(&blend, &config).unwrap();
        let mirrored = sweep(&blend.swapped(), &config).unwrap();

        assert_eq!(report.len(), mirrored.len());
        assert_float_absolute_eq!(
            report.current_weighted_cost,
            mirrored.current_weighted_cost,
            1e-12
        );

        // Ascending A in one run is descending A in the other
        for (point, other) in report.points.iter().zip(mirrored.points.iter().rev()) {
            assert_eq!(other.ratio_a_percent, point.ratio_b_percent);
            assert_eq!(other.ratio_b_percent, point.ratio_a_percent);
            assert_float_absolute_eq!(other.savings_percent, point.savings_percent, 1e-9);
        }
    }
}
