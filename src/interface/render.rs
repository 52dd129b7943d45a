use crate::calculator::constants::{GAIN_THRESHOLD_PERCENT, LOSS_THRESHOLD_PERCENT};
use crate::calculator::SavingsReport;
use crate::models::{Blend, BlendInputs};

/// Display bucket for a savings value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsBand {
    Gain,
    Marginal,
    Loss,
}

impl SavingsBand {
    pub fn classify(savings_percent: f64) -> Self {
        if savings_percent > GAIN_THRESHOLD_PERCENT {
            SavingsBand::Gain
        } else if savings_percent < LOSS_THRESHOLD_PERCENT {
            SavingsBand::Loss
        } else {
            SavingsBand::Marginal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SavingsBand::Gain => "green",
            SavingsBand::Marginal => "yellow",
            SavingsBand::Loss => "red",
        }
    }
}

/// Display the improving candidates, best first.
///
/// `limit` caps the number of rows shown.
pub fn display_savings_table(report: &SavingsReport, blend: &Blend, limit: Option<usize>) {
    let sorted = report.sorted_by_savings();
    if sorted.is_empty() {
        println!("No ratio within the allowed variance lowers the blend cost.");
        return;
    }

    let shown = limit.unwrap_or(sorted.len()).min(sorted.len());
    let width_a = blend.a.name.len().max(6);
    let width_b = blend.b.name.len().max(6);

    println!();
    println!("=== Detailed Savings Data ===");
    println!();
    println!(
        "{:>4}  {:>wa$}  {:>wb$}  {:>10}  {}",
        "#",
        format!("{} %", blend.a.name),
        format!("{} %", blend.b.name),
        "Savings %",
        "Band",
        wa = width_a + 2,
        wb = width_b + 2
    );

    for (i, point) in sorted.iter().take(shown).enumerate() {
        let cost = blend.weighted_cost_at(point.ratio_a_percent);
        println!(
            "{:>4}  {:>wa$.1}  {:>wb$.1}  {:>10.2}  {} (${:.4}/lb)",
            i + 1,
            point.ratio_a_percent,
            point.ratio_b_percent,
            point.savings_percent,
            SavingsBand::classify(point.savings_percent).label(),
            cost,
            wa = width_a + 2,
            wb = width_b + 2
        );
    }

    if shown < sorted.len() {
        println!("  ... {} more", sorted.len() - shown);
    }
}

/// Display the current mix and the headline numbers of a sweep.
pub fn display_summary(report: &SavingsReport, blend: &Blend, inputs: &BlendInputs) {
    let current = report.current_point();

    println!();
    println!("--- Summary ---");
    println!(
        "Current mix: {} {:.1}% / {} {:.1}%",
        blend.a.name, blend.a.ratio_percent, blend.b.name, blend.b.ratio_percent
    );
    println!(
        "Current weighted cost: ${:.4}/lb (savings {:.2}%)",
        report.current_weighted_cost, current.savings_percent
    );
    let (a_low, a_high) = blend.a.feasible_range();
    let (b_low, b_high) = blend.b.feasible_range();
    println!(
        "Allowed: {} {:.1}-{:.1}%, {} {:.1}-{:.1}%",
        blend.a.name, a_low, a_high, blend.b.name, b_low, b_high
    );
    println!("Improving ratios: {}", report.len());

    if let Some(best) = report.best() {
        println!(
            "Best: {} {:.1}% / {} {:.1}% saves {:.2}% (${:.4}/lb)",
            blend.a.name,
            best.ratio_a_percent,
            blend.b.name,
            best.ratio_b_percent,
            best.savings_percent,
            blend.weighted_cost_at(best.ratio_a_percent)
        );
    }

    println!(
        "Total pounds: {:.2}, total spend: ${:.2} (informational)",
        inputs.total_pounds, inputs.total_spend
    );
    println!();
}
