use std::fs;
use std::path::Path;

use crate::calculator::SavingsReport;
use crate::error::Result;
use crate::models::SavingsPoint;

/// Write savings points to a CSV file, one row per candidate.
pub fn write_savings_csv<P: AsRef<Path>>(points: &[SavingsPoint], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for point in points {
        wtr.serialize(point)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the full report (points sorted by savings, plus current mix) as JSON.
pub fn write_savings_json<P: AsRef<Path>>(report: &SavingsReport, path: P) -> Result<()> {
    let json = serde_json::json!({
        "current": {
            "ratio_a_percent": report.current_ratio_a,
            "weighted_cost": report.current_weighted_cost,
        },
        "points": report.sorted_by_savings(),
    });
    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}
