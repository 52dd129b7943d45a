pub mod constants;
pub mod report;
pub mod sweep;

pub use constants::*;
pub use report::SavingsReport;
pub use sweep::{
    compute_savings, compute_savings_with, feasible_range, sweep, SweepConfig,
};
