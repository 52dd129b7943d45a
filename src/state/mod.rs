mod export;
mod persistence;

pub use export::{write_savings_csv, write_savings_json};
pub use persistence::{load_inputs, load_records_csv};
