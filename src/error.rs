use thiserror::Error;

#[derive(Debug, Error)]
pub enum SavingsError {
    #[error("The ingredient ratios must add up to 100 (got {total})")]
    InvalidBlend { total: f64 },

    #[error("Exactly 2 ingredients are required, got {0}")]
    WrongIngredientCount(usize),

    #[error("Current weighted cost is zero; savings cannot be computed")]
    DegenerateCost,

    #[error("Mismatch in lengths of calculated ratios ({ratios}) and savings ({savings})")]
    LengthMismatch { ratios: usize, savings: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SavingsError>;
