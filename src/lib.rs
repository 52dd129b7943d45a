pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{Result, SavingsError};
pub use models::{Blend, BlendInputs, IngredientRecord, SavingsPoint};
