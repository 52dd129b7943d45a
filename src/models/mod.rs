mod blend;
mod ingredient;
mod savings;

pub use blend::{Blend, BlendInputs};
pub use ingredient::IngredientRecord;
pub use savings::SavingsPoint;
