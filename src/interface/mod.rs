pub mod prompts;
pub mod render;

pub use prompts::{collect_blend_inputs, prompt_ingredient, prompt_number, prompt_yes_no};
pub use render::{display_savings_table, display_summary, SavingsBand};
