use dialoguer::{Confirm, Input};

use crate::calculator::constants::{
    DEFAULT_COSTS, DEFAULT_MAX_VARIANCES, DEFAULT_NAMES, DEFAULT_RATIOS, DEFAULT_TOTAL_POUNDS,
    DEFAULT_TOTAL_SPEND,
};
use crate::error::{Result, SavingsError};
use crate::models::{BlendInputs, IngredientRecord};

/// Prompt for a number, prefilled with `default`.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| SavingsError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for one ingredient row.
pub fn prompt_ingredient(index: usize) -> Result<IngredientRecord> {
    println!("Ingredient {}:", if index == 0 { "A" } else { "B" });

    let name: String = Input::new()
        .with_prompt("  Name")
        .default(DEFAULT_NAMES[index].to_string())
        .interact_text()?;
    let ratio = prompt_number("  Ratio (%)", DEFAULT_RATIOS[index])?;
    let cost = prompt_number("  Cost per pound ($)", DEFAULT_COSTS[index])?;
    let variance = prompt_number("  Max variance (%)", DEFAULT_MAX_VARIANCES[index])?;

    Ok(IngredientRecord::new(name.trim(), ratio, cost, variance))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the ingredient table and the optional totals.
///
/// Values are returned as entered; `BlendInputs::blend` validates them.
pub fn collect_blend_inputs() -> Result<BlendInputs> {
    let ingredients = vec![prompt_ingredient(0)?, prompt_ingredient(1)?];

    let mut inputs = BlendInputs::new(ingredients);
    inputs.total_pounds = prompt_number("Total pounds (optional)", DEFAULT_TOTAL_POUNDS)?;
    inputs.total_spend = prompt_number("Total current spend (optional)", DEFAULT_TOTAL_SPEND)?;

    Ok(inputs)
}
