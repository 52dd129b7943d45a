use std::path::Path;

use clap::Parser;

use blend_savings_rs::calculator::constants::DEFAULT_NAMES;
use blend_savings_rs::calculator::{sweep, SavingsReport, SweepConfig};
use blend_savings_rs::cli::{Cli, Command, SweepArgs};
use blend_savings_rs::error::{Result, SavingsError};
use blend_savings_rs::interface::{
    collect_blend_inputs, display_savings_table, display_summary, prompt_yes_no,
};
use blend_savings_rs::models::{BlendInputs, IngredientRecord};
use blend_savings_rs::state::{load_inputs, write_savings_csv, write_savings_json};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(),
        Command::Sweep { sweep } => cmd_sweep(&cli.file, &sweep),
        Command::Quick {
            ratios,
            costs,
            variances,
            sweep,
        } => cmd_quick(&ratios, &costs, &variances, &sweep),
    }
}

/// Enter the blend interactively and show the savings.
fn cmd_interactive() -> Result<()> {
    println!("## Ingredient Ratios and Costs");
    println!();

    let inputs = collect_blend_inputs()?;
    let report = run_sweep(&inputs, &SweepArgs::default())?;

    if !report.is_empty() && prompt_yes_no("Export results to savings.csv?", false)? {
        write_savings_csv(&report.sorted_by_savings(), "savings.csv")?;
        println!("Wrote {} rows to savings.csv", report.len());
    }

    Ok(())
}

/// Sweep the blend stored in a file.
fn cmd_sweep(file_path: &str, args: &SweepArgs) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Blend file not found: {}", file_path);
        eprintln!("Use --file to point at a JSON or CSV ingredient table.");
        return Ok(());
    }

    let inputs = load_inputs(path)?;
    println!("Loaded {} ingredients from {}", inputs.ingredients.len(), file_path);

    run_sweep(&inputs, args)?;
    Ok(())
}

/// Sweep a blend given on the command line.
fn cmd_quick(ratios: &str, costs: &str, variances: &str, args: &SweepArgs) -> Result<()> {
    let ratios = parse_pair(ratios, "ratios")?;
    let costs = parse_pair(costs, "costs")?;
    let variances = parse_pair(variances, "variances")?;

    let ingredients = (0..2)
        .map(|i| IngredientRecord::new(DEFAULT_NAMES[i], ratios[i], costs[i], variances[i]))
        .collect();

    run_sweep(&BlendInputs::new(ingredients), args)?;
    Ok(())
}

/// Validate, sweep, render, and export as requested.
fn run_sweep(
    inputs: &BlendInputs,
    args: &SweepArgs,
) -> Result<SavingsReport> {
    let blend = inputs.blend()?;
    let config = SweepConfig {
        step_percent: args.step,
    };

    let report = sweep(&blend, &config)?;

    display_savings_table(&report, &blend, args.top);
    display_summary(&report, &blend, inputs);

    if let Some(path) = &args.csv {
        write_savings_csv(&report.sorted_by_savings(), path)?;
        println!("Wrote all results to {:?}", path);
    }
    if let Some(path) = &args.json {
        write_savings_json(&report, path)?;
        println!("Wrote report to {:?}", path);
    }

    Ok(report)
}

/// Parse "a,b" into two numbers.
fn parse_pair(s: &str, what: &str) -> Result<[f64; 2]> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
        .map_err(|_| SavingsError::InvalidInput(format!("Invalid number in --{}: {}", what, s)))?;

    match values.as_slice() {
        [a, b] => Ok([*a, *b]),
        _ => Err(SavingsError::WrongIngredientCount(values.len())),
    }
}
