use std::fs;
use std::path::Path;

use crate::error::{Result, SavingsError};
use crate::models::{BlendInputs, IngredientRecord};

/// Load blend inputs from a file.
///
/// `.csv` files hold one ingredient per row (totals take their defaults);
/// anything else is parsed as a JSON `BlendInputs` document.
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<BlendInputs> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_records_csv(path).map(BlendInputs::new)
    } else {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Read ingredient rows from a CSV file with the table's column headers.
pub fn load_records_csv<P: AsRef<Path>>(path: P) -> Result<Vec<IngredientRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<IngredientRecord>, csv::Error>>()?;

    if records.is_empty() {
        return Err(SavingsError::InvalidInput(
            "Ingredient table is empty".to_string(),
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_json_inputs() {
        let json = r#"{
            "ingredients": [
                {"Ingredient": "Corn", "Ratio (%)": 65, "Cost per Pound": 0.12, "Max Variance (%)": 20},
                {"Ingredient": "Soy", "Ratio (%)": 35, "Cost per Pound": 0.39, "Max Variance (%)": 20}
            ],
            "total_pounds": 2000,
            "total_spend": 429
        }"#;

        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let inputs = load_inputs(file.path()).unwrap();
        assert_eq!(inputs.ingredients.len(), 2);
        assert_eq!(inputs.ingredients[1].name, "Soy");
        assert_eq!(inputs.total_pounds, 2000.0);
        assert_eq!(inputs.total_spend, 429.0);
    }

    #[test]
    fn test_load_csv_inputs() {
        let csv = "Ingredient,Ratio (%),Cost per Pound,Max Variance (%)\n\
                   Corn, 65, 0.12, 20\n\
                   Soy, 35, 0.39, 20\n";

        let mut file = Builder::new().suffix(".CSV").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let inputs = load_inputs(file.path()).unwrap();
        assert_eq!(inputs.ingredients[0], IngredientRecord::new("Corn", 65.0, 0.12, 20.0));
        assert!(inputs.blend().is_ok());
    }

    #[test]
    fn test_empty_csv_is_rejected() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"Ingredient,Ratio (%),Cost per Pound,Max Variance (%)\n")
            .unwrap();

        assert!(matches!(
            load_inputs(file.path()),
            Err(SavingsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_inputs("does/not/exist.json"),
            Err(SavingsError::Io(_))
        ));
    }
}
