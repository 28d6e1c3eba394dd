//! Demo: measure artifact agreement with the training table
//!
//! Loads the forest and the full training dataset, predicts every row in
//! parallel, and prints the fraction of rows where the prediction matches
//! the recorded prognosis.

use std::path::Path;

use symptom_triage::dataset;
use symptom_triage::{RandomForest, TriageConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let config = TriageConfig::default();

    let forest = RandomForest::load(Path::new("data/disease_model.json"))?;
    let table = dataset::load_dataset(Path::new("data/training.csv"), &config.label_column)?;

    if table.is_empty() {
        eprintln!("Training table has no rows to evaluate.");
        return Ok(());
    }

    let rows: Vec<Vec<f32>> = table
        .records()
        .iter()
        .map(|record| record.features.clone())
        .collect();
    let predictions = forest.predict_batch(&rows)?;

    let agreed = predictions
        .iter()
        .zip(table.records())
        .filter(|(prediction, record)| prediction.label == record.prognosis)
        .count();

    println!(
        "{} / {} rows agree ({:.1}%)",
        agreed,
        table.len(),
        100.0 * agreed as f32 / table.len() as f32
    );

    Ok(())
}
