//! Demo: evaluate one symptom selection end-to-end
//!
//! Loads the model artifact and training dataset, then prints a triage
//! report for the symptoms passed on the command line:
//!
//! ```text
//! cargo run --example triage_report -- fever cough fatigue
//! ```

use std::path::Path;

use symptom_triage::{TriageConfig, TriageContext, TriageError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let selection: Vec<String> = std::env::args().skip(1).collect();

    let context = TriageContext::from_files(
        Path::new("data/disease_model.json"),
        Path::new("data/training.csv"),
        TriageConfig::default(),
    )?;

    match context.evaluate(&selection) {
        Ok(report) => {
            println!("Predicted diagnosis: {}", report.diagnosis);
            println!("  Confidence: {:.0}%", report.confidence * 100.0);
            println!("  Severity:   {}", report.severity.label());
            println!("  Advisory:   {}", report.advisory);
            for warning in &report.metadata.confidence_warnings {
                println!("  Caution:    {}", warning);
            }
            println!();
            println!("Disclaimer: prototype output, not medical advice.");
        }
        Err(TriageError::EmptySelection) => {
            eprintln!("Please select at least one symptom, e.g.:");
            eprintln!("  cargo run --example triage_report -- fever cough fatigue");
        }
        Err(TriageError::UnknownSymptom(name)) => {
            eprintln!("Unknown symptom \"{}\". Known symptoms:", name);
            for known in context.vocabulary().names() {
                eprintln!("  {}", known);
            }
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
