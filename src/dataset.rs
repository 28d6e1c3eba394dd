//! Training dataset loading
//!
//! The training table is consulted at startup to recover the symptom
//! vocabulary: its header columns are symptom names plus one label column.
//! The full table can also be parsed into rows for batch evaluation of a
//! model artifact against the data it was trained on.
//!
//! Cells are split on commas; the dataset family this engine targets uses
//! bare identifiers and 0/1 digits, so no quoting rules apply.

use std::fs;
use std::path::Path;

use crate::error::TriageError;
use crate::vocabulary::SymptomVocabulary;

/// Default name of the disease label column
pub const DEFAULT_LABEL_COLUMN: &str = "prognosis";

/// One training row: feature vector plus recorded prognosis
#[derive(Debug, Clone)]
pub struct TrainingRecord {
    /// Symptom feature values in vocabulary order
    pub features: Vec<f32>,

    /// Recorded disease label
    pub prognosis: String,
}

/// Parsed training table
#[derive(Debug, Clone)]
pub struct TrainingDataset {
    vocabulary: SymptomVocabulary,
    records: Vec<TrainingRecord>,
}

impl TrainingDataset {
    /// Vocabulary recovered from the header row
    pub fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    /// Parsed training rows
    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    /// Number of training rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Recover the symptom vocabulary from a training dataset's header row
///
/// Reads only the header: every column except `label_column` (and empty
/// trailing columns left by a dangling comma) becomes a symptom name, in
/// column order.
///
/// # Arguments
///
/// * `path` - Training dataset file
/// * `label_column` - Name of the disease label column
///
/// # Errors
///
/// Returns `TriageError::DatasetError` if the file is missing, unreadable,
/// or empty, or if the label column is absent from the header. A missing
/// dataset is a fatal startup condition for callers building a context.
pub fn load_vocabulary(path: &Path, label_column: &str) -> Result<SymptomVocabulary, TriageError> {
    log::debug!("Loading vocabulary from {}", path.display());

    let raw = fs::read_to_string(path).map_err(|e| {
        TriageError::DatasetError(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let header = raw.lines().next().ok_or_else(|| {
        TriageError::DatasetError(format!("{}: file is empty", path.display()))
    })?;

    header_vocabulary(&parse_row(header), label_column)
}

/// Parse the full training table
///
/// # Arguments
///
/// * `path` - Training dataset file
/// * `label_column` - Name of the disease label column
///
/// # Errors
///
/// Returns `TriageError::DatasetError` on unreadable files, a missing label
/// column, ragged rows, non-numeric feature cells, or empty labels.
pub fn load_dataset(path: &Path, label_column: &str) -> Result<TrainingDataset, TriageError> {
    log::debug!("Loading training dataset from {}", path.display());

    let raw = fs::read_to_string(path).map_err(|e| {
        TriageError::DatasetError(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let mut lines = raw.lines();
    let header = lines.next().ok_or_else(|| {
        TriageError::DatasetError(format!("{}: file is empty", path.display()))
    })?;

    let columns = parse_row(header);
    let vocabulary = header_vocabulary(&columns, label_column)?;

    // Positions to read from each row: the label cell and, in order, every
    // symptom cell. Computed once from the header.
    let label_position = columns
        .iter()
        .position(|c| c.as_str() == label_column)
        .expect("label column verified by header_vocabulary");
    let feature_positions: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.as_str() != label_column && !c.is_empty())
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();

    for (line_number, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let cells = parse_row(line);
        if cells.len() != columns.len() {
            return Err(TriageError::DatasetError(format!(
                "{} line {}: expected {} cells, got {}",
                path.display(),
                line_number + 2,
                columns.len(),
                cells.len()
            )));
        }

        let mut features = Vec::with_capacity(feature_positions.len());
        for &i in &feature_positions {
            let value: f32 = cells[i].parse().map_err(|_| {
                TriageError::DatasetError(format!(
                    "{} line {}: non-numeric feature value \"{}\" in column \"{}\"",
                    path.display(),
                    line_number + 2,
                    cells[i],
                    columns[i]
                ))
            })?;
            features.push(value);
        }

        let prognosis = cells[label_position].clone();
        if prognosis.is_empty() {
            return Err(TriageError::DatasetError(format!(
                "{} line {}: empty prognosis label",
                path.display(),
                line_number + 2
            )));
        }

        records.push(TrainingRecord { features, prognosis });
    }

    log::debug!(
        "Loaded {} training rows over {} symptoms",
        records.len(),
        vocabulary.len()
    );

    Ok(TrainingDataset { vocabulary, records })
}

/// Split one line into trimmed cells, stripping a leading BOM
fn parse_row(line: &str) -> Vec<String> {
    line.strip_prefix('\u{feff}')
        .unwrap_or(line)
        .split(',')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Build the vocabulary from header columns, excluding the label column
fn header_vocabulary(
    columns: &[String],
    label_column: &str,
) -> Result<SymptomVocabulary, TriageError> {
    if !columns.iter().any(|c| c.as_str() == label_column) {
        return Err(TriageError::DatasetError(format!(
            "Label column \"{}\" not found in header",
            label_column
        )));
    }

    let names: Vec<String> = columns
        .iter()
        .filter(|c| c.as_str() != label_column && !c.is_empty())
        .cloned()
        .collect();

    SymptomVocabulary::new(names)
}
