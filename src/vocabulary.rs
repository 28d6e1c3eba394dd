//! Symptom vocabulary
//!
//! The ordered list of all known symptom names, recovered once at startup
//! from the training dataset's header. Its order defines the positional
//! meaning of every feature vector the predictor sees, so it is immutable
//! after construction. A name→index map is precomputed so per-symptom lookup
//! is O(1) and a miss is a typed error instead of a scan failure.

use std::collections::HashMap;

use crate::error::TriageError;

/// Ordered symptom vocabulary with O(1) name lookup
#[derive(Debug, Clone)]
pub struct SymptomVocabulary {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SymptomVocabulary {
    /// Build a vocabulary from an ordered list of symptom names
    ///
    /// # Arguments
    ///
    /// * `names` - Symptom names in dataset column order
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if the list is empty, contains an
    /// empty name, or contains a duplicate name.
    ///
    /// # Example
    ///
    /// ```
    /// use symptom_triage::vocabulary::SymptomVocabulary;
    ///
    /// let vocabulary = SymptomVocabulary::new(vec![
    ///     "fever".to_string(),
    ///     "cough".to_string(),
    ///     "fatigue".to_string(),
    /// ])?;
    ///
    /// assert_eq!(vocabulary.len(), 3);
    /// assert_eq!(vocabulary.index_of("cough"), Some(1));
    /// # Ok::<(), symptom_triage::TriageError>(())
    /// ```
    pub fn new(names: Vec<String>) -> Result<Self, TriageError> {
        if names.is_empty() {
            return Err(TriageError::InvalidInput(
                "Vocabulary must contain at least one symptom".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(TriageError::InvalidInput(format!(
                    "Empty symptom name at column {}",
                    i
                )));
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(TriageError::InvalidInput(format!(
                    "Duplicate symptom name \"{}\"",
                    name
                )));
            }
        }

        log::debug!("Built vocabulary of {} symptoms", names.len());

        Ok(Self { names, index })
    }

    /// Number of symptoms, which is also the width of every feature vector
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the vocabulary holds no symptoms (never true after `new`)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Symptom names in positional order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a symptom name, if known
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// True if the symptom name is part of the vocabulary
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}
