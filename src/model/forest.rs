//! Random-forest artifact loading and inference
//!
//! The artifact is a JSON document produced by an offline training
//! collaborator: a list of class labels plus decision trees stored as flat
//! node arrays. Inference is majority voting: each tree walks from its root
//! to a leaf class, the label with the most votes wins, and the winning
//! vote share is the confidence.
//!
//! Artifact layout:
//!
//! ```text
//! {
//!   "n_features": 132,
//!   "classes": ["Allergy", "Common Cold", ...],
//!   "trees": [
//!     { "nodes": [
//!       { "kind": "split", "feature": 3, "threshold": 0.5, "left": 1, "right": 2 },
//!       { "kind": "leaf", "class": 0 },
//!       { "kind": "leaf", "class": 1 }
//!     ]},
//!     ...
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Prediction, Predictor};
use crate::error::TriageError;

/// One node of a serialized decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal split: go left if `vector[feature] <= threshold`, else right
    Split {
        /// Feature index tested by this split
        feature: usize,
        /// Decision threshold
        threshold: f32,
        /// Node index taken when the value is at or below the threshold
        left: usize,
        /// Node index taken when the value is above the threshold
        right: usize,
    },

    /// Terminal leaf voting for one class
    Leaf {
        /// Class index this leaf votes for
        class: usize,
    },
}

/// Decision tree stored as a flat node array
///
/// Node 0 is the root; split children must come after their parent in the
/// array, which `RandomForest::validate` enforces on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Tree nodes, root first
    pub nodes: Vec<TreeNode>,
}

/// Serialized random-forest classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Input width the forest was trained on
    pub n_features: usize,

    /// Class labels, indexed by leaf class values
    pub classes: Vec<String>,

    /// Ensemble members
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Load a forest artifact from disk
    ///
    /// # Arguments
    ///
    /// * `path` - JSON artifact file
    ///
    /// # Errors
    ///
    /// Returns `TriageError::ModelError` if the file is missing or
    /// unreadable, the JSON is malformed, or the forest fails structural
    /// validation. A missing artifact is a fatal startup condition for
    /// callers building a context.
    pub fn load(path: &Path) -> Result<Self, TriageError> {
        log::debug!("Loading forest artifact from {}", path.display());

        let raw = fs::read_to_string(path).map_err(|e| {
            TriageError::ModelError(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let forest: RandomForest = serde_json::from_str(&raw).map_err(|e| {
            TriageError::ModelError(format!("Malformed artifact {}: {}", path.display(), e))
        })?;

        forest.validate()?;

        log::debug!(
            "Loaded forest: {} trees, {} classes, {} features",
            forest.trees.len(),
            forest.classes.len(),
            forest.n_features
        );

        Ok(forest)
    }

    /// Check structural invariants of the forest
    ///
    /// # Errors
    ///
    /// Returns `TriageError::ModelError` if the forest has no features,
    /// classes, or trees, if any tree is empty, or if any node references
    /// an out-of-range feature, class, or child. Children must come after
    /// their parent in the node array so that evaluation cannot loop.
    pub fn validate(&self) -> Result<(), TriageError> {
        if self.n_features == 0 {
            return Err(TriageError::ModelError(
                "Forest declares zero input features".to_string(),
            ));
        }
        if self.classes.is_empty() {
            return Err(TriageError::ModelError(
                "Forest declares no classes".to_string(),
            ));
        }
        if self.trees.is_empty() {
            return Err(TriageError::ModelError(
                "Forest contains no trees".to_string(),
            ));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(TriageError::ModelError(format!("Tree {} has no nodes", t)));
            }

            for (i, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= self.n_features {
                            return Err(TriageError::ModelError(format!(
                                "Tree {} node {}: feature index {} out of range ({} features)",
                                t, i, feature, self.n_features
                            )));
                        }
                        for &child in [left, right] {
                            if child >= tree.nodes.len() {
                                return Err(TriageError::ModelError(format!(
                                    "Tree {} node {}: child index {} out of range ({} nodes)",
                                    t,
                                    i,
                                    child,
                                    tree.nodes.len()
                                )));
                            }
                            if child <= i {
                                return Err(TriageError::ModelError(format!(
                                    "Tree {} node {}: child index {} does not follow its parent",
                                    t, i, child
                                )));
                            }
                        }
                    }
                    TreeNode::Leaf { class } => {
                        if *class >= self.classes.len() {
                            return Err(TriageError::ModelError(format!(
                                "Tree {} node {}: class index {} out of range ({} classes)",
                                t,
                                i,
                                class,
                                self.classes.len()
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Predict labels and confidences for many rows in parallel
    ///
    /// # Arguments
    ///
    /// * `rows` - Feature vectors, each of width `n_features`
    ///
    /// # Errors
    ///
    /// Same conditions as [`Predictor::predict`], for any row.
    pub fn predict_batch(&self, rows: &[Vec<f32>]) -> Result<Vec<Prediction>, TriageError> {
        rows.par_iter()
            .map(|row| {
                let counts = self.vote_counts(row)?;
                let winner = winning_class(&counts);
                Ok(Prediction {
                    label: self.classes[winner].clone(),
                    confidence: counts[winner] as f32 / self.trees.len() as f32,
                })
            })
            .collect()
    }

    /// Walk one tree from the root to a leaf class
    fn tree_vote(&self, tree: &DecisionTree, vector: &[f32]) -> Result<usize, TriageError> {
        let mut index = 0;
        // Bounded by the node count: validated forests only move forward
        // through the array, so running out of steps means a hand-built
        // forest with a cycle.
        for _ in 0..tree.nodes.len() {
            let node = tree.nodes.get(index).ok_or_else(|| {
                TriageError::ModelError(format!("Node index {} out of range", index))
            })?;
            match node {
                TreeNode::Leaf { class } => return Ok(*class),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = *vector.get(*feature).ok_or_else(|| {
                        TriageError::ModelError(format!("Feature index {} out of range", feature))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
            }
        }
        Err(TriageError::ModelError(
            "Tree walk did not reach a leaf".to_string(),
        ))
    }

    /// Count votes per class across all trees
    fn vote_counts(&self, vector: &[f32]) -> Result<Vec<u32>, TriageError> {
        if vector.len() != self.n_features {
            return Err(TriageError::InvalidInput(format!(
                "Feature vector has {} values, forest expects {}",
                vector.len(),
                self.n_features
            )));
        }
        if self.trees.is_empty() || self.classes.is_empty() {
            return Err(TriageError::ModelError(
                "Forest has no trees or no classes".to_string(),
            ));
        }

        let mut counts = vec![0u32; self.classes.len()];
        for tree in &self.trees {
            let class = self.tree_vote(tree, vector)?;
            let count = counts.get_mut(class).ok_or_else(|| {
                TriageError::ModelError(format!("Class index {} out of range", class))
            })?;
            *count += 1;
        }
        Ok(counts)
    }
}

impl Predictor for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, vector: &[f32]) -> Result<String, TriageError> {
        let counts = self.vote_counts(vector)?;
        Ok(self.classes[winning_class(&counts)].clone())
    }

    fn predict_confidence(&self, vector: &[f32]) -> Result<f32, TriageError> {
        let counts = self.vote_counts(vector)?;
        Ok(counts[winning_class(&counts)] as f32 / self.trees.len() as f32)
    }
}

/// Class with the most votes; ties resolve to the lowest class index
fn winning_class(counts: &[u32]) -> usize {
    let mut winner = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[winner] {
            winner = class;
        }
    }
    winner
}
