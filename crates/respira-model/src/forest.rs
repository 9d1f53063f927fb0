//! Deserialized tree-ensemble model
//!
//! The artifact is a JSON export of a trained decision-tree ensemble. This
//! module only evaluates it; how the trees were fitted is outside the repo.
//!
//! Evaluation is deterministic: each tree is walked from the root
//! (`value <= threshold` goes left), leaf class counts normalize to a
//! probability vector, and the ensemble probability is the mean over trees.

use respira_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Artifact format version this build can evaluate
pub const FORMAT_VERSION: u32 = 1;

/// A trained tree ensemble, as deserialized from the artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    /// Artifact format version
    pub format_version: u32,

    /// Model name, carried from the training run
    pub model_name: String,

    /// Input feature names, in the order rows are presented
    pub feature_names: Vec<String>,

    /// Number of output classes
    pub n_classes: usize,

    /// The fitted trees
    pub trees: Vec<Tree>,
}

/// One decision tree, stored as a flat node array rooted at index 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

/// A tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Internal split: `value <= threshold` descends to `left`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },

    /// Terminal node holding per-class training sample counts
    Leaf { class_counts: Vec<u64> },
}

impl RandomForest {
    /// Parse and validate an artifact
    pub fn from_json(raw: &[u8]) -> Result<Self> {
        let forest: Self = serde_json::from_slice(raw)
            .map_err(|e| Error::artifact(format!("malformed model artifact: {}", e)))?;
        forest.validate()?;
        Ok(forest)
    }

    /// Structural validation of the deserialized ensemble
    pub fn validate(&self) -> Result<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(Error::artifact(format!(
                "unsupported artifact format version {} (expected {})",
                self.format_version, FORMAT_VERSION
            )));
        }
        if self.n_classes != 2 {
            return Err(Error::artifact(format!(
                "expected a binary classifier, artifact declares {} classes",
                self.n_classes
            )));
        }
        if self.feature_names.is_empty() {
            return Err(Error::artifact("artifact declares no input features"));
        }
        if self.trees.is_empty() {
            return Err(Error::artifact("artifact contains no trees"));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_names.len(), self.n_classes)
                .map_err(|e| Error::artifact(format!("tree {}: {}", i, e)))?;
        }
        Ok(())
    }

    /// Per-class probability vector for one row of feature values
    pub fn predict_proba(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.len() != self.feature_names.len() {
            return Err(Error::input(format!(
                "expected {} feature values, got {}",
                self.feature_names.len(),
                values.len()
            )));
        }

        let mut proba = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let tree_proba = tree.proba(values, self.n_classes)?;
            for (acc, p) in proba.iter_mut().zip(tree_proba) {
                *acc += p;
            }
        }
        for p in proba.iter_mut() {
            *p /= self.trees.len() as f64;
        }
        Ok(proba)
    }

    /// Predicted class index: argmax of the ensemble probabilities, first
    /// index wins ties
    pub fn predict(&self, values: &[f64]) -> Result<usize> {
        let proba = self.predict_proba(values)?;
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        Ok(best)
    }
}

impl Tree {
    /// Probability vector from walking this tree
    fn proba(&self, values: &[f64], n_classes: usize) -> Result<Vec<f64>> {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if values[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { class_counts } => {
                    let total: u64 = class_counts.iter().sum();
                    let mut proba = vec![0.0; n_classes];
                    for (p, count) in proba.iter_mut().zip(class_counts) {
                        *p = *count as f64 / total as f64;
                    }
                    return Ok(proba);
                }
            }
        }
    }

    /// Check node indices and leaf shapes.
    ///
    /// Children must point strictly forward in the node array, which both
    /// rejects cycles and guarantees traversal terminates.
    fn validate(&self, n_features: usize, n_classes: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::artifact("empty node array"));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(Error::artifact(format!(
                            "node {} splits on unknown feature index {}",
                            idx, feature
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(Error::artifact(format!(
                            "node {} has a non-finite threshold",
                            idx
                        )));
                    }
                    for child in [left, right] {
                        if *child <= idx || *child >= self.nodes.len() {
                            return Err(Error::artifact(format!(
                                "node {} has out-of-order child index {}",
                                idx, child
                            )));
                        }
                    }
                }
                Node::Leaf { class_counts } => {
                    if class_counts.len() != n_classes {
                        return Err(Error::artifact(format!(
                            "node {} has {} class counts (expected {})",
                            idx,
                            class_counts.len(),
                            n_classes
                        )));
                    }
                    if class_counts.iter().sum::<u64>() == 0 {
                        return Err(Error::artifact(format!(
                            "node {} has an all-zero class count vector",
                            idx
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(low: u64, high: u64) -> Node {
        Node::Leaf {
            class_counts: vec![low, high],
        }
    }

    fn split(feature: usize, threshold: f64, left: usize, right: usize) -> Node {
        Node::Split {
            feature,
            threshold,
            left,
            right,
        }
    }

    /// Two-feature, two-tree ensemble used across the tests
    fn toy_forest() -> RandomForest {
        RandomForest {
            format_version: FORMAT_VERSION,
            model_name: "toy".to_string(),
            feature_names: vec!["smoking".to_string(), "wheezing".to_string()],
            n_classes: 2,
            trees: vec![
                Tree {
                    nodes: vec![split(0, 0.5, 1, 2), leaf(9, 1), leaf(2, 8)],
                },
                Tree {
                    nodes: vec![split(1, 0.5, 1, 2), leaf(8, 2), leaf(1, 9)],
                },
            ],
        }
    }

    #[test]
    fn probabilities_average_over_trees() {
        let forest = toy_forest();

        let proba = forest.predict_proba(&[0.0, 0.0]).unwrap();
        assert!((proba[0] - 0.85).abs() < 1e-9);
        assert!((proba[1] - 0.15).abs() < 1e-9);
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        assert_eq!(forest.predict(&[0.0, 0.0]).unwrap(), 0);
        assert_eq!(forest.predict(&[1.0, 1.0]).unwrap(), 1);
    }

    #[test]
    fn prediction_is_deterministic() {
        let forest = toy_forest();
        let values = [1.0, 0.0];

        let first = (
            forest.predict(&values).unwrap(),
            forest.predict_proba(&values).unwrap(),
        );
        for _ in 0..10 {
            assert_eq!(forest.predict(&values).unwrap(), first.0);
            assert_eq!(forest.predict_proba(&values).unwrap(), first.1);
        }
    }

    #[test]
    fn argmax_tie_picks_the_first_class() {
        let forest = RandomForest {
            format_version: FORMAT_VERSION,
            model_name: "tie".to_string(),
            feature_names: vec!["x".to_string()],
            n_classes: 2,
            trees: vec![Tree {
                nodes: vec![leaf(5, 5)],
            }],
        };
        assert_eq!(forest.predict(&[0.0]).unwrap(), 0);
    }

    #[test]
    fn wrong_value_count_is_an_input_error() {
        let forest = toy_forest();
        let err = forest.predict_proba(&[0.0]).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn json_roundtrip() {
        let forest = toy_forest();
        let raw = serde_json::to_vec(&forest).unwrap();
        let parsed = RandomForest::from_json(&raw).unwrap();
        assert_eq!(parsed.model_name, "toy");
        assert_eq!(parsed.trees.len(), 2);
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let mut forest = toy_forest();
        forest.format_version = 99;
        let err = forest.validate().unwrap_err();
        assert!(err.to_string().contains("format version"));
    }

    #[test]
    fn non_binary_artifact_is_rejected() {
        let mut forest = toy_forest();
        forest.n_classes = 3;
        assert!(forest.validate().is_err());
    }

    #[test]
    fn backward_child_index_is_rejected() {
        let forest = RandomForest {
            format_version: FORMAT_VERSION,
            model_name: "cyclic".to_string(),
            feature_names: vec!["x".to_string()],
            n_classes: 2,
            trees: vec![Tree {
                nodes: vec![split(0, 0.5, 0, 1), leaf(1, 1)],
            }],
        };
        let err = forest.validate().unwrap_err();
        assert!(err.to_string().contains("out-of-order"));
    }

    #[test]
    fn leaf_shape_is_checked() {
        let forest = RandomForest {
            format_version: FORMAT_VERSION,
            model_name: "bad-leaf".to_string(),
            feature_names: vec!["x".to_string()],
            n_classes: 2,
            trees: vec![Tree {
                nodes: vec![Node::Leaf {
                    class_counts: vec![1, 2, 3],
                }],
            }],
        };
        assert!(forest.validate().is_err());
    }
}
