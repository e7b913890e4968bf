//! Decision-tree ensembles in flat array form
//!
//! Each tree is stored the way fitted trees are usually exported: parallel
//! per-node arrays, node 0 as root, `-1` marking a missing child. The forest
//! probability is the mean of the normalized leaf distributions.

use reviewcheck_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Child index marking a leaf
pub const LEAF: i64 = -1;

/// One fitted decision tree.
///
/// Node `i` is a leaf when both children are `-1`. Otherwise a sample goes to
/// `children_left[i]` when `features[feature[i]] <= threshold[i]` and to
/// `children_right[i]` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class counts or fractions, one row per node
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    pub fn n_nodes(&self) -> usize {
        self.children_left.len()
    }

    /// Check the tree is well formed for the given feature and class counts
    pub fn validate(&self, n_features: usize, n_classes: usize) -> Result<()> {
        let n = self.n_nodes();
        if n == 0 {
            return Err(Error::invalid_artifact("tree has no nodes"));
        }
        let lengths = [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ];
        if lengths.iter().any(|&len| len != n) {
            return Err(Error::invalid_artifact(format!(
                "tree node arrays disagree on length ({n} left children, others {lengths:?})"
            )));
        }

        for node in 0..n {
            let distribution = &self.value[node];
            if distribution.len() != n_classes {
                return Err(Error::invalid_artifact(format!(
                    "tree node {node} has {} class values for {n_classes} classes",
                    distribution.len()
                )));
            }

            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF && right == LEAF {
                let usable = distribution.iter().all(|v| v.is_finite() && *v >= 0.0)
                    && distribution.iter().sum::<f64>() > 0.0;
                if !usable {
                    return Err(Error::invalid_artifact(format!(
                        "tree leaf {node} has no usable class distribution"
                    )));
                }
                continue;
            }

            // Children always follow their parent, so traversal terminates
            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(Error::invalid_artifact(format!(
                        "tree node {node} has invalid child {child}"
                    )));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(Error::invalid_artifact(format!(
                    "tree node {node} splits on feature {feature}, vectorizer produces {n_features}"
                )));
            }
            if !self.threshold[node].is_finite() {
                return Err(Error::invalid_artifact(format!(
                    "tree node {node} has a non-finite threshold"
                )));
            }
        }
        Ok(())
    }

    /// Normalized class distribution of the leaf `features` falls into.
    ///
    /// The tree must have passed `validate`.
    pub fn leaf_distribution(&self, features: &[f64]) -> Vec<f64> {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            // Features are compared at single precision
            let value = f64::from(features[self.feature[node] as usize] as f32);
            let next = if value <= self.threshold[node] {
                self.children_left[node]
            } else {
                self.children_right[node]
            };
            node = next as usize;
        }

        let distribution = &self.value[node];
        let total: f64 = distribution.iter().sum();
        distribution.iter().map(|v| v / total).collect()
    }
}

/// Mean of the trees' leaf distributions
pub fn predict_proba(trees: &[DecisionTree], features: &[f64], n_classes: usize) -> Vec<f64> {
    let mut probs = vec![0.0; n_classes];
    for tree in trees {
        for (p, v) in probs.iter_mut().zip(tree.leaf_distribution(features)) {
            *p += v;
        }
    }
    let n_trees = trees.len().max(1) as f64;
    probs.iter_mut().for_each(|p| *p /= n_trees);
    probs
}
