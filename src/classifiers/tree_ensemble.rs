use serde::{Deserialize, Serialize};

use crate::classifiers::classifier::{Classifier, check_batch, sigmoid};
use crate::core::{FeatureRecord, FeatureSchema};
use crate::error::{ArtifactError, PredictionError};

/// Split nodes route `x < threshold` to `yes` and everything else to `no`.
/// A missing value (NaN) follows `missing`, or `yes` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        missing: Option<usize>,
    },
    Leaf {
        leaf: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Children must point forward in the node list, which also rules out cycles.
    fn validate(&self, tree_index: usize, n_features: usize) -> Result<(), ArtifactError> {
        let invalid = |msg: String| ArtifactError::InvalidModel(format!("tree {tree_index}: {msg}"));

        if self.nodes.is_empty() {
            return Err(invalid("has no nodes".to_string()));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Leaf { leaf } => {
                    if !leaf.is_finite() {
                        return Err(invalid(format!("leaf {i} is not finite")));
                    }
                }
                TreeNode::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    if *feature >= n_features {
                        return Err(invalid(format!(
                            "node {i} splits on feature {feature}, schema has {n_features}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(format!("node {i} has a non-finite threshold")));
                    }
                    for child in [Some(*yes), Some(*no), *missing].into_iter().flatten() {
                        if child <= i || child >= self.nodes.len() {
                            return Err(invalid(format!(
                                "node {i} points to invalid child {child}"
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    pub fn leaf_value(&self, values: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { leaf } => return *leaf,
                TreeNode::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    let x = values[*feature];
                    idx = if x.is_nan() {
                        missing.unwrap_or(*yes)
                    } else if x < *threshold {
                        *yes
                    } else {
                        *no
                    };
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[TreeNode], idx: usize) -> usize {
            match &nodes[idx] {
                TreeNode::Leaf { .. } => 1,
                TreeNode::Split { yes, no, missing, .. } => {
                    let m = missing.map(|m| walk(nodes, m)).unwrap_or(0);
                    1 + walk(nodes, *yes).max(walk(nodes, *no)).max(m)
                }
            }
        }
        walk(&self.nodes, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsembleParams {
    #[serde(default)]
    pub base_margin: f64,
    pub trees: Vec<RegressionTree>,
}

#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    schema: FeatureSchema,
    base_margin: f64,
    trees: Vec<RegressionTree>,
}

impl TreeEnsemble {
    pub fn new(schema: FeatureSchema, params: TreeEnsembleParams) -> Result<Self, ArtifactError> {
        if !params.base_margin.is_finite() {
            return Err(ArtifactError::InvalidModel(
                "base margin is not finite".to_string(),
            ));
        }
        if params.trees.is_empty() {
            return Err(ArtifactError::InvalidModel(
                "tree ensemble has no trees".to_string(),
            ));
        }
        for (i, tree) in params.trees.iter().enumerate() {
            tree.validate(i, schema.len())?;
        }

        Ok(TreeEnsemble {
            schema,
            base_margin: params.base_margin,
            trees: params.trees,
        })
    }

    pub fn number_of_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(RegressionTree::depth).max().unwrap_or(0)
    }

    pub fn margin(&self, values: &[f64]) -> f64 {
        self.base_margin + self.trees.iter().map(|t| t.leaf_value(values)).sum::<f64>()
    }
}

impl Classifier for TreeEnsemble {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict_proba(&self, batch: &[FeatureRecord]) -> Result<Vec<[f64; 2]>, PredictionError> {
        check_batch(&self.schema, batch)?;
        Ok(batch
            .iter()
            .map(|r| {
                let p = sigmoid(self.margin(r.values()));
                [1.0 - p, p]
            })
            .collect())
    }
}
