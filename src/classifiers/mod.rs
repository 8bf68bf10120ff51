pub mod classifier;
pub mod logistic;
pub mod tree_ensemble;

pub use classifier::{Classifier, ClassifierRef, label_for, sigmoid};
pub use logistic::{LogisticModel, LogisticParams};
pub use tree_ensemble::{RegressionTree, TreeEnsemble, TreeEnsembleParams, TreeNode};
