mod batch_spy_classifier;

pub use batch_spy_classifier::{BatchSpyClassifier, BatchSpyHandle};
