pub mod artifacts;
pub mod catalog;
pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod prediction;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
