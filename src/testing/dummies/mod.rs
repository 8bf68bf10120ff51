mod classifier_no_output;
mod scripted_driver;

pub use classifier_no_output::ClassifierNoOutput;
pub use scripted_driver::{Answer, ScriptedDriver};
