mod settings;

pub use settings::{DEFAULT_DEFAULTS_PATH, DEFAULT_MODEL_PATH, Settings, SettingsOverrides};
