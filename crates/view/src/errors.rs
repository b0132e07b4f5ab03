use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Invalid configuration value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("No tokio runtime available to schedule flag updates")]
    NoRuntime,
}
