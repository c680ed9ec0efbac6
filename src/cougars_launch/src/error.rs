//! Error types for cougars_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("Invalid launch argument '{name}': {reason}")]
    InvalidLaunchArgument { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ParamError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
