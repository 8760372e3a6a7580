//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The config file exists but is not valid TOML for [`crate::config::FileConfig`]
    #[error("Invalid config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// HTTP client error
    #[error("{0}")]
    Http(#[from] advent_http_client::AdventError),

    /// Loading or running a solution failed
    #[error("{0}")]
    Run(#[from] advent_runner::RunError),

    /// A year/day pair outside the event
    #[error("{0}")]
    Coordinate(#[from] advent_runner::CoordinateError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_runner::RegistrationError),

    /// Rendering the solution template failed
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user cancelled an interactive command; already reported
    #[error("Cancelled")]
    Cancelled,
}
