//! Error types

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CursesError {
    /// Output stream or host input failure, passed through untouched
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Mouse reporting is permanently absent
    #[error("mouse input is not supported")]
    MouseUnsupported,

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CursesError>;
