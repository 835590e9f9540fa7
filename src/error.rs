//! Error types for command construction.

use thiserror::Error;

use crate::args::ParseError;

/// Errors that can occur while turning a launch request into a command.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Bad invocation: missing target, or submission arguments that could not be understood.
    #[error("{0}")]
    Usage(String),

    /// An extra-options variable tried to set the max heap size.
    #[error(
        "{key} is not allowed to specify max heap(Xmx) memory settings (was {value}). \
         Use the corresponding configuration instead."
    )]
    ConfigConflict { key: String, value: String },

    /// An option string could not be split into words (e.g. an unclosed quote).
    #[error("Invalid option string in {source_name}: {value}")]
    InvalidOptionString { source_name: String, value: String },

    /// The option scanner rejected the argument list.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LaunchError {
    /// Whether this error should be reported together with the usage line.
    pub fn is_usage(&self) -> bool {
        matches!(self, LaunchError::Usage(_) | LaunchError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
