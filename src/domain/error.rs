use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for polygulp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Interactive input ended or failed before every question was answered.
    #[error("Prompt aborted: {0}")]
    PromptAborted(String),

    /// A pre-supplied answer does not satisfy its question.
    #[error("Invalid answer for '{key}': {details}")]
    InvalidAnswer { key: String, details: String },

    /// Component name slugifies to nothing usable in a path.
    #[error("Invalid component name '{0}': must contain at least one letter or digit")]
    InvalidComponentName(String),

    /// Answers file could not be read or parsed.
    #[error("Failed to load answers file {}: {details}", .path.display())]
    AnswersFile { path: PathBuf, details: String },

    /// Template source is missing from the template root.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template failed to render.
    #[error("Failed to render template {template}: {details}")]
    TemplateRender { template: String, details: String },

    /// Filesystem failure while materializing output.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dependency installation command failed.
    #[error("Install error running '{command}': {details}")]
    Install { command: String, details: String },
}

impl AppError {
    pub fn write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Write { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::Write { source: err, .. } => err.kind(),
            AppError::PromptAborted(_) => io::ErrorKind::UnexpectedEof,
            AppError::InvalidAnswer { .. }
            | AppError::InvalidComponentName(_)
            | AppError::AnswersFile { .. }
            | AppError::TemplateRender { .. } => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::Install { .. } => io::ErrorKind::Other,
        }
    }
}
