use miette::Diagnostic;
use thiserror::Error;

/// Main error type for p2d operations
#[derive(Error, Diagnostic, Debug)]
pub enum P2dError {
    #[error("IO error: {0}")]
    #[diagnostic(code(p2d::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(p2d::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(p2d::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(p2d::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(p2d::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, P2dError>;
