use std::path::PathBuf;
use thiserror::Error;

/// Why a style name could not be resolved to a row of the tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("tree view has no style store attached")]
    NoDataSource,

    #[error("no row for style {0:?}")]
    StyleNotFound(String),
}

/// Errors that can occur while loading or saving a color scheme
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid color scheme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Style {0:?} is defined more than once")]
    DuplicateStyle(String),

    #[error("No color scheme is loaded")]
    NoScheme,
}

pub type SchemeResult<T> = Result<T, SchemeError>;
