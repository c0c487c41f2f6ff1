use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThinCategoriesError {
    #[error("Failed to read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {path}: {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No categories left after excluding prefixed families; cannot compute usable percentage")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ThinCategoriesError>;
