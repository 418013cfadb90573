use std::path::PathBuf;

use foodex_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("missing required catalogue file: {path}")]
    MissingFile { path: PathBuf },

    #[error("invalid value in {path} row {row}: {source}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        #[source]
        source: ModelError,
    },

    #[error("cycle detected in hierarchy '{hierarchy}' at term {code}")]
    Cycle { code: String, hierarchy: String },
}

impl CatalogueError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
