use std::path::PathBuf;

use thiserror::Error;

use super::model::AvocadoType;

/// A single field that failed to parse.  Loading is all-or-nothing, so the
/// first offending cell aborts the whole load.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}, column '{column}': '{value}' {reason}")]
pub struct ParseError {
    /// 1-based line in the source, header included.
    pub line: u64,
    pub column: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Errors raised while reading the dataset at startup (or on File → Open…).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unreadable or structurally malformed CSV (e.g. ragged rows).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("dataset contains no rows")]
    Empty,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Criteria naming a region or type the dataset does not contain.  The UI
/// only offers known values, so hitting this is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown avocado type: {0}")]
    UnknownType(AvocadoType),
}
