use std::fmt;

use thiserror::Error;

/// The side of the created-date range a request left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingBound {
    From,
    To,
}

impl fmt::Display for MissingBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingBound::From => f.write_str("created_from"),
            MissingBound::To => f.write_str("created_to"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Incomplete created range: {missing} is required when the other bound is set")]
    IncompleteBounds { missing: MissingBound },
}
