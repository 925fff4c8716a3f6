use std::{io, path::PathBuf};

use thiserror::Error;

pub type CalResult<T> = Result<T, CalendarError>;

#[derive(Debug, Error)]
pub enum CalendarError {
    /// Rejected command line, including `--help` and `--version` requests.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("Invalid date format. Please use YYYY-MM-DD format. Got: {0}")]
    InvalidDate(String),

    #[error("date range end is out of the supported calendar: {0} + {1} days")]
    DateOutOfRange(chrono::NaiveDate, u64),

    #[error("cannot create directory `{}`: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create directory `{}`: exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
