use std::io;
use std::path::PathBuf;

use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "cannot read IGC file {:?}: {}", path, cause)]
    UnreadableSource {
        path: PathBuf,
        #[fail(cause)]
        cause: io::Error,
    },

    #[fail(display = "malformed flight date header: {:?}", value)]
    MalformedDateHeader { value: String },

    #[fail(display = "track has {} position fixes, at least 2 are required", fixes)]
    InsufficientTrackData { fixes: usize },

    #[fail(display = "no flight date in file and no fallback date supplied")]
    MissingFlightDate,

    #[fail(display = "cannot write track snapshot {:?}: {}", path, cause)]
    ExportWriteFailure {
        path: PathBuf,
        #[fail(cause)]
        cause: csv::Error,
    },

    #[fail(display = "cannot read track snapshot {:?}: {}", path, reason)]
    ExportReadFailure { path: PathBuf, reason: String },

    #[fail(display = "external scoring process failed: {}", reason)]
    ScoringProcessFailure { reason: String },

    #[fail(display = "invalid bonus zone in line {}: {}", line, reason)]
    InvalidBonusZone { line: u64, reason: String },

    #[fail(display = "cannot load scoring config {:?}: {}", path, reason)]
    InvalidConfig { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn export_write(path: impl Into<PathBuf>, cause: impl Into<csv::Error>) -> Error {
        Error::ExportWriteFailure { path: path.into(), cause: cause.into() }
    }

    pub(crate) fn scoring_process(reason: impl ToString) -> Error {
        Error::ScoringProcessFailure { reason: reason.to_string() }
    }
}
