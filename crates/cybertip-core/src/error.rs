//! Error types for `cybertip-core`.

use thiserror::Error;

use crate::ids::{FileId, ReportId};

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown {vocabulary} token: {token:?}")]
  UnknownToken {
    vocabulary: &'static str,
    token:      String,
  },

  #[error(
    "file details already carry identifiers (report {report_id}, file \
     {file_id})"
  )]
  IdentifiersAlreadyAssigned {
    report_id: ReportId,
    file_id:   FileId,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
