//! Response documents returned by the service.
//!
//! Every field is optional on the wire. An absent `responseCode` is not the
//! same as a present zero: only the latter means success.

use serde::Deserialize;

use crate::ids::{FileId, ReportId};

/// The "no error" response code.
pub const RESPONSE_CODE_OK: i32 = 0;

/// Returned by submit, upload, file info and retract.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
  pub response_code:        Option<i32>,
  pub response_description: Option<String>,
  pub report_id:            Option<ReportId>,
  pub file_id:              Option<FileId>,
  /// Hash of the uploaded bytes as computed by the service.
  pub hash:                 Option<String>,
}

/// Returned by finish.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDoneResponse {
  pub response_code: Option<i32>,
  pub report_id:     Option<ReportId>,
  pub files:         Option<DoneFiles>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoneFiles {
  #[serde(default)]
  pub file_id: Vec<FileId>,
}

/// The status part common to both response shapes.
pub trait ServiceStatus {
  fn response_code(&self) -> Option<i32>;

  fn description(&self) -> Option<&str> { None }
}

impl ServiceStatus for ReportResponse {
  fn response_code(&self) -> Option<i32> { self.response_code }

  fn description(&self) -> Option<&str> {
    self.response_description.as_deref()
  }
}

impl ServiceStatus for ReportDoneResponse {
  fn response_code(&self) -> Option<i32> { self.response_code }
}
