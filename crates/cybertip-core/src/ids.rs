//! Identifiers handed out by the remote service.
//!
//! Neither identifier is ever minted locally. A [`ReportId`] comes back from
//! a successful submit, a [`FileId`] from a successful upload.

use std::fmt;

use serde::Deserialize;

/// The 64-bit identifier of a submitted report.
///
/// Decodes straight from the `reportId` element of a response.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize,
)]
#[serde(transparent)]
pub struct ReportId(i64);

impl ReportId {
  pub const fn new(raw: i64) -> Self { Self(raw) }

  pub const fn get(self) -> i64 { self.0 }
}

impl From<i64> for ReportId {
  fn from(raw: i64) -> Self { Self(raw) }
}

impl fmt::Display for ReportId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// The opaque identifier of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
  pub fn new(raw: impl Into<String>) -> Self { Self(raw.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for FileId {
  fn from(raw: String) -> Self { Self(raw) }
}

impl From<&str> for FileId {
  fn from(raw: &str) -> Self { Self(raw.to_string()) }
}

impl fmt::Display for FileId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
