//! A submitted report and the calls that can still follow it.
//!
//! A [`Submission`] exists only after a successful submit, so it always has a
//! report identifier. `finish` and `retract` consume the handle: nothing can
//! be sent for a report once it is closed.

use cybertip_core::{FileDetails, FileId, ReportId};
use tracing::debug;

use crate::{
  client::{Client, Finished, Uploaded},
  error::{Error, Operation, Result},
  transport::{HttpTransport, Transport},
};

/// Local view of where a submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
  Submitted,
  /// Number of files uploaded so far.
  FilesAttached(usize),
}

pub struct Submission<T = HttpTransport> {
  client:    Client<T>,
  report_id: ReportId,
  state:     SubmissionState,
}

impl<T: Transport> Submission<T> {
  pub(crate) fn new(client: Client<T>, report_id: ReportId) -> Self {
    Self {
      client,
      report_id,
      state: SubmissionState::Submitted,
    }
  }

  pub fn report_id(&self) -> ReportId { self.report_id }

  pub fn state(&self) -> SubmissionState { self.state }

  /// Upload one file to this report.
  pub async fn upload(&mut self, filename: &str, data: &[u8]) -> Result<Uploaded> {
    let uploaded = self.client.upload(self.report_id, filename, data).await?;
    self.state = match self.state {
      SubmissionState::Submitted => SubmissionState::FilesAttached(1),
      SubmissionState::FilesAttached(n) => SubmissionState::FilesAttached(n + 1),
    };
    Ok(uploaded)
  }

  /// Attach this report's identifier and `file_id` to `details`, then send
  /// them. Details that already carry exactly these identifiers are sent
  /// again unchanged; details carrying other identifiers are refused.
  pub async fn describe(
    &self,
    file_id: &FileId,
    details: &mut FileDetails,
  ) -> Result<()> {
    let already = details.report_id() == Some(self.report_id)
      && details.file_id() == Some(file_id);
    if !already {
      details
        .assign_identifiers(self.report_id, file_id.clone())
        .map_err(|source| Error::Identifiers {
          operation: Operation::FileInfo,
          source,
        })?;
      debug!(
        report_id = self.report_id.get(),
        file_id = file_id.as_str(),
        "identifiers assigned"
      );
    }
    self.client.file_info(details).await
  }

  pub async fn finish(self) -> Result<Finished> {
    self.client.finish(self.report_id).await
  }

  pub async fn retract(self) -> Result<()> {
    self.client.retract(self.report_id).await
  }
}
