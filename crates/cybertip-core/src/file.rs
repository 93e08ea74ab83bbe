//! Per-file metadata, sent after a file has been uploaded.
//!
//! A [`FileDetails`] is built per attachment, receives its report and file
//! identifiers exactly once after the upload round trip, then is serialized
//! and sent.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::{
  contact::{DeviceId, IpCaptureEvent},
  ids::{FileId, ReportId},
  vocab::{FileRelevance, IndustryClassification},
  Error, Result,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDetails {
  report_id:                       Option<ReportId>,
  file_id:                         Option<FileId>,
  pub file_name:                   Option<String>,
  pub original_file_name:          Option<String>,
  pub uploaded_to_esp_timestamp:   Option<DateTime<Utc>>,
  pub location_of_file:            Option<String>,
  pub file_viewed_by_esp:          Option<bool>,
  pub exif_viewed_by_esp:          Option<bool>,
  pub publicly_available:          Option<bool>,
  pub file_relevance:              Option<FileRelevance>,
  pub industry_classification:     Option<IndustryClassification>,
  pub original_file_hash:          Vec<Hash>,
  pub ip_capture_event:            Option<IpCaptureEvent>,
  pub device_id:                   Vec<DeviceId>,
  pub details:                     Vec<Details>,
  pub additional_info:             Vec<String>,
  /// Legacy top-level flag, superseded by
  /// [`FileAnnotations::potential_meme`] but still accepted.
  pub potential_meme:              Option<bool>,
  pub file_annotations:            Option<FileAnnotations>,
}

impl FileDetails {
  pub fn report_id(&self) -> Option<ReportId> { self.report_id }

  pub fn file_id(&self) -> Option<&FileId> { self.file_id.as_ref() }

  /// Attach the identifiers returned by submit and upload.
  ///
  /// Identifiers are immutable once assigned; a second call fails and leaves
  /// the originals in place.
  pub fn assign_identifiers(
    &mut self,
    report_id: ReportId,
    file_id: FileId,
  ) -> Result<()> {
    if let (Some(existing_report), Some(existing_file)) =
      (self.report_id, self.file_id.as_ref())
    {
      return Err(Error::IdentifiersAlreadyAssigned {
        report_id: existing_report,
        file_id:   existing_file.clone(),
      });
    }
    self.report_id = Some(report_id);
    self.file_id = Some(file_id);
    Ok(())
  }
}

/// A content hash. No algorithm whitelist is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Hash {
  pub hash_type: Option<String>,
  pub value:     Option<String>,
}

impl Hash {
  pub fn new(hash_type: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      hash_type: Some(hash_type.into()),
      value:     Some(value.into()),
    }
  }

  /// Lowercase hex SHA-256 of `data`, tagged `SHA256`.
  pub fn sha256(data: &[u8]) -> Self {
    let digest = Sha256::digest(data);
    Self::new("SHA256", hex::encode(digest))
  }
}

/// A group of free-form name/value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Details {
  pub name_value_pair: Vec<NameValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameValue {
  pub name:  Option<String>,
  pub value: Option<String>,
}

/// Independent flags; not mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileAnnotations {
  pub anime_drawing_virtual_hentai: Option<bool>,
  pub potential_meme:               Option<bool>,
  pub viral:                        Option<bool>,
  pub possible_self_production:     Option<bool>,
  pub physical_harm:                Option<bool>,
  pub violence_gore:                Option<bool>,
  pub bestiality:                   Option<bool>,
  pub live_streaming:               Option<bool>,
  pub infant:                       Option<bool>,
  pub generative_ai:                Option<bool>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identifiers_start_unassigned() {
    let details = FileDetails::default();
    assert_eq!(details.report_id(), None);
    assert_eq!(details.file_id(), None);
  }

  #[test]
  fn identifiers_are_assigned_once() {
    let mut details = FileDetails::default();
    details
      .assign_identifiers(ReportId::new(42), FileId::from("abc"))
      .unwrap();

    let err = details
      .assign_identifiers(ReportId::new(7), FileId::from("zzz"))
      .unwrap_err();
    assert!(matches!(err, Error::IdentifiersAlreadyAssigned { .. }));

    assert_eq!(details.report_id(), Some(ReportId::new(42)));
    assert_eq!(details.file_id().map(FileId::as_str), Some("abc"));
  }

  #[test]
  fn sha256_of_empty_input() {
    let hash = Hash::sha256(b"");
    assert_eq!(hash.hash_type.as_deref(), Some("SHA256"));
    assert_eq!(
      hash.value.as_deref(),
      Some("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
  }
}
