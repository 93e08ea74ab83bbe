//! XML codec for the CyberTipline reporting API.
//!
//! Requests are written with a quick-xml event writer driven by per-type
//! element tables, so each schema element name lives in exactly one place.
//! Responses are read with quick-xml's serde deserializer.
//!
//! Output carries the standard declaration, UTF-8, no indentation. Absent
//! values are omitted entirely; present-but-empty values are written.

pub mod error;
mod file;
mod report;
pub mod response;
pub mod writer;

use cybertip_core::{FileDetails, Report};

pub use error::{Error, Result};
pub use response::{parse_done_response, parse_report_response};
use writer::{WriteXml, XmlWriter};

/// Serialize a report to its `<report>` document.
pub fn encode_report(report: &Report) -> Result<Vec<u8>> {
  let mut w = XmlWriter::new()?;
  report.write_xml("report", &mut w)?;
  Ok(w.finish())
}

/// Serialize file metadata to its `<fileDetails>` document.
///
/// Fails with [`Error::MissingField`] until the report and file identifiers
/// have been assigned.
pub fn encode_file_details(details: &FileDetails) -> Result<Vec<u8>> {
  let mut w = XmlWriter::new()?;
  details.write_xml(file::DOCUMENT, &mut w)?;
  Ok(w.finish())
}
