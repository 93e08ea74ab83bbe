//! Response decoding.

use cybertip_core::response::{ReportDoneResponse, ReportResponse};
use serde::de::DeserializeOwned;

use crate::Result;

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
  let text = std::str::from_utf8(body)?;
  Ok(quick_xml::de::from_str(text)?)
}

/// Decode the answer to submit, upload, file info or retract.
pub fn parse_report_response(body: &[u8]) -> Result<ReportResponse> {
  parse(body)
}

/// Decode the answer to finish.
pub fn parse_done_response(body: &[u8]) -> Result<ReportDoneResponse> {
  parse(body)
}
