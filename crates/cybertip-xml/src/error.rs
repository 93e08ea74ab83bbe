//! Error types for the cybertip-xml codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("xml write error: {0}")]
  Encode(String),

  #[error("{document} is missing required field {field}")]
  MissingField {
    document: &'static str,
    field:    &'static str,
  },

  #[error("response is not valid UTF-8: {0}")]
  Utf8(#[from] std::str::Utf8Error),

  #[error("malformed response document: {0}")]
  Decode(#[from] quick_xml::DeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
