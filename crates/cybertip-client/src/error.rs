//! Error types for the cybertip client.

use std::fmt;

use thiserror::Error;

use crate::transport::TransportError;

/// The protocol step a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  Submit,
  Upload,
  FileInfo,
  Finish,
  Retract,
}

impl Operation {
  /// Path of the endpoint below the base URL.
  pub fn path(self) -> &'static str {
    match self {
      Self::Submit => "/submit",
      Self::Upload => "/upload",
      Self::FileInfo => "/fileinfo",
      Self::Finish => "/finish",
      Self::Retract => "/retract",
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Submit => "submit",
      Self::Upload => "upload",
      Self::FileInfo => "file info",
      Self::Finish => "finish",
      Self::Retract => "retract",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("{operation}: could not encode request: {source}")]
  Encode {
    operation: Operation,
    #[source]
    source:    cybertip_xml::Error,
  },

  #[error("{operation}: {source}")]
  Transport {
    operation: Operation,
    #[source]
    source:    TransportError,
  },

  /// The reply was not a usable response document. `status` is the HTTP
  /// status it arrived with, which often explains why.
  #[error("{operation}: could not decode response (HTTP {status}): {reason}")]
  Decode {
    operation: Operation,
    status:    u16,
    reason:    String,
    #[source]
    source:    Option<cybertip_xml::Error>,
  },

  #[error("{operation}: rejected with code {code}: {description}")]
  Rejected {
    operation:   Operation,
    code:        i32,
    description: String,
  },

  #[error("{operation}: unexpected HTTP status {status}")]
  HttpStatus { operation: Operation, status: u16 },

  #[error("{operation}: {source}")]
  Identifiers {
    operation: Operation,
    #[source]
    source:    cybertip_core::Error,
  },
}

impl Error {
  pub fn operation(&self) -> Operation {
    match self {
      Self::Encode { operation, .. }
      | Self::Transport { operation, .. }
      | Self::Decode { operation, .. }
      | Self::Rejected { operation, .. }
      | Self::HttpStatus { operation, .. }
      | Self::Identifiers { operation, .. } => *operation,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
