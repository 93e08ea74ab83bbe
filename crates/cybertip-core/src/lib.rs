//! Core document types for the CyberTipline reporting API.
//!
//! This crate has no HTTP or XML dependencies. It mirrors
//! the service's externally versioned schema field-for-field: every optional
//! element is an `Option`, every repeated element a `Vec`, and every closed
//! vocabulary an enum with one fixed wire token per value.

pub mod contact;
pub mod error;
pub mod file;
pub mod ids;
pub mod report;
pub mod response;
pub mod vocab;

pub use error::{Error, Result};
pub use file::FileDetails;
pub use ids::{FileId, ReportId};
pub use report::Report;
pub use vocab::Vocabulary;
