//! Async client for the CyberTipline reporting service.
//!
//! A report is submitted, files are uploaded to it and described, and the
//! report is then finished (or retracted). [`Client`] exposes each step as a
//! single call; [`Submission`] tracks one report through the sequence.
//!
//! ```no_run
//! # async fn demo(report: cybertip_core::Report) -> Result<(), Box<dyn std::error::Error>> {
//! use cybertip_client::{Client, ClientConfig};
//!
//! let config = ClientConfig::load(None)?;
//! let client = Client::new(&config)?;
//! let mut submission = client.open(&report).await?;
//! let uploaded = submission.upload("evidence.jpg", b"...").await?;
//! let mut details = cybertip_core::FileDetails::default();
//! submission.describe(&uploaded.file_id, &mut details).await?;
//! submission.finish().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod submission;
pub mod transport;

pub use crate::{
  client::{Client, Finished, Uploaded},
  config::{ClientConfig, Environment},
  error::{Error, Operation, Result},
  submission::{Submission, SubmissionState},
  transport::{Body, HttpTransport, Reply, Request, Transport, TransportError},
};
