//! The boundary between the protocol and the wire.
//!
//! The protocol layer only needs "post this body to this path and give me
//! the status and body back". [`HttpTransport`] is the production
//! implementation; tests substitute an in-process fake service.

use std::future::Future;

use bytes::Bytes;
use reqwest::{
  header::CONTENT_TYPE,
  multipart::{Form, Part},
};
use thiserror::Error;

use crate::config::ClientConfig;

// ─── Types ───────────────────────────────────────────────────────────────────

/// One outgoing call: a path below the base URL and its body.
#[derive(Debug, Clone)]
pub struct Request {
  pub path: &'static str,
  pub body: Body,
}

/// What a request carries.
///
/// Uploads stay structured so each transport encodes the form itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
  /// A finished document sent as-is.
  Raw {
    content_type: &'static str,
    bytes:        Bytes,
  },
  /// A `multipart/form-data` upload: the report `id` and one `file` part.
  Upload {
    id:       i64,
    filename: String,
    data:     Bytes,
  },
}

impl Body {
  /// Payload size, excluding any form framing.
  pub fn len(&self) -> usize {
    match self {
      Self::Raw { bytes, .. } => bytes.len(),
      Self::Upload { data, .. } => data.len(),
    }
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// The raw answer: HTTP status and body, undecoded.
#[derive(Debug, Clone)]
pub struct Reply {
  pub status: u16,
  pub body:   Bytes,
}

#[derive(Debug, Error)]
pub enum TransportError {
  #[error("request timed out")]
  Timeout,
  #[error("deadline exceeded")]
  DeadlineExceeded,
  #[error("connection failed: {0}")]
  Connect(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("http client error: {0}")]
  Build(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("transport error: {0}")]
  Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest::Error> for TransportError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_timeout() {
      Self::Timeout
    } else if e.is_connect() {
      Self::Connect(Box::new(e))
    } else if e.is_builder() {
      Self::Build(Box::new(e))
    } else {
      Self::Other(Box::new(e))
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the HTTP exchange.
///
/// Returns a `Send` future so a client can be shared across tokio tasks.
pub trait Transport: Send + Sync {
  fn post(
    &self,
    request: Request,
  ) -> impl Future<Output = Result<Reply, TransportError>> + Send + '_;
}

// ─── HTTP ────────────────────────────────────────────────────────────────────

/// `reqwest`-backed transport with basic auth and a pooled connection set.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpTransport {
  client:   reqwest::Client,
  base_url: String,
  username: String,
  password: String,
}

impl HttpTransport {
  pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout())
      .connect_timeout(config.connect_timeout())
      .pool_idle_timeout(config.pool_idle_timeout())
      .pool_max_idle_per_host(config.pool_max_idle_per_host)
      .tcp_keepalive(config.tcp_keepalive())
      .build()?;
    Ok(Self {
      client,
      base_url: config.base_url().to_string(),
      username: config.username.clone(),
      password: config.password.clone(),
    })
  }

  fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

impl Transport for HttpTransport {
  fn post(
    &self,
    request: Request,
  ) -> impl Future<Output = Result<Reply, TransportError>> + Send + '_ {
    async move {
      let builder = self
        .client
        .post(self.url(request.path))
        .basic_auth(&self.username, Some(&self.password));
      let builder = match request.body {
        Body::Raw {
          content_type,
          bytes,
        } => builder.header(CONTENT_TYPE, content_type).body(bytes),
        Body::Upload { id, filename, data } => {
          let file = Part::bytes(data.to_vec())
            .file_name(filename)
            .mime_str("application/octet-stream")?;
          let form = Form::new().text("id", id.to_string()).part("file", file);
          builder.multipart(form)
        }
      };
      let resp = builder.send().await?;

      let status = resp.status().as_u16();
      let body = resp.bytes().await?;
      Ok(Reply { status, body })
    }
  }
}
