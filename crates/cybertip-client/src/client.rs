//! The five protocol operations as async calls.
//!
//! Each call is one request/response exchange. A call succeeds only when the
//! decoded `responseCode` is zero *and* the HTTP status is 200; checks run in
//! that order so a service rejection is reported even on a non-200 reply.

use std::{sync::Arc, time::Duration};

use bytes::Bytes;
use cybertip_core::{
  FileDetails, FileId, Report, ReportId,
  response::{RESPONSE_CODE_OK, ServiceStatus},
};
use tracing::{debug, info, warn};

use crate::{
  config::ClientConfig,
  error::{Error, Operation, Result},
  submission::Submission,
  transport::{Body, HttpTransport, Reply, Request, Transport, TransportError},
};

const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

fn xml(document: Vec<u8>) -> Body {
  Body::Raw {
    content_type: XML_CONTENT_TYPE,
    bytes:        Bytes::from(document),
  }
}

/// `id=<n>` form, used by finish and retract.
fn id_form(report_id: ReportId) -> Body {
  Body::Raw {
    content_type: FORM_URLENCODED,
    bytes:        Bytes::from(format!("id={report_id}")),
  }
}

/// Result of an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uploaded {
  pub file_id: FileId,
  /// Hash of the received bytes as computed by the service, when reported.
  pub hash:    Option<String>,
}

/// Result of finishing a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finished {
  pub report_id: Option<ReportId>,
  pub files:     Vec<FileId>,
}

/// Client for the reporting service.
///
/// Cheap to clone; clones share the transport. Holds no per-call state, so
/// one client may drive any number of concurrent submissions.
pub struct Client<T = HttpTransport> {
  transport: Arc<T>,
  deadline:  Option<Duration>,
}

impl<T> Clone for Client<T> {
  fn clone(&self) -> Self {
    Self {
      transport: Arc::clone(&self.transport),
      deadline:  self.deadline,
    }
  }
}

impl Client<HttpTransport> {
  /// A client speaking HTTP to the configured environment.
  pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
    debug!(base_url = config.base_url(), "building http transport");
    Ok(Self::with_transport(HttpTransport::new(config)?))
  }
}

impl<T: Transport> Client<T> {
  pub fn with_transport(transport: T) -> Self {
    Self {
      transport: Arc::new(transport),
      deadline:  None,
    }
  }

  /// Bound every call made through this client. A call that runs past the
  /// deadline is abandoned and fails with
  /// [`TransportError::DeadlineExceeded`].
  pub fn with_deadline(mut self, deadline: Duration) -> Self {
    self.deadline = Some(deadline);
    self
  }

  pub fn transport(&self) -> &T { &self.transport }

  // ── Operations ────────────────────────────────────────────────────────────

  /// `POST /submit`. Returns the identifier assigned to the new report.
  pub async fn submit(&self, report: &Report) -> Result<ReportId> {
    let op = Operation::Submit;
    let body = cybertip_xml::encode_report(report)
      .map_err(|source| Error::Encode { operation: op, source })?;
    let reply = self.exchange(op, xml(body)).await?;
    let response = check(op, &reply, cybertip_xml::parse_report_response)?;
    let report_id = response
      .report_id
      .ok_or_else(|| missing(op, reply.status, "reportId"))?;
    info!(report_id = report_id.get(), "report submitted");
    Ok(report_id)
  }

  /// `POST /upload`. Attaches one file to an open report.
  pub async fn upload(
    &self,
    report_id: ReportId,
    filename: &str,
    data: &[u8],
  ) -> Result<Uploaded> {
    let op = Operation::Upload;
    let body = Body::Upload {
      id:       report_id.get(),
      filename: filename.to_string(),
      data:     Bytes::copy_from_slice(data),
    };
    let reply = self.exchange(op, body).await?;
    let response = check(op, &reply, cybertip_xml::parse_report_response)?;
    let file_id = response
      .file_id
      .ok_or_else(|| missing(op, reply.status, "fileId"))?;
    info!(
      report_id = report_id.get(),
      file_id = file_id.as_str(),
      bytes = data.len(),
      "file uploaded"
    );
    Ok(Uploaded { file_id, hash: response.hash })
  }

  /// `POST /fileinfo`. The details must carry both identifiers.
  pub async fn file_info(&self, details: &FileDetails) -> Result<()> {
    let op = Operation::FileInfo;
    let body = cybertip_xml::encode_file_details(details)
      .map_err(|source| Error::Encode { operation: op, source })?;
    let reply = self.exchange(op, xml(body)).await?;
    check(op, &reply, cybertip_xml::parse_report_response)?;
    debug!(
      report_id = details.report_id().map(ReportId::get),
      file_id = details.file_id().map(FileId::as_str),
      "file details sent"
    );
    Ok(())
  }

  /// `POST /finish`. Closes the report; no further calls are meaningful.
  pub async fn finish(&self, report_id: ReportId) -> Result<Finished> {
    let op = Operation::Finish;
    let reply = self.exchange(op, id_form(report_id)).await?;
    let response = check(op, &reply, cybertip_xml::parse_done_response)?;
    let finished = Finished {
      report_id: response.report_id,
      files:     response.files.map(|files| files.file_id).unwrap_or_default(),
    };
    info!(
      report_id = report_id.get(),
      files = finished.files.len(),
      "report finished"
    );
    Ok(finished)
  }

  /// `POST /retract`. Withdraws the report.
  pub async fn retract(&self, report_id: ReportId) -> Result<()> {
    let op = Operation::Retract;
    let reply = self.exchange(op, id_form(report_id)).await?;
    check(op, &reply, cybertip_xml::parse_report_response)?;
    info!(report_id = report_id.get(), "report retracted");
    Ok(())
  }

  /// Submit `report` and track the rest of its lifecycle in a handle.
  pub async fn open(&self, report: &Report) -> Result<Submission<T>> {
    let report_id = self.submit(report).await?;
    Ok(Submission::new(self.clone(), report_id))
  }

  // ── Plumbing ──────────────────────────────────────────────────────────────

  async fn exchange(&self, operation: Operation, body: Body) -> Result<Reply> {
    let request = Request {
      path: operation.path(),
      body,
    };
    debug!(
      %operation,
      path = request.path,
      bytes = request.body.len(),
      "sending request"
    );

    let call = self.transport.post(request);
    let outcome = match self.deadline {
      Some(limit) => match tokio::time::timeout(limit, call).await {
        Ok(outcome) => outcome,
        Err(_) => Err(TransportError::DeadlineExceeded),
      },
      None => call.await,
    };

    let reply = outcome.map_err(|source| {
      warn!(%operation, error = %source, "transport failure");
      Error::Transport { operation, source }
    })?;
    debug!(%operation, status = reply.status, "reply received");
    Ok(reply)
  }
}

/// Decode a reply and apply the success rule.
fn check<R: ServiceStatus>(
  operation: Operation,
  reply: &Reply,
  parse: fn(&[u8]) -> cybertip_xml::Result<R>,
) -> Result<R> {
  let response = parse(&reply.body).map_err(|e| Error::Decode {
    operation,
    status: reply.status,
    reason: e.to_string(),
    source: Some(e),
  })?;

  let code = response
    .response_code()
    .ok_or_else(|| missing(operation, reply.status, "responseCode"))?;
  if code != RESPONSE_CODE_OK {
    let description = response.description().unwrap_or("rejected").to_string();
    warn!(%operation, code, %description, "rejected by service");
    return Err(Error::Rejected {
      operation,
      code,
      description,
    });
  }

  if reply.status != 200 {
    warn!(%operation, status = reply.status, "unexpected http status");
    return Err(Error::HttpStatus {
      operation,
      status: reply.status,
    });
  }
  Ok(response)
}

fn missing(operation: Operation, status: u16, field: &str) -> Error {
  Error::Decode {
    operation,
    status,
    reason: format!("response has no {field}"),
    source: None,
  }
}
