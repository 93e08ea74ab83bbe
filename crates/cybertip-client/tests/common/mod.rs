//! An in-process stand-in for the reporting service.
//!
//! Tracks open reports and their files the way the real service does, so
//! stale or foreign identifiers are rejected with a non-zero response code.

#![allow(dead_code)]

use std::{
  collections::HashMap,
  future::Future,
  sync::{
    Mutex,
    atomic::{AtomicBool, AtomicU16, Ordering},
  },
  time::Duration,
};

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use cybertip_client::{Body, Client, Reply, Request, Transport, TransportError};
use cybertip_core::{
  Report,
  contact::Person,
  report::{IncidentSummary, Reporter},
  vocab::IncidentType,
};
use serde::Deserialize;

pub const CODE_INVALID: i32 = 1000;

#[derive(Debug, Clone)]
pub struct Recorded {
  pub path: &'static str,
  pub body: Body,
}

#[derive(Default)]
struct Ledger {
  next_report: i64,
  next_file:   u64,
  open:        HashMap<i64, Vec<String>>,
}

#[derive(Default)]
pub struct FakeService {
  ledger:        Mutex<Ledger>,
  requests:      Mutex<Vec<Recorded>>,
  /// Non-zero overrides the HTTP status of every reply.
  status:        AtomicU16,
  omit_code:     AtomicBool,
  delay:         Mutex<Option<Duration>>,
}

impl FakeService {
  pub fn new() -> Self { Self::default() }

  pub fn client() -> Client<FakeService> { Client::with_transport(Self::new()) }

  pub fn force_status(&self, status: u16) {
    self.status.store(status, Ordering::SeqCst);
  }

  pub fn omit_response_code(&self) { self.omit_code.store(true, Ordering::SeqCst); }

  pub fn set_delay(&self, delay: Duration) {
    *self.delay.lock().unwrap() = Some(delay);
  }

  pub fn requests(&self) -> Vec<Recorded> { self.requests.lock().unwrap().clone() }

  fn handle(&self, request: &Request) -> String {
    let text = match &request.body {
      Body::Raw { bytes, .. } => String::from_utf8_lossy(bytes).into_owned(),
      Body::Upload { .. } => String::new(),
    };
    let body = text.as_str();
    let mut ledger = self.ledger.lock().unwrap();
    match request.path {
      "/submit" => {
        if !body.starts_with("<?xml") || !body.contains("<report>") {
          return self.report_response(CODE_INVALID, Some("Malformed report"), None, None);
        }
        ledger.next_report += 1;
        let id = 1_000 + ledger.next_report;
        ledger.open.insert(id, Vec::new());
        self.report_response(0, Some("Success"), Some(id), None)
      }
      "/upload" => {
        let Body::Upload { id, filename, .. } = &request.body else {
          return self.report_response(CODE_INVALID, Some("Expected a file upload"), None, None);
        };
        if filename.is_empty() {
          return self.report_response(CODE_INVALID, Some("Missing file name"), None, None);
        }
        ledger.next_file += 1;
        let file_id = format!("file-{}", ledger.next_file);
        match ledger.open.get_mut(id) {
          Some(files) => {
            files.push(file_id.clone());
            self.report_response(0, Some("Success"), Some(*id), Some(&file_id))
          }
          None => self.report_response(CODE_INVALID, Some("Invalid report id"), None, None),
        }
      }
      "/fileinfo" => {
        let ids: FileInfoIds = match quick_xml::de::from_str(body) {
          Ok(ids) => ids,
          Err(_) => {
            return self.report_response(CODE_INVALID, Some("Malformed file details"), None, None);
          }
        };
        let known = ledger
          .open
          .get(&ids.report_id)
          .is_some_and(|files| files.contains(&ids.file_id));
        if known {
          self.report_response(0, Some("Success"), Some(ids.report_id), Some(&ids.file_id))
        } else {
          self.report_response(CODE_INVALID, Some("Invalid file id"), None, None)
        }
      }
      "/finish" => match form_id(body).and_then(|id| ledger.open.remove(&id).map(|f| (id, f))) {
        Some((id, files)) => self.done_response(id, &files),
        None => self.report_response(CODE_INVALID, Some("Report is not open"), None, None),
      },
      "/retract" => match form_id(body).and_then(|id| ledger.open.remove(&id).map(|_| id)) {
        Some(id) => self.report_response(0, Some("Success"), Some(id), None),
        None => self.report_response(CODE_INVALID, None, None, None),
      },
      other => panic!("unexpected path {other}"),
    }
  }

  fn code(&self, code: i32) -> String {
    if self.omit_code.load(Ordering::SeqCst) {
      String::new()
    } else {
      format!("<responseCode>{code}</responseCode>")
    }
  }

  fn report_response(
    &self,
    code: i32,
    description: Option<&str>,
    report_id: Option<i64>,
    file_id: Option<&str>,
  ) -> String {
    let mut xml = format!(
      "<?xml version=\"1.0\" encoding=\"UTF-8\"?><reportResponse>{}",
      self.code(code)
    );
    if let Some(description) = description {
      xml.push_str(&format!("<responseDescription>{description}</responseDescription>"));
    }
    if let Some(id) = report_id {
      xml.push_str(&format!("<reportId>{id}</reportId>"));
    }
    if let Some(file_id) = file_id {
      xml.push_str(&format!("<fileId>{file_id}</fileId><hash>d41d8cd98f00b204e9800998ecf8427e</hash>"));
    }
    xml.push_str("</reportResponse>");
    xml
  }

  fn done_response(&self, report_id: i64, files: &[String]) -> String {
    let files: String = files
      .iter()
      .map(|f| format!("<fileId>{f}</fileId>"))
      .collect();
    format!(
      "<?xml version=\"1.0\" encoding=\"UTF-8\"?><reportDoneResponse>{}\
       <reportId>{report_id}</reportId><files>{files}</files></reportDoneResponse>",
      self.code(0)
    )
  }
}

impl Transport for FakeService {
  fn post(
    &self,
    request: Request,
  ) -> impl Future<Output = Result<Reply, TransportError>> + Send + '_ {
    async move {
      let delay = *self.delay.lock().unwrap();
      if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
      }
      let body = self.handle(&request);
      self.requests.lock().unwrap().push(Recorded {
        path: request.path,
        body: request.body,
      });
      let status = match self.status.load(Ordering::SeqCst) {
        0 => 200,
        forced => forced,
      };
      Ok(Reply {
        status,
        body: Bytes::from(body),
      })
    }
  }
}

/// The two identifiers a file-details document must lead with.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileInfoIds {
  report_id: i64,
  file_id:   String,
}

fn form_id(body: &str) -> Option<i64> { body.strip_prefix("id=")?.parse().ok() }

/// The smallest report the service accepts.
pub fn minimal_report() -> Report {
  Report::new(
    IncidentSummary::new(
      IncidentType::ChildPornographyPossessionManufactureAndDistribution,
      Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
    ),
    Reporter::person(Person::named("Jane", "Doe")),
  )
}
