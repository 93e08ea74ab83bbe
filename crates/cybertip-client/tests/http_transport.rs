//! The reqwest transport against a mock HTTP server.
//!
//! Checks what actually goes over the wire: paths below the base URL, content
//! types, basic auth, the upload form and the id form. Uses wiremock for the reachable cases
//! and a closed port for the unreachable one.

mod common;

use std::time::Duration;

use common::minimal_report;
use cybertip_client::{
  Client, ClientConfig, Environment, Error, Operation, TransportError,
};
use cybertip_core::{FileId, ReportId};
use wiremock::{
  Mock, MockServer, ResponseTemplate,
  matchers::{
    basic_auth, body_string, body_string_contains, header, header_regex,
    method, path,
  },
};

fn config_for(server: &MockServer) -> ClientConfig {
  ClientConfig::new("esp-user", "esp-pass", Environment::Testing)
    .with_base_url(format!("{}/ispws", server.uri()))
}

fn ok_body(report_id: i64) -> String {
  format!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?><reportResponse>\
     <responseCode>0</responseCode><responseDescription>Success</responseDescription>\
     <reportId>{report_id}</reportId></reportResponse>"
  )
}

#[tokio::test]
async fn submit_posts_xml_with_basic_auth() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/ispws/submit"))
    .and(header("content-type", "text/xml; charset=utf-8"))
    .and(basic_auth("esp-user", "esp-pass"))
    .respond_with(ResponseTemplate::new(200).set_body_string(ok_body(4564654)))
    .expect(1)
    .mount(&server)
    .await;

  let client = Client::new(&config_for(&server)).unwrap();
  let report_id = client.submit(&minimal_report()).await.unwrap();
  assert_eq!(report_id, ReportId::new(4564654));
}

#[tokio::test]
async fn upload_posts_a_multipart_form() {
  let server = MockServer::start().await;
  let body = "<reportResponse><responseCode>0</responseCode>\
              <reportId>77</reportId><fileId>f-1</fileId>\
              <hash>abc</hash></reportResponse>";
  Mock::given(method("POST"))
    .and(path("/ispws/upload"))
    .and(header_regex("content-type", "^multipart/form-data; boundary="))
    .and(basic_auth("esp-user", "esp-pass"))
    .and(body_string_contains("name=\"id\"\r\n\r\n77\r\n"))
    .and(body_string_contains("name=\"file\"; filename=\"a.png\""))
    .and(body_string_contains("application/octet-stream"))
    .and(body_string_contains("not really a png"))
    .respond_with(ResponseTemplate::new(200).set_body_string(body))
    .expect(1)
    .mount(&server)
    .await;

  let client = Client::new(&config_for(&server)).unwrap();
  let uploaded = client
    .upload(ReportId::new(77), "a.png", b"not really a png")
    .await
    .unwrap();
  assert_eq!(uploaded.file_id, FileId::from("f-1"));
  assert_eq!(uploaded.hash.as_deref(), Some("abc"));
}

#[tokio::test]
async fn retract_posts_id_form() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/ispws/retract"))
    .and(header("content-type", "application/x-www-form-urlencoded"))
    .and(body_string("id=77"))
    .respond_with(ResponseTemplate::new(200).set_body_string(ok_body(77)))
    .expect(1)
    .mount(&server)
    .await;

  let client = Client::new(&config_for(&server)).unwrap();
  client.retract(ReportId::new(77)).await.unwrap();
}

#[tokio::test]
async fn rejection_on_error_status_keeps_the_description() {
  let server = MockServer::start().await;
  let body = "<reportResponse><responseCode>3000</responseCode>\
              <responseDescription>Invalid report</responseDescription>\
              </reportResponse>";
  Mock::given(method("POST"))
    .and(path("/ispws/submit"))
    .respond_with(ResponseTemplate::new(400).set_body_string(body))
    .mount(&server)
    .await;

  let client = Client::new(&config_for(&server)).unwrap();
  let err = client.submit(&minimal_report()).await.unwrap_err();
  match err {
    Error::Rejected { operation, code, description } => {
      assert_eq!(operation, Operation::Submit);
      assert_eq!(code, 3000);
      assert_eq!(description, "Invalid report");
    }
    other => panic!("expected rejection, got {other:?}"),
  }
}

#[tokio::test]
async fn non_xml_body_is_a_decode_error() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
    .mount(&server)
    .await;

  let client = Client::new(&config_for(&server)).unwrap();
  let err = client.finish(ReportId::new(1)).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Decode { operation: Operation::Finish, status: 502, .. }
  ));
}

#[tokio::test]
async fn html_error_page_keeps_the_status() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(
      ResponseTemplate::new(401)
        .set_body_string("<html><body><h1>401 Unauthorized</h1></body></html>"),
    )
    .mount(&server)
    .await;

  let client = Client::new(&config_for(&server)).unwrap();
  let err = client.submit(&minimal_report()).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Decode { operation: Operation::Submit, status: 401, .. }
  ));
}

#[tokio::test]
async fn deadline_applies_to_http_calls() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string(ok_body(1))
        .set_delay(Duration::from_secs(5)),
    )
    .mount(&server)
    .await;

  let client = Client::new(&config_for(&server))
    .unwrap()
    .with_deadline(Duration::from_millis(100));
  let err = client.submit(&minimal_report()).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Transport { source: TransportError::DeadlineExceeded, .. }
  ));
}

#[tokio::test]
async fn configured_timeout_surfaces_as_timeout() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string(ok_body(1))
        .set_delay(Duration::from_secs(3)),
    )
    .mount(&server)
    .await;

  let mut config = config_for(&server);
  config.timeout_secs = 1;
  let client = Client::new(&config).unwrap();
  let err = client.submit(&minimal_report()).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Transport { source: TransportError::Timeout, .. }
  ));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
  let config = ClientConfig::new("u", "p", Environment::Testing)
    .with_base_url("http://127.0.0.1:1/ispws");
  let client = Client::new(&config).unwrap();

  let err = client.submit(&minimal_report()).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Transport { operation: Operation::Submit, .. }
  ));
}
