//! The report document, root of a submission.
//!
//! A [`Report`] is assembled fully in memory, serialized once and sent. It is
//! never mutated afterwards; the service answers with a [`ReportId`] that
//! every later call refers to.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
  contact::{Address, ContactPerson, DeviceId, Email, IpCaptureEvent, Person, Phone},
  ids::ReportId,
  vocab::{AssociatedAccountType, BatchedReportReason, Country, IncidentType},
};

// ─── Report ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
  pub batched_report:          Option<BatchedReport>,
  pub incident_summary:        IncidentSummary,
  pub internet_details:        Vec<InternetDetails>,
  pub law_enforcement:         Option<LawEnforcement>,
  pub reporter:                Reporter,
  pub person_or_user_reported: Option<PersonOrUserReported>,
  pub intended_recipient:      Vec<IntendedRecipient>,
  pub victim:                  Vec<Victim>,
  pub additional_info:         Option<String>,
}

impl Report {
  /// A report carrying only its two required blocks.
  pub fn new(incident_summary: IncidentSummary, reporter: Reporter) -> Self {
    Self {
      batched_report: None,
      incident_summary,
      internet_details: Vec::new(),
      law_enforcement: None,
      reporter,
      person_or_user_reported: None,
      intended_recipient: Vec::new(),
      victim: Vec::new(),
      additional_info: None,
    }
  }
}

/// Marks a report shell reused across near-duplicate file submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchedReport {
  pub reason: BatchedReportReason,
}

// ─── Incident summary ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct IncidentSummary {
  pub incident_type:                  IncidentType,
  pub platform:                       Option<String>,
  /// Free text explaining why the report should be prioritised.
  pub escalate_to_high_priority:      Option<String>,
  pub report_annotations:             Option<ReportAnnotations>,
  pub incident_date_time:             DateTime<Utc>,
  pub incident_date_time_description: Option<String>,
}

impl IncidentSummary {
  pub fn new(
    incident_type: IncidentType,
    incident_date_time: DateTime<Utc>,
  ) -> Self {
    Self {
      incident_type,
      platform: None,
      escalate_to_high_priority: None,
      report_annotations: None,
      incident_date_time,
      incident_date_time_description: None,
    }
  }
}

/// Independent flags; any combination may be set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportAnnotations {
  pub sextortion:                   Option<bool>,
  pub csam_solicitation:            Option<bool>,
  pub minor_to_minor_interaction:   Option<bool>,
  pub spam:                         Option<bool>,
  pub sadistic_online_exploitation: Option<bool>,
}

// ─── Internet details ────────────────────────────────────────────────────────

/// One internet-details entry. Exactly one incident variant per entry.
#[derive(Debug, Clone, PartialEq)]
pub enum InternetDetails {
  WebPage(WebPageIncident),
  Email(EmailIncident),
  Newsgroup(NewsgroupIncident),
  ChatIm(ChatImIncident),
  OnlineGaming(OnlineGamingIncident),
  CellPhone(CellPhoneIncident),
  NonInternet(NonInternetIncident),
  PeerToPeer(PeerToPeerIncident),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPageIncident {
  pub url:             Vec<String>,
  pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailIncident {
  pub email_address:   Vec<Email>,
  pub content:         Option<String>,
  pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsgroupIncident {
  pub name:            Option<String>,
  pub email_address:   Vec<Email>,
  pub content:         Option<String>,
  pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatImIncident {
  pub chat_client:     Option<String>,
  pub chat_room_name:  Option<String>,
  pub content:         Option<String>,
  pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnlineGamingIncident {
  pub game_name:       Option<String>,
  pub console:         Option<String>,
  pub content:         Option<String>,
  pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellPhoneIncident {
  pub phone_number:    Option<Phone>,
  pub latitude:        Option<f64>,
  pub longitude:       Option<f64>,
  pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NonInternetIncident {
  pub location_name:    Option<String>,
  pub incident_address: Vec<Address>,
  pub additional_info:  Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeerToPeerIncident {
  pub client:           Option<String>,
  pub ip_capture_event: Vec<IpCaptureEvent>,
  pub file_names:       Option<String>,
  pub additional_info:  Option<String>,
}

// ─── Law enforcement ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LawEnforcement {
  pub agency_name:                       Option<String>,
  pub case_number:                       Option<String>,
  pub officer_contact:                   Option<ContactPerson>,
  pub reported_to_le:                    Option<bool>,
  pub served_legal_process_domestic:     Option<bool>,
  pub served_legal_process_international: Option<ServedLegalProcessInternational>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServedLegalProcessInternational {
  pub value:        Option<bool>,
  /// Country of the foreign law-enforcement agency.
  pub flea_country: Option<Country>,
}

// ─── Reporter ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reporter {
  pub reporting_person: Option<Person>,
  pub contact_person:   Option<ContactPerson>,
  pub company_template: Option<String>,
  pub terms_of_service: Option<String>,
  pub legal_url:        Option<String>,
}

impl Reporter {
  pub fn person(person: Person) -> Self {
    Self {
      reporting_person: Some(person),
      ..Self::default()
    }
  }
}

// ─── Account metadata ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountTemporarilyDisabled {
  pub value:              Option<bool>,
  pub disabled_date:      Option<DateTime<Utc>>,
  pub user_notified:      Option<bool>,
  pub user_notified_date: Option<DateTime<Utc>>,
  pub reenabled_date:     Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPermanentlyDisabled {
  pub value:              Option<bool>,
  pub disabled_date:      Option<DateTime<Utc>>,
  pub user_notified:      Option<bool>,
  pub user_notified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimatedLocation {
  pub city:         Option<String>,
  /// Free text; see [`crate::vocab::UsState::to_region`] for US states.
  pub region:       Option<String>,
  pub country_code: Option<Country>,
  pub verified:     Option<bool>,
  pub timestamp:    Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Platform {
  pub name:             Option<String>,
  pub third_party_user: Option<bool>,
}

/// Another account linked to a victim or recipient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssociatedAccount {
  pub platform:                     Option<Platform>,
  pub first_name:                   Option<String>,
  pub middle_name:                  Option<String>,
  pub last_name:                    Option<String>,
  pub approximate_age:              Option<u32>,
  pub date_of_birth:                Option<NaiveDate>,
  pub phone:                        Vec<Phone>,
  pub email:                        Vec<Email>,
  pub all_emails_reported:          Option<bool>,
  pub address:                      Vec<Address>,
  pub esp_service:                  Option<String>,
  pub esp_identifier:               Option<String>,
  pub profile_url:                  Vec<String>,
  pub screen_name:                  Option<String>,
  pub display_name:                 Vec<String>,
  pub profile_bio:                  Option<String>,
  pub group_identifier:             Option<String>,
  pub compromised_account:          Option<bool>,
  pub account_temporarily_disabled: Option<AccountTemporarilyDisabled>,
  pub account_permanently_disabled: Option<AccountPermanentlyDisabled>,
  pub ip_capture_event:             Vec<IpCaptureEvent>,
  pub device_id:                    Vec<DeviceId>,
  pub prior_ct_report:              Vec<ReportId>,
  pub additional_info:              Option<String>,
  pub kind:                         Option<AssociatedAccountType>,
}

// ─── Parties ─────────────────────────────────────────────────────────────────

/// The subject of the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonOrUserReported {
  pub person:                       Option<Person>,
  pub vehicle_description:          Option<String>,
  pub esp_identifier:               Option<String>,
  pub esp_service:                  Option<String>,
  pub compromised_account:          Option<bool>,
  pub screen_name:                  Option<String>,
  pub display_name:                 Vec<String>,
  pub profile_url:                  Vec<String>,
  pub profile_bio:                  Option<String>,
  pub ip_capture_event:             Vec<IpCaptureEvent>,
  pub device_id:                    Vec<DeviceId>,
  pub prior_ct_reports:             Vec<ReportId>,
  pub group_identifier:             Option<String>,
  pub account_temporarily_disabled: Option<AccountTemporarilyDisabled>,
  pub account_permanently_disabled: Option<AccountPermanentlyDisabled>,
  pub estimated_location:           Option<EstimatedLocation>,
  pub all_emails_reported:          Option<bool>,
  pub additional_info:              Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntendedRecipient {
  pub person:                       Option<Person>,
  pub esp_identifier:               Option<String>,
  pub esp_service:                  Option<String>,
  pub compromised_account:          Option<bool>,
  pub screen_name:                  Option<String>,
  pub display_name:                 Vec<String>,
  pub profile_url:                  Vec<String>,
  pub profile_bio:                  Option<String>,
  pub ip_capture_event:             Vec<IpCaptureEvent>,
  pub device_id:                    Vec<DeviceId>,
  pub prior_ct_reports:             Vec<ReportId>,
  pub group_identifier:             Option<String>,
  pub account_temporarily_disabled: Option<AccountTemporarilyDisabled>,
  pub account_permanently_disabled: Option<AccountPermanentlyDisabled>,
  pub estimated_location:           Option<EstimatedLocation>,
  pub all_emails_reported:          Option<bool>,
  pub associated_account:           Vec<AssociatedAccount>,
  pub additional_info:              Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Victim {
  pub person:                       Option<Person>,
  pub esp_identifier:               Option<String>,
  pub esp_service:                  Option<String>,
  pub compromised_account:          Option<bool>,
  pub screen_name:                  Option<String>,
  pub display_name:                 Vec<String>,
  pub profile_url:                  Vec<String>,
  pub profile_bio:                  Option<String>,
  pub ip_capture_event:             Vec<IpCaptureEvent>,
  pub device_id:                    Vec<DeviceId>,
  pub school_name:                  Option<String>,
  pub prior_ct_reports:             Vec<ReportId>,
  pub account_temporarily_disabled: Option<AccountTemporarilyDisabled>,
  pub account_permanently_disabled: Option<AccountPermanentlyDisabled>,
  pub estimated_location:           Option<EstimatedLocation>,
  pub all_emails_reported:          Option<bool>,
  pub associated_account:           Vec<AssociatedAccount>,
  pub additional_info:              Option<String>,
}
