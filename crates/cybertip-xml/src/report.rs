//! Element tables for the report document and the shared contact shapes.

use cybertip_core::{
  contact::{
    Address, ContactPerson, DeviceId, Email, IpCaptureEvent, Person, Phone,
    Region,
  },
  report::{
    AccountPermanentlyDisabled, AccountTemporarilyDisabled, AssociatedAccount,
    BatchedReport, CellPhoneIncident, ChatImIncident, EmailIncident,
    EstimatedLocation, IncidentSummary, IntendedRecipient, InternetDetails,
    LawEnforcement, NewsgroupIncident, NonInternetIncident,
    OnlineGamingIncident, PeerToPeerIncident, Platform, PersonOrUserReported,
    Report, ReportAnnotations, Reporter, ServedLegalProcessInternational,
    Victim, WebPageIncident,
  },
};

use crate::{
  Result,
  writer::{Attrs, WriteXml, XmlWriter, xml_element},
};

// ─── Root ────────────────────────────────────────────────────────────────────

xml_element! {
  Report {
    batched_report          => "batchedReport",
    incident_summary        => "incidentSummary",
    internet_details        => "internetDetails",
    law_enforcement         => "lawEnforcement",
    reporter                => "reporter",
    person_or_user_reported => "personOrUserReported",
    intended_recipient      => "intendedRecipient",
    victim                  => "victim",
    additional_info         => "additionalInfo",
  }

  BatchedReport {
    reason => "reason",
  }

  IncidentSummary {
    incident_type                  => "incidentType",
    platform                       => "platform",
    escalate_to_high_priority      => "escalateToHighPriority",
    report_annotations             => "reportAnnotations",
    incident_date_time             => "incidentDateTime",
    incident_date_time_description => "incidentDateTimeDescription",
  }

  ReportAnnotations {
    sextortion                   => "sextortion",
    csam_solicitation            => "csamSolicitation",
    minor_to_minor_interaction   => "minorToMinorInteraction",
    spam                         => "spam",
    sadistic_online_exploitation => "sadisticOnlineExploitation",
  }
}

// ─── Internet details ────────────────────────────────────────────────────────

impl WriteXml for InternetDetails {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    w.start(tag)?;
    match self {
      Self::WebPage(incident) => incident.write_xml("webPageIncident", w)?,
      Self::Email(incident) => incident.write_xml("emailIncident", w)?,
      Self::Newsgroup(incident) => incident.write_xml("newsgroupIncident", w)?,
      Self::ChatIm(incident) => incident.write_xml("chatImIncident", w)?,
      Self::OnlineGaming(incident) => {
        incident.write_xml("onlineGamingIncident", w)?
      }
      Self::CellPhone(incident) => incident.write_xml("cellPhoneIncident", w)?,
      Self::NonInternet(incident) => {
        incident.write_xml("nonInternetIncident", w)?
      }
      Self::PeerToPeer(incident) => incident.write_xml("peer2peerIncident", w)?,
    }
    w.end(tag)
  }
}

xml_element! {
  WebPageIncident {
    url             => "url",
    additional_info => "additionalInfo",
  }

  EmailIncident {
    email_address   => "emailAddress",
    content         => "content",
    additional_info => "additionalInfo",
  }

  NewsgroupIncident {
    name            => "name",
    email_address   => "emailAddress",
    content         => "content",
    additional_info => "additionalInfo",
  }

  ChatImIncident {
    chat_client     => "chatClient",
    chat_room_name  => "chatRoomName",
    content         => "content",
    additional_info => "additionalInfo",
  }

  OnlineGamingIncident {
    game_name       => "gameName",
    console         => "console",
    content         => "content",
    additional_info => "additionalInfo",
  }

  CellPhoneIncident {
    phone_number    => "phoneNumber",
    latitude        => "latitude",
    longitude       => "longitude",
    additional_info => "additionalInfo",
  }

  NonInternetIncident {
    location_name    => "locationName",
    incident_address => "incidentAddress",
    additional_info  => "additionalInfo",
  }

  PeerToPeerIncident {
    client           => "client",
    ip_capture_event => "ipCaptureEvent",
    file_names       => "fileNames",
    additional_info  => "additionalInfo",
  }
}

// ─── Law enforcement and reporter ────────────────────────────────────────────

xml_element! {
  LawEnforcement {
    agency_name                        => "agencyName",
    case_number                        => "caseNumber",
    officer_contact                    => "officerContact",
    reported_to_le                     => "reportedToLe",
    served_legal_process_domestic      => "servedLegalProcessDomestic",
    served_legal_process_international => "servedLegalProcessInternational",
  }

  Reporter {
    reporting_person => "reportingPerson",
    contact_person   => "contactPerson",
    company_template => "companyTemplate",
    terms_of_service => "termsOfService",
    legal_url        => "legalURL",
  }
}

impl WriteXml for ServedLegalProcessInternational {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let attrs = Attrs::new().opt("fleaCountry", &self.flea_country);
    w.value_elem(tag, &attrs, &self.value)
  }
}

// ─── People and contact methods ──────────────────────────────────────────────

xml_element! {
  Person {
    first_name    => "firstName",
    last_name     => "lastName",
    phone         => "phone",
    email         => "email",
    address       => "address",
    age           => "age",
    date_of_birth => "dateOfBirth",
  }

  ContactPerson {
    first_name => "firstName",
    last_name  => "lastName",
    phone      => "phone",
    email      => "email",
    address    => "address",
  }
}

impl WriteXml for Phone {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let attrs = Attrs::new()
      .opt("type", &self.kind)
      .opt("verified", &self.verified)
      .opt("verificationDate", &self.verification_date)
      .opt("countryCallingCode", &self.country_calling_code)
      .opt("extension", &self.extension);
    w.value_elem(tag, &attrs, &self.number)
  }
}

impl WriteXml for Email {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let attrs = Attrs::new()
      .opt("type", &self.kind)
      .opt("verified", &self.verified)
      .opt("verificationDate", &self.verification_date);
    w.value_elem(tag, &attrs, &self.address)
  }
}

impl WriteXml for Address {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    w.start_with(tag, &Attrs::new().opt("type", &self.kind))?;
    self.street.write_xml("address", w)?;
    self.city.write_xml("city", w)?;
    self.zip_code.write_xml("zipCode", w)?;
    match &self.region {
      Some(Region::Us(state)) => state.write_xml("state", w)?,
      Some(Region::NonUs(state)) => state.write_xml("nonUsaState", w)?,
      None => {}
    }
    self.country.write_xml("country", w)?;
    w.end(tag)
  }
}

xml_element! {
  IpCaptureEvent {
    ip_address     => "ipAddress",
    event_name     => "eventName",
    date_time      => "dateTime",
    possible_proxy => "possibleProxy",
    port           => "port",
  }

  DeviceId {
    id_type    => "idType",
    id_value   => "idValue",
    event_name => "eventName",
    date_time  => "dateTime",
  }
}

// ─── Account metadata ────────────────────────────────────────────────────────

impl WriteXml for AccountTemporarilyDisabled {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let attrs = Attrs::new()
      .opt("disabledDate", &self.disabled_date)
      .opt("userNotified", &self.user_notified)
      .opt("userNotifiedDate", &self.user_notified_date)
      .opt("reenabledDate", &self.reenabled_date);
    w.value_elem(tag, &attrs, &self.value)
  }
}

impl WriteXml for AccountPermanentlyDisabled {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let attrs = Attrs::new()
      .opt("disabledDate", &self.disabled_date)
      .opt("userNotified", &self.user_notified)
      .opt("userNotifiedDate", &self.user_notified_date);
    w.value_elem(tag, &attrs, &self.value)
  }
}

impl WriteXml for Platform {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let attrs = Attrs::new().opt("thirdPartyUser", &self.third_party_user);
    w.value_elem(tag, &attrs, &self.name)
  }
}

xml_element! {
  EstimatedLocation [verified => "verified", timestamp => "timestamp"] {
    city         => "city",
    region       => "region",
    country_code => "countryCode",
  }

  AssociatedAccount [kind => "type"] {
    platform                     => "platform",
    first_name                   => "firstName",
    middle_name                  => "middleName",
    last_name                    => "lastName",
    approximate_age              => "approximateAge",
    date_of_birth                => "dateOfBirth",
    phone                        => "phone",
    email                        => "email",
    all_emails_reported          => "allEmailsReported",
    address                      => "address",
    esp_service                  => "espService",
    esp_identifier               => "espIdentifier",
    profile_url                  => "profileUrl",
    screen_name                  => "screenName",
    display_name                 => "displayName",
    profile_bio                  => "profileBio",
    group_identifier             => "groupIdentifier",
    compromised_account          => "compromisedAccount",
    account_temporarily_disabled => "accountTemporarilyDisabled",
    account_permanently_disabled => "accountPermanentlyDisabled",
    ip_capture_event             => "ipCaptureEvent",
    device_id                    => "deviceId",
    prior_ct_report              => "priorCTReport",
    additional_info              => "additionalInfo",
  }
}

// ─── Parties ─────────────────────────────────────────────────────────────────

xml_element! {
  PersonOrUserReported {
    person                       => "personOrUserReportedPerson",
    vehicle_description          => "vehicleDescription",
    esp_identifier               => "espIdentifier",
    esp_service                  => "espService",
    compromised_account          => "compromisedAccount",
    screen_name                  => "screenName",
    display_name                 => "displayName",
    profile_url                  => "profileUrl",
    profile_bio                  => "profileBio",
    ip_capture_event             => "ipCaptureEvent",
    device_id                    => "deviceId",
    prior_ct_reports             => "priorCTReports",
    group_identifier             => "groupIdentifier",
    account_temporarily_disabled => "accountTemporarilyDisabled",
    account_permanently_disabled => "accountPermanentlyDisabled",
    estimated_location           => "estimatedLocation",
    all_emails_reported          => "allEmailsReported",
    additional_info              => "additionalInfo",
  }

  IntendedRecipient {
    person                       => "intendedRecipientPerson",
    esp_identifier               => "espIdentifier",
    esp_service                  => "espService",
    compromised_account          => "compromisedAccount",
    screen_name                  => "screenName",
    display_name                 => "displayName",
    profile_url                  => "profileUrl",
    profile_bio                  => "profileBio",
    ip_capture_event             => "ipCaptureEvent",
    device_id                    => "deviceId",
    prior_ct_reports             => "priorCTReports",
    group_identifier             => "groupIdentifier",
    account_temporarily_disabled => "accountTemporarilyDisabled",
    account_permanently_disabled => "accountPermanentlyDisabled",
    estimated_location           => "estimatedLocation",
    all_emails_reported          => "allEmailsReported",
    associated_account           => "associatedAccount",
    additional_info              => "additionalInfo",
  }

  Victim {
    person                       => "victimPerson",
    esp_identifier               => "espIdentifier",
    esp_service                  => "espService",
    compromised_account          => "compromisedAccount",
    screen_name                  => "screenName",
    display_name                 => "displayName",
    profile_url                  => "profileUrl",
    profile_bio                  => "profileBio",
    ip_capture_event             => "ipCaptureEvent",
    device_id                    => "deviceId",
    school_name                  => "schoolName",
    prior_ct_reports             => "priorCTReports",
    account_temporarily_disabled => "accountTemporarilyDisabled",
    account_permanently_disabled => "accountPermanentlyDisabled",
    estimated_location           => "estimatedLocation",
    all_emails_reported          => "allEmailsReported",
    associated_account           => "associatedAccount",
    additional_info              => "additionalInfo",
  }
}
