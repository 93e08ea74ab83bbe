//! Shapes shared by every party in a report: people, contact methods,
//! addresses and capture history.

use chrono::{DateTime, NaiveDate, Utc};

use crate::vocab::{AddressType, Country, EmailType, IpCaptureType, PhoneType, UsState};

// ─── People ──────────────────────────────────────────────────────────────────

/// A person block (reporting person, reported user, victim, recipient).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
  pub first_name:    Option<String>,
  pub last_name:     Option<String>,
  pub phone:         Vec<Phone>,
  pub email:         Vec<Email>,
  pub address:       Vec<Address>,
  pub age:           Option<u32>,
  pub date_of_birth: Option<NaiveDate>,
}

impl Person {
  pub fn named(first: impl Into<String>, last: impl Into<String>) -> Self {
    Self {
      first_name: Some(first.into()),
      last_name: Some(last.into()),
      ..Self::default()
    }
  }
}

/// A point of contact: a [`Person`] without age or date of birth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactPerson {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub phone:      Vec<Phone>,
  pub email:      Vec<Email>,
  pub address:    Vec<Address>,
}

// ─── Contact methods ─────────────────────────────────────────────────────────

/// A telephone number. The number is the element text; everything else is
/// an attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Phone {
  pub number:               Option<String>,
  pub kind:                 Option<PhoneType>,
  pub verified:             Option<bool>,
  /// Meaningful only when `verified` is `Some(true)`; the service decides.
  pub verification_date:    Option<DateTime<Utc>>,
  pub country_calling_code: Option<String>,
  pub extension:            Option<String>,
}

/// An email address. The address is the element text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Email {
  pub address:           Option<String>,
  pub kind:              Option<EmailType>,
  pub verified:          Option<bool>,
  pub verification_date: Option<DateTime<Utc>>,
}

/// State or province of an [`Address`]. A US state and a free-text non-US
/// state are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
  Us(UsState),
  NonUs(String),
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
  pub street:   Option<String>,
  pub city:     Option<String>,
  pub zip_code: Option<String>,
  pub region:   Option<Region>,
  pub country:  Option<Country>,
  pub kind:     Option<AddressType>,
}

// ─── Capture history ─────────────────────────────────────────────────────────

/// A timestamped IP observation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpCaptureEvent {
  pub ip_address:     Option<String>,
  pub event_name:     Option<IpCaptureType>,
  pub date_time:      Option<DateTime<Utc>>,
  pub possible_proxy: Option<bool>,
  pub port:           Option<u16>,
}

/// A device identifier (IMEI, SSID, ...) observed during an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceId {
  /// Free text; the schema imposes no vocabulary.
  pub id_type:    Option<String>,
  pub id_value:   Option<String>,
  pub event_name: Option<IpCaptureType>,
  pub date_time:  Option<DateTime<Utc>>,
}
