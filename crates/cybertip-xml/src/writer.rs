//! Scalar codec and element writer.
//!
//! [`XmlText`] turns a scalar into its wire token. [`WriteXml`] writes a value
//! as an element; `Option` writes nothing when absent and `Vec` writes one
//! element per entry, so an unset field can never reach the wire.

use std::{borrow::Cow, io::Cursor};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use cybertip_core::{
  ids::{FileId, ReportId},
  vocab::{
    AddressType, AssociatedAccountType, BatchedReportReason, Country,
    EmailType, FileRelevance, IncidentType, IndustryClassification,
    IpCaptureType, PhoneType, UsState, Vocabulary,
  },
};
use quick_xml::{
  Writer,
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{Error, Result};

// ─── Scalars ─────────────────────────────────────────────────────────────────

/// The wire token of a scalar value.
pub trait XmlText {
  fn xml_text(&self) -> Cow<'_, str>;
}

impl XmlText for String {
  fn xml_text(&self) -> Cow<'_, str> { Cow::Borrowed(self) }
}

impl XmlText for bool {
  fn xml_text(&self) -> Cow<'_, str> {
    Cow::Borrowed(if *self { "true" } else { "false" })
  }
}

macro_rules! display_text {
  ($($ty:ty),* $(,)?) => {
    $(
      impl XmlText for $ty {
        fn xml_text(&self) -> Cow<'_, str> { Cow::Owned(self.to_string()) }
      }
    )*
  };
}

display_text!(i32, i64, u16, u32, ReportId);

/// `xs:double` lexical form: infinities are `INF`/`-INF`, not Rust's `inf`.
impl XmlText for f64 {
  fn xml_text(&self) -> Cow<'_, str> {
    match *self {
      v if v.is_nan() => Cow::Borrowed("NaN"),
      v if v.is_infinite() && v > 0.0 => Cow::Borrowed("INF"),
      v if v.is_infinite() => Cow::Borrowed("-INF"),
      v => Cow::Owned(v.to_string()),
    }
  }
}

impl XmlText for FileId {
  fn xml_text(&self) -> Cow<'_, str> { Cow::Borrowed(self.as_str()) }
}

/// RFC 3339 in UTC with a `Z` suffix.
impl XmlText for DateTime<Utc> {
  fn xml_text(&self) -> Cow<'_, str> {
    Cow::Owned(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
  }
}

/// `YYYY-MM-DD`; a date has no zone, so the host's zone cannot leak in.
impl XmlText for NaiveDate {
  fn xml_text(&self) -> Cow<'_, str> {
    Cow::Owned(self.format("%Y-%m-%d").to_string())
  }
}

macro_rules! vocabulary_text {
  ($($ty:ty),* $(,)?) => {
    $(
      impl XmlText for $ty {
        fn xml_text(&self) -> Cow<'_, str> { Cow::Borrowed(self.token()) }
      }
    )*
  };
}

vocabulary_text!(
  IncidentType,
  BatchedReportReason,
  AddressType,
  PhoneType,
  EmailType,
  IpCaptureType,
  AssociatedAccountType,
  FileRelevance,
  IndustryClassification,
  UsState,
  Country,
);

// ─── Elements ────────────────────────────────────────────────────────────────

/// Write `self` as an element named `tag`.
pub trait WriteXml {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()>;
}

macro_rules! text_element {
  ($($ty:ty),* $(,)?) => {
    $(
      impl WriteXml for $ty {
        fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
          w.text_elem(tag, &self.xml_text())
        }
      }
    )*
  };
}

text_element!(
  String,
  bool,
  i32,
  i64,
  u16,
  u32,
  f64,
  ReportId,
  FileId,
  DateTime<Utc>,
  NaiveDate,
  IncidentType,
  BatchedReportReason,
  AddressType,
  PhoneType,
  EmailType,
  IpCaptureType,
  AssociatedAccountType,
  FileRelevance,
  IndustryClassification,
  UsState,
  Country,
);

impl<T: WriteXml> WriteXml for Option<T> {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    match self {
      Some(value) => value.write_xml(tag, w),
      None => Ok(()),
    }
  }
}

impl<T: WriteXml> WriteXml for Vec<T> {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    for value in self {
      value.write_xml(tag, w)?;
    }
    Ok(())
  }
}

/// Declare the element table of a struct: optional attributes in brackets,
/// then each child field, in schema order, with its element name.
macro_rules! xml_element {
  ($(
    $ty:ident $([ $($attr:ident => $attr_name:literal),* $(,)? ])? {
      $($field:ident => $tag:literal),* $(,)?
    }
  )*) => {
    $(
      impl $crate::writer::WriteXml for $ty {
        fn write_xml(
          &self,
          tag: &str,
          w: &mut $crate::writer::XmlWriter,
        ) -> $crate::Result<()> {
          let attrs = $crate::writer::Attrs::new()
            $($( .opt($attr_name, &self.$attr) )*)?;
          w.start_with(tag, &attrs)?;
          $( $crate::writer::WriteXml::write_xml(&self.$field, $tag, w)?; )*
          w.end(tag)
        }
      }
    )*
  };
}

pub(crate) use xml_element;

// ─── Attributes ──────────────────────────────────────────────────────────────

/// Attributes of one element. Unset values are skipped.
#[derive(Default)]
pub struct Attrs<'a> {
  pairs: Vec<(&'static str, Cow<'a, str>)>,
}

impl<'a> Attrs<'a> {
  pub fn new() -> Self { Self::default() }

  pub fn opt<V: XmlText>(mut self, name: &'static str, value: &'a Option<V>) -> Self {
    if let Some(value) = value {
      self.pairs.push((name, value.xml_text()));
    }
    self
  }

  fn start<'t>(&self, tag: &'t str) -> BytesStart<'t> {
    let mut el = BytesStart::new(tag);
    for (name, value) in &self.pairs {
      el.push_attribute((*name, value.as_ref()));
    }
    el
  }
}

// ─── Writer ──────────────────────────────────────────────────────────────────

pub struct XmlWriter {
  writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
  /// A writer that has already emitted the XML declaration.
  pub fn new() -> Result<Self> {
    let mut w = Self {
      writer: Writer::new(Cursor::new(Vec::new())),
    };
    w.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(w)
  }

  pub fn finish(self) -> Vec<u8> { self.writer.into_inner().into_inner() }

  fn emit(&mut self, event: Event<'_>) -> Result<()> {
    self
      .writer
      .write_event(event)
      .map_err(|e| Error::Encode(e.to_string()))
  }

  pub fn start(&mut self, tag: &str) -> Result<()> {
    self.emit(Event::Start(BytesStart::new(tag)))
  }

  pub fn start_with(&mut self, tag: &str, attrs: &Attrs<'_>) -> Result<()> {
    self.emit(Event::Start(attrs.start(tag)))
  }

  pub fn end(&mut self, tag: &str) -> Result<()> {
    self.emit(Event::End(BytesEnd::new(tag)))
  }

  pub fn text_elem(&mut self, tag: &str, text: &str) -> Result<()> {
    self.start(tag)?;
    self.emit(Event::Text(BytesText::new(text)))?;
    self.end(tag)
  }

  /// `<tag attrs…>value</tag>`, or `<tag attrs…/>` when the value is unset.
  pub fn value_elem<V: XmlText>(
    &mut self,
    tag: &str,
    attrs: &Attrs<'_>,
    value: &Option<V>,
  ) -> Result<()> {
    match value {
      Some(value) => {
        self.start_with(tag, attrs)?;
        self.emit(Event::Text(BytesText::new(&value.xml_text())))?;
        self.end(tag)
      }
      None => self.emit(Event::Empty(attrs.start(tag))),
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn render(f: impl FnOnce(&mut XmlWriter) -> Result<()>) -> String {
    let mut w = XmlWriter::new().unwrap();
    f(&mut w).unwrap();
    String::from_utf8(w.finish())
      .unwrap()
      .strip_prefix(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
      .unwrap()
      .to_string()
  }

  #[test]
  fn none_writes_nothing() {
    let value: Option<String> = None;
    assert_eq!(render(|w| value.write_xml("notes", w)), "");
  }

  #[test]
  fn empty_string_is_not_absent() {
    let value = Some(String::new());
    assert_eq!(render(|w| value.write_xml("notes", w)), "<notes></notes>");
  }

  #[test]
  fn falsy_values_are_emitted() {
    assert_eq!(
      render(|w| {
        Some(false).write_xml("flag", w)?;
        Some(0u32).write_xml("age", w)
      }),
      "<flag>false</flag><age>0</age>"
    );
  }

  #[test]
  fn vec_writes_one_element_per_entry() {
    let urls = vec!["a".to_string(), "b".to_string()];
    assert_eq!(render(|w| urls.write_xml("url", w)), "<url>a</url><url>b</url>");
    let none: Vec<String> = Vec::new();
    assert_eq!(render(|w| none.write_xml("url", w)), "");
  }

  #[test]
  fn doubles_use_schema_lexical_forms() {
    assert_eq!(40.7128f64.xml_text(), "40.7128");
    assert_eq!((-74.0f64).xml_text(), "-74");
    assert_eq!(f64::INFINITY.xml_text(), "INF");
    assert_eq!(f64::NEG_INFINITY.xml_text(), "-INF");
    assert_eq!(f64::NAN.xml_text(), "NaN");
  }

  #[test]
  fn date_is_plain_calendar_date() {
    let date = NaiveDate::from_ymd_opt(2010, 3, 1).unwrap();
    assert_eq!(date.xml_text(), "2010-03-01");
    let early = NaiveDate::from_ymd_opt(987, 12, 31).unwrap();
    assert_eq!(early.xml_text(), "0987-12-31");
  }

  #[test]
  fn timestamp_is_utc_rfc3339() {
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
    assert_eq!(ts.xml_text(), "2024-06-01T12:30:00Z");
  }

  #[test]
  fn text_is_escaped() {
    let value = Some("a < b & c".to_string());
    assert_eq!(
      render(|w| value.write_xml("content", w)),
      "<content>a &lt; b &amp; c</content>"
    );
  }

  #[test]
  fn value_elem_skips_unset_attributes() {
    let kind = Some(PhoneType::Mobile);
    let verified: Option<bool> = None;
    let number = Some("555".to_string());
    let xml = render(|w| {
      let attrs = Attrs::new().opt("type", &kind).opt("verified", &verified);
      w.value_elem("phone", &attrs, &number)
    });
    assert_eq!(xml, r#"<phone type="Mobile">555</phone>"#);
  }

  #[test]
  fn value_elem_without_value_is_empty_element() {
    let kind = Some(EmailType::Work);
    let address: Option<String> = None;
    let xml = render(|w| {
      w.value_elem("email", &Attrs::new().opt("type", &kind), &address)
    });
    assert_eq!(xml, r#"<email type="Work"/>"#);
  }
}
