//! Element tables for the file-details document.

use cybertip_core::file::{
  Details, FileAnnotations, FileDetails, Hash, NameValue,
};

use crate::{
  Error, Result,
  writer::{Attrs, WriteXml, XmlWriter, xml_element},
};

pub(crate) const DOCUMENT: &str = "fileDetails";

/// The identifiers are required; a document without them is never written.
impl WriteXml for FileDetails {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let report_id = self.report_id().ok_or(Error::MissingField {
      document: DOCUMENT,
      field:    "reportId",
    })?;
    let file_id = self.file_id().ok_or(Error::MissingField {
      document: DOCUMENT,
      field:    "fileId",
    })?;

    w.start(tag)?;
    report_id.write_xml("reportId", w)?;
    file_id.write_xml("fileId", w)?;
    self.file_name.write_xml("fileName", w)?;
    self.original_file_name.write_xml("originalFileName", w)?;
    self
      .uploaded_to_esp_timestamp
      .write_xml("uploadedToEspTimestamp", w)?;
    self.location_of_file.write_xml("locationOfFile", w)?;
    self.file_viewed_by_esp.write_xml("fileViewedByEsp", w)?;
    self.exif_viewed_by_esp.write_xml("exifViewedByEsp", w)?;
    self.publicly_available.write_xml("publiclyAvailable", w)?;
    self.file_relevance.write_xml("fileRelevance", w)?;
    self
      .industry_classification
      .write_xml("industryClassification", w)?;
    self.original_file_hash.write_xml("originalFileHash", w)?;
    self.ip_capture_event.write_xml("ipCaptureEvent", w)?;
    self.device_id.write_xml("deviceId", w)?;
    self.details.write_xml("details", w)?;
    self.additional_info.write_xml("additionalInfo", w)?;
    self.potential_meme.write_xml("potentialMeme", w)?;
    self.file_annotations.write_xml("fileAnnotations", w)?;
    w.end(tag)
  }
}

impl WriteXml for Hash {
  fn write_xml(&self, tag: &str, w: &mut XmlWriter) -> Result<()> {
    let attrs = Attrs::new().opt("hashType", &self.hash_type);
    w.value_elem(tag, &attrs, &self.value)
  }
}

xml_element! {
  Details {
    name_value_pair => "nameValuePair",
  }

  NameValue {
    name  => "name",
    value => "value",
  }

  FileAnnotations {
    anime_drawing_virtual_hentai => "animeDrawingVirtualHentai",
    potential_meme               => "potentialMeme",
    viral                        => "viral",
    possible_self_production     => "possibleSelfProduction",
    physical_harm                => "physicalHarm",
    violence_gore                => "violenceGore",
    bestiality                   => "bestiality",
    live_streaming               => "liveStreaming",
    infant                       => "infant",
    generative_ai                => "generativeAi",
  }
}
