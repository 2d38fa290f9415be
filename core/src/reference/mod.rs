//! Reference metadata read from an existing DICOM object
//!
//! The converted series is attached to the study of a reference object.
//! [`ReferenceMetadata`] is the keyword-keyed view of that object which the
//! synthesizer reads from, and [`ReferenceSummary`] is the short description
//! shown to a user before converting.

pub mod summary;
pub mod tags;

pub use summary::ReferenceSummary;

use crate::error::Result;
use dicom_object::{open_file, InMemDicomObject};
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

use tags::{get_string_value, REFERENCE_ATTRIBUTES};

/// Immutable keyword to value mapping taken from a reference object
///
/// Blank values are never stored, so a lookup either yields a usable value
/// or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceMetadata {
    values: BTreeMap<String, String>,
}

impl ReferenceMetadata {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the reference attributes present in a DICOM object
    pub fn from_dicom(dcm: &InMemDicomObject) -> Self {
        let mut metadata = Self::new();
        for (keyword, tag) in REFERENCE_ATTRIBUTES {
            if let Some(value) = get_string_value(dcm, tag) {
                metadata.insert(keyword, value);
            }
        }
        debug!(
            "Collected {} reference attributes",
            metadata.values.len()
        );
        metadata
    }

    /// Reads the reference attributes from a DICOM file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading reference object {}", path.display());
        let dcm = open_file(path)?;
        Ok(Self::from_dicom(&dcm))
    }

    /// Stores a value, ignoring blank ones
    pub fn insert(&mut self, keyword: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            self.values.insert(keyword.into(), trimmed.to_string());
        }
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, keyword: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(keyword, value);
        self
    }

    /// Looks up a value by attribute keyword
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.values.get(keyword).map(String::as_str)
    }

    /// Looks up a value, falling back to `default` when absent
    pub fn get_or<'a>(&'a self, keyword: &str, default: &'a str) -> &'a str {
        self.get(keyword).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ReferenceMetadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (keyword, value) in iter {
            metadata.insert(keyword, value);
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};
    use dicom_dictionary_std::tags as std_tags;

    #[test]
    fn test_blank_values_are_absent() {
        let metadata = ReferenceMetadata::new()
            .with(tags::PATIENT_SEX, "   ")
            .with(tags::PATIENT_ID, "");
        assert!(metadata.is_empty());
        assert_eq!(metadata.get(tags::PATIENT_SEX), None);
        assert_eq!(metadata.get_or(tags::PATIENT_ID, "UNKNOWN"), "UNKNOWN");
    }

    #[test]
    fn test_get_or_prefers_present_value() {
        let metadata = ReferenceMetadata::new().with(tags::PATIENT_ID, " 12345 ");
        assert_eq!(metadata.get_or(tags::PATIENT_ID, "UNKNOWN"), "12345");
    }

    #[test]
    fn test_from_dicom_collects_known_attributes() {
        let dcm = InMemDicomObject::from_element_iter([
            DataElement::new(
                std_tags::STUDY_INSTANCE_UID,
                VR::UI,
                PrimitiveValue::from("1.2.3"),
            ),
            DataElement::new(
                std_tags::PATIENT_NAME,
                VR::PN,
                PrimitiveValue::from("DOE^JOHN"),
            ),
            DataElement::new(std_tags::SERIES_NUMBER, VR::IS, PrimitiveValue::from("4 ")),
            // not a reference attribute
            DataElement::new(std_tags::MODALITY, VR::CS, PrimitiveValue::from("CT")),
        ]);

        let metadata = ReferenceMetadata::from_dicom(&dcm);
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get(tags::STUDY_INSTANCE_UID), Some("1.2.3"));
        assert_eq!(metadata.get(tags::PATIENT_NAME), Some("DOE^JOHN"));
        assert_eq!(metadata.get(tags::SERIES_NUMBER), Some("4"));
        assert_eq!(metadata.get("Modality"), None);
    }

    #[test]
    fn test_from_iterator() {
        let metadata: ReferenceMetadata =
            [(tags::STUDY_INSTANCE_UID, "1.2.3"), (tags::PATIENT_SEX, "F")]
                .into_iter()
                .collect();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get(tags::PATIENT_SEX), Some("F"));
    }
}
