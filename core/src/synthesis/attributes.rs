use super::context::{BatchContext, RunTimestamp};
use crate::reference::tags::{
    ACCESSION_NUMBER, LATERALITY, PATIENT_BIRTH_DATE, PATIENT_ID, PATIENT_NAME, PATIENT_SEX,
    REFERRING_PHYSICIAN_NAME, SERIES_NUMBER, STUDY_DATE, STUDY_DESCRIPTION, STUDY_ID, STUDY_TIME,
};
use crate::reference::ReferenceMetadata;
use dicom_core::{Tag, VR};
use dicom_dictionary_std::tags;

/// Maximum length of LO description values
pub const MAX_DESCRIPTION_LEN: usize = 64;

/// Study description used when the reference has none
pub const DEFAULT_STUDY_DESCRIPTION: &str = "SecondaryCapture";

/// Value used when the reference lacks an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Text(&'static str),
    RunDate,
    RunTime,
}

/// An attribute copied from the reference, with its default
#[derive(Debug, Clone, Copy)]
pub struct InheritedAttribute {
    pub keyword: &'static str,
    pub tag: Tag,
    pub vr: VR,
    pub fallback: Fallback,
}

impl InheritedAttribute {
    const fn new(keyword: &'static str, tag: Tag, vr: VR, fallback: Fallback) -> Self {
        Self {
            keyword,
            tag,
            vr,
            fallback,
        }
    }

    /// Value from the reference, or the declared fallback
    pub fn resolve<'a>(&self, reference: &'a ReferenceMetadata, timestamp: &'a RunTimestamp) -> &'a str {
        match reference.get(self.keyword) {
            Some(value) => value,
            None => match self.fallback {
                Fallback::Text(text) => text,
                Fallback::RunDate => timestamp.date.as_str(),
                Fallback::RunTime => timestamp.time.as_str(),
            },
        }
    }
}

/// Patient, study and series attributes carried over from the reference
pub const INHERITED_ATTRIBUTES: [InheritedAttribute; 11] = [
    // Patient Module
    InheritedAttribute::new(PATIENT_NAME, tags::PATIENT_NAME, VR::PN, Fallback::Text("UNKNOWN")),
    InheritedAttribute::new(PATIENT_ID, tags::PATIENT_ID, VR::LO, Fallback::Text("UNKNOWN")),
    InheritedAttribute::new(PATIENT_BIRTH_DATE, tags::PATIENT_BIRTH_DATE, VR::DA, Fallback::Text("")),
    InheritedAttribute::new(PATIENT_SEX, tags::PATIENT_SEX, VR::CS, Fallback::Text("")),
    // General Study Module
    InheritedAttribute::new(STUDY_DATE, tags::STUDY_DATE, VR::DA, Fallback::RunDate),
    InheritedAttribute::new(STUDY_TIME, tags::STUDY_TIME, VR::TM, Fallback::RunTime),
    InheritedAttribute::new(REFERRING_PHYSICIAN_NAME, tags::REFERRING_PHYSICIAN_NAME, VR::PN, Fallback::Text("")),
    InheritedAttribute::new(STUDY_ID, tags::STUDY_ID, VR::SH, Fallback::Text("1")),
    InheritedAttribute::new(ACCESSION_NUMBER, tags::ACCESSION_NUMBER, VR::SH, Fallback::Text("")),
    // General Series Module
    InheritedAttribute::new(SERIES_NUMBER, tags::SERIES_NUMBER, VR::IS, Fallback::Text("999")),
    InheritedAttribute::new(LATERALITY, tags::LATERALITY, VR::CS, Fallback::Text("")),
];

/// `{reference description} - Converted {source}`, cut to 64 characters
pub fn study_description(reference: &ReferenceMetadata, source_base_name: &str) -> String {
    let reference_description = reference.get_or(STUDY_DESCRIPTION, DEFAULT_STUDY_DESCRIPTION);
    truncate(format!("{} - Converted {}", reference_description, source_base_name))
}

/// `Converted {source}`, with ` - Page {n}` for multi-page documents, cut to 64 characters
pub fn series_description(source_base_name: &str, index: usize, context: &BatchContext) -> String {
    let mut description = format!("Converted {}", source_base_name);
    if context.numbers_pages() {
        description.push_str(&format!(" - Page {}", index + 1));
    }
    truncate(description)
}

fn truncate(value: String) -> String {
    if value.chars().count() <= MAX_DESCRIPTION_LEN {
        value
    } else {
        value.chars().take(MAX_DESCRIPTION_LEN).collect()
    }
}
