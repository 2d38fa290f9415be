use dicom_core::Tag;
use dicom_dictionary_std::tags;
use dicom_object::InMemDicomObject;

// Attribute keywords looked up in the reference metadata
pub const STUDY_INSTANCE_UID: &str = "StudyInstanceUID";
pub const PATIENT_NAME: &str = "PatientName";
pub const PATIENT_ID: &str = "PatientID";
pub const PATIENT_BIRTH_DATE: &str = "PatientBirthDate";
pub const PATIENT_SEX: &str = "PatientSex";
pub const STUDY_DATE: &str = "StudyDate";
pub const STUDY_TIME: &str = "StudyTime";
pub const REFERRING_PHYSICIAN_NAME: &str = "ReferringPhysicianName";
pub const STUDY_ID: &str = "StudyID";
pub const ACCESSION_NUMBER: &str = "AccessionNumber";
pub const STUDY_DESCRIPTION: &str = "StudyDescription";
pub const SERIES_NUMBER: &str = "SeriesNumber";
pub const LATERALITY: &str = "Laterality";

/// Attributes carried over from a reference object, by keyword and tag
pub const REFERENCE_ATTRIBUTES: [(&str, Tag); 13] = [
    (STUDY_INSTANCE_UID, tags::STUDY_INSTANCE_UID),
    (PATIENT_NAME, tags::PATIENT_NAME),
    (PATIENT_ID, tags::PATIENT_ID),
    (PATIENT_BIRTH_DATE, tags::PATIENT_BIRTH_DATE),
    (PATIENT_SEX, tags::PATIENT_SEX),
    (STUDY_DATE, tags::STUDY_DATE),
    (STUDY_TIME, tags::STUDY_TIME),
    (REFERRING_PHYSICIAN_NAME, tags::REFERRING_PHYSICIAN_NAME),
    (STUDY_ID, tags::STUDY_ID),
    (ACCESSION_NUMBER, tags::ACCESSION_NUMBER),
    (STUDY_DESCRIPTION, tags::STUDY_DESCRIPTION),
    (SERIES_NUMBER, tags::SERIES_NUMBER),
    (LATERALITY, tags::LATERALITY),
];

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim_end_matches('\0').trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_tag_values() {
        assert_eq!(tags::STUDY_INSTANCE_UID, Tag(0x0020, 0x000D));
        assert_eq!(tags::PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(tags::SERIES_NUMBER, Tag(0x0020, 0x0011));
        assert_eq!(tags::LATERALITY, Tag(0x0020, 0x0060));
    }

    #[test]
    fn test_get_string_value_trims_padding() {
        let dcm = InMemDicomObject::from_element_iter([DataElement::new(
            tags::STUDY_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from("1.2.3\0"),
        )]);
        assert_eq!(
            get_string_value(&dcm, tags::STUDY_INSTANCE_UID),
            Some("1.2.3".to_string())
        );
        assert_eq!(get_string_value(&dcm, tags::PATIENT_NAME), None);
    }
}
