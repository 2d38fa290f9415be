use super::tags::{PATIENT_ID, PATIENT_NAME, STUDY_DATE, STUDY_DESCRIPTION, STUDY_INSTANCE_UID};
use super::ReferenceMetadata;

/// Placeholder for attributes the reference object does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// Identifying information of a reference object, for display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ReferenceSummary {
    pub study_instance_uid: String,
    pub patient_name: String,
    pub patient_id: String,
    pub study_date: String,
    pub study_description: String,
}

impl ReferenceSummary {
    /// Summarizes reference metadata, using "N/A" for absent values
    pub fn from_metadata(metadata: &ReferenceMetadata) -> Self {
        let field = |keyword| metadata.get_or(keyword, NOT_AVAILABLE).to_string();
        Self {
            study_instance_uid: field(STUDY_INSTANCE_UID),
            patient_name: field(PATIENT_NAME),
            patient_id: field(PATIENT_ID),
            study_date: field(STUDY_DATE),
            study_description: field(STUDY_DESCRIPTION),
        }
    }

    /// Whether the reference can anchor a conversion
    pub fn has_study(&self) -> bool {
        self.study_instance_uid != NOT_AVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_defaults() {
        let summary = ReferenceSummary::from_metadata(&ReferenceMetadata::new());
        assert_eq!(summary.study_instance_uid, "N/A");
        assert_eq!(summary.patient_name, "N/A");
        assert_eq!(summary.study_description, "N/A");
        assert!(!summary.has_study());
    }

    #[test]
    fn test_summary_values() {
        let metadata = ReferenceMetadata::new()
            .with(STUDY_INSTANCE_UID, "1.2.3")
            .with(PATIENT_NAME, "DOE^JOHN")
            .with(STUDY_DATE, "20240102");
        let summary = ReferenceSummary::from_metadata(&metadata);
        assert_eq!(summary.study_instance_uid, "1.2.3");
        assert_eq!(summary.patient_name, "DOE^JOHN");
        assert_eq!(summary.patient_id, "N/A");
        assert_eq!(summary.study_date, "20240102");
        assert!(summary.has_study());
    }
}
