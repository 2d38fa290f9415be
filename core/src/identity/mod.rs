//! Study, series and instance identifiers of a conversion batch
//!
//! The study UID comes from the reference object so that converted pages
//! join its study. The series UID is generated once per batch and each
//! frame draws a fresh instance UID, used both in the file meta header and
//! as the SOP Instance UID of the data set.

mod uid;

pub use uid::{Uid, UUID_UID_ROOT};

use crate::error::{Result, ScCaptureError};
use crate::reference::tags::STUDY_INSTANCE_UID;
use crate::reference::ReferenceMetadata;
use log::debug;

/// Length of the series suffix used in output file names
pub const SHORT_SUFFIX_LEN: usize = 8;

/// Returns the study UID of the reference object
///
/// # Errors
///
/// Returns `MissingIdentifier` when the reference has no StudyInstanceUID.
/// There is no fallback: a made-up study UID would split the study.
pub fn derive_study_id(reference: &ReferenceMetadata) -> Result<Uid> {
    reference
        .get(STUDY_INSTANCE_UID)
        .map(Uid::new)
        .ok_or(ScCaptureError::MissingIdentifier {
            attribute: STUDY_INSTANCE_UID,
        })
}

/// A freshly generated series UID with its short naming suffix
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SeriesId {
    pub uid: Uid,
    /// Last characters of the UID's final component, for file names only
    pub short_suffix: String,
}

impl SeriesId {
    /// Wraps a series UID, deriving its suffix
    pub fn new(uid: Uid) -> Self {
        let tail = uid.last_component();
        let start = tail.len().saturating_sub(SHORT_SUFFIX_LEN);
        let short_suffix = tail[start..].to_string();
        Self { uid, short_suffix }
    }
}

/// Generates the series identifier for a new batch
pub fn generate_series_id() -> SeriesId {
    SeriesId::new(Uid::generate())
}

/// Generates the instance identifier for one frame
pub fn generate_instance_id() -> Uid {
    Uid::generate()
}

/// Identifiers shared by every record of one batch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct IdentifierSet {
    pub study: Uid,
    pub series: SeriesId,
}

impl IdentifierSet {
    /// Reuses the reference study and starts a new series
    pub fn for_batch(reference: &ReferenceMetadata) -> Result<Self> {
        let study = derive_study_id(reference)?;
        let series = generate_series_id();
        debug!("Study {} / new series {}", study, series.uid);
        Ok(Self { study, series })
    }
}
