use super::naming::OutputNaming;
use crate::error::{Result, ScCaptureError};
use crate::identity::SeriesId;
use crate::types::SourceKind;
use chrono::{Local, NaiveDateTime};

/// Date and time of a conversion run, in DICOM DA and TM form
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct RunTimestamp {
    /// `YYYYMMDD`
    pub date: String,
    /// `HHMMSS.ffffff`
    pub time: String,
}

impl RunTimestamp {
    /// Stamps the current local time
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self {
            date: datetime.format("%Y%m%d").to_string(),
            time: datetime.format("%H%M%S%.6f").to_string(),
        }
    }

    /// Date immediately followed by time, without separator or offset
    pub fn acquisition_datetime(&self) -> String {
        format!("{}{}", self.date, self.time)
    }
}

/// Batch-wide values shared read-only by every frame of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchContext {
    pub timestamp: RunTimestamp,
    pub total_frames: usize,
    pub naming: OutputNaming,
    pub source_kind: SourceKind,
}

impl BatchContext {
    /// Validates the batch size and prepares naming
    ///
    /// # Errors
    ///
    /// - `EmptyBatch` when there are no frames
    /// - `NamingOverflow` when the frames cannot all be named distinctly
    pub fn new(
        timestamp: RunTimestamp,
        total_frames: usize,
        series: &SeriesId,
        source_kind: SourceKind,
        extension: &str,
    ) -> Result<Self> {
        if total_frames == 0 {
            return Err(ScCaptureError::EmptyBatch);
        }
        OutputNaming::check_capacity(total_frames)?;
        Ok(Self {
            timestamp,
            total_frames,
            naming: OutputNaming::new(series, extension),
            source_kind,
        })
    }

    /// Whether series descriptions carry a page number
    pub fn numbers_pages(&self) -> bool {
        self.total_frames > 1 && self.source_kind.is_paged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Uid;
    use chrono::NaiveDate;

    fn series() -> SeriesId {
        SeriesId::new(Uid::new("2.25.123456789"))
    }

    fn timestamp() -> RunTimestamp {
        let datetime = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_micro_opt(14, 7, 9, 42)
            .unwrap();
        RunTimestamp::from_datetime(datetime)
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        assert_eq!(ts.date, "20240305");
        assert_eq!(ts.time, "140709.000042");
        assert_eq!(ts.acquisition_datetime(), "20240305140709.000042");
    }

    #[test]
    fn test_empty_batch() {
        let err = BatchContext::new(timestamp(), 0, &series(), SourceKind::Image, "dcm");
        assert!(matches!(err, Err(ScCaptureError::EmptyBatch)));
    }

    #[test]
    fn test_naming_overflow() {
        let err = BatchContext::new(timestamp(), 1000, &series(), SourceKind::Document, "dcm");
        assert!(matches!(
            err,
            Err(ScCaptureError::NamingOverflow {
                frames: 1000,
                capacity: 999
            })
        ));
    }

    #[test]
    fn test_page_numbering() {
        let single = BatchContext::new(timestamp(), 1, &series(), SourceKind::Document, "dcm")
            .unwrap();
        assert!(!single.numbers_pages());

        let paged = BatchContext::new(timestamp(), 3, &series(), SourceKind::Document, "dcm")
            .unwrap();
        assert!(paged.numbers_pages());

        let image = BatchContext::new(timestamp(), 3, &series(), SourceKind::Image, "dcm")
            .unwrap();
        assert!(!image.numbers_pages());
    }
}
