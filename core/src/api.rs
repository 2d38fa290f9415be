use crate::config::ConverterConfig;
use crate::error::{Result, ScCaptureError};
use crate::identity::{IdentifierSet, Uid};
use crate::io::{write_record, FrameSource};
use crate::reference::ReferenceMetadata;
use crate::source::SourceDocument;
use crate::synthesis::{synthesize, BatchContext, NamedRecord, RunTimestamp};
use crate::types::RasterFrame;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Converts the frames of one source into a Secondary Capture series
///
/// All batch-level checks happen on construction: the reference must carry
/// a study UID and the frame count must fit the naming scheme. Frames are
/// then converted one at a time, in order.
///
/// # Example
///
/// ```
/// use sccapture_core::{
///     BatchConverter, ColorModel, ConverterConfig, RasterFrame, ReferenceMetadata,
///     SourceDocument,
/// };
///
/// let reference = ReferenceMetadata::new()
///     .with("StudyInstanceUID", "1.2.840.113619.2.55.3")
///     .with("PatientName", "DOE^JANE");
/// let source = SourceDocument::from_path("scan.png")?;
/// let config = ConverterConfig::default();
///
/// let converter = BatchConverter::new(&reference, &source, 1, &config)?;
/// let frame = RasterFrame::new(2, 2, ColorModel::Gray, vec![0, 64, 128, 255]);
/// let named = converter.convert_frame(0, &frame)?;
///
/// assert!(named.file_name.starts_with("SC_"));
/// assert!(named.file_name.ends_with("_001.dcm"));
/// assert_eq!(named.record.instance_number(), 1);
/// # Ok::<(), sccapture_core::ScCaptureError>(())
/// ```
#[derive(Debug)]
pub struct BatchConverter<'a> {
    reference: &'a ReferenceMetadata,
    source: &'a SourceDocument,
    config: &'a ConverterConfig,
    ids: IdentifierSet,
    context: BatchContext,
}

impl<'a> BatchConverter<'a> {
    /// Prepares a batch of `total_frames` frames stamped with the current time
    ///
    /// # Errors
    ///
    /// - `MissingIdentifier` when the reference has no StudyInstanceUID
    /// - `EmptyBatch` when `total_frames` is zero
    /// - `NamingOverflow` when the frames cannot all be named distinctly
    pub fn new(
        reference: &'a ReferenceMetadata,
        source: &'a SourceDocument,
        total_frames: usize,
        config: &'a ConverterConfig,
    ) -> Result<Self> {
        Self::with_timestamp(reference, source, total_frames, config, RunTimestamp::now())
    }

    /// Like [`new`](Self::new), with an explicit run timestamp
    pub fn with_timestamp(
        reference: &'a ReferenceMetadata,
        source: &'a SourceDocument,
        total_frames: usize,
        config: &'a ConverterConfig,
        timestamp: RunTimestamp,
    ) -> Result<Self> {
        let ids = IdentifierSet::for_batch(reference)?;
        let context = BatchContext::new(
            timestamp,
            total_frames,
            &ids.series,
            source.kind,
            &config.extension,
        )?;
        debug!(
            "Batch of {} frame(s) from {} into series {}",
            total_frames, source.base_name, ids.series.uid
        );
        Ok(Self {
            reference,
            source,
            config,
            ids,
            context,
        })
    }

    /// Identifiers shared by the whole batch
    pub fn identifiers(&self) -> &IdentifierSet {
        &self.ids
    }

    /// Batch-wide synthesis values
    pub fn context(&self) -> &BatchContext {
        &self.context
    }

    /// Synthesizes the record of the frame at a 0-based index
    ///
    /// # Errors
    ///
    /// - `FrameOutOfRange` for an index outside the batch
    /// - any error of [`synthesize`]
    pub fn convert_frame(&self, index: usize, frame: &RasterFrame) -> Result<NamedRecord> {
        if index >= self.context.total_frames {
            return Err(ScCaptureError::FrameOutOfRange {
                index,
                total: self.context.total_frames,
            });
        }
        let record = synthesize(
            frame,
            index,
            self.reference,
            &self.ids,
            &self.context,
            &self.source.base_name,
            self.config,
        )?;
        let file_name = self.context.naming.file_name(record.instance_number());
        Ok(NamedRecord { file_name, record })
    }
}

/// Converts in-memory frames, returning the records in frame order
///
/// Nothing is returned on failure: a batch either converts fully or not at
/// all.
pub fn convert_frames(
    reference: &ReferenceMetadata,
    source: &SourceDocument,
    frames: &[RasterFrame],
    config: &ConverterConfig,
) -> Result<Vec<NamedRecord>> {
    let converter = BatchConverter::new(reference, source, frames.len(), config)?;
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| converter.convert_frame(index, frame))
        .collect()
}

/// Outcome of a conversion written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ConversionSummary {
    pub output_dir: PathBuf,
    pub study_instance_uid: Uid,
    pub series_instance_uid: Uid,
    /// Written files, in instance order
    pub files: Vec<PathBuf>,
}

/// Converts a source file against a reference DICOM file and writes the series
///
/// Frames are loaded, synthesized and written one at a time. Output goes to
/// `output_dir`, or next to the source file when `None`. The first failure
/// stops the run; files already written are kept.
pub fn convert_source(
    reference_path: &Path,
    source_path: &Path,
    output_dir: Option<&Path>,
    config: &ConverterConfig,
) -> Result<ConversionSummary> {
    let reference = ReferenceMetadata::open(reference_path)?;
    let source = SourceDocument::from_path(source_path)?;
    info!("Converting {} ({})", source.base_name, source.kind);

    let frames = FrameSource::open(&source, config.dpi)?;
    let converter = BatchConverter::new(&reference, &source, frames.len(), config)?;

    let output_dir = output_dir.unwrap_or_else(|| source.output_dir()).to_path_buf();
    std::fs::create_dir_all(&output_dir)?;

    let mut files = Vec::with_capacity(frames.len());
    for index in 0..frames.len() {
        let frame = frames.load(index)?;
        let named = converter.convert_frame(index, &frame)?;
        files.push(write_record(&output_dir, &named)?);
    }
    info!(
        "Wrote {} file(s) to {}",
        files.len(),
        output_dir.display()
    );

    let ids = converter.identifiers();
    Ok(ConversionSummary {
        output_dir,
        study_instance_uid: ids.study.clone(),
        series_instance_uid: ids.series.uid.clone(),
        files,
    })
}
