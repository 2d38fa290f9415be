//! DICOM Secondary Capture conversion
//!
//! Converts PDF pages and raster images into a series of Secondary Capture
//! objects that join the study of a reference DICOM object.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod io;
pub mod reference;
pub mod source;
pub mod synthesis;
pub mod types;

pub use api::{convert_frames, convert_source, BatchConverter, ConversionSummary};
pub use cli::report::{ConversionReport, ReferenceReport};
pub use config::ConverterConfig;
pub use error::{Result, ScCaptureError};
pub use identity::{IdentifierSet, SeriesId, Uid};
pub use reference::{ReferenceMetadata, ReferenceSummary};
pub use source::SourceDocument;
pub use synthesis::{NamedRecord, OutputRecord, RunTimestamp};
pub use types::*;
