//! Secondary Capture record synthesis
//!
//! Turns one [`RasterFrame`](crate::types::RasterFrame) into a complete
//! DICOM object attached to the reference study:
//! - [`pixels`]: color model normalization to MONOCHROME2 or RGB
//! - [`attributes`]: attributes inherited from the reference and descriptions
//! - [`context`]: the run timestamp and batch-wide values
//! - [`naming`]: output file names
//! - [`record`]: assembly of the file meta header and data set

pub mod attributes;
pub mod context;
pub mod naming;
pub mod pixels;
pub mod record;

pub use context::{BatchContext, RunTimestamp};
pub use naming::{OutputNaming, NAMING_CAPACITY};
pub use pixels::{encode_pixels, PixelEncoding};
pub use record::{synthesize, NamedRecord, OutputRecord};
