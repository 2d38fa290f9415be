//! Loading frames from source files and writing records to disk
//!
//! Documents are rasterized page by page through poppler, raster images are
//! decoded with the `image` crate. Frames are produced lazily by index so a
//! long document never has all its pages decoded at once.

pub mod decode;
pub mod pdf;
pub mod writer;

pub use decode::{frame_from_image, load_image};
pub use pdf::{rasterize_pdf, RasterizedPages};
pub use writer::write_record;

use crate::error::{Result, ScCaptureError};
use crate::source::SourceDocument;
use crate::types::{RasterFrame, SourceKind};
use std::path::PathBuf;

/// Ordered frames of one source file
#[derive(Debug)]
pub enum FrameSource {
    /// A single raster image
    Image(PathBuf),
    /// Rendered pages of a document
    Pages(RasterizedPages),
}

impl FrameSource {
    /// Prepares the frames of a source, rasterizing documents at `dpi`
    pub fn open(source: &SourceDocument, dpi: u32) -> Result<Self> {
        match source.kind {
            SourceKind::Document => Ok(FrameSource::Pages(rasterize_pdf(&source.path, dpi)?)),
            SourceKind::Image => Ok(FrameSource::Image(source.path.clone())),
        }
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        match self {
            FrameSource::Image(_) => 1,
            FrameSource::Pages(pages) => pages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes the frame at a 0-based index
    ///
    /// # Errors
    ///
    /// - `FrameOutOfRange` for indices past the last frame
    /// - `Decode` if the image cannot be decoded
    pub fn load(&self, index: usize) -> Result<RasterFrame> {
        let path = match self {
            FrameSource::Image(path) if index == 0 => path.as_path(),
            FrameSource::Pages(pages) => pages.page(index).ok_or(ScCaptureError::FrameOutOfRange {
                index,
                total: pages.len(),
            })?,
            FrameSource::Image(_) => {
                return Err(ScCaptureError::FrameOutOfRange { index, total: 1 })
            }
        };
        load_image(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorModel;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_image_source_single_frame() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.png");
        RgbImage::from_pixel(5, 4, Rgb([10, 20, 30])).save(&path).unwrap();

        let source = SourceDocument::from_path(&path).unwrap();
        let frames = FrameSource::open(&source, 300).unwrap();
        assert_eq!(frames.len(), 1);

        let frame = frames.load(0).unwrap();
        assert_eq!(frame.color_model, ColorModel::Rgb);
        assert_eq!((frame.width, frame.height), (5, 4));

        assert!(matches!(
            frames.load(1),
            Err(ScCaptureError::FrameOutOfRange { index: 1, total: 1 })
        ));
    }
}
