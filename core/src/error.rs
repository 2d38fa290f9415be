use thiserror::Error;

/// Result type for sccapture operations
pub type Result<T> = std::result::Result<T, ScCaptureError>;

/// Error types for sccapture operations
#[derive(Error, Debug)]
pub enum ScCaptureError {
    /// The reference object lacks a mandatory identifier
    #[error("Reference object has no {attribute}")]
    MissingIdentifier { attribute: &'static str },

    /// A frame's color model cannot be encoded
    #[error("Frame {frame}: unsupported color model {model}")]
    UnsupportedColorModel { frame: usize, model: String },

    /// No frames were supplied
    #[error("No frames to convert")]
    EmptyBatch,

    /// The batch has more frames than the output naming scheme can tell apart
    #[error("Batch of {frames} frames exceeds the naming capacity of {capacity}")]
    NamingOverflow { frames: usize, capacity: usize },

    /// Pixel buffer length does not match the frame geometry
    #[error("Frame {frame}: expected {expected} bytes of pixel data, found {actual}")]
    PixelBufferMismatch {
        frame: usize,
        expected: usize,
        actual: usize,
    },

    /// Palette index without a palette entry
    #[error("Frame {frame}: palette index {index} out of range (palette has {palette_len} entries)")]
    PaletteIndexOutOfRange {
        frame: usize,
        index: u8,
        palette_len: usize,
    },

    /// Frame dimensions do not fit in Rows/Columns
    #[error("Frame {frame}: {width}x{height} exceeds the maximum image size")]
    FrameTooLarge { frame: usize, width: u32, height: u32 },

    /// Frame index past the end of the batch
    #[error("Frame {index} out of range for a batch of {total}")]
    FrameOutOfRange { index: usize, total: usize },

    /// Source file type not supported for conversion
    #[error("Unsupported source file: {0}")]
    UnsupportedSource(String),

    /// PDF page rasterization error
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// Raster image decoding error
    #[error("Decode error: {0}")]
    Decode(String),

    /// DICOM reading or writing error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for ScCaptureError {
    fn from(e: dicom_object::ReadError) -> Self {
        ScCaptureError::DicomError(format!("{}", e))
    }
}

impl From<dicom_object::WriteError> for ScCaptureError {
    fn from(e: dicom_object::WriteError) -> Self {
        ScCaptureError::DicomError(format!("{}", e))
    }
}

impl From<dicom_object::meta::Error> for ScCaptureError {
    fn from(e: dicom_object::meta::Error) -> Self {
        ScCaptureError::DicomError(format!("{}", e))
    }
}

impl From<image::ImageError> for ScCaptureError {
    fn from(e: image::ImageError) -> Self {
        ScCaptureError::Decode(format!("{}", e))
    }
}
