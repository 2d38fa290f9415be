use std::fmt;

/// Photometric interpretation of the synthesized pixel data
///
/// Only 8-bit grayscale and pixel-interleaved RGB are ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum PhotometricInterpretation {
    Monochrome2,
    Rgb,
}

impl PhotometricInterpretation {
    /// Returns whether this is a monochrome interpretation
    pub fn is_monochrome(&self) -> bool {
        matches!(self, PhotometricInterpretation::Monochrome2)
    }

    /// Returns the number of samples per pixel
    pub fn samples_per_pixel(&self) -> u16 {
        if self.is_monochrome() {
            1
        } else {
            3
        }
    }

    /// Returns the defined term as written to the data set
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotometricInterpretation::Monochrome2 => "MONOCHROME2",
            PhotometricInterpretation::Rgb => "RGB",
        }
    }
}

impl fmt::Display for PhotometricInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of source the frames were decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum SourceKind {
    /// Page-based document (PDF), one frame per page
    Document,
    /// Single raster image
    Image,
}

impl SourceKind {
    /// Extensions accepted as single raster images
    pub const IMAGE_EXTENSIONS: [&'static str; 6] = ["png", "jpg", "jpeg", "bmp", "tiff", "tif"];

    /// Classifies a file extension, case-insensitively
    ///
    /// Returns `None` for extensions that cannot be converted.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        if ext == "pdf" {
            Some(SourceKind::Document)
        } else if Self::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Image)
        } else {
            None
        }
    }

    /// Returns whether frames of this source are numbered as pages
    pub fn is_paged(&self) -> bool {
        matches!(self, SourceKind::Document)
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SourceKind::Document => "document",
            SourceKind::Image => "image",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photometric_samples() {
        assert_eq!(PhotometricInterpretation::Monochrome2.samples_per_pixel(), 1);
        assert_eq!(PhotometricInterpretation::Rgb.samples_per_pixel(), 3);
        assert_eq!(PhotometricInterpretation::Monochrome2.to_string(), "MONOCHROME2");
        assert_eq!(PhotometricInterpretation::Rgb.to_string(), "RGB");
    }

    #[test]
    fn test_source_kind_from_extension() {
        assert_eq!(SourceKind::from_extension("pdf"), Some(SourceKind::Document));
        assert_eq!(SourceKind::from_extension("PDF"), Some(SourceKind::Document));
        assert_eq!(SourceKind::from_extension("png"), Some(SourceKind::Image));
        assert_eq!(SourceKind::from_extension("JPEG"), Some(SourceKind::Image));
        assert_eq!(SourceKind::from_extension("tif"), Some(SourceKind::Image));
        assert_eq!(SourceKind::from_extension("docx"), None);
        assert_eq!(SourceKind::from_extension(""), None);
    }

    #[test]
    fn test_source_kind_paging() {
        assert!(SourceKind::Document.is_paged());
        assert!(!SourceKind::Image.is_paged());
    }
}
