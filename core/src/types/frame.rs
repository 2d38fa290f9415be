use super::color::ColorModel;

/// A decoded raster image, one page or one picture
///
/// The pixel buffer is row-major with `color_model.bytes_per_pixel()` bytes
/// per pixel and no row padding.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub color_model: ColorModel,
    pub pixels: Vec<u8>,
}

impl RasterFrame {
    /// Creates a new frame
    pub fn new(width: u32, height: u32, color_model: ColorModel, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            color_model,
            pixels,
        }
    }

    /// Number of pixels in the frame
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Buffer length implied by the geometry and color model
    pub fn expected_len(&self) -> usize {
        self.pixel_count() * self.color_model.bytes_per_pixel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_len() {
        let frame = RasterFrame::new(4, 3, ColorModel::Rgba, vec![0; 48]);
        assert_eq!(frame.pixel_count(), 12);
        assert_eq!(frame.expected_len(), 48);
    }
}
