use crate::error::Result;
use crate::types::{ColorModel, RasterFrame};
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Decodes a raster image file into a single frame
///
/// # Errors
///
/// Returns `Decode` if the file cannot be read or is not a supported image.
pub fn load_image(path: &Path) -> Result<RasterFrame> {
    let image = image::open(path)?;
    debug!(
        "Decoded {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(frame_from_image(image))
}

/// Converts a decoded image into a frame, keeping 8-bit layouts as they are
///
/// Wider sample types are reduced to 8 bits with the same channel layout.
pub fn frame_from_image(image: DynamicImage) -> RasterFrame {
    let (width, height) = (image.width(), image.height());
    let (color_model, pixels) = match image {
        DynamicImage::ImageLuma8(buf) => (ColorModel::Gray, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (ColorModel::GrayAlpha, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (ColorModel::Rgb, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (ColorModel::Rgba, buf.into_raw()),
        other => {
            let color = other.color();
            match (color.channel_count(), color.has_alpha()) {
                (1, _) => (ColorModel::Gray, other.into_luma8().into_raw()),
                (2, _) => (ColorModel::GrayAlpha, other.into_luma_alpha8().into_raw()),
                (_, true) => (ColorModel::Rgba, other.into_rgba8().into_raw()),
                _ => (ColorModel::Rgb, other.into_rgb8().into_raw()),
            }
        }
    };
    RasterFrame::new(width, height, color_model, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_gray_image() {
        let img = GrayImage::from_pixel(3, 2, Luma([7]));
        let frame = frame_from_image(DynamicImage::ImageLuma8(img));
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.color_model, ColorModel::Gray);
        assert_eq!(frame.pixels, vec![7; 6]);
    }

    #[test]
    fn test_rgba_image() {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4]));
        let frame = frame_from_image(DynamicImage::ImageRgba8(img));
        assert_eq!(frame.color_model, ColorModel::Rgba);
        assert_eq!(frame.pixels.len(), frame.expected_len());
    }

    #[test]
    fn test_sixteen_bit_reduced_to_eight() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(2, 1, Rgb([65535, 0, 65535]));
        let frame = frame_from_image(DynamicImage::ImageRgb16(img));
        assert_eq!(frame.color_model, ColorModel::Rgb);
        assert_eq!(frame.pixels, vec![255, 0, 255, 255, 0, 255]);
    }

    #[test]
    fn test_load_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.png");
        GrayImage::from_pixel(4, 4, Luma([200])).save(&path).unwrap();

        let frame = load_image(&path).unwrap();
        assert_eq!(frame.color_model, ColorModel::Gray);
        assert_eq!(frame.pixel_count(), 16);
    }

    #[test]
    fn test_load_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(load_image(&path).is_err());
    }
}
