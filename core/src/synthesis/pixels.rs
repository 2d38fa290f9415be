use crate::error::{Result, ScCaptureError};
use crate::types::{ChannelLayout, ColorModel, Palette, PhotometricInterpretation, RasterFrame};

/// Pixel data of a frame normalized to 8-bit grayscale or interleaved RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelEncoding {
    pub photometric: PhotometricInterpretation,
    /// `Some(0)` (pixel-interleaved) for color, absent for grayscale
    pub planar_configuration: Option<u16>,
    pub pixels: Vec<u8>,
}

impl PixelEncoding {
    fn monochrome(pixels: Vec<u8>) -> Self {
        Self {
            photometric: PhotometricInterpretation::Monochrome2,
            planar_configuration: None,
            pixels,
        }
    }

    fn rgb(pixels: Vec<u8>) -> Self {
        Self {
            photometric: PhotometricInterpretation::Rgb,
            planar_configuration: Some(0),
            pixels,
        }
    }

    pub fn samples_per_pixel(&self) -> u16 {
        self.photometric.samples_per_pixel()
    }
}

/// Derives the pixel encoding of a frame
///
/// Rules, in order:
/// 1. grayscale stays MONOCHROME2
/// 2. grayscale+alpha loses its alpha, then as 1
/// 3. RGBA loses its alpha (no blending) and becomes RGB
/// 4. palette indices are expanded to RGB
/// 5. other multi-channel layouts are converted to RGB
/// 6. RGB is kept
///
/// `index` is the 0-based frame position, reported in errors.
///
/// # Errors
///
/// - `UnsupportedColorModel` for layouts without an RGB conversion
/// - `PixelBufferMismatch` when the buffer does not match the geometry
/// - `PaletteIndexOutOfRange` for indices past the palette end
pub fn encode_pixels(frame: &RasterFrame, index: usize) -> Result<PixelEncoding> {
    if let ColorModel::Other(ChannelLayout::Unrecognized { .. }) = frame.color_model {
        return Err(ScCaptureError::UnsupportedColorModel {
            frame: index,
            model: frame.color_model.to_string(),
        });
    }

    let expected = frame.expected_len();
    if frame.pixels.len() != expected {
        return Err(ScCaptureError::PixelBufferMismatch {
            frame: index,
            expected,
            actual: frame.pixels.len(),
        });
    }

    let src = frame.pixels.as_slice();
    let encoding = match &frame.color_model {
        ColorModel::Gray => PixelEncoding::monochrome(src.to_vec()),
        ColorModel::GrayAlpha => PixelEncoding::monochrome(drop_alpha(src, 2)),
        ColorModel::Rgba => PixelEncoding::rgb(drop_alpha(src, 4)),
        ColorModel::Palette(palette) => PixelEncoding::rgb(expand_palette(src, palette, index)?),
        ColorModel::Other(layout) => PixelEncoding::rgb(convert_to_rgb(src, layout, index)?),
        ColorModel::Rgb => PixelEncoding::rgb(src.to_vec()),
    };
    Ok(encoding)
}

/// Keeps all channels but the trailing alpha one
fn drop_alpha(src: &[u8], channels: usize) -> Vec<u8> {
    src.chunks_exact(channels)
        .flat_map(|px| px[..channels - 1].iter().copied())
        .collect()
}

fn expand_palette(src: &[u8], palette: &Palette, index: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(src.len() * 3);
    for &i in src {
        let rgb = palette
            .get(i)
            .ok_or(ScCaptureError::PaletteIndexOutOfRange {
                frame: index,
                index: i,
                palette_len: palette.len(),
            })?;
        out.extend_from_slice(&rgb);
    }
    Ok(out)
}

fn convert_to_rgb(src: &[u8], layout: &ChannelLayout, index: usize) -> Result<Vec<u8>> {
    let rgb = match layout {
        ChannelLayout::Cmyk => src
            .chunks_exact(4)
            .flat_map(|px| {
                let k = px[3];
                [
                    255 - px[0].saturating_add(k),
                    255 - px[1].saturating_add(k),
                    255 - px[2].saturating_add(k),
                ]
            })
            .collect(),
        ChannelLayout::YCbCr => src.chunks_exact(3).flat_map(ycbcr_to_rgb).collect(),
        ChannelLayout::Bgr => src
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect(),
        ChannelLayout::Bgra => src
            .chunks_exact(4)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect(),
        ChannelLayout::Unrecognized { .. } => {
            return Err(ScCaptureError::UnsupportedColorModel {
                frame: index,
                model: layout.to_string(),
            })
        }
    };
    Ok(rgb)
}

/// Full range JFIF YCbCr to RGB (ITU-R BT.601 coefficients)
fn ycbcr_to_rgb(px: &[u8]) -> [u8; 3] {
    let y = px[0] as f32;
    let cb = px[1] as f32 - 128.0;
    let cr = px[2] as f32 - 128.0;
    let clamp = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    [
        clamp(y + 1.402 * cr),
        clamp(y - 0.344_136 * cb - 0.714_136 * cr),
        clamp(y + 1.772 * cb),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn frame(color_model: ColorModel, pixels: Vec<u8>) -> RasterFrame {
        RasterFrame::new(2, 1, color_model, pixels)
    }

    #[rstest]
    #[case::gray(ColorModel::Gray, vec![10, 20], PhotometricInterpretation::Monochrome2, vec![10, 20])]
    #[case::gray_alpha(ColorModel::GrayAlpha, vec![10, 255, 20, 0], PhotometricInterpretation::Monochrome2, vec![10, 20])]
    #[case::rgba(ColorModel::Rgba, vec![1, 2, 3, 0, 4, 5, 6, 128], PhotometricInterpretation::Rgb, vec![1, 2, 3, 4, 5, 6])]
    #[case::palette(
        ColorModel::Palette(Palette::new(vec![[0, 0, 0], [200, 100, 50]])),
        vec![1, 0],
        PhotometricInterpretation::Rgb,
        vec![200, 100, 50, 0, 0, 0]
    )]
    #[case::cmyk(ColorModel::Other(ChannelLayout::Cmyk), vec![0, 0, 0, 0, 255, 0, 100, 100], PhotometricInterpretation::Rgb, vec![255, 255, 255, 0, 155, 55])]
    #[case::bgr(ColorModel::Other(ChannelLayout::Bgr), vec![1, 2, 3, 4, 5, 6], PhotometricInterpretation::Rgb, vec![3, 2, 1, 6, 5, 4])]
    #[case::bgra(ColorModel::Other(ChannelLayout::Bgra), vec![1, 2, 3, 9, 4, 5, 6, 9], PhotometricInterpretation::Rgb, vec![3, 2, 1, 6, 5, 4])]
    #[case::rgb(ColorModel::Rgb, vec![1, 2, 3, 4, 5, 6], PhotometricInterpretation::Rgb, vec![1, 2, 3, 4, 5, 6])]
    fn test_color_model_rules(
        #[case] color_model: ColorModel,
        #[case] pixels: Vec<u8>,
        #[case] photometric: PhotometricInterpretation,
        #[case] expected: Vec<u8>,
    ) {
        let encoding = encode_pixels(&frame(color_model, pixels), 0).unwrap();
        assert_eq!(encoding.photometric, photometric);
        assert_eq!(encoding.pixels, expected);
        if photometric.is_monochrome() {
            assert_eq!(encoding.samples_per_pixel(), 1);
            assert_eq!(encoding.planar_configuration, None);
        } else {
            assert_eq!(encoding.samples_per_pixel(), 3);
            assert_eq!(encoding.planar_configuration, Some(0));
        }
    }

    #[test]
    fn test_ycbcr_neutral_and_primaries() {
        let encoding = encode_pixels(
            &frame(
                ColorModel::Other(ChannelLayout::YCbCr),
                vec![128, 128, 128, 76, 85, 255],
            ),
            0,
        )
        .unwrap();
        assert_eq!(&encoding.pixels[..3], &[128, 128, 128]);
        // pure red encodes to roughly (76, 85, 255)
        assert!(encoding.pixels[3] >= 250);
        assert!(encoding.pixels[4] <= 5);
        assert!(encoding.pixels[5] <= 5);
    }

    #[test]
    fn test_rgba_alpha_is_dropped_not_blended() {
        let (w, h) = (4, 3);
        let pixels: Vec<u8> = (0..w * h).flat_map(|_| [200, 100, 50, 0]).collect();
        let frame = RasterFrame::new(w as u32, h as u32, ColorModel::Rgba, pixels);
        let encoding = encode_pixels(&frame, 0).unwrap();
        assert_eq!(encoding.pixels.len(), w * h * 3);
        assert!(encoding.pixels.chunks_exact(3).all(|px| px == [200, 100, 50]));
    }

    #[test]
    fn test_unrecognized_layout() {
        let layout = ChannelLayout::Unrecognized {
            name: "lab".to_string(),
            channels: 3,
        };
        let err = encode_pixels(&frame(ColorModel::Other(layout), vec![0; 6]), 4).unwrap_err();
        assert!(matches!(
            err,
            ScCaptureError::UnsupportedColorModel { frame: 4, .. }
        ));
    }

    #[test]
    fn test_buffer_mismatch() {
        let err = encode_pixels(&frame(ColorModel::Rgb, vec![0; 5]), 2).unwrap_err();
        assert!(matches!(
            err,
            ScCaptureError::PixelBufferMismatch {
                frame: 2,
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_palette_index_out_of_range() {
        let palette = Palette::new(vec![[1, 1, 1]]);
        let err = encode_pixels(&frame(ColorModel::Palette(palette), vec![0, 3]), 1).unwrap_err();
        assert!(matches!(
            err,
            ScCaptureError::PaletteIndexOutOfRange {
                frame: 1,
                index: 3,
                palette_len: 1
            }
        ));
    }

    #[test]
    fn test_source_buffer_untouched() {
        let frame = frame(ColorModel::GrayAlpha, vec![10, 255, 20, 0]);
        let before = frame.clone();
        encode_pixels(&frame, 0).unwrap();
        assert_eq!(frame, before);
    }
}
