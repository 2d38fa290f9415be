use std::fmt;

/// Color model of a decoded raster frame
///
/// Every variant describes 8 bits per sample, interleaved per pixel.
/// Sources with deeper samples are down-converted before they become frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorModel {
    /// Single-channel grayscale
    Gray,
    /// Grayscale with an alpha channel
    GrayAlpha,
    /// RGB with an alpha channel
    Rgba,
    /// One index byte per pixel into an RGB palette
    Palette(Palette),
    /// Any other multi-channel layout
    Other(ChannelLayout),
    /// Opaque RGB
    Rgb,
}

impl ColorModel {
    /// Number of bytes each pixel occupies in the source buffer
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            ColorModel::Gray | ColorModel::Palette(_) => 1,
            ColorModel::GrayAlpha => 2,
            ColorModel::Rgb => 3,
            ColorModel::Rgba => 4,
            ColorModel::Other(layout) => layout.channels(),
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> String {
        match self {
            ColorModel::Gray => "gray".to_string(),
            ColorModel::GrayAlpha => "gray+alpha".to_string(),
            ColorModel::Rgba => "rgba".to_string(),
            ColorModel::Palette(p) => format!("palette({})", p.len()),
            ColorModel::Other(layout) => layout.to_string(),
            ColorModel::Rgb => "rgb".to_string(),
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Multi-channel layouts other than RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Print color, 4 channels
    Cmyk,
    /// Full range JFIF luma/chroma, 3 channels
    YCbCr,
    /// RGB in reversed channel order
    Bgr,
    /// BGR with a trailing alpha channel
    Bgra,
    /// A layout the converter has no mapping for
    Unrecognized { name: String, channels: usize },
}

impl ChannelLayout {
    /// Number of channels per pixel
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Cmyk | ChannelLayout::Bgra => 4,
            ChannelLayout::YCbCr | ChannelLayout::Bgr => 3,
            ChannelLayout::Unrecognized { channels, .. } => *channels,
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelLayout::Cmyk => write!(f, "cmyk"),
            ChannelLayout::YCbCr => write!(f, "ycbcr"),
            ChannelLayout::Bgr => write!(f, "bgr"),
            ChannelLayout::Bgra => write!(f, "bgra"),
            ChannelLayout::Unrecognized { name, channels } => {
                write!(f, "{} ({} channels)", name, channels)
            }
        }
    }
}

/// RGB lookup table for palette-indexed frames
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<[u8; 3]>,
}

impl Palette {
    /// Creates a palette from RGB entries
    ///
    /// Entries beyond 256 are unreachable by an 8-bit index and are dropped.
    pub fn new(mut entries: Vec<[u8; 3]>) -> Self {
        entries.truncate(256);
        Self { entries }
    }

    /// Looks up the RGB triple for an index
    pub fn get(&self, index: u8) -> Option<[u8; 3]> {
        self.entries.get(index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
