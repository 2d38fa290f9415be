/// Implementation Class UID written to the file meta header
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.98128476212540419427357108137402761389";

/// Implementation Version Name written to the file meta header (max 16 chars)
pub const IMPLEMENTATION_VERSION_NAME: &str = concat!("SCCAPTURE_", env!("CARGO_PKG_VERSION"));

/// Specific Character Set of the synthesized data sets (UTF-8)
pub const SPECIFIC_CHARACTER_SET: &str = "ISO_IR 192";

/// File extension of the written records
pub const DEFAULT_EXTENSION: &str = "dcm";

/// Resolution used when rasterizing document pages
pub const DEFAULT_DPI: u32 = 300;

/// Settings of a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub implementation_class_uid: String,
    pub implementation_version_name: String,
    pub specific_character_set: String,
    /// Extension of output file names, without the dot
    pub extension: String,
    /// Rasterization resolution for paged documents
    pub dpi: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            implementation_class_uid: IMPLEMENTATION_CLASS_UID.to_string(),
            implementation_version_name: IMPLEMENTATION_VERSION_NAME.to_string(),
            specific_character_set: SPECIFIC_CHARACTER_SET.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            dpi: DEFAULT_DPI,
        }
    }
}

impl ConverterConfig {
    /// Overrides the rasterization resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}
