use crate::error::{Result, ScCaptureError};
use crate::identity::SeriesId;

/// Largest batch the three-digit instance suffix can tell apart
pub const NAMING_CAPACITY: usize = 999;

/// Output file naming for one batch: `SC_{series suffix}_{NNN}.{ext}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    root: String,
    extension: String,
}

impl OutputNaming {
    /// Names files after the series short suffix
    pub fn new(series: &SeriesId, extension: impl Into<String>) -> Self {
        Self {
            root: format!("SC_{}", series.short_suffix),
            extension: extension.into(),
        }
    }

    /// Ensures every frame of a batch gets a distinct name
    ///
    /// # Errors
    ///
    /// Returns `NamingOverflow` for more than [`NAMING_CAPACITY`] frames.
    pub fn check_capacity(frames: usize) -> Result<()> {
        if frames > NAMING_CAPACITY {
            return Err(ScCaptureError::NamingOverflow {
                frames,
                capacity: NAMING_CAPACITY,
            });
        }
        Ok(())
    }

    /// File name for a 1-based instance number
    pub fn file_name(&self, instance_number: usize) -> String {
        format!("{}_{:03}.{}", self.root, instance_number, self.extension)
    }

    /// Common prefix of every name in the batch
    pub fn root(&self) -> &str {
        &self.root
    }
}
