use std::fmt;
use uuid::Uuid;

/// Root arc for UUID-derived UIDs (ISO/IEC 9834-8)
pub const UUID_UID_ROOT: &str = "2.25";

/// A DICOM unique identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct Uid(String);

impl Uid {
    /// Wraps an existing UID, dropping trailing padding
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Uid(value.trim_end_matches('\0').trim().to_string())
    }

    /// Generates a fresh UID from a random 128-bit UUID
    pub fn generate() -> Self {
        Uid(format!("{}.{}", UUID_UID_ROOT, Uuid::new_v4().as_u128()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last dot-separated component
    pub fn last_component(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
