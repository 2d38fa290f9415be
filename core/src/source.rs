use crate::error::{Result, ScCaptureError};
use crate::types::SourceKind;
use std::path::{Path, PathBuf};

/// The document or image being converted
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SourceDocument {
    /// Location of the source file
    pub path: PathBuf,
    /// File name used verbatim in the description attributes
    pub base_name: String,
    pub kind: SourceKind,
}

impl SourceDocument {
    /// Describes a source file, classifying it by extension
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSource` for extensions other than PDF and the
    /// supported raster image formats.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let kind = SourceKind::from_extension(ext).ok_or_else(|| {
            ScCaptureError::UnsupportedSource(format!(
                "'{}' has unsupported file type '.{}'",
                path.display(),
                ext
            ))
        })?;
        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            path,
            base_name,
            kind,
        })
    }

    /// Directory the converted files are written to by default
    pub fn output_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}
