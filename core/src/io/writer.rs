use crate::error::Result;
use crate::synthesis::NamedRecord;
use log::info;
use std::path::{Path, PathBuf};

/// Writes a record under its file name in `dir`, returning the path
///
/// An existing file of the same name is replaced.
pub fn write_record(dir: &Path, named: &NamedRecord) -> Result<PathBuf> {
    let path = dir.join(&named.file_name);
    named.record.write_to_file(&path)?;
    info!("Saved {}", path.display());
    Ok(path)
}
