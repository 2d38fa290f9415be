use crate::error::{Result, ScCaptureError};
use log::{debug, warn};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;
use tempfile::TempDir;

/// Poppler's page renderer
pub const PDFTOPPM: &str = "pdftoppm";

/// Page images of a rasterized document, in page order
///
/// The images live in a temporary directory that is removed on drop, so
/// pages are decoded one at a time instead of all being held in memory.
#[derive(Debug)]
pub struct RasterizedPages {
    dir: TempDir,
    pages: Vec<PathBuf>,
}

impl RasterizedPages {
    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Image file of a 0-based page
    pub fn page(&self, index: usize) -> Option<&Path> {
        self.pages.get(index).map(PathBuf::as_path)
    }

    /// Directory holding the page images
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Renders every page of a PDF to PNG at `dpi`
///
/// # Errors
///
/// - `Rasterize` if `pdftoppm` is missing or fails
/// - `IoError` for temporary directory failures
pub fn rasterize_pdf(path: &Path, dpi: u32) -> Result<RasterizedPages> {
    let dir = tempfile::tempdir()?;
    let prefix = dir.path().join("page");
    debug!("Rasterizing {} at {} dpi", path.display(), dpi);

    let output = Command::new(PDFTOPPM)
        .arg("-png")
        .arg("-r")
        .arg(dpi.to_string())
        .arg(path)
        .arg(&prefix)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScCaptureError::Rasterize(format!(
                    "{} not found. Install poppler-utils to convert PDF documents.",
                    PDFTOPPM
                ))
            } else {
                ScCaptureError::IoError(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!("{} failed on {}: {}", PDFTOPPM, path.display(), stderr.trim());
        return Err(ScCaptureError::Rasterize(format!(
            "{} failed on '{}': {}",
            PDFTOPPM,
            path.display(),
            stderr.trim()
        )));
    }

    let pages = collect_pages(dir.path())?;
    debug!("Rasterized {} pages", pages.len());
    Ok(RasterizedPages { dir, pages })
}

/// Lists `page-N.png` files in numeric page order
///
/// pdftoppm zero-pads page numbers to the width of the page count, which
/// sorts lexically only within one document, so the number is parsed.
fn collect_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut numbered = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let number = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(page_number);
        if let Some(number) = number {
            numbered.push((number, path));
        }
    }
    numbered.sort_by_key(|(number, _)| *number);
    Ok(numbered.into_iter().map(|(_, path)| path).collect())
}

fn page_number(file_name: &str) -> Option<usize> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX
        .get_or_init(|| Regex::new(r"^page-(\d+)\.png$").expect("Failed to compile regex"));
    re.captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;

    #[rstest]
    #[case("page-1.png", Some(1))]
    #[case("page-007.png", Some(7))]
    #[case("page-12.png", Some(12))]
    #[case("page-1.ppm", None)]
    #[case("other-1.png", None)]
    fn test_page_number(#[case] name: &str, #[case] expected: Option<usize>) {
        assert_eq!(page_number(name), expected);
    }

    #[test]
    fn test_collect_pages_numeric_order() {
        let dir = TempDir::new().unwrap();
        for name in ["page-10.png", "page-2.png", "page-1.png", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }
        let pages = collect_pages(dir.path()).unwrap();
        let names: Vec<_> = pages
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["page-1.png", "page-2.png", "page-10.png"]);
    }

    #[test]
    fn test_missing_document_fails() {
        let dir = TempDir::new().unwrap();
        let result = rasterize_pdf(&dir.path().join("missing.pdf"), 72);
        assert!(matches!(result, Err(ScCaptureError::Rasterize(_))));
    }
}
