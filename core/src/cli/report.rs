use crate::api::ConversionSummary;
use crate::reference::ReferenceSummary;
use std::fmt;

/// Text report of a finished conversion
pub struct ConversionReport<'a> {
    summary: &'a ConversionSummary,
}

impl<'a> ConversionReport<'a> {
    /// Creates a new conversion report
    pub fn new(summary: &'a ConversionSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for ConversionReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secondary Capture Conversion")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Study UID:   {}", self.summary.study_instance_uid)?;
        writeln!(f, "Series UID:  {}", self.summary.series_instance_uid)?;
        writeln!(f, "Output Dir:  {}", self.summary.output_dir.display())?;
        writeln!(f, "Files:       {}", self.summary.files.len())?;
        for path in &self.summary.files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            writeln!(f, "  {}", name)?;
        }
        Ok(())
    }
}

/// Text report describing a reference object
pub struct ReferenceReport<'a> {
    summary: &'a ReferenceSummary,
}

impl<'a> ReferenceReport<'a> {
    /// Creates a new reference report
    pub fn new(summary: &'a ReferenceSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for ReferenceReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reference DICOM")?;
        writeln!(f, "===============")?;
        writeln!(f)?;
        writeln!(f, "Study UID:    {}", self.summary.study_instance_uid)?;
        writeln!(f, "Patient Name: {}", self.summary.patient_name)?;
        writeln!(f, "Patient ID:   {}", self.summary.patient_id)?;
        writeln!(f, "Study Date:   {}", self.summary.study_date)?;
        writeln!(f, "Description:  {}", self.summary.study_description)?;
        if !self.summary.has_study() {
            writeln!(f)?;
            writeln!(f, "Warning: no StudyInstanceUID, cannot be used for conversion")?;
        }
        Ok(())
    }
}
