use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Where the raw text of one dependency report comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::File(path) => write!(f, "{}", path.display()),
            ReportSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// ReportReader port for obtaining raw report text
///
/// The text is fully materialized before parsing starts; how it was produced
/// (running the build tool, saving its output) is outside this crate.
pub trait ReportReader {
    /// Reads the complete report text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist
    /// - The file cannot be read due to permissions, size limits or I/O errors
    fn read_report(&self, source: &ReportSource) -> Result<String>;
}
