use crate::ports::outbound::{ReportReader, ReportSource};
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_REPORT_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading dependency reports
///
/// Implements the ReportReader port for report files and for text piped
/// through stdin.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = validate_regular_file(path, "dependency report")?;
        validate_file_size(metadata.len(), path, MAX_REPORT_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            ReportError::ReportReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_stdin(&self) -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .take(MAX_REPORT_SIZE + 1)
            .read_to_string(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read dependency report from stdin: {}", e))?;
        validate_file_size(content.len() as u64, Path::new("<stdin>"), MAX_REPORT_SIZE)?;
        Ok(content)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, source: &ReportSource) -> Result<String> {
        let path = match source {
            ReportSource::Stdin => return self.read_stdin(),
            ReportSource::File(path) => path,
        };

        if !path.exists() {
            return Err(ReportError::ReportNotFound {
                path: path.clone(),
                suggestion: "Save the build tool output first, e.g. `gradle dependencies > deps.txt`, \
                             or pipe it into this command."
                    .to_string(),
            }
            .into());
        }

        self.safe_read_file(path)
    }
}
